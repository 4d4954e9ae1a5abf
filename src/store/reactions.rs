//! Cross-slice reaction table.
//!
//! A reaction is one slice updating in response to an action defined by
//! another slice. The reducers implement the behavior; this table is the
//! single place where those couplings are declared, so they stay
//! enumerable and testable instead of hiding in match arms.

use super::state::SliceId;

/// One declared cross-slice coupling.
#[derive(Debug, Clone, Copy)]
pub struct Reaction {
    /// Action tag as returned by `Action::kind`.
    pub source: &'static str,
    /// Slices that update in response, beyond the slice owning the action.
    pub reacts: &'static [SliceId],
}

/// Every cross-slice reaction in the application.
///
/// Ordering a cake gives one ice cream away with each cake, so the ice
/// cream slice drops by the same amount in the same dispatch.
pub const REACTIONS: &[Reaction] = &[Reaction {
    source: "cake/ordered",
    reacts: &[SliceId::IceCream],
}];

/// Slices that react to `kind` outside the slice that defined it.
pub fn reacting_slices(kind: &str) -> &'static [SliceId] {
    REACTIONS
        .iter()
        .find(|reaction| reaction.source == kind)
        .map(|reaction| reaction.reacts)
        .unwrap_or(&[])
}
