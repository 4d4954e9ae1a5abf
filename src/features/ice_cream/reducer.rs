//! Reducer for ice cream stock.

use crate::features::cake::CakeAction;
use crate::store::{Action, SliceReducer};

use super::action::IceCreamAction;
use super::state::IceCreamState;

/// Reducer for the ice cream stock slice.
///
/// Besides its own actions, this reducer responds to `Cake(Ordered)`:
/// every cake order gives one ice cream away with each cake, so the
/// count drops by the ordered amount in the same dispatch pass. The
/// coupling is declared in the store's reaction table. Counts are not
/// clamped at zero.
pub struct IceCreamReducer;

impl SliceReducer for IceCreamReducer {
    type State = IceCreamState;

    fn reduce(state: Self::State, action: &Action) -> Self::State {
        match action {
            Action::IceCream(IceCreamAction::Ordered { amount }) => IceCreamState {
                count: state.count - amount,
            },
            Action::IceCream(IceCreamAction::Restocked { amount }) => IceCreamState {
                count: state.count + amount,
            },
            Action::Cake(CakeAction::Ordered { amount }) => IceCreamState {
                count: state.count - amount,
            },
            _ => state,
        }
    }
}
