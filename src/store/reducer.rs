//! Reducer trait for slice state transitions.

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms one slice based on dispatched actions.
///
/// The reducer is the only place where slice transitions happen. It must
/// be a pure function: (State, &Action) -> State.
///
/// Every reducer is invoked with every action; for actions it does not
/// recognize it returns the state unchanged. Reducers have no access to
/// the store or to other slices, so they cannot dispatch and cannot read
/// across slice boundaries.
pub trait SliceReducer {
    /// The slice type this reducer operates on.
    type State: SliceState;

    /// Process an action and return the new slice state.
    fn reduce(state: Self::State, action: &Action) -> Self::State;
}
