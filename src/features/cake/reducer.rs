//! Reducer for cake stock.

use crate::store::{Action, SliceReducer};

use super::action::CakeAction;
use super::state::CakeState;

/// Reducer for the cake stock slice.
///
/// Counts are not clamped at zero: ordering more than the stock on hand
/// drives the count negative.
pub struct CakeReducer;

impl SliceReducer for CakeReducer {
    type State = CakeState;

    fn reduce(state: Self::State, action: &Action) -> Self::State {
        match action {
            Action::Cake(CakeAction::Ordered { amount }) => CakeState {
                count: state.count - amount,
            },
            Action::Cake(CakeAction::Restocked { amount }) => CakeState {
                count: state.count + amount,
            },
            _ => state,
        }
    }
}
