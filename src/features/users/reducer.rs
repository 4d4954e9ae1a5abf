//! Reducer for the user directory fetch lifecycle.

use crate::store::{Action, SliceReducer};

use super::action::UsersAction;
use super::state::UsersState;

/// Reducer for the remote user list.
///
/// Drives the idle → loading → (succeeded | failed) machine. A rejected
/// fetch clears the list and records the failure text; a fulfilled fetch
/// replaces the list and clears any previous failure.
pub struct UsersReducer;

impl SliceReducer for UsersReducer {
    type State = UsersState;

    fn reduce(state: Self::State, action: &Action) -> Self::State {
        match action {
            Action::Users(UsersAction::FetchPending) => UsersState {
                is_loading: true,
                ..state
            },
            Action::Users(UsersAction::FetchFulfilled { users }) => UsersState {
                is_loading: false,
                error_message: String::new(),
                users: users.clone(),
            },
            Action::Users(UsersAction::FetchRejected { message }) => UsersState {
                is_loading: false,
                error_message: message.clone(),
                users: Vec::new(),
            },
            _ => state,
        }
    }
}
