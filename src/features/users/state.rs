use serde::Deserialize;

use crate::store::SliceState;

/// One record from the remote user directory. Extra fields in the
/// response are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Remote user list slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    /// True from fetch initiation until its terminal phase.
    pub is_loading: bool,
    /// Empty when the last fetch succeeded or none ran yet.
    pub error_message: String,
    pub users: Vec<User>,
}

impl SliceState for UsersState {}
