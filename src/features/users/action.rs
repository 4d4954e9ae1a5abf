use super::state::User;

/// Fetch lifecycle events for the user directory.
///
/// One fetch emits exactly one `FetchPending` when it starts and exactly
/// one of `FetchFulfilled` / `FetchRejected` when it ends.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersAction {
    FetchPending,
    FetchFulfilled { users: Vec<User> },
    FetchRejected { message: String },
}
