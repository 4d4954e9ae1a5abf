mod action;
mod fetch;
mod reducer;
mod state;

pub use action::UsersAction;
pub use fetch::{spawn_fetch, FetchError, UserFetcher};
pub use reducer::UsersReducer;
pub use state::{User, UsersState};
