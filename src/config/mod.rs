mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DEFAULT_USERS_ENDPOINT};
