use serde::Deserialize;

/// Remote user directory queried when no config file overrides it.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the remote user directory.
    pub users_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
        }
    }
}
