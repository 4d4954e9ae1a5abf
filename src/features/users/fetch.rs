//! The user directory fetch task.

use reqwest::Client;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::store::{Action, Store, StoreError};

use super::action::UsersAction;
use super::state::User;

/// Errors from the user directory fetch. All variants end up as the
/// rejected phase's message; callers never see them directly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client for the remote user directory.
pub struct UserFetcher {
    client: Client,
    endpoint: String,
}

impl UserFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// GET the directory and decode the records. No retry, no timeout:
    /// a never-resolving call leaves the slice loading.
    pub async fn fetch(&self) -> Result<Vec<User>, FetchError> {
        let users = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<User>>()
            .await?;
        Ok(users)
    }
}

/// Start one fetch.
///
/// `FetchPending` is dispatched synchronously before this returns; the
/// request then runs as a task on the ambient tokio runtime and delivers
/// exactly one terminal phase through the store. Failures become
/// `FetchRejected` with the error's display text rather than propagating:
/// callers observe the outcome only through state. There is no overlap
/// guard; if two fetches run at once, the later completion wins.
pub fn spawn_fetch(store: &Store, fetcher: UserFetcher) -> Result<JoinHandle<()>, StoreError> {
    store.dispatch(Action::Users(UsersAction::FetchPending))?;
    let store = store.clone();
    Ok(tokio::spawn(async move {
        let phase = match fetcher.fetch().await {
            Ok(users) => UsersAction::FetchFulfilled { users },
            Err(err) => {
                tracing::warn!(error = %err, "user fetch failed");
                UsersAction::FetchRejected {
                    message: err.to_string(),
                }
            }
        };
        if let Err(err) = store.dispatch(Action::Users(phase)) {
            tracing::error!(error = %err, "could not deliver fetch result");
        }
    }))
}
