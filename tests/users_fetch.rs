mod common;

use serde_json::json;
use sweetstand::features::users::{spawn_fetch, User, UserFetcher, UsersAction};
use sweetstand::store::{Action, Store};

#[test]
fn simulated_lifecycle_through_the_store() {
    let store = Store::new();

    store
        .dispatch(Action::Users(UsersAction::FetchPending))
        .unwrap();
    let state = store.state();
    assert!(state.users.is_loading);
    assert!(state.users.users.is_empty());

    store
        .dispatch(Action::Users(UsersAction::FetchFulfilled {
            users: vec![User {
                id: 1,
                name: "Ada".to_string(),
            }],
        }))
        .unwrap();
    let state = store.state();
    assert!(!state.users.is_loading);
    assert_eq!(state.users.users.len(), 1);
    assert_eq!(state.users.users[0].name, "Ada");
    assert!(state.users.error_message.is_empty());
}

#[test]
fn simulated_failure_through_the_store() {
    let store = Store::new();

    store
        .dispatch(Action::Users(UsersAction::FetchPending))
        .unwrap();
    store
        .dispatch(Action::Users(UsersAction::FetchRejected {
            message: "network down".to_string(),
        }))
        .unwrap();

    let state = store.state();
    assert!(!state.users.is_loading);
    assert!(state.users.users.is_empty());
    assert_eq!(state.users.error_message, "network down");
}

#[tokio::test]
async fn fetch_round_trip_success() {
    let body = json!([
        { "id": 1, "name": "Ada", "email": "ada@example.com" },
        { "id": 2, "name": "Grace" }
    ])
    .to_string();
    let (url, server) = common::serve_once("HTTP/1.1 200 OK", body);

    let store = Store::new();
    let handle = spawn_fetch(&store, UserFetcher::new(url)).unwrap();

    // Pending is observable before the task resolves.
    let state = store.state();
    assert!(state.users.is_loading);
    assert!(state.users.users.is_empty());

    handle.await.unwrap();
    server.join().unwrap();

    let state = store.state();
    assert!(!state.users.is_loading);
    assert_eq!(
        state.users.users,
        vec![
            User {
                id: 1,
                name: "Ada".to_string()
            },
            User {
                id: 2,
                name: "Grace".to_string()
            },
        ]
    );
    assert!(state.users.error_message.is_empty());
}

#[tokio::test]
async fn fetch_round_trip_server_error() {
    let (url, server) = common::serve_once("HTTP/1.1 500 Internal Server Error", String::new());

    let store = Store::new();
    let handle = spawn_fetch(&store, UserFetcher::new(url)).unwrap();
    handle.await.unwrap();
    server.join().unwrap();

    let state = store.state();
    assert!(!state.users.is_loading);
    assert!(state.users.users.is_empty());
    assert!(!state.users.error_message.is_empty());
}

#[tokio::test]
async fn fetch_round_trip_undecodable_body() {
    let (url, server) = common::serve_once("HTTP/1.1 200 OK", "not json".to_string());

    let store = Store::new();
    let handle = spawn_fetch(&store, UserFetcher::new(url)).unwrap();
    handle.await.unwrap();
    server.join().unwrap();

    let state = store.state();
    assert!(!state.users.is_loading);
    assert!(state.users.users.is_empty());
    assert!(!state.users.error_message.is_empty());
}

#[tokio::test]
async fn fetch_round_trip_connection_refused() {
    let store = Store::new();
    let handle = spawn_fetch(&store, UserFetcher::new(common::refused_endpoint())).unwrap();
    handle.await.unwrap();

    let state = store.state();
    assert!(!state.users.is_loading);
    assert!(state.users.users.is_empty());
    assert!(!state.users.error_message.is_empty());
}
