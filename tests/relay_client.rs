//! Relay client contract tests against a local mock of the Haven API.

use httpmock::prelude::*;
use serde_json::json;

use haven_role_relay::{
    config::Config,
    error::relay::RelayError,
    model::roles::{RoleUpdateRequest, UserRoles},
    relay::RelayClient,
};

fn client_for(server: &MockServer) -> RelayClient {
    let config = Config {
        haven_api_base_url: server.base_url(),
        haven_api_token: "test-token".to_string(),
        discord_bot_token: "unused".to_string(),
    };
    RelayClient::new(&config)
}

/// Tests a successful delivery sends the documented method, path, headers,
/// and body, and returns Ok on HTTP 200.
#[tokio::test]
async fn delivers_role_update_with_exact_wire_format() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/guild-roles")
            .header("content-type", "application/json")
            .header("authorization", "Bearer test-token")
            .json_body(json!({
                "guild_id": "G",
                "users": [{ "user_id": "U1", "roles": ["owner"] }]
            }));
        then.status(200);
    });

    let client = client_for(&server);
    let request =
        RoleUpdateRequest::for_guild("G", vec![UserRoles::new("U1", vec!["owner".to_string()])]);

    client.send(&request).await.unwrap();

    mock.assert();
}

/// Tests a memberless guild is still transmitted with an empty users array.
#[tokio::test]
async fn delivers_empty_guild_snapshot() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/guild-roles")
            .json_body(json!({ "guild_id": "G", "users": [] }));
        then.status(200);
    });

    let client = client_for(&server);
    let request = RoleUpdateRequest::for_guild("G", Vec::new());

    client.send(&request).await.unwrap();

    mock.assert();
}

/// Tests a 401 from the API is classified as an API error carrying the status.
#[tokio::test]
async fn classifies_unauthorized_as_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/guild-roles");
        then.status(401);
    });

    let client = client_for(&server);
    let request = RoleUpdateRequest::single("G", UserRoles::removed("U"));

    let err = client.send(&request).await.unwrap_err();
    match err {
        RelayError::Api { status } => assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED),
        other => panic!("expected API error, got {other:?}"),
    }
}

/// Tests a 500 from the API is classified as an API error.
#[tokio::test]
async fn classifies_server_error_as_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/guild-roles");
        then.status(500);
    });

    let client = client_for(&server);
    let request = RoleUpdateRequest::single("G", UserRoles::new("U", vec![]));

    let err = client.send(&request).await.unwrap_err();
    match err {
        RelayError::Api { status } => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

/// Tests success is HTTP 200 exactly: another 2xx code is still an error.
#[tokio::test]
async fn rejects_non_200_success_codes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/guild-roles");
        then.status(204);
    });

    let client = client_for(&server);
    let request = RoleUpdateRequest::single("G", UserRoles::new("U", vec![]));

    let err = client.send(&request).await.unwrap_err();
    match err {
        RelayError::Api { status } => assert_eq!(status, reqwest::StatusCode::NO_CONTENT),
        other => panic!("expected API error, got {other:?}"),
    }
}

/// Tests an unreachable sink surfaces as a transport error.
#[tokio::test]
async fn classifies_connection_failure_as_transport_error() {
    // Nothing listens on this port.
    let config = Config {
        haven_api_base_url: "http://127.0.0.1:1".to_string(),
        haven_api_token: "test-token".to_string(),
        discord_bot_token: "unused".to_string(),
    };
    let client = RelayClient::new(&config);
    let request = RoleUpdateRequest::single("G", UserRoles::new("U", vec![]));

    let err = client.send(&request).await.unwrap_err();
    assert!(matches!(err, RelayError::Transport(_)));
}
