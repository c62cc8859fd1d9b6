//! Role sync service tests: one event, one outbound call, exact payload.

use httpmock::prelude::*;
use serde_json::json;

use haven_role_relay::{config::Config, relay::RelayClient, service::roles::RoleSyncService};

fn client_for(server: &MockServer) -> RelayClient {
    let config = Config {
        haven_api_base_url: server.base_url(),
        haven_api_token: "test-token".to_string(),
        discord_bot_token: "unused".to_string(),
    };
    RelayClient::new(&config)
}

/// Tests a role-change push produces exactly one outbound call carrying
/// the member's full new role set.
#[tokio::test]
async fn role_change_sends_one_full_role_set() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/guild-roles").json_body(json!({
            "guild_id": "G",
            "users": [{ "user_id": "U", "roles": ["admin", "mod"] }]
        }));
        then.status(200);
    });

    let client = client_for(&server);
    let service = RoleSyncService::new(&client);

    service
        .push_member_roles("G", "U", vec!["admin".to_string(), "mod".to_string()])
        .await
        .unwrap();

    assert_eq!(mock.hits(), 1);
}

/// Tests a removal push reports the user with an empty role set instead of
/// omitting them.
#[tokio::test]
async fn removal_sends_explicit_empty_role_set() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/guild-roles").json_body(json!({
            "guild_id": "G",
            "users": [{ "user_id": "U", "roles": [] }]
        }));
        then.status(200);
    });

    let client = client_for(&server);
    let service = RoleSyncService::new(&client);

    service.push_member_removal("G", "U").await.unwrap();

    assert_eq!(mock.hits(), 1);
}

/// Tests a failed push surfaces the error to the caller; the event handler
/// decides whether to log or abort.
#[tokio::test]
async fn failed_push_propagates_to_caller() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/guild-roles");
        then.status(503);
    });

    let client = client_for(&server);
    let service = RoleSyncService::new(&client);

    let result = service.push_member_removal("G", "U").await;
    assert!(result.is_err());
}
