//! Integration tests for the listkeeper HTTP client

mod common;

use common::{Harness, NavEvent, RecordingNavigator};
use listkeeper_core::{ClientConfig, MemoryTokenStore, Route, Session, TokenStore};
use listkeeper_http::{ApiClientFactory, ClientError, SESSION_EXPIRED_NOTICE, UnauthorizedPolicy};
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_factory_rejects_invalid_server_url() {
    let session = Arc::new(Session::new(Arc::new(MemoryTokenStore::new())));
    let result = ApiClientFactory::new(
        ClientConfig::with_server_url("not a url"),
        session,
        Arc::new(RecordingNavigator::default()),
    );
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_factory_shares_one_configuration() {
    let h = Harness::start().await;
    let uri = h.server.uri();

    assert_eq!(h.factory.api().base_url(), format!("{uri}/api"));
    assert_eq!(h.factory.auth().base_url(), uri);
    assert_eq!(
        h.factory
            .client("/reports", UnauthorizedPolicy::ExpireSession)
            .base_url(),
        format!("{uri}/reports")
    );
    assert_eq!(h.factory.api().policy(), UnauthorizedPolicy::ExpireSession);
    assert_eq!(h.factory.auth().policy(), UnauthorizedPolicy::Propagate);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let h = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let _: Value = client
        .execute(client.request(Method::GET, "/lists"))
        .await
        .unwrap();

    assert_eq!(h.authorization_headers().await, vec![None]);
}

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    let h = Harness::start_with_token("abc123").await;

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let roles: Vec<Value> = client
        .execute(client.request(Method::GET, "/roles"))
        .await
        .unwrap();
    assert!(roles.is_empty());
}

#[tokio::test]
async fn test_token_is_read_when_request_is_built() {
    let h = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&h.server)
        .await;

    // One client instance, token written between two requests
    let client = h.factory.api();
    let _: Value = client.execute(client.request(Method::GET, "/lists")).await.unwrap();
    h.store.set("later").unwrap();
    let _: Value = client.execute(client.request(Method::GET, "/lists")).await.unwrap();

    assert_eq!(
        h.authorization_headers().await,
        vec![None, Some("Bearer later".to_string())]
    );
}

#[tokio::test]
async fn test_success_body_is_returned_unchanged() {
    let h = Harness::start().await;
    let body = json!({"id": 7, "item": "10.0.0.1", "extra": {"nested": true}});

    Mock::given(method("POST"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&body))
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let response: Value = client
        .execute(client.request(Method::POST, "/lists").json(&json!({"item": "10.0.0.1"})))
        .await
        .unwrap();
    assert_eq!(response, body);
}

#[tokio::test]
async fn test_unauthorized_expires_session_and_redirects() {
    let h = Harness::start_with_token("stale").await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token has expired"})),
        )
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let result: Result<Value, _> = client.execute(client.request(Method::GET, "/lists")).await;

    assert!(matches!(result, Err(ClientError::Unauthorized(ref m)) if m == "Token has expired"));
    assert_eq!(h.store.get(), None);
    assert!(!h.session.is_authenticated());
    assert_eq!(
        h.navigator.events(),
        vec![
            NavEvent::Notice(SESSION_EXPIRED_NOTICE.to_string()),
            NavEvent::Navigate(Route::Login),
        ]
    );
}

#[tokio::test]
async fn test_unauthorized_clears_user_too() {
    let h = Harness::start_with_token("stale").await;
    h.session.set_user(listkeeper_core::User {
        username: "alice".into(),
        email: None,
    });

    Mock::given(method("DELETE"))
        .and(path("/api/roles/3"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let result = client
        .execute_empty(client.request(Method::DELETE, "/roles/3"))
        .await;

    assert!(result.unwrap_err().is_auth_expired());
    assert_eq!(h.session.user(), None);
}

#[tokio::test]
async fn test_propagate_policy_leaves_session_alone() {
    let h = Harness::start_with_token("keep-me").await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;

    let client = h.factory.auth();
    let result: Result<Value, _> = client
        .execute(client.request(Method::POST, "/auth/login"))
        .await;

    assert!(matches!(result, Err(ClientError::Unauthorized(_))));
    assert_eq!(h.store.get().as_deref(), Some("keep-me"));
    assert!(h.navigator.events().is_empty());
}

#[tokio::test]
async fn test_other_failures_propagate_without_side_effects() {
    let h = Harness::start_with_token("abc123").await;

    Mock::given(method("PUT"))
        .and(path("/api/lists/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such item"))
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let result: Result<Value, _> = client
        .execute(client.request(Method::PUT, "/lists/9"))
        .await;

    match result {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such item");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(h.store.get().as_deref(), Some("abc123"));
    assert!(h.navigator.events().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let h = Harness::start().await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let result: Result<Vec<Value>, _> = client.execute(client.request(Method::GET, "/lists")).await;
    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn test_concurrent_requests_keep_their_own_responses() {
    let h = Harness::start_with_token("abc123").await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "item": "a"}])))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 2, "role": "admin"}])))
        .mount(&h.server)
        .await;

    let client = h.factory.api();
    let (lists, roles) = tokio::join!(
        client.execute::<Value>(client.request(Method::GET, "/lists")),
        client.execute::<Value>(client.request(Method::GET, "/roles")),
    );

    assert_eq!(lists.unwrap()[0]["item"], "a");
    assert_eq!(roles.unwrap()[0]["role"], "admin");
}
