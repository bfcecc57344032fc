//! Request pipeline behavior: prefixing, credential injection, and the
//! incoming-phase error classification.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod support;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use agora_application::client::{
    GENERIC_FAILURE_MESSAGE, LOGIN_REQUIRED_MESSAGE, NETWORK_FAILURE_MESSAGE,
    SESSION_EXPIRED_MESSAGE,
};
use agora_application::{ApiError, TransportError};
use agora_domain::{Endpoint, catalog};

use support::harness;

#[tokio::test]
async fn applies_api_prefix_to_relative_paths() {
    let h = harness();
    h.transport.push_ok(json!({"code": 200, "data": null})).await;
    let _: Value = h.client.execute(catalog::order::mine()).await.unwrap();
    let requests = h.transport.requests().await;
    assert_eq!(requests[0].path, "/api/v1/orders");
}

#[tokio::test]
async fn leaves_already_prefixed_paths_alone() {
    let h = harness();
    h.transport.push_ok(json!({"code": 200, "data": null})).await;
    let endpoint = Endpoint::get("/api/v1/orders", true);
    let _: Value = h.client.execute(endpoint).await.unwrap();
    let requests = h.transport.requests().await;
    assert_eq!(requests[0].path, "/api/v1/orders");
}

#[tokio::test]
async fn anonymous_request_has_no_auth_header() {
    let h = harness();
    h.transport.push_ok(json!({"code": 200, "data": null})).await;
    let _: Value = h.client.execute(catalog::product::search()).await.unwrap();
    let requests = h.transport.requests().await;
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn credential_is_attached_in_canonical_form() {
    let h = harness();
    h.storage.preload("tok-123").await;
    h.transport.push_ok(json!({"code": 200, "data": null})).await;
    let _: Value = h.client.execute(catalog::user::profile()).await.unwrap();
    let requests = h.transport.requests().await;
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok-123"));
}

#[tokio::test]
async fn success_unwraps_the_data_payload() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 200, "message": "ok", "data": {"id": 7}}))
        .await;
    let data: Value = h.client.execute(catalog::product::detail(7)).await.unwrap();
    assert_eq!(data, json!({"id": 7}));
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn transport_failure_classifies_as_network_error() {
    let h = harness();
    h.transport
        .push_error(TransportError::Connect("refused".to_string()))
        .await;
    let result: Result<Value, _> = h.client.execute(catalog::product::search()).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(h.notifier.messages(), vec![NETWORK_FAILURE_MESSAGE]);
    assert_eq!(h.navigation.redirect_count(), 0);
}

#[tokio::test]
async fn timeout_classifies_as_network_error() {
    let h = harness();
    h.transport.push_error(TransportError::Timeout).await;
    let result: Result<Value, _> = h.client.execute(catalog::order::mine()).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn unauthorized_with_credential_expires_the_session() {
    let h = harness();
    h.storage.preload("Bearer tok").await;
    h.transport.push_status(401, json!({})).await;
    let result: Result<Value, _> = h.client.execute(catalog::user::profile()).await;
    assert!(matches!(result, Err(ApiError::SessionExpired)));
    // Credential cleared, one notification, exactly one redirect.
    assert_eq!(h.storage.raw().await, None);
    assert_eq!(h.notifier.messages(), vec![SESSION_EXPIRED_MESSAGE]);
    assert_eq!(h.navigation.redirect_count(), 1);
}

#[tokio::test]
async fn unauthorized_without_credential_requires_login() {
    let h = harness();
    h.transport.push_status(401, json!({})).await;
    let result: Result<Value, _> = h.client.execute(catalog::user::profile()).await;
    assert!(matches!(result, Err(ApiError::AuthRequired)));
    assert_eq!(h.notifier.messages(), vec![LOGIN_REQUIRED_MESSAGE]);
    assert_eq!(h.navigation.redirect_count(), 1);
}

#[tokio::test]
async fn envelope_failure_code_rejects_with_its_message() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 500, "message": "boom", "data": null}))
        .await;
    let result: Result<Value, _> = h.client.execute(catalog::product::detail(1)).await;
    match result {
        Err(ApiError::Application { code, message }) => {
            assert_eq!(code, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected application error, got {other:?}"),
    }
    assert_eq!(h.notifier.messages(), vec!["boom"]);
    assert_eq!(h.navigation.redirect_count(), 0);
}

#[tokio::test]
async fn envelope_failure_without_message_uses_fallback() {
    let h = harness();
    h.transport.push_ok(json!({"code": 500})).await;
    let result: Result<Value, _> = h.client.execute(catalog::product::detail(1)).await;
    assert!(matches!(result, Err(ApiError::Application { .. })));
    assert_eq!(h.notifier.messages(), vec![GENERIC_FAILURE_MESSAGE]);
}

#[tokio::test]
async fn envelope_unauthorized_code_redirects() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 401, "message": "expired", "data": null}))
        .await;
    let result: Result<Value, _> = h.client.execute(catalog::order::mine()).await;
    assert!(matches!(result, Err(ApiError::Application { code: 401, .. })));
    assert_eq!(h.navigation.redirect_count(), 1);
}

#[tokio::test]
async fn other_status_uses_envelope_message_when_present() {
    let h = harness();
    h.transport
        .push_status(503, json!({"code": 503, "message": "maintenance"}))
        .await;
    let result: Result<Value, _> = h.client.execute(catalog::order::mine()).await;
    match result {
        Err(ApiError::Request { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected request error, got {other:?}"),
    }
    assert_eq!(h.notifier.messages(), vec!["maintenance"]);
}

#[tokio::test]
async fn other_status_with_unparseable_body_uses_fallback() {
    let h = harness();
    h.transport
        .push(support::Scripted {
            gate: None,
            result: Ok(agora_application::TransportResponse {
                status: 500,
                body: b"<html>oops</html>".to_vec(),
            }),
        })
        .await;
    let result: Result<Value, _> = h.client.execute(catalog::order::mine()).await;
    assert!(matches!(result, Err(ApiError::Request { status: 500, .. })));
    assert_eq!(h.notifier.messages(), vec![GENERIC_FAILURE_MESSAGE]);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let h = harness();
    h.transport
        .push(support::Scripted {
            gate: None,
            result: Ok(agora_application::TransportResponse {
                status: 200,
                body: b"not json".to_vec(),
            }),
        })
        .await;
    let result: Result<Value, _> = h.client.execute(catalog::order::mine()).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
    assert_eq!(h.notifier.messages(), vec![GENERIC_FAILURE_MESSAGE]);
}

#[tokio::test]
async fn query_parameters_are_url_encoded() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 200, "data": {"content": [], "total": 0}}))
        .await;
    let _: Value = h
        .client
        .execute_with_query(
            catalog::product::search(),
            &agora_domain::ProductQuery {
                keyword: Some("mountain bike".to_string()),
                limit: Some(20),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let requests = h.transport.requests().await;
    assert_eq!(
        requests[0].query.as_deref(),
        Some("keyword=mountain+bike&limit=20")
    );
}
