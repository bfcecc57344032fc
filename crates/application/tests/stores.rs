//! Entity store behavior: cache mutation from confirmed responses only,
//! loading-flag lifecycle, and the last-completed-wins race rule.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod support;

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;

use agora_application::{ApiError, MessageStore, OrderStore, ProductStore};
use agora_domain::{NewProduct, OrderStatus, ProductQuery};

use support::{MockTransport, harness};

fn product_json(id: i64, title: &str) -> serde_json::Value {
    json!({"id": id, "seller_id": 1, "title": title, "price": 1000})
}

fn order_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id, "product_id": 10, "buyer_id": 2, "seller_id": 1,
        "price": 1000, "status": status
    })
}

/// Polls until the transport has seen `count` requests, so tests can line
/// up overlapping calls deterministically.
async fn wait_for_requests(transport: &MockTransport, count: usize) {
    for _ in 0..1000 {
        if transport.request_count().await >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("transport never saw {count} requests");
}

#[tokio::test]
async fn search_populates_list_and_total() {
    let h = harness();
    h.transport
        .push_ok(json!({
            "code": 200,
            "data": {"content": [product_json(1, "bike"), product_json(2, "bike pump")], "total": 5}
        }))
        .await;
    let store = ProductStore::new(h.client.clone());

    let page = store.search(&ProductQuery::keyword("bike")).await.unwrap();

    assert_eq!(page.content.len(), 2);
    assert_eq!(store.state().list().await.len(), 2);
    assert_eq!(store.state().total().await, 5);
    assert!(!store.state().is_loading().await);
}

#[tokio::test]
async fn loading_flag_is_true_only_while_in_flight() {
    let h = harness();
    let gate = h
        .transport
        .push_gated_ok(json!({"code": 200, "data": {"content": [], "total": 0}}))
        .await;
    let store = Arc::new(ProductStore::new(h.client.clone()));

    assert!(!store.state().is_loading().await);

    let task = {
        let store = store.clone();
        tokio::spawn(async move { store.search(&ProductQuery::default()).await })
    };
    wait_for_requests(&h.transport, 1).await;
    assert!(store.state().is_loading().await);

    gate.send(()).unwrap();
    task.await.unwrap().unwrap();
    assert!(!store.state().is_loading().await);
}

#[tokio::test]
async fn failed_search_clears_loading_and_leaves_state_unchanged() {
    let h = harness();
    // Seed the cache with one successful search.
    h.transport
        .push_ok(json!({"code": 200, "data": {"content": [product_json(1, "lamp")], "total": 1}}))
        .await;
    let store = ProductStore::new(h.client.clone());
    store.search(&ProductQuery::default()).await.unwrap();
    let before = store.state().snapshot().await;

    // Envelope-level failure: the pipeline rejects, the cache must not move.
    h.transport
        .push_ok(json!({"code": 500, "message": "backend unhappy"}))
        .await;
    let result = store.search(&ProductQuery::default()).await;
    assert!(matches!(result, Err(ApiError::Application { .. })));

    let after = store.state().snapshot().await;
    assert_eq!(before, after);
    assert!(!after.loading);
}

#[tokio::test]
async fn overlapping_searches_resolve_by_completion_order() {
    let h = harness();
    // Call A is issued first and completes second.
    let gate_a = h
        .transport
        .push_gated_ok(json!({"code": 200, "data": {"content": [product_json(1, "a")], "total": 1}}))
        .await;
    let gate_b = h
        .transport
        .push_gated_ok(json!({"code": 200, "data": {"content": [product_json(2, "b")], "total": 2}}))
        .await;
    let store = Arc::new(ProductStore::new(h.client.clone()));

    let task_a = {
        let store = store.clone();
        tokio::spawn(async move { store.search(&ProductQuery::keyword("a")).await })
    };
    wait_for_requests(&h.transport, 1).await;
    let task_b = {
        let store = store.clone();
        tokio::spawn(async move { store.search(&ProductQuery::keyword("b")).await })
    };
    wait_for_requests(&h.transport, 2).await;

    // B finishes first, then A overwrites it: last completed wins.
    gate_b.send(()).unwrap();
    task_b.await.unwrap().unwrap();
    gate_a.send(()).unwrap();
    task_a.await.unwrap().unwrap();

    let state = store.state().snapshot().await;
    assert_eq!(state.list[0].id, 1);
    assert_eq!(state.total, 1);
}

#[tokio::test]
async fn fetch_detail_overwrites_current_and_failure_leaves_it() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 200, "data": product_json(7, "kayak")}))
        .await;
    let store = ProductStore::new(h.client.clone());

    store.fetch_detail(7).await.unwrap();
    assert_eq!(store.state().current().await.unwrap().id, 7);

    h.transport.push_ok(json!({"code": 404, "message": "gone"})).await;
    assert!(store.fetch_detail(8).await.is_err());
    // Still the last confirmed value.
    assert_eq!(store.state().current().await.unwrap().id, 7);
}

#[tokio::test]
async fn create_and_delete_do_not_touch_cached_views() {
    let h = harness();
    let store = ProductStore::new(h.client.clone());
    h.transport
        .push_ok(json!({"code": 200, "data": product_json(3, "chair")}))
        .await;
    store
        .create(&NewProduct {
            title: "chair".to_string(),
            description: String::new(),
            price: 500,
            category: None,
            images: vec![],
        })
        .await
        .unwrap();

    h.transport.push_ok(json!({"code": 200, "data": null})).await;
    store.delete(3).await.unwrap();

    let state = store.state().snapshot().await;
    assert!(state.current.is_none());
    assert!(state.list.is_empty());
}

#[tokio::test]
async fn fetch_mine_populates_the_separate_view() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 200, "data": {"content": [product_json(9, "mine")], "total": 1}}))
        .await;
    let store = ProductStore::new(h.client.clone());

    store.fetch_mine(&ProductQuery::default()).await.unwrap();

    assert_eq!(store.mine().await.len(), 1);
    // The shared search view is untouched.
    assert!(store.state().list().await.is_empty());
}

#[tokio::test]
async fn order_list_is_a_plain_array() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 200, "data": [order_json(1, "pending"), order_json(2, "paid")]}))
        .await;
    let store = OrderStore::new(h.client.clone());

    let orders = store.fetch_mine().await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(store.state().total().await, 2);
    assert_eq!(store.state().list().await[1].status, OrderStatus::Paid);
}

#[tokio::test]
async fn order_status_update_sends_the_status_body() {
    let h = harness();
    h.transport
        .push_ok(json!({"code": 200, "data": order_json(1, "shipped")}))
        .await;
    let store = OrderStore::new(h.client.clone());

    let order = store.update_status(1, OrderStatus::Shipped).await.unwrap();

    assert_eq!(order.status, OrderStatus::Shipped);
    let requests = h.transport.requests().await;
    assert_eq!(requests[0].path, "/api/v1/orders/1/status");
    assert_eq!(requests[0].body, Some(json!({"status": "shipped"})));
}

#[tokio::test]
async fn conversation_fetch_and_ack_operations() {
    let h = harness();
    let message = json!({
        "id": 5, "conversation_id": 12, "sender_id": 1, "recipient_id": 2,
        "content": "still available?", "read": false
    });
    h.transport
        .push_ok(json!({"code": 200, "data": [message]}))
        .await;
    let store = MessageStore::new(h.client.clone());

    let messages = store.fetch_conversation(12).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(store.state().list().await[0].conversation_id, 12);

    h.transport.push_ok(json!({"code": 200})).await;
    store.mark_read(5).await.unwrap();
    let requests = h.transport.requests().await;
    assert_eq!(requests[1].path, "/api/v1/messages/5/read");
}
