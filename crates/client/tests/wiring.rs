//! The application root wires one pipeline and one token store behind
//! every domain store.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::Mutex;

use agora::{ClientConfig, LoginRequest, Marketplace, ProductQuery};
use agora_application::ports::{
    HttpTransport, NavigationSignal, Notifier, TransportError, TransportRequest, TransportResponse,
};
use agora_infrastructure::MemoryCredentialStorage;

#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<serde_json::Value>>,
    requests: Mutex<Vec<TransportRequest>>,
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().await.push(request);
        let body = self
            .responses
            .lock()
            .await
            .pop_front()
            .expect("no scripted response left");
        Ok(TransportResponse {
            status: 200,
            body: body.to_string().into_bytes(),
        })
    }
}

struct Silent;

impl Notifier for Silent {
    fn notify(&self, _message: &str) {}
}

impl NavigationSignal for Silent {
    fn redirect_to_login(&self, _from: Option<&str>) {}
}

#[tokio::test]
async fn stores_share_the_pipeline_and_token_store() {
    let transport = Arc::new(ScriptedTransport::default());
    transport.responses.lock().await.extend([
        json!({"code": 200, "data": {"token": "shared-tok"}}),
        json!({"code": 200, "data": {"id": 1, "username": "bo"}}),
        json!({"code": 200, "data": {"content": [], "total": 0}}),
    ]);

    let market = Marketplace::with_ports(
        ClientConfig::default(),
        transport.clone(),
        Arc::new(MemoryCredentialStorage::new()),
        Arc::new(Silent),
        Arc::new(Silent),
    );

    assert!(!market.is_authenticated().await);
    market
        .session
        .login(&LoginRequest {
            username: "bo".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert!(market.is_authenticated().await);

    // A credential set through the session store reaches a product call
    // because everything shares one pipeline.
    market
        .products
        .search(&ProductQuery::default())
        .await
        .unwrap();
    let requests = transport.requests.lock().await;
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].path, "/api/v1/products/search");
    assert_eq!(requests[2].header("authorization"), Some("Bearer shared-tok"));
}
