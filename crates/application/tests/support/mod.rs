//! Shared mock adapters for pipeline and store tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock, oneshot};

use agora_application::{
    ApiClient, ClientConfig, CredentialStorage, HttpTransport, NavigationSignal, Notifier,
    StorageError, TokenStore, TransportError, TransportRequest, TransportResponse,
};

/// One scripted transport outcome, optionally gated on a oneshot so tests
/// can control completion order of overlapping calls.
pub struct Scripted {
    pub gate: Option<oneshot::Receiver<()>>,
    pub result: Result<TransportResponse, TransportError>,
}

/// Transport that replays scripted outcomes in issue order and records
/// every request it sees.
#[derive(Default)]
pub struct MockTransport {
    scripted: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub async fn push_ok(&self, body: Value) {
        self.push(Scripted {
            gate: None,
            result: Ok(ok_json(&body)),
        })
        .await;
    }

    pub async fn push_status(&self, status: u16, body: Value) {
        self.push(Scripted {
            gate: None,
            result: Ok(TransportResponse {
                status,
                body: body.to_string().into_bytes(),
            }),
        })
        .await;
    }

    pub async fn push_error(&self, error: TransportError) {
        self.push(Scripted {
            gate: None,
            result: Err(error),
        })
        .await;
    }

    /// Scripts a success response that is held until the returned sender
    /// fires.
    pub async fn push_gated_ok(&self, body: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Scripted {
            gate: Some(rx),
            result: Ok(ok_json(&body)),
        })
        .await;
        tx
    }

    pub async fn push(&self, scripted: Scripted) {
        self.scripted.lock().await.push_back(scripted);
    }

    pub async fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().await.push(request);
        let scripted = self
            .scripted
            .lock()
            .await
            .pop_front()
            .expect("no scripted response left");
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }
}

/// Builds a 200 response wrapping the given JSON.
pub fn ok_json(body: &Value) -> TransportResponse {
    TransportResponse {
        status: 200,
        body: body.to_string().into_bytes(),
    }
}

/// In-memory credential storage.
#[derive(Default)]
pub struct MemoryStorage {
    value: RwLock<Option<String>>,
}

impl MemoryStorage {
    pub async fn raw(&self) -> Option<String> {
        self.value.read().await.clone()
    }

    pub async fn preload(&self, value: &str) {
        *self.value.write().await = Some(value.to_string());
    }
}

#[async_trait]
impl CredentialStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.read().await.clone())
    }

    async fn store(&self, value: &str) -> Result<(), StorageError> {
        *self.value.write().await = Some(value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.value.write().await = None;
        Ok(())
    }
}

/// Notifier that records every surfaced message.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: std::sync::Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Navigation signal that counts redirects.
#[derive(Default)]
pub struct RecordingNavigation {
    redirects: std::sync::Mutex<Vec<Option<String>>>,
}

impl RecordingNavigation {
    pub fn redirects(&self) -> Vec<Option<String>> {
        self.redirects.lock().unwrap().clone()
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.lock().unwrap().len()
    }
}

impl NavigationSignal for RecordingNavigation {
    fn redirect_to_login(&self, from: Option<&str>) {
        self.redirects
            .lock()
            .unwrap()
            .push(from.map(ToString::to_string));
    }
}

/// A fully mocked pipeline and handles to all of its collaborators.
pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<MockTransport>,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigation: Arc<RecordingNavigation>,
}

pub fn harness() -> Harness {
    let transport = Arc::new(MockTransport::default());
    let storage = Arc::new(MemoryStorage::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigation = Arc::new(RecordingNavigation::default());
    let client = ApiClient::new(
        ClientConfig::default(),
        transport.clone(),
        TokenStore::new(storage.clone()),
        notifier.clone(),
        navigation.clone(),
    );
    Harness {
        client,
        transport,
        storage,
        notifier,
        navigation,
    }
}
