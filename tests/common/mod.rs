//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use snaplink::client::{ApiRequest, ApiResponse, HttpTransport, LinkClient};
use snaplink::errors::{ClientError, Result};
use snaplink::storage::{KeyValueStore, MemoryStore, TokenStore};

/// Transport that replays canned responses and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, err: ClientError) {
        self.responses.lock().push_back(Err(err));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("no scripted response left")))
    }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub kv: Arc<MemoryStore>,
    pub client: LinkClient,
}

/// LinkClient over a scripted transport and an empty in-memory store
pub fn harness() -> Harness {
    let transport = ScriptedTransport::new();
    let kv = Arc::new(MemoryStore::new());
    let store: Arc<dyn KeyValueStore> = kv.clone();
    let client = LinkClient::new(transport.clone(), Arc::new(TokenStore::new(store)));
    Harness {
        transport,
        kv,
        client,
    }
}
