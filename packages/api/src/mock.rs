//! Scripted transport for tests. Built for this crate's tests and behind
//! the `mock` feature for dependents.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use store::{Identity, KeyValueStore, MemoryStore, Role, SessionStore, StorageError};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

/// Replays queued replies in order and records every request it was given.
/// An exhausted queue answers 500.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Respond(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(reason.to_string()));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.sent().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(req);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Respond(resp)) => Ok(resp),
            Some(Reply::Fail(reason)) => Err(ApiError::Transport(reason)),
            None => Ok(HttpResponse {
                status: 500,
                body: String::new(),
            }),
        }
    }
}

pub const BASE: &str = "http://api.test/api";

pub fn client() -> (ApiClient<MockTransport, MemoryStore>, MockTransport, MemoryStore) {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    let api = ApiClient::new(transport.clone(), BASE, store.clone());
    (api, transport, store)
}

/// A client whose store already holds a session for `role`.
pub fn signed_in(role: Role) -> (ApiClient<MockTransport, MemoryStore>, MockTransport) {
    let (api, transport, store) = client();
    let identity = Identity {
        id: 1,
        name: "Tester".to_string(),
        email: "t@example.com".to_string(),
        role,
    };
    SessionStore::new(store).save("tok-test", &identity).unwrap();
    (api, transport)
}

/// MemoryStore whose writes to one key can be made to fail.
#[derive(Clone, Default)]
pub struct RefusingStore {
    pub inner: MemoryStore,
    refuse: Arc<Mutex<Option<String>>>,
}

impl RefusingStore {
    pub fn refuse(&self, key: &str) {
        *self.refuse.lock().unwrap() = Some(key.to_string());
    }
}

impl KeyValueStore for RefusingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.refuse.lock().unwrap().as_deref() == Some(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key)
    }
}
