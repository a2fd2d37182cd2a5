//! Test doubles for the transport and session storage seams.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
use crate::error::ClientError;
use crate::session::SessionStore;

#[derive(Default)]
pub struct MemorySessionStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.values.borrow().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.values.borrow_mut().clear();
        Ok(())
    }
}

/// Replays scripted responses in order and records every request
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ClientError>>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `(method, path)` of every request so far
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests.borrow().iter().map(|r| (r.method, r.path.clone())).collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".to_string())))
    }
}

/// Serves a fixed list after a few scheduler turns; other requests get
/// an empty 200 at once
pub struct SlowListTransport {
    list: String,
    calls: RefCell<Vec<(Method, String)>>,
}

impl SlowListTransport {
    pub fn new(list: &str) -> Self {
        Self {
            list: list.to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for SlowListTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        self.calls.borrow_mut().push((request.method, request.path.clone()));
        let body = if request.method == Method::Get {
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            self.list.clone()
        } else {
            String::new()
        };
        Ok(ApiResponse { status: 200, body })
    }
}

pub struct Harness {
    pub transport: Rc<MockTransport>,
    pub store: Rc<MemorySessionStore>,
    pub api: ApiClient,
}

/// Client wired to fresh doubles, with `token` stored if given
pub fn harness(token: Option<&str>) -> Harness {
    let transport = Rc::new(MockTransport::default());
    let store = Rc::new(MemorySessionStore::default());
    if let Some(token) = token {
        store.set(crate::session::AUTH_TOKEN_KEY, token).unwrap();
        store.set(crate::session::IS_ADMIN_KEY, "false").unwrap();
    }
    let api = ApiClient::new(transport.clone(), store.clone());
    Harness { transport, store, api }
}
