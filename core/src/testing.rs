//! Deterministic transport for tests.
//!
//! `FakeTransport` replays one fixed status/body/headers triple for every
//! request, whatever the request looks like, and keeps a copy of each request
//! it was given so tests can inspect headers, query pairs and bodies.

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::error::BoxError;
use crate::http::{HttpRequest, HttpResponse, ResponseBody};
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct FakeTransport {
    status: u16,
    body: Bytes,
    headers: Vec<(String, String)>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new(status: u16, body: &str, headers: &[(&str, &str)]) -> Self {
        Self {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Transport for FakeTransport {
    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.requests.lock().push(request);
        Ok(HttpResponse {
            status: self.status,
            headers: self.headers.clone(),
            body: ResponseBody::full(self.body.clone()),
        })
    }
}
