//! In-memory `Transport` for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Serves canned responses keyed by request path and records every call.
/// Paths with no canned response fail as a reset connection.
#[derive(Default)]
pub struct StubTransport {
    responses: HashMap<String, HttpResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.with_response(path, 200, &body.to_string())
    }

    pub fn with_response(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            HttpResponse {
                status,
                reason: (if status == 200 { "OK" } else { "" }).to_string(),
                headers: vec![(
                    "content-type".to_string(),
                    "application/json; charset=utf-8".to_string(),
                )],
                body: body.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.calls.lock().unwrap().push(request.path.clone());
        self.responses
            .get(&request.path)
            .cloned()
            .ok_or_else(|| ApiError::Transport("connection reset by peer".to_string()))
    }
}
