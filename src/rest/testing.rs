//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Answers requests from a fixed route table and records every request.
///
/// Routes are keyed by method and path (query parameters are ignored).
/// Unknown routes answer 404.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    routes: HashMap<String, (u16, Value)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, method: HttpMethod, path: &str, code: u16, body: Value) -> Self {
        self.routes.insert(Self::key(method, path), (code, body));
        self
    }

    pub(crate) fn get(self, path: &str, body: Value) -> Self {
        self.route(HttpMethod::Get, path, 200, body)
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.path)
            .collect()
    }

    fn key(method: HttpMethod, path: &str) -> String {
        format!("{method} {path}")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let (code, body) = self
            .routes
            .get(&Self::key(request.http_method, &request.path))
            .cloned()
            .unwrap_or((404, serde_json::json!({})));

        self.requests.lock().unwrap().push(request);

        let status_text = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default();

        Ok(HttpResponse::new(code, status_text, body))
    }
}
