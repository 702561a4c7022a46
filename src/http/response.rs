//! Response head and body filled in by route handlers.
//!
//! # Responsibilities
//! - Collect status, headers and body set by a handler
//! - Convert into an axum response
//! - Map handler failures to HTTP 500 while keeping headers already set

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::DocsError;

pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_HTML: &str = "text/html";
pub const TEXT_YAML: &str = "text/yaml";

/// Mutable response a handler writes into.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Default for Reply {
    fn default() -> Self {
        Self::new()
    }
}

impl Reply {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub fn set_content_type(&mut self, content_type: &'static str) {
        self.set_header(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    /// Set body, keep the current status.
    pub fn send(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Set body and status.
    pub fn reply(&mut self, body: impl Into<String>, status: StatusCode) {
        self.body = body.into();
        self.status = status;
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// 500 response for a failed handler. Headers the handler already set
    /// (notably the content type) are kept.
    pub fn into_error_response(self, error: &DocsError) -> Response {
        tracing::error!(error = %error, "Documentation handler failed");
        let mut response = Response::new(Body::from(error.to_string()));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        *response.headers_mut() = self.headers;
        response
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
