//! Shared utilities for integration tests.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use docs_mount::http::{HttpAdapter, Reply, RouteHandler};
use docs_mount::RegistrationError;
use tower::ServiceExt;

/// Adapter that records declarations instead of serving them.
#[derive(Default)]
pub struct RecordingAdapter {
    pub global_prefix: String,
    /// Treat `/x/` and `/x` as the same route, like a router that ignores
    /// trailing slashes.
    pub collapse_trailing_slash: bool,
    /// Reject this path with an adapter error.
    pub fail_on: Option<String>,
    pub routes: Vec<(String, RouteHandler)>,
    pub statics: Vec<(String, PathBuf)>,
}

#[allow(dead_code)]
impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_global_prefix(prefix: &str) -> Self {
        Self {
            global_prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    pub fn paths(&self) -> Vec<&str> {
        self.routes.iter().map(|(path, _)| path.as_str()).collect()
    }

    pub fn static_prefixes(&self) -> Vec<&str> {
        self.statics.iter().map(|(prefix, _)| prefix.as_str()).collect()
    }

    /// Invoke the handler declared at `path` as a GET request.
    pub fn call(&self, path: &str) -> Reply {
        self.call_with(Request::builder().uri(path).body(()).unwrap())
    }

    pub fn call_with(&self, request: Request<()>) -> Reply {
        let path = request.uri().path().to_string();
        let (_, handler) = self
            .routes
            .iter()
            .find(|(p, _)| *p == path)
            .unwrap_or_else(|| panic!("no route declared at {path}"));
        let (parts, _) = request.into_parts();
        let mut reply = Reply::new();
        handler(&parts, &mut reply).unwrap();
        reply
    }

    fn key(&self, path: &str) -> String {
        if self.collapse_trailing_slash && path.len() > 1 {
            path.trim_end_matches('/').to_string()
        } else {
            path.to_string()
        }
    }
}

impl HttpAdapter for RecordingAdapter {
    fn kind(&self) -> &'static str {
        "recording"
    }

    fn global_prefix(&self) -> &str {
        &self.global_prefix
    }

    fn register_get(&mut self, path: &str, handler: RouteHandler) -> Result<(), RegistrationError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(RegistrationError::Adapter {
                adapter: "recording",
                path: path.to_string(),
                message: "rejected by test".to_string(),
            });
        }
        let key = self.key(path);
        if self.routes.iter().any(|(p, _)| self.key(p) == key) {
            return Err(RegistrationError::DuplicateRoute {
                path: path.to_string(),
            });
        }
        self.routes.push((path.to_string(), handler));
        Ok(())
    }

    fn mount_static(&mut self, prefix: &str, dir: &Path) -> Result<(), RegistrationError> {
        self.statics.push((prefix.to_string(), dir.to_path_buf()));
        Ok(())
    }
}

/// Send a GET through `router` and return status, content type and body.
#[allow(dead_code)]
pub async fn get(router: &Router, uri: &str) -> (u16, Option<String>, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}
