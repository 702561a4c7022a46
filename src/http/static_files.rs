//! Prefix-mounted static asset directories.
//!
//! # Responsibilities
//! - Match a request path against the mounted prefixes (longest first)
//! - Strip the prefix and serve the remainder from the mount's directory
//!
//! # Design Decisions
//! - Installed as the router fallback, so declared routes always win and
//!   a mount may share its prefix with a page route
//! - Prefix match is segment-aware: `/docs` serves `/docs/x`, never `/docsx`

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// A directory served under a route prefix.
#[derive(Debug, Clone)]
pub struct StaticMount {
    pub prefix: String,
    pub dir: PathBuf,
}

/// All static mounts of one router.
#[derive(Debug, Clone, Default)]
pub struct StaticMounts {
    mounts: Arc<Vec<StaticMount>>,
}

impl StaticMounts {
    pub fn new(mut mounts: Vec<StaticMount>) -> Self {
        mounts.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self {
            mounts: Arc::new(mounts),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// Longest mount whose prefix covers `path`, with the remaining path.
    pub fn find<'a>(&self, path: &'a str) -> Option<(&StaticMount, &'a str)> {
        self.mounts
            .iter()
            .find_map(|mount| strip_mount_prefix(&mount.prefix, path).map(|rest| (mount, rest)))
    }

    /// Serve `request` from the matching mount, or 404.
    pub async fn serve(self, mut request: Request) -> Response {
        let path = request.uri().path().to_string();
        let Some((mount, rest)) = self.find(&path) else {
            return StatusCode::NOT_FOUND.into_response();
        };

        let path_and_query = match request.uri().query() {
            Some(query) => format!("{}?{}", rest, query),
            None => rest.to_string(),
        };
        let uri: Uri = match path_and_query.parse() {
            Ok(uri) => uri,
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        };
        *request.uri_mut() = uri;

        tracing::trace!(prefix = %mount.prefix, path = %path, "Serving static asset");

        match ServeDir::new(&mount.dir).oneshot(request).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        }
    }
}

/// Remaining path when `path` lies under `prefix`. The remainder always
/// starts with `/`.
fn strip_mount_prefix<'a>(prefix: &str, path: &'a str) -> Option<&'a str> {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(trimmed)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
