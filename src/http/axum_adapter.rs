//! `HttpAdapter` implementation on top of an axum `Router`.
//!
//! # Responsibilities
//! - Translate `RouteHandler`s into axum GET routes
//! - Track declared paths so duplicates surface as `DuplicateRoute`
//!   instead of axum's overlapping-route panic
//! - Reject documentation paths axum would refuse to declare literally
//! - Collect static mounts and install them as the router fallback
//!
//! # Design Decisions
//! - With `ignore_trailing_slash`, `/x/` and `/x` are one route key and
//!   routes are declared without the trailing slash; the server trims
//!   trailing slashes before routing

use std::collections::HashSet;
use std::path::Path;

use axum::extract::Request;
use axum::response::IntoResponse;
use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::error::RegistrationError;
use crate::http::adapter::{HttpAdapter, RouteHandler};
use crate::http::response::Reply;
use crate::http::static_files::{StaticMount, StaticMounts};

/// Mounts documentation routes onto an axum router.
#[derive(Debug, Default)]
pub struct AxumAdapter {
    router: Router,
    global_prefix: String,
    ignore_trailing_slash: bool,
    declared: HashSet<String>,
    static_mounts: Vec<StaticMount>,
}

impl AxumAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix reported to `setup` when `use_global_prefix` is set.
    pub fn with_global_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.global_prefix = prefix.into();
        self
    }

    /// Treat `/x/` and `/x` as the same route.
    pub fn ignore_trailing_slash(mut self, ignore: bool) -> Self {
        self.ignore_trailing_slash = ignore;
        self
    }

    pub fn ignores_trailing_slash(&self) -> bool {
        self.ignore_trailing_slash
    }

    /// Declare an application route. The path is claimed for every method,
    /// so documentation routes cannot later be declared on it. Unlike
    /// documentation routes it may capture parameters (`/users/{id}`).
    pub fn route(
        &mut self,
        path: &str,
        method_router: MethodRouter,
    ) -> Result<(), RegistrationError> {
        check_route_syntax(path)?;
        let key = self.claim(path)?;
        self.router = std::mem::take(&mut self.router).route(&key, method_router);
        Ok(())
    }

    /// Finish registration and return the router.
    pub fn into_router(self) -> Router {
        if self.static_mounts.is_empty() {
            return self.router;
        }
        let mounts = StaticMounts::new(self.static_mounts);
        self.router
            .fallback(move |request: Request| mounts.clone().serve(request))
    }

    fn route_key(&self, path: &str) -> String {
        if self.ignore_trailing_slash && path.len() > 1 {
            let trimmed = path.trim_end_matches('/');
            if trimmed.is_empty() {
                "/".to_string()
            } else {
                trimmed.to_string()
            }
        } else {
            path.to_string()
        }
    }

    fn claim(&mut self, path: &str) -> Result<String, RegistrationError> {
        let key = self.route_key(path);
        if !self.declared.insert(key.clone()) {
            return Err(RegistrationError::DuplicateRoute {
                path: path.to_string(),
            });
        }
        Ok(key)
    }
}

impl HttpAdapter for AxumAdapter {
    fn kind(&self) -> &'static str {
        "axum"
    }

    fn global_prefix(&self) -> &str {
        &self.global_prefix
    }

    fn register_get(&mut self, path: &str, handler: RouteHandler) -> Result<(), RegistrationError> {
        check_path(path)?;
        let key = self.claim(path)?;
        tracing::trace!(path = %key, "Declaring GET route");
        self.router = std::mem::take(&mut self.router).route(&key, get_handler(handler));
        Ok(())
    }

    fn mount_static(&mut self, prefix: &str, dir: &Path) -> Result<(), RegistrationError> {
        check_path(prefix)?;
        if self.static_mounts.iter().any(|m| m.prefix == prefix) {
            return Err(RegistrationError::Adapter {
                adapter: self.kind(),
                path: prefix.to_string(),
                message: "static assets already mounted at this prefix".to_string(),
            });
        }
        self.static_mounts.push(StaticMount {
            prefix: prefix.to_string(),
            dir: dir.to_path_buf(),
        });
        Ok(())
    }
}

fn get_handler(handler: RouteHandler) -> MethodRouter {
    get(move |request: Request| async move {
        let (parts, _body) = request.into_parts();
        let mut reply = Reply::new();
        match handler(&parts, &mut reply) {
            Ok(()) => reply.into_response(),
            Err(e) => reply.into_error_response(&e),
        }
    })
}

fn invalid_path(path: &str, reason: &'static str) -> Result<(), RegistrationError> {
    Err(RegistrationError::InvalidPath {
        path: path.to_string(),
        reason,
    })
}

/// Reject paths axum 0.8 panics on. `{param}` captures are allowed.
fn check_route_syntax(path: &str) -> Result<(), RegistrationError> {
    if !path.starts_with('/') {
        return invalid_path(path, "must start with '/'");
    }
    if path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return invalid_path(path, "segments must not start with ':' or '*'");
    }
    Ok(())
}

/// Reject paths axum cannot declare as literal routes.
fn check_path(path: &str) -> Result<(), RegistrationError> {
    check_route_syntax(path)?;
    if path.contains('{') || path.contains('}') {
        return invalid_path(path, "must not contain route parameters");
    }
    Ok(())
}
