//! The HTTP adapter binding the route binder is written against.

use std::path::Path;
use std::sync::Arc;

use axum::http::request::Parts;

use crate::error::{DocsError, RegistrationError};
use crate::http::response::Reply;

/// A GET handler: reads the request head, fills in the reply.
pub type RouteHandler = Arc<dyn Fn(&Parts, &mut Reply) -> Result<(), DocsError> + Send + Sync>;

/// Outcome of a duplicate-tolerant registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// The path collapsed onto an existing declaration; nothing was added.
    AlreadyDeclared,
}

/// Capability the documentation routes are mounted through.
pub trait HttpAdapter {
    /// Short adapter name for logs and errors.
    fn kind(&self) -> &'static str;

    /// Application-wide route prefix, empty when none is configured.
    fn global_prefix(&self) -> &str;

    /// Declare a GET route. Fails with `DuplicateRoute` if the adapter already
    /// serves GET on a path it considers identical.
    fn register_get(&mut self, path: &str, handler: RouteHandler) -> Result<(), RegistrationError>;

    /// Declare a GET route, treating a duplicate declaration as a no-op.
    /// Any other failure is returned.
    fn register_get_tolerant(
        &mut self,
        path: &str,
        handler: RouteHandler,
    ) -> Result<Registration, RegistrationError> {
        match self.register_get(path, handler) {
            Ok(()) => Ok(Registration::Registered),
            Err(e) if e.is_duplicate_route() => Ok(Registration::AlreadyDeclared),
            Err(e) => Err(e),
        }
    }

    /// Serve files from `dir` under `prefix`.
    fn mount_static(&mut self, prefix: &str, dir: &Path) -> Result<(), RegistrationError>;
}
