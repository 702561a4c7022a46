//! Error types shared by the mounting layer.
//!
//! # Taxonomy
//! - `RegistrationError::DuplicateRoute` is the only registration failure the
//!   route binder ever swallows, and only on the slash-variant routes.
//! - Every other `RegistrationError` aborts `setup`.
//! - `DocsError::DocumentBuild`, `DocsError::Json` and `DocsError::Yaml` surface from
//!   request handlers and become whatever the hosting server renders for a
//!   failed handler (HTTP 500 with the axum adapter).

use thiserror::Error;

/// Boxed error returned by document factories and patch hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by an HTTP adapter while declaring routes or mounts.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A GET handler is already declared for this path.
    #[error("Method 'GET' already declared for route '{path}'")]
    DuplicateRoute { path: String },

    /// The adapter cannot express this path.
    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Any other adapter-specific rejection.
    #[error("Adapter '{adapter}' rejected '{path}': {message}")]
    Adapter {
        adapter: &'static str,
        path: String,
        message: String,
    },
}

impl RegistrationError {
    /// True for the collision the binder tolerates on slash-variant routes.
    pub fn is_duplicate_route(&self) -> bool {
        matches!(self, RegistrationError::DuplicateRoute { .. })
    }
}

/// Errors surfaced by `setup` and by the mounted handlers.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Route or static mount could not be declared.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// The document factory or the per-request patch hook failed.
    #[error("Document build failed: {0}")]
    DocumentBuild(#[source] BoxError),

    /// The document could not be written as JSON.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The document could not be written as YAML.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Filesystem access failed (asset path resolution, document files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
