//! Mount an API description and a browsable UI onto an HTTP server.
//!
//! `SwaggerModule::setup` resolves the documentation paths, declares the UI
//! page, UI init script, JSON and YAML definition routes on an
//! [`http::HttpAdapter`], and mounts the UI static bundle. The document is
//! built lazily, once, and can be patched per request without touching the
//! cached copy.

pub mod config;
pub mod document;
pub mod error;
pub mod http;
pub mod mount;
pub mod observability;
pub mod paths;
pub mod ui;

pub use config::ServerConfig;
pub use document::{Document, DocumentBuilder, DocumentCache, DocumentSource, PatchHook};
pub use error::{BoxError, DocsError, RegistrationError};
pub use http::{AxumAdapter, DocsServer, HttpAdapter, Reply};
pub use mount::{Mounted, MountOptions, SwaggerModule};
pub use paths::ResolvedPaths;
