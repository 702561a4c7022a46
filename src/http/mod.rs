//! HTTP adapter subsystem.
//!
//! # Data Flow
//! ```text
//! Route binder
//!     → adapter.rs (HttpAdapter: register_get / register_get_tolerant / mount_static)
//!     → axum_adapter.rs (concrete binding onto an axum Router)
//!     → static_files.rs (prefix-mounted asset directories)
//!     → server.rs (middleware layers, serve with graceful shutdown)
//!
//! Request time:
//!     axum route → RouteHandler(&Parts, &mut Reply) → response.rs → client
//! ```
//!
//! # Design Decisions
//! - The binder depends only on the `HttpAdapter` trait
//! - Duplicate GET declarations are reported as a typed error, never a panic
//! - Handlers are synchronous; they never block on I/O

pub mod adapter;
pub mod axum_adapter;
pub mod request;
pub mod response;
pub mod server;
pub mod static_files;

pub use adapter::{HttpAdapter, Registration, RouteHandler};
pub use axum_adapter::AxumAdapter;
pub use request::X_REQUEST_ID;
pub use response::Reply;
pub use server::DocsServer;
