//! API document handling.
//!
//! # Data Flow
//! ```text
//! DocumentSource (ready value or factory)
//!     → cache.rs (build once, memoize, per-request patch)
//!     → serialize.rs (JSON / YAML text, rebuilt on every request)
//! ```
//!
//! # Design Decisions
//! - The document is the JSON data model; producers convert into it once
//! - One cache per mounted document set, never a process-wide static
//! - Patched documents are request-scoped and never written back

pub mod builder;
pub mod cache;
pub mod model;
pub mod serialize;

pub use builder::DocumentBuilder;
pub use cache::DocumentCache;
pub use model::{load_document, Document, DocumentFactory, DocumentSource, PatchHook};
