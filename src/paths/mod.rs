//! Path resolution for the documentation routes.
//!
//! # Data Flow
//! ```text
//! MountRequest (requested path, global prefix, overrides)
//!     → normalize.rs (leading slash, collapse repeated slashes)
//!     → resolver.rs (final path, last segment, json/yaml/static paths)
//!     → ResolvedPaths (pure value, handed to the route binder)
//! ```
//!
//! # Design Decisions
//! - No side effects: identical inputs always resolve identically
//! - Every path is normalized before it reaches an adapter
//! - The static slash variant collapses onto the primary mount when the last
//!   segment is empty, so the same prefix is never mounted twice

pub mod normalize;
pub mod resolver;

pub use normalize::{is_usable_global_prefix, normalize_rel_path, validate_path};
pub use resolver::{resolve, MountRequest, ResolvedPaths};
