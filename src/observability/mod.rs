//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Mounting and handlers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, endpoint, elapsed)
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
