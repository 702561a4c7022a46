//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the config file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mount::MountOptions;

/// Root configuration for the documentation server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Router behaviour shared by application and documentation routes.
    pub http: HttpConfig,

    /// Where and how the documentation is mounted.
    pub docs: DocsConfig,

    /// Where the API document comes from.
    pub document: DocumentConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// HTTP router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Application-wide route prefix (e.g., "/api").
    pub global_prefix: String,

    /// Treat `/path/` and `/path` as the same route.
    pub ignore_trailing_slash: bool,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            global_prefix: String::new(),
            ignore_trailing_slash: false,
            request_timeout_secs: 30,
        }
    }
}

/// Documentation mount configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Path the UI is mounted under.
    pub path: String,

    #[serde(flatten)]
    pub options: MountOptions,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "/swagger".to_string(),
            options: MountOptions::default(),
        }
    }
}

/// Source of the served API document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// JSON or YAML file to serve. When unset, a skeleton is built from the
    /// fields below.
    pub source_path: Option<PathBuf>,

    pub title: String,

    pub description: String,

    pub version: String,

    /// Server URLs listed in the document.
    pub servers: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            source_path: None,
            title: "API".to_string(),
            description: String::new(),
            version: "1.0".to_string(),
            servers: Vec::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
