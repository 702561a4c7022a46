//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Reject documentation paths the router cannot declare literally
//! - Detect JSON and YAML definitions configured onto the same URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check the configuration, returning every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "http.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    let options = &config.docs.options;
    let route_fields = [
        ("docs.path", Some(config.docs.path.as_str())),
        ("http.global_prefix", Some(config.http.global_prefix.as_str())),
        ("docs.json_document_url", options.json_document_url.as_deref()),
        ("docs.yaml_document_url", options.yaml_document_url.as_deref()),
    ];
    for (field, value) in route_fields {
        if let Some(value) = value {
            if value.contains(['{', '}', '*', ':']) {
                errors.push(ValidationError::new(
                    field,
                    format!("'{}' must be a literal path", value),
                ));
            }
        }
    }

    if let (Some(json), Some(yaml)) = (&options.json_document_url, &options.yaml_document_url) {
        if json == yaml {
            errors.push(ValidationError::new(
                "docs.yaml_document_url",
                "must differ from docs.json_document_url",
            ));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
