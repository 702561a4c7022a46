//! Metrics collection and exposition.
//!
//! # Metrics
//! - `docs_requests_total` (counter): documentation requests by endpoint
//! - `docs_document_builds_total` (counter): factory invocations by outcome
//! - `docs_document_build_seconds` (histogram): factory latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one request served by a documentation endpoint.
pub fn record_request(endpoint: &'static str) {
    metrics::counter!("docs_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record a document factory invocation.
pub fn record_document_build(outcome: &'static str, start: Instant) {
    metrics::counter!("docs_document_builds_total", "outcome" => outcome).increment(1);
    metrics::histogram!("docs_document_build_seconds").record(start.elapsed().as_secs_f64());
}
