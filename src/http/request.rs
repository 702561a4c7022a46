//! Request identification.
//!
//! # Responsibilities
//! - Assign an `x-request-id` to every request that lacks one
//! - Echo the id back on the response
//!
//! # Design Decisions
//! - The id is added before tracing so spans carry it

use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const X_REQUEST_ID: &str = "x-request-id";

fn header_name() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Generates a UUID v4 id for requests that arrive without one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(header_name(), MakeRequestUuid)
}

/// Copies the request id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(header_name())
}
