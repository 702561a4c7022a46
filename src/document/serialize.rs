//! Text serialization of documents.
//!
//! Pure converters. Neither output is cached: handlers call these on every
//! request so a patched document is always reflected.

use crate::document::model::Document;
use crate::error::DocsError;

/// Compact JSON text.
pub fn to_json(document: &Document) -> Result<String, DocsError> {
    Ok(serde_json::to_string(document)?)
}

/// YAML text. Repeated subtrees are written out in full, never as anchors.
pub fn to_yaml(document: &Document) -> Result<String, DocsError> {
    Ok(serde_yaml::to_string(document)?)
}
