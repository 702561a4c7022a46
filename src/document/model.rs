//! Document value, document sources and the per-request patch hook.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use axum::http::request::Parts;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BoxError, DocsError};
use crate::http::Reply;

/// An API description, held as a JSON value. Object keys keep the order
/// they were inserted or loaded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Value);

impl Document {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Convert any serializable description (e.g. a typed OpenAPI model).
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, DocsError> {
        Ok(Self(serde_json::to_value(value)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Builds the document on first use.
pub type DocumentFactory = Box<dyn Fn() -> Result<Document, BoxError> + Send + Sync>;

/// A ready document or a factory producing one.
pub enum DocumentSource {
    Ready(Arc<Document>),
    Factory(DocumentFactory),
}

impl DocumentSource {
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Document, BoxError> + Send + Sync + 'static,
    {
        DocumentSource::Factory(Box::new(factory))
    }
}

impl From<Document> for DocumentSource {
    fn from(document: Document) -> Self {
        DocumentSource::Ready(Arc::new(document))
    }
}

impl From<Arc<Document>> for DocumentSource {
    fn from(document: Arc<Document>) -> Self {
        DocumentSource::Ready(document)
    }
}

impl From<Value> for DocumentSource {
    fn from(value: Value) -> Self {
        Document::new(value).into()
    }
}

impl fmt::Debug for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Ready(_) => f.write_str("DocumentSource::Ready"),
            DocumentSource::Factory(_) => f.write_str("DocumentSource::Factory"),
        }
    }
}

type PatchFn = dyn Fn(&Parts, &mut Reply, &Document) -> Result<Document, BoxError> + Send + Sync;

/// Per-request document transform, applied before serialization or
/// init-script generation. Its output is never cached.
#[derive(Clone)]
pub struct PatchHook(Arc<PatchFn>);

impl PatchHook {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&Parts, &mut Reply, &Document) -> Result<Document, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    pub fn apply(
        &self,
        request: &Parts,
        reply: &mut Reply,
        document: &Document,
    ) -> Result<Document, DocsError> {
        (self.0)(request, reply, document).map_err(DocsError::DocumentBuild)
    }
}

impl fmt::Debug for PatchHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PatchHook")
    }
}

/// Load a document from a `.json`, `.yaml` or `.yml` file.
pub fn load_document(path: &Path) -> Result<Document, DocsError> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let value: Value = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    tracing::debug!(path = %path.display(), yaml = is_yaml, "Document loaded from file");
    Ok(Document(value))
}
