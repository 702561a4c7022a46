//! Lazy, memoized document construction.
//!
//! # Responsibilities
//! - Build the document at most once per cache, on first use
//! - Hand out the cached document by identity (`Arc`) afterwards
//! - Apply the per-request patch hook without touching the cached value
//! - Memoize the rendered UI page and the un-patched init script
//!
//! # Design Decisions
//! - `OnceLock` fast path, `Mutex` around the build so concurrent first
//!   requests cannot invoke the factory twice
//! - A failed build stores nothing; the next request tries again

use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

use axum::http::request::Parts;

use crate::document::model::{Document, DocumentSource, PatchHook};
use crate::error::DocsError;
use crate::http::Reply;
use crate::observability::metrics;

/// Memoizes one document and the UI text derived from it.
pub struct DocumentCache {
    source: DocumentSource,
    patch_hook: Option<PatchHook>,
    document: OnceLock<Arc<Document>>,
    build_lock: Mutex<()>,
    page_html: OnceLock<String>,
    init_script: OnceLock<String>,
    init_script_lock: Mutex<()>,
}

impl DocumentCache {
    pub fn new(source: DocumentSource, patch_hook: Option<PatchHook>) -> Self {
        Self {
            source,
            patch_hook,
            document: OnceLock::new(),
            build_lock: Mutex::new(()),
            page_html: OnceLock::new(),
            init_script: OnceLock::new(),
            init_script_lock: Mutex::new(()),
        }
    }

    /// Whether responses depend on the request.
    pub fn has_patch_hook(&self) -> bool {
        self.patch_hook.is_some()
    }

    /// The cached document, building it on first call.
    pub fn get(&self) -> Result<Arc<Document>, DocsError> {
        try_init_once(&self.document, &self.build_lock, || self.build()).cloned()
    }

    /// The document as seen by one request: the hook's output when a hook is
    /// configured, otherwise the cached document itself.
    pub fn get_patched(
        &self,
        request: &Parts,
        reply: &mut Reply,
    ) -> Result<Arc<Document>, DocsError> {
        let document = self.get()?;
        match &self.patch_hook {
            Some(hook) => Ok(Arc::new(hook.apply(request, reply, &document)?)),
            None => Ok(document),
        }
    }

    /// The UI page, rendered on first call.
    pub fn page_html(&self, render: impl FnOnce() -> String) -> &str {
        self.page_html.get_or_init(|| {
            tracing::debug!("Rendering UI page");
            render()
        })
    }

    /// The init script for the un-patched document, rendered on first call.
    pub fn init_script(
        &self,
        render: impl FnOnce(&Document) -> Result<String, DocsError>,
    ) -> Result<&str, DocsError> {
        let script = try_init_once(&self.init_script, &self.init_script_lock, || {
            let document = self.get()?;
            tracing::debug!("Rendering UI init script");
            render(&document)
        })?;
        Ok(script.as_str())
    }

    fn build(&self) -> Result<Arc<Document>, DocsError> {
        let factory = match &self.source {
            DocumentSource::Ready(document) => return Ok(Arc::clone(document)),
            DocumentSource::Factory(factory) => factory,
        };

        let start = Instant::now();
        match factory() {
            Ok(document) => {
                metrics::record_document_build("success", start);
                tracing::info!(elapsed = ?start.elapsed(), "Document built");
                Ok(Arc::new(document))
            }
            Err(e) => {
                metrics::record_document_build("error", start);
                tracing::error!(error = %e, "Document factory failed");
                Err(DocsError::DocumentBuild(e))
            }
        }
    }
}

impl std::fmt::Debug for DocumentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCache")
            .field("source", &self.source)
            .field("built", &self.document.get().is_some())
            .field("has_patch_hook", &self.has_patch_hook())
            .finish()
    }
}

/// Fallible once-only initialization of `cell`, serialized by `lock`.
fn try_init_once<'a, T, E>(
    cell: &'a OnceLock<T>,
    lock: &Mutex<()>,
    init: impl FnOnce() -> Result<T, E>,
) -> Result<&'a T, E> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}
