//! Documentation mounting entry point.
//!
//! # Data Flow
//! ```text
//! setup(path, adapter, document, options)
//!     → paths::resolve (final path, last segment, definition paths)
//!     → binder.rs (UI page, init script, JSON, YAML routes)
//!     → assets.rs (UI bundle at one or two prefixes, UI enabled only)
//!     → Mounted (resolved paths, declared routes, document cache)
//! ```
//!
//! # Design Decisions
//! - One `DocumentCache` per `setup` call; mounts never share state
//! - Registration happens at boot, so any failure aborts startup

pub mod assets;
pub mod binder;
pub mod options;

use std::sync::Arc;

pub use assets::StaticAssetMounter;
pub use binder::{BoundRoutes, RouteBinder};
pub use options::MountOptions;

use crate::document::{DocumentCache, DocumentSource};
use crate::error::DocsError;
use crate::http::HttpAdapter;
use crate::paths::{resolve, MountRequest, ResolvedPaths};
use crate::ui::{SwaggerUiRenderer, UiRenderer};

/// Result of a successful `setup`.
#[derive(Debug)]
pub struct Mounted {
    pub paths: ResolvedPaths,
    pub routes: BoundRoutes,
    /// Static prefixes the UI bundle was mounted under.
    pub static_mounts: Vec<String>,
    /// Cache behind the mounted handlers; `get()` builds the document eagerly.
    pub cache: Arc<DocumentCache>,
}

/// Mounts an API document and its UI onto an HTTP adapter.
pub struct SwaggerModule;

impl SwaggerModule {
    /// Mount with the stock Swagger UI renderer.
    pub fn setup<A: HttpAdapter + ?Sized>(
        path: &str,
        adapter: &mut A,
        document: impl Into<DocumentSource>,
        options: MountOptions,
    ) -> Result<Mounted, DocsError> {
        Self::setup_with_renderer(path, adapter, document, options, Arc::new(SwaggerUiRenderer))
    }

    pub fn setup_with_renderer<A: HttpAdapter + ?Sized>(
        path: &str,
        adapter: &mut A,
        document: impl Into<DocumentSource>,
        options: MountOptions,
        renderer: Arc<dyn UiRenderer>,
    ) -> Result<Mounted, DocsError> {
        let paths = resolve(&MountRequest {
            requested_path: path,
            global_prefix: adapter.global_prefix(),
            use_global_prefix: options.use_global_prefix,
            json_document_url: options.json_document_url.as_deref(),
            yaml_document_url: options.yaml_document_url.as_deref(),
        });

        let MountOptions {
            swagger_ui_enabled,
            custom_swagger_ui_path,
            ui,
            patch_document_on_request,
            ..
        } = options;

        let cache = Arc::new(DocumentCache::new(document.into(), patch_document_on_request));
        let binder = RouteBinder::new(Arc::clone(&cache), renderer, ui);
        let routes = binder.bind(adapter, &paths, swagger_ui_enabled)?;

        let mut static_mounts = Vec::new();
        if swagger_ui_enabled {
            let assets = StaticAssetMounter::new(custom_swagger_ui_path.as_deref())?;
            for prefix in paths.static_mounts() {
                assets.mount(adapter, prefix)?;
                static_mounts.push(prefix.to_string());
            }
        }

        tracing::info!(
            adapter = adapter.kind(),
            path = %paths.final_path,
            json = %paths.json_path,
            yaml = %paths.yaml_path,
            ui_enabled = swagger_ui_enabled,
            routes = routes.registered.len(),
            "API documentation mounted"
        );

        Ok(Mounted {
            paths,
            routes,
            static_mounts,
            cache,
        })
    }
}
