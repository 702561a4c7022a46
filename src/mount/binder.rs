//! Registration of the documentation routes.
//!
//! # Routes
//! - `{final}/swagger-ui-init.js` and `{final}/{last}/swagger-ui-init.js` (UI only)
//! - `{final}` and `{final}/` (UI only)
//! - JSON and YAML definitions (always)
//!
//! The two slash variants go through `register_get_tolerant`: they collapse
//! onto the primary route when the last segment is empty or when the adapter
//! ignores trailing slashes. Every other registration failure is returned.

use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::StatusCode;

use crate::document::{serialize, Document, DocumentCache};
use crate::error::DocsError;
use crate::http::response::{APPLICATION_JAVASCRIPT, APPLICATION_JSON, TEXT_HTML, TEXT_YAML};
use crate::http::{HttpAdapter, Registration, Reply, RouteHandler};
use crate::observability::metrics;
use crate::paths::ResolvedPaths;
use crate::ui::{UiOptions, UiRenderer};

/// Paths declared by one `bind` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundRoutes {
    /// Newly declared GET routes, in registration order.
    pub registered: Vec<String>,
    /// Slash variants that collapsed onto an existing route.
    pub collapsed: Vec<String>,
}

/// Declares the documentation routes against an adapter.
pub struct RouteBinder {
    cache: Arc<DocumentCache>,
    renderer: Arc<dyn UiRenderer>,
    ui: Arc<UiOptions>,
}

impl RouteBinder {
    pub fn new(cache: Arc<DocumentCache>, renderer: Arc<dyn UiRenderer>, ui: UiOptions) -> Self {
        Self {
            cache,
            renderer,
            ui: Arc::new(ui),
        }
    }

    pub fn cache(&self) -> &Arc<DocumentCache> {
        &self.cache
    }

    pub fn bind<A: HttpAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        paths: &ResolvedPaths,
        ui_enabled: bool,
    ) -> Result<BoundRoutes, DocsError> {
        let mut bound = BoundRoutes::default();
        if ui_enabled {
            self.bind_ui(adapter, paths, &mut bound)?;
        }
        self.bind_definitions(adapter, paths, &mut bound)?;
        Ok(bound)
    }

    fn bind_ui<A: HttpAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        paths: &ResolvedPaths,
        bound: &mut BoundRoutes,
    ) -> Result<(), DocsError> {
        let init_script = self.init_script_handler();
        register(adapter, &paths.init_script_path(), init_script.clone(), bound)?;
        // Relative asset URLs resolve one level deeper when the page URL ends with '/'.
        register_tolerant(adapter, &paths.init_script_slash_variant(), init_script, bound)?;

        let page = self.page_handler(paths.ui_base_url());
        register(adapter, paths.page_path(), page.clone(), bound)?;
        register_tolerant(adapter, &paths.page_slash_variant(), page, bound)?;
        Ok(())
    }

    fn bind_definitions<A: HttpAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        paths: &ResolvedPaths,
        bound: &mut BoundRoutes,
    ) -> Result<(), DocsError> {
        let json = self.definition_handler("json", APPLICATION_JSON, serialize::to_json);
        register(adapter, &paths.json_path, json, bound)?;

        let yaml = self.definition_handler("yaml", TEXT_YAML, serialize::to_yaml);
        register(adapter, &paths.yaml_path, yaml, bound)?;
        Ok(())
    }

    fn init_script_handler(&self) -> RouteHandler {
        let cache = Arc::clone(&self.cache);
        let renderer = Arc::clone(&self.renderer);
        let ui = Arc::clone(&self.ui);

        Arc::new(move |request: &Parts, reply: &mut Reply| -> Result<(), DocsError> {
            reply.set_content_type(APPLICATION_JAVASCRIPT);
            metrics::record_request("init_script");

            if cache.has_patch_hook() {
                let document = cache.get_patched(request, reply)?;
                let script = renderer.render_init_script(&document, &ui)?;
                reply.reply(script, StatusCode::OK);
            } else {
                let script =
                    cache.init_script(|document| renderer.render_init_script(document, &ui))?;
                reply.reply(script, StatusCode::OK);
            }
            Ok(())
        })
    }

    fn page_handler(&self, base_url: String) -> RouteHandler {
        let cache = Arc::clone(&self.cache);
        let renderer = Arc::clone(&self.renderer);
        let ui = Arc::clone(&self.ui);

        Arc::new(move |_: &Parts, reply: &mut Reply| -> Result<(), DocsError> {
            reply.set_content_type(TEXT_HTML);
            metrics::record_request("page");

            let html = cache.page_html(|| renderer.render_page(&base_url, &ui));
            reply.reply(html, StatusCode::OK);
            Ok(())
        })
    }

    fn definition_handler(
        &self,
        endpoint: &'static str,
        content_type: &'static str,
        to_text: fn(&Document) -> Result<String, DocsError>,
    ) -> RouteHandler {
        let cache = Arc::clone(&self.cache);

        Arc::new(move |request: &Parts, reply: &mut Reply| -> Result<(), DocsError> {
            reply.set_content_type(content_type);
            metrics::record_request(endpoint);

            let document = cache.get_patched(request, reply)?;
            reply.send(to_text(&document)?);
            Ok(())
        })
    }
}

fn register<A: HttpAdapter + ?Sized>(
    adapter: &mut A,
    path: &str,
    handler: RouteHandler,
    bound: &mut BoundRoutes,
) -> Result<(), DocsError> {
    adapter.register_get(path, handler)?;
    tracing::debug!(adapter = adapter.kind(), path = %path, "Route registered");
    bound.registered.push(path.to_string());
    Ok(())
}

fn register_tolerant<A: HttpAdapter + ?Sized>(
    adapter: &mut A,
    path: &str,
    handler: RouteHandler,
    bound: &mut BoundRoutes,
) -> Result<(), DocsError> {
    match adapter.register_get_tolerant(path, handler)? {
        Registration::Registered => {
            tracing::debug!(adapter = adapter.kind(), path = %path, "Route registered");
            bound.registered.push(path.to_string());
        }
        Registration::AlreadyDeclared => {
            tracing::debug!(
                adapter = adapter.kind(),
                path = %path,
                "Slash variant already declared, skipped"
            );
            bound.collapsed.push(path.to_string());
        }
    }
    Ok(())
}
