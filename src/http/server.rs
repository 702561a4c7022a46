//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the mounted router with middleware (request id, tracing, timeout)
//! - Trim trailing slashes before routing when the adapter ignores them
//! - Serve on a listener until the shutdown future resolves

use std::future::Future;
use std::time::Duration;

use axum::extract::Request;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::HttpConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};

/// HTTP server hosting the application and its documentation routes.
pub struct DocsServer {
    router: Router,
    config: HttpConfig,
}

impl DocsServer {
    /// Wrap a router produced by `AxumAdapter::into_router`.
    pub fn new(router: Router, config: HttpConfig) -> Self {
        let router = Self::build_router(router, &config);
        Self { router, config }
    }

    /// Apply the middleware stack. The request id is set outermost so the
    /// trace span and the response both carry it.
    #[allow(deprecated)]
    fn build_router(router: Router, config: &HttpConfig) -> Router {
        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The layered router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            ignore_trailing_slash = self.config.ignore_trailing_slash,
            "HTTP server starting"
        );

        if self.config.ignore_trailing_slash {
            let app = NormalizePathLayer::trim_trailing_slash().layer(self.router);
            axum::serve(listener, axum::ServiceExt::<Request>::into_make_service(app))
                .with_graceful_shutdown(shutdown)
                .await?;
        } else {
            axum::serve(listener, self.router)
                .with_graceful_shutdown(shutdown)
                .await?;
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
