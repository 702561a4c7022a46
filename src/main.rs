//! API documentation server.
//!
//! Serves a small application together with its API document and Swagger UI.
//!
//! # Architecture Overview
//!
//! ```text
//!     config.toml ──▶ config ──▶ ServerConfig
//!                                    │
//!                                    ▼
//!     document ──▶ DocumentSource ──▶ SwaggerModule::setup ──▶ AxumAdapter
//!     (file or builder, lazy)          │                          │
//!                                      ├─ paths (resolve)         ▼
//!                                      ├─ binder (GET routes)   axum Router
//!                                      └─ assets (UI bundle)      │
//!                                                                 ▼
//!                                                   DocsServer (layers, serve)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::routing::get;
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;

use docs_mount::config::{load_config, DocumentConfig, ServerConfig};
use docs_mount::document::load_document;
use docs_mount::http::server::shutdown_signal;
use docs_mount::observability::{logging, metrics};
use docs_mount::paths::{is_usable_global_prefix, validate_path};
use docs_mount::{AxumAdapter, DocsServer, DocumentBuilder, DocumentSource, SwaggerModule};

#[derive(Parser)]
#[command(name = "docs-server")]
#[command(about = "Serve an API document and Swagger UI", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);
    tracing::info!("docs-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        docs_path = %config.docs.path,
        global_prefix = %config.http.global_prefix,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let mut adapter = AxumAdapter::new()
        .with_global_prefix(config.http.global_prefix.clone())
        .ignore_trailing_slash(config.http.ignore_trailing_slash);
    adapter.route(&app_root(&config.http.global_prefix), get(hello))?;

    let mounted = SwaggerModule::setup(
        &config.docs.path,
        &mut adapter,
        document_source(config.document.clone()),
        config.docs.options.clone(),
    )?;
    tracing::info!(
        ui = %mounted.paths.final_path,
        json = %mounted.paths.json_path,
        yaml = %mounted.paths.yaml_path,
        "Documentation routes ready"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = DocsServer::new(adapter.into_router(), config.http.clone());
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn hello() -> &'static str {
    "Hello World!"
}

/// Root route of the application, under the global prefix when one is set.
fn app_root(global_prefix: &str) -> String {
    if is_usable_global_prefix(global_prefix) {
        let prefix = validate_path(global_prefix);
        let trimmed = prefix.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        "/".to_string()
    }
}

/// The served document, built on first request.
fn document_source(config: DocumentConfig) -> DocumentSource {
    DocumentSource::factory(move || {
        if let Some(path) = &config.source_path {
            return Ok(load_document(path)?);
        }

        let mut builder = DocumentBuilder::new()
            .title(config.title.clone())
            .description(config.description.clone())
            .version(config.version.clone());
        for server in &config.servers {
            builder = builder.server(server.clone(), None);
        }

        let mut paths = serde_json::Map::new();
        paths.insert(
            "/".to_string(),
            json!({
                "get": {
                    "operationId": "getHello",
                    "summary": "Hello World",
                    "responses": { "200": { "description": "" } }
                }
            }),
        );
        Ok(builder.merge_paths(paths).build())
    })
}
