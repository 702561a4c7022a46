//! Documentation routes served through the axum adapter.

use std::fs;

use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use docs_mount::config::HttpConfig;
use docs_mount::http::X_REQUEST_ID;
use docs_mount::{
    AxumAdapter, DocsServer, Document, DocumentSource, MountOptions, RegistrationError,
    SwaggerModule,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::{Layer, ServiceExt};
use tower_http::normalize_path::NormalizePathLayer;

mod common;

fn sample_document() -> Document {
    Document::new(json!({
        "openapi": "3.0.0",
        "info": { "title": "Cats", "version": "2.1" },
        "paths": {}
    }))
}

fn assets_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("swagger-ui.css"), "body { color: red; }").unwrap();
    fs::write(dir.path().join("swagger-ui-bundle.js"), "window.SwaggerUIBundle = {};").unwrap();
    dir
}

fn options_with_assets(dir: &tempfile::TempDir) -> MountOptions {
    MountOptions {
        custom_swagger_ui_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_documentation_routes_respond() {
    let assets = assets_dir();
    let mut adapter = AxumAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), options_with_assets(&assets))
        .unwrap();
    let router = adapter.into_router();

    let (status, content_type, body) = common::get(&router, "/docs").await;
    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("text/html"));
    assert!(body.contains("<title>Swagger UI</title>"));

    let (status, _, trailing) = common::get(&router, "/docs/").await;
    assert_eq!(status, 200);
    assert_eq!(trailing, body);

    for uri in ["/docs/swagger-ui-init.js", "/docs/docs/swagger-ui-init.js"] {
        let (status, content_type, script) = common::get(&router, uri).await;
        assert_eq!(status, 200, "{uri}");
        assert_eq!(content_type.as_deref(), Some("application/javascript"));
        assert!(script.contains("\"swaggerDoc\""), "{uri}");
    }

    let (status, content_type, body) = common::get(&router, "/docs-json").await;
    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let parsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["info"]["title"], "Cats");

    let (status, content_type, body) = common::get(&router, "/docs-yaml").await;
    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("text/yaml"));
    let parsed: Value = serde_yaml::from_str(&body).unwrap();
    assert_eq!(parsed["info"]["version"], "2.1");
}

#[tokio::test]
async fn test_static_assets_served_under_both_prefixes() {
    let assets = assets_dir();
    let mut adapter = AxumAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), options_with_assets(&assets))
        .unwrap();
    let router = adapter.into_router();

    for uri in ["/docs/swagger-ui.css", "/docs/docs/swagger-ui.css"] {
        let (status, _, body) = common::get(&router, uri).await;
        assert_eq!(status, 200, "{uri}");
        assert_eq!(body, "body { color: red; }");
    }

    let (status, _, _) = common::get(&router, "/docs/missing.css").await;
    assert_eq!(status, 404);

    let (status, _, _) = common::get(&router, "/docsx/swagger-ui.css").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_application_routes_coexist() {
    let assets = assets_dir();
    let mut adapter = AxumAdapter::new();
    adapter.route("/", get(|| async { "Hello World!" })).unwrap();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), options_with_assets(&assets))
        .unwrap();
    let router = adapter.into_router();

    let (status, _, body) = common::get(&router, "/").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Hello World!");
}

#[tokio::test]
async fn test_root_mount_under_global_prefix() {
    let assets = assets_dir();
    let mut adapter = AxumAdapter::new().with_global_prefix("/api");
    let options = MountOptions {
        use_global_prefix: true,
        ..options_with_assets(&assets)
    };
    let mounted = SwaggerModule::setup("/", &mut adapter, sample_document(), options).unwrap();
    assert_eq!(mounted.static_mounts, vec!["/api/".to_string()]);
    let router = adapter.into_router();

    let (status, content_type, _) = common::get(&router, "/api/").await;
    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("text/html"));

    let (status, _, _) = common::get(&router, "/api/-json").await;
    assert_eq!(status, 200);

    let (status, _, body) = common::get(&router, "/api/swagger-ui-bundle.js").await;
    assert_eq!(status, 200);
    assert!(body.contains("SwaggerUIBundle"));
}

#[tokio::test]
async fn test_ignore_trailing_slash_routes_through_normalization() {
    let assets = assets_dir();
    let mut adapter = AxumAdapter::new().ignore_trailing_slash(true);
    let mounted =
        SwaggerModule::setup("/swagger", &mut adapter, sample_document(), options_with_assets(&assets))
            .unwrap();
    assert_eq!(mounted.routes.collapsed, vec!["/swagger/".to_string()]);

    let app = NormalizePathLayer::trim_trailing_slash().layer(adapter.into_router());
    for uri in ["/swagger", "/swagger/"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200, "{uri}");
    }
}

#[tokio::test]
async fn test_failed_document_build_returns_server_error() {
    let source = DocumentSource::factory(|| Err("document scan failed".into()));
    let mut adapter = AxumAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, source, MountOptions::default()).unwrap();
    let router = adapter.into_router();

    let (status, content_type, body) = common::get(&router, "/docs-json").await;
    assert_eq!(status, 500);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(body.contains("document scan failed"));

    let (status, _, _) = common::get(&router, "/docs/swagger-ui-init.js").await;
    assert_eq!(status, 500);

    // The page itself does not need the document.
    let (status, _, _) = common::get(&router, "/docs").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_server_router_sets_request_id() {
    let mut adapter = AxumAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default())
        .unwrap();
    let server = DocsServer::new(adapter.into_router(), HttpConfig::default());

    let response = server
        .router()
        .oneshot(Request::builder().uri("/docs-json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().contains_key(X_REQUEST_ID));

    let response = server
        .router()
        .oneshot(
            Request::builder()
                .uri("/docs-json")
                .header(X_REQUEST_ID, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[X_REQUEST_ID], "abc-123");
}

#[test]
fn test_mount_over_application_route_fails() {
    let mut adapter = AxumAdapter::new();
    adapter.route("/docs-json", get(|| async { "{}" })).unwrap();
    let err = SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        docs_mount::DocsError::Registration(RegistrationError::DuplicateRoute { .. })
    ));
}
