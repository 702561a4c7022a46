//! Route mounting through a recording adapter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::Request;
use docs_mount::document::{load_document, serialize};
use docs_mount::ui::{UiOptions, UiRenderer};
use docs_mount::{
    DocsError, Document, DocumentSource, MountOptions, PatchHook, RegistrationError, SwaggerModule,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mod common;
use common::RecordingAdapter;

fn sample_document() -> Document {
    Document::new(json!({
        "openapi": "3.0.0",
        "info": { "title": "Test", "version": "1.0" },
        "servers": [],
        "paths": { "/": { "get": { "summary": "Hello World" } } }
    }))
}

#[test]
fn test_docs_mount_declares_expected_routes() {
    let mut adapter = RecordingAdapter::new();
    let mounted =
        SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default())
            .unwrap();

    assert_eq!(
        adapter.paths(),
        vec![
            "/docs/swagger-ui-init.js",
            "/docs/docs/swagger-ui-init.js",
            "/docs",
            "/docs/",
            "/docs-json",
            "/docs-yaml",
        ]
    );
    assert!(mounted.routes.collapsed.is_empty());
    assert_eq!(adapter.static_prefixes(), vec!["/docs", "/docs/docs"]);
    assert_eq!(mounted.static_mounts, vec!["/docs".to_string(), "/docs/docs".to_string()]);
}

#[test]
fn test_root_mount_under_global_prefix() {
    let mut adapter = RecordingAdapter::with_global_prefix("/api");
    let options = MountOptions {
        use_global_prefix: true,
        ..Default::default()
    };
    let mounted = SwaggerModule::setup("/", &mut adapter, sample_document(), options).unwrap();

    assert_eq!(mounted.paths.final_path, "/api/");
    assert_eq!(
        adapter.paths(),
        vec!["/api/swagger-ui-init.js", "/api/", "/api/-json", "/api/-yaml"]
    );
    assert_eq!(
        mounted.routes.collapsed,
        vec!["/api/swagger-ui-init.js".to_string(), "/api/".to_string()]
    );
    assert_eq!(adapter.static_prefixes(), vec!["/api/"]);
}

#[test]
fn test_definition_url_overrides() {
    let mut adapter = RecordingAdapter::with_global_prefix("/api");
    let options = MountOptions {
        json_document_url: Some("/spec.json".into()),
        yaml_document_url: Some("spec.yaml".into()),
        ..Default::default()
    };
    SwaggerModule::setup("/reference", &mut adapter, sample_document(), options).unwrap();

    let paths = adapter.paths();
    assert!(paths.contains(&"/spec.json"));
    assert!(paths.contains(&"/spec.yaml"));
    assert!(!paths.contains(&"/reference-json"));
}

#[test]
fn test_ui_disabled_serves_definitions_only() {
    let mut adapter = RecordingAdapter::new();
    let options = MountOptions {
        swagger_ui_enabled: false,
        ..Default::default()
    };
    let mounted = SwaggerModule::setup("/docs", &mut adapter, sample_document(), options).unwrap();

    assert_eq!(adapter.paths(), vec!["/docs-json", "/docs-yaml"]);
    assert!(adapter.statics.is_empty());
    assert!(mounted.static_mounts.is_empty());
}

#[test]
fn test_slash_variants_never_raise() {
    for path in ["/", "/swagger", "/swagger/", ""] {
        for collapse in [false, true] {
            let mut adapter = RecordingAdapter {
                collapse_trailing_slash: collapse,
                ..Default::default()
            };
            let result =
                SwaggerModule::setup(path, &mut adapter, sample_document(), MountOptions::default());
            assert!(result.is_ok(), "path {path:?}, collapse {collapse}: {result:?}");
        }
    }
}

#[test]
fn test_trailing_slash_ignoring_adapter_collapses_page_variant() {
    let mut adapter = RecordingAdapter {
        collapse_trailing_slash: true,
        ..Default::default()
    };
    let mounted =
        SwaggerModule::setup("/swagger", &mut adapter, sample_document(), MountOptions::default())
            .unwrap();
    assert_eq!(mounted.routes.collapsed, vec!["/swagger/".to_string()]);
    assert!(!adapter.paths().contains(&"/swagger/"));
}

#[test]
fn test_unexpected_registration_failure_propagates() {
    let mut adapter = RecordingAdapter {
        fail_on: Some("/docs-yaml".into()),
        ..Default::default()
    };
    let err = SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        DocsError::Registration(RegistrationError::Adapter { .. })
    ));
}

#[test]
fn test_non_duplicate_failure_on_slash_variant_propagates() {
    let mut adapter = RecordingAdapter {
        fail_on: Some("/docs/".into()),
        ..Default::default()
    };
    let err = SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        DocsError::Registration(RegistrationError::Adapter { .. })
    ));
}

#[test]
fn test_mounting_same_path_twice_fails() {
    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default()).unwrap();
    let err = SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        DocsError::Registration(RegistrationError::DuplicateRoute { .. })
    ));
}

#[test]
fn test_independent_mounts_keep_separate_documents() {
    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup("/v1", &mut adapter, json!({ "info": { "version": "1" } }), MountOptions::default())
        .unwrap();
    SwaggerModule::setup("/v2", &mut adapter, json!({ "info": { "version": "2" } }), MountOptions::default())
        .unwrap();

    let v1: Value = serde_json::from_str(adapter.call("/v1-json").body()).unwrap();
    let v2: Value = serde_json::from_str(adapter.call("/v2-json").body()).unwrap();
    assert_eq!(v1["info"]["version"], "1");
    assert_eq!(v2["info"]["version"], "2");
}

#[test]
fn test_handlers_set_content_types() {
    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default()).unwrap();

    let cases = [
        ("/docs/swagger-ui-init.js", "application/javascript"),
        ("/docs/docs/swagger-ui-init.js", "application/javascript"),
        ("/docs", "text/html"),
        ("/docs/", "text/html"),
        ("/docs-json", "application/json"),
        ("/docs-yaml", "text/yaml"),
    ];
    for (path, content_type) in cases {
        let reply = adapter.call(path);
        assert_eq!(reply.content_type(), Some(content_type), "{path}");
        assert_eq!(reply.status().as_u16(), 200, "{path}");
        assert!(!reply.body().is_empty(), "{path}");
    }

    let html = adapter.call("/docs");
    assert!(html.body().contains("./docs/swagger-ui-init.js"));
}

#[test]
fn test_json_and_yaml_describe_same_document() {
    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup("/docs", &mut adapter, sample_document(), MountOptions::default()).unwrap();

    let from_json: Value = serde_json::from_str(adapter.call("/docs-json").body()).unwrap();
    let from_yaml: Value = serde_yaml::from_str(adapter.call("/docs-yaml").body()).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(&from_json, sample_document().as_value());

    let hook = PatchHook::new(|_request, _reply, document| {
        let mut patched = document.clone();
        patched.as_value_mut()["info"]["title"] = json!("Patched");
        patched.as_value_mut()["servers"] = json!([{ "url": "https://api.example.com" }]);
        Ok(patched)
    });
    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup(
        "/docs",
        &mut adapter,
        sample_document(),
        MountOptions::default().with_patch_hook(hook),
    )
    .unwrap();

    let from_json: Value = serde_json::from_str(adapter.call("/docs-json").body()).unwrap();
    let from_yaml: Value = serde_yaml::from_str(adapter.call("/docs-yaml").body()).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json["info"]["title"], "Patched");
    assert_eq!(from_json["servers"][0]["url"], "https://api.example.com");
    assert_eq!(from_json["paths"], sample_document().as_value()["paths"]);
}

#[test]
fn test_definitions_keep_document_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("openapi.json");
    std::fs::write(
        &path,
        r#"{"openapi":"3.0.0","info":{"title":"Zoo","version":"1"},"paths":{"/zebra":{"get":{}},"/apple":{"get":{}}}}"#,
    )
    .unwrap();

    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup(
        "/docs",
        &mut adapter,
        load_document(&path).unwrap(),
        MountOptions::default(),
    )
    .unwrap();

    let json_body = adapter.call("/docs-json").body().to_string();
    assert!(json_body.starts_with(r#"{"openapi":"3.0.0","info":"#), "{json_body}");
    let zebra = json_body.find("/zebra").unwrap();
    let apple = json_body.find("/apple").unwrap();
    assert!(zebra < apple, "path order lost in JSON: {json_body}");

    let yaml_body = adapter.call("/docs-yaml").body().to_string();
    assert!(yaml_body.starts_with("openapi:"), "{yaml_body}");
    let zebra = yaml_body.find("/zebra").unwrap();
    let apple = yaml_body.find("/apple").unwrap();
    assert!(zebra < apple, "path order lost in YAML: {yaml_body}");
}

#[test]
fn test_factory_invoked_once_across_requests() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = DocumentSource::factory(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(sample_document())
    });

    let mut adapter = RecordingAdapter::new();
    let mounted = SwaggerModule::setup("/docs", &mut adapter, source, MountOptions::default()).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0, "document must be built lazily");

    for path in ["/docs-json", "/docs-yaml", "/docs/swagger-ui-init.js", "/docs-json"] {
        adapter.call(path);
    }
    mounted.cache.get().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_patch_hook_is_request_scoped() {
    let hook = PatchHook::new(|request, _reply, document| {
        let host = request
            .headers
            .get("host")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("localhost")
            .to_string();
        let mut patched = document.clone();
        patched.as_value_mut()["servers"] = json!([{ "url": format!("https://{host}") }]);
        Ok(patched)
    });

    let mut adapter = RecordingAdapter::new();
    let mounted = SwaggerModule::setup(
        "/docs",
        &mut adapter,
        sample_document(),
        MountOptions::default().with_patch_hook(hook),
    )
    .unwrap();

    let request = |host: &str| {
        Request::builder()
            .uri("/docs-json")
            .header("host", host)
            .body(())
            .unwrap()
    };
    let a: Value = serde_json::from_str(adapter.call_with(request("a.example.com")).body()).unwrap();
    let b: Value = serde_json::from_str(adapter.call_with(request("b.example.com")).body()).unwrap();
    assert_eq!(a["servers"][0]["url"], "https://a.example.com");
    assert_eq!(b["servers"][0]["url"], "https://b.example.com");

    assert_eq!(mounted.cache.get().unwrap().as_value()["servers"], json!([]));

    let script = adapter.call_with(
        Request::builder()
            .uri("/docs/swagger-ui-init.js")
            .header("host", "c.example.com")
            .body(())
            .unwrap(),
    );
    assert!(script.body().contains("https://c.example.com"));
}

#[test]
fn test_patch_hook_can_set_response_headers() {
    let hook = PatchHook::new(|_request, reply, document| {
        reply.set_header(
            axum::http::header::CACHE_CONTROL,
            axum::http::HeaderValue::from_static("no-store"),
        );
        Ok(document.clone())
    });
    let mut adapter = RecordingAdapter::new();
    SwaggerModule::setup(
        "/docs",
        &mut adapter,
        sample_document(),
        MountOptions::default().with_patch_hook(hook),
    )
    .unwrap();

    let reply = adapter.call("/docs-yaml");
    assert_eq!(reply.headers()["cache-control"], "no-store");
    assert_eq!(reply.content_type(), Some("text/yaml"));
}

struct PlainRenderer;

impl UiRenderer for PlainRenderer {
    fn render_page(&self, base_url: &str, options: &UiOptions) -> String {
        format!("<h1>{}</h1><script src=\"{}init.js\"></script>", options.title, base_url)
    }

    fn render_init_script(&self, document: &Document, _options: &UiOptions) -> Result<String, DocsError> {
        Ok(format!("const spec = {};", serialize::to_json(document)?))
    }
}

#[test]
fn test_custom_renderer() {
    let mut adapter = RecordingAdapter::new();
    let options = MountOptions {
        ui: UiOptions {
            title: "Reference".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    SwaggerModule::setup_with_renderer(
        "/reference",
        &mut adapter,
        sample_document(),
        options,
        Arc::new(PlainRenderer),
    )
    .unwrap();

    assert_eq!(
        adapter.call("/reference").body(),
        "<h1>Reference</h1><script src=\"./reference/init.js\"></script>"
    );
    assert!(adapter
        .call("/reference/swagger-ui-init.js")
        .body()
        .starts_with("const spec = {"));
}
