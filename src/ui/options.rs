//! Swagger UI customization options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options forwarded to the UI renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiOptions {
    /// Page title.
    pub title: String,

    /// Favicon URL. The bundled icons are used when unset.
    pub favicon_url: Option<String>,

    /// Inline CSS appended to the page.
    pub custom_css: Option<String>,

    /// Extra stylesheet URLs.
    pub custom_css_url: Vec<String>,

    /// Extra script URLs.
    pub custom_js: Vec<String>,

    /// Inline scripts.
    pub custom_js_str: Vec<String>,

    /// Definition URL the UI loads instead of the embedded document.
    pub swagger_url: Option<String>,

    /// Show the URL explorer bar.
    pub explorer: bool,

    /// Free-form options merged into the `SwaggerUIBundle` configuration.
    pub swagger_options: Map<String, Value>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            title: "Swagger UI".to_string(),
            favicon_url: None,
            custom_css: None,
            custom_css_url: Vec::new(),
            custom_js: Vec::new(),
            custom_js_str: Vec::new(),
            swagger_url: None,
            explorer: false,
            swagger_options: Map::new(),
        }
    }
}
