//! UI renderer seam and the stock Swagger UI implementation.

use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::DocsError;
use crate::ui::options::UiOptions;
use crate::ui::templates::{fill, INIT_SCRIPT, PAGE};

/// Turns a base URL and options into the UI page, and a document into the
/// UI initialization script.
pub trait UiRenderer: Send + Sync {
    fn render_page(&self, base_url: &str, options: &UiOptions) -> String;

    fn render_init_script(
        &self,
        document: &Document,
        options: &UiOptions,
    ) -> Result<String, DocsError>;
}

/// Renders the stock Swagger UI page and init script.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwaggerUiRenderer;

impl UiRenderer for SwaggerUiRenderer {
    fn render_page(&self, base_url: &str, options: &UiOptions) -> String {
        let favicon = match &options.favicon_url {
            Some(url) => format!("<link rel='icon' href='{}' />", escape_html(url)),
            None => format!(
                "<link rel=\"icon\" type=\"image/png\" href=\"{0}favicon-32x32.png\" sizes=\"32x32\" />\
                 <link rel=\"icon\" type=\"image/png\" href=\"{0}favicon-16x16.png\" sizes=\"16x16\" />",
                base_url
            ),
        };
        let explorer_css = if options.explorer {
            ""
        } else {
            ".swagger-ui .topbar .download-url-wrapper { display: none }"
        };
        let custom_js = options
            .custom_js
            .iter()
            .map(|src| format!("<script src='{}'></script>", escape_html(src)))
            .collect::<Vec<_>>()
            .join("\n");
        let custom_js_str = options
            .custom_js_str
            .iter()
            .map(|script| format!("<script>\n{}\n</script>", script))
            .collect::<Vec<_>>()
            .join("\n");
        let custom_css_url = options
            .custom_css_url
            .iter()
            .map(|href| format!("<link href='{}' rel='stylesheet'>", escape_html(href)))
            .collect::<Vec<_>>()
            .join("\n");

        let title = escape_html(&options.title);

        fill(
            PAGE,
            &[
                ("title", title.as_str()),
                ("base_url", base_url),
                ("favicon", favicon.as_str()),
                ("explorer_css", explorer_css),
                ("custom_css", options.custom_css.as_deref().unwrap_or_default()),
                ("custom_js", custom_js.as_str()),
                ("custom_js_str", custom_js_str.as_str()),
                ("custom_css_url", custom_css_url.as_str()),
            ],
        )
    }

    fn render_init_script(
        &self,
        document: &Document,
        options: &UiOptions,
    ) -> Result<String, DocsError> {
        let mut init = Map::new();
        init.insert("swaggerDoc".into(), document.as_value().clone());
        init.insert(
            "customOptions".into(),
            Value::Object(options.swagger_options.clone()),
        );
        if let Some(url) = &options.swagger_url {
            init.insert("swaggerUrl".into(), Value::from(url.as_str()));
        }
        if let Some(urls) = options.swagger_options.get("urls") {
            init.insert("swaggerUrls".into(), urls.clone());
        }

        let options_literal = format!("let options = {};", serde_json::to_string(&init)?);
        Ok(fill(INIT_SCRIPT, &[("options", options_literal.as_str())]))
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
