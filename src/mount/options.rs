//! Options recognised by `SwaggerModule::setup`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::document::PatchHook;
use crate::ui::UiOptions;

/// Mount options. Everything except the patch hook can come from config.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MountOptions {
    /// Prefix documentation and UI paths with the adapter's global prefix.
    pub use_global_prefix: bool,

    /// Path of the JSON definition instead of `{path}-json`.
    pub json_document_url: Option<String>,

    /// Path of the YAML definition instead of `{path}-yaml`.
    pub yaml_document_url: Option<String>,

    /// Serve the UI page, init script and static assets. The JSON and YAML
    /// definitions are served either way.
    pub swagger_ui_enabled: bool,

    /// Directory holding the UI static bundle.
    pub custom_swagger_ui_path: Option<PathBuf>,

    pub ui: UiOptions,

    /// Per-request document transform. Never cached.
    #[serde(skip)]
    pub patch_document_on_request: Option<PatchHook>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            use_global_prefix: false,
            json_document_url: None,
            yaml_document_url: None,
            swagger_ui_enabled: true,
            custom_swagger_ui_path: None,
            ui: UiOptions::default(),
            patch_document_on_request: None,
        }
    }
}

impl MountOptions {
    pub fn with_patch_hook(mut self, hook: PatchHook) -> Self {
        self.patch_document_on_request = Some(hook);
        self
    }
}
