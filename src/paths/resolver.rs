//! Resolution of a mount request into concrete route paths.
//!
//! # Responsibilities
//! - Apply the global prefix only when requested and usable
//! - Derive the last path segment used for relative asset URLs
//! - Pick the JSON/YAML definition paths (explicit override or `-json`/`-yaml` suffix)
//! - Derive the static mount prefixes

use crate::paths::normalize::{is_usable_global_prefix, normalize_rel_path, validate_path};

/// Inputs needed to resolve the documentation paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct MountRequest<'a> {
    /// Path the caller asked to mount the UI under.
    pub requested_path: &'a str,
    /// Application-wide prefix reported by the adapter.
    pub global_prefix: &'a str,
    /// Whether documentation routes honour the global prefix.
    pub use_global_prefix: bool,
    /// Explicit JSON definition URL.
    pub json_document_url: Option<&'a str>,
    /// Explicit YAML definition URL.
    pub yaml_document_url: Option<&'a str>,
}

/// Concrete paths derived from a `MountRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub final_path: String,
    /// Last `/`-delimited component of `final_path`, empty for `/` or a trailing slash.
    pub last_segment: String,
    pub json_path: String,
    pub yaml_path: String,
    pub static_path_primary: String,
    /// `{final_path}/{last_segment}`, normalized. Equal to the primary when
    /// `last_segment` is empty.
    pub static_path_slash_variant: String,
}

impl ResolvedPaths {
    /// `{final_path}/swagger-ui-init.js`
    pub fn init_script_path(&self) -> String {
        normalize_rel_path(&format!("{}/swagger-ui-init.js", self.final_path))
    }

    /// `{final_path}/{last_segment}/swagger-ui-init.js`, for browsers resolving
    /// relative asset URLs against a trailing-slash page URL.
    pub fn init_script_slash_variant(&self) -> String {
        normalize_rel_path(&format!(
            "{}/{}/swagger-ui-init.js",
            self.final_path, self.last_segment
        ))
    }

    pub fn page_path(&self) -> &str {
        &self.final_path
    }

    pub fn page_slash_variant(&self) -> String {
        normalize_rel_path(&format!("{}/", self.final_path))
    }

    /// Base URL the UI page uses for its assets: `./{last_segment}/`.
    pub fn ui_base_url(&self) -> String {
        normalize_rel_path(&format!("./{}/", self.last_segment))
    }

    /// True when the slash variant needs its own static mount.
    pub fn has_distinct_slash_variant(&self) -> bool {
        self.static_path_slash_variant != self.static_path_primary
    }

    /// Prefixes the static assets are mounted under, without duplicates.
    pub fn static_mounts(&self) -> Vec<&str> {
        let mut mounts = vec![self.static_path_primary.as_str()];
        if self.has_distinct_slash_variant() {
            mounts.push(self.static_path_slash_variant.as_str());
        }
        mounts
    }
}

/// Resolve the documentation paths. Pure and deterministic.
pub fn resolve(request: &MountRequest<'_>) -> ResolvedPaths {
    let prefix_applies =
        request.use_global_prefix && is_usable_global_prefix(request.global_prefix);

    let final_path = if prefix_applies {
        validate_path(&format!(
            "{}{}",
            request.global_prefix,
            validate_path(request.requested_path)
        ))
    } else {
        validate_path(request.requested_path)
    };
    let final_path = normalize_rel_path(&final_path);

    let last_segment = final_path
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    let validated_prefix = if prefix_applies {
        validate_path(request.global_prefix)
    } else {
        String::new()
    };

    let definition_path = |custom: Option<&str>, suffix: &str| match custom {
        Some(url) => normalize_rel_path(&format!("{}{}", validated_prefix, validate_path(url))),
        None => format!("{}{}", final_path, suffix),
    };
    let json_path = definition_path(request.json_document_url, "-json");
    let yaml_path = definition_path(request.yaml_document_url, "-yaml");

    let static_path_slash_variant =
        normalize_rel_path(&format!("{}/{}", final_path, last_segment));

    ResolvedPaths {
        static_path_primary: final_path.clone(),
        final_path,
        last_segment,
        json_path,
        yaml_path,
        static_path_slash_variant,
    }
}
