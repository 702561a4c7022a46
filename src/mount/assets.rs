//! Static asset mounting for the UI bundle.

use std::path::{Path, PathBuf};

use crate::error::DocsError;
use crate::http::HttpAdapter;

/// Environment variable overriding the default asset directory.
pub const ASSETS_DIR_ENV: &str = "DOCS_MOUNT_SWAGGER_UI_DIR";

/// Serves the UI bundle from one directory under one or more prefixes.
#[derive(Debug, Clone)]
pub struct StaticAssetMounter {
    dir: PathBuf,
}

impl StaticAssetMounter {
    /// Use `custom_dir` when given (relative paths resolve against the
    /// working directory), else the default asset directory.
    pub fn new(custom_dir: Option<&Path>) -> Result<Self, DocsError> {
        let dir = match custom_dir {
            Some(dir) => std::path::absolute(dir)?,
            None => default_assets_dir(),
        };
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Mount the bundle at `prefix`. Callers must not mount the same prefix twice.
    pub fn mount<A: HttpAdapter + ?Sized>(
        &self,
        adapter: &mut A,
        prefix: &str,
    ) -> Result<(), DocsError> {
        adapter.mount_static(prefix, &self.dir)?;
        tracing::debug!(prefix = %prefix, dir = %self.dir.display(), "UI assets mounted");
        Ok(())
    }
}

/// `$DOCS_MOUNT_SWAGGER_UI_DIR`, else `assets/swagger-ui` next to the crate manifest.
pub fn default_assets_dir() -> PathBuf {
    std::env::var_os(ASSETS_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/swagger-ui"))
}
