// crates/usecase/src/config.rs
use std::path::Path;

use serde::{Deserialize, Serialize};
use star_template_shared_kernel::{ErrorContext, PackageName, Result, StarTemplateError, Version};

/// Inputs to version resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    pub package_name: PackageName,
    #[serde(default)]
    pub fallback: Version,
}

impl BootstrapConfig {
    /// Config for `package_name` with the `"0.0.0"` fallback.
    pub fn new(package_name: PackageName) -> Self {
        Self { package_name, fallback: Version::fallback() }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Version) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| StarTemplateError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text).with_context(|| format!("parsing bootstrap config {}", path.display()))
    }
}
