// crates/infra/src/registry/json_file.rs
use std::path::{Path, PathBuf};

use star_template_ports::metadata::{MetadataRegistry, PackageRecord};
use star_template_shared_kernel::{PackageName, RegistryError, RegistryResult, Version};

use super::InMemoryRegistry;
use crate::persistence::FileReader;

/// Registry backed by a JSON manifest of installed packages:
///
/// ```json
/// [{ "name": "star_template", "version": "1.2.3" }]
/// ```
///
/// The manifest is re-read on every lookup so the answer tracks the current
/// install state. A missing manifest is an empty registry.
#[derive(Debug, Clone)]
pub struct JsonFileRegistry {
    path: PathBuf,
}

impl JsonFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> RegistryResult<InMemoryRegistry> {
        let text = FileReader::read_optional_string(&self.path).map_err(|source| {
            log::warn!("cannot read package manifest {}: {source}", self.path.display());
            RegistryError::Unreadable { path: self.path.clone(), source }
        })?;

        let Some(text) = text else {
            log::debug!("package manifest {} does not exist", self.path.display());
            return Ok(InMemoryRegistry::new());
        };

        let records: Vec<PackageRecord> = serde_json::from_str(&text).map_err(|err| {
            log::warn!("malformed package manifest {}: {err}", self.path.display());
            RegistryError::Malformed { origin: self.path.display().to_string(), details: err.to_string() }
        })?;
        Ok(records.into_iter().collect())
    }
}

impl MetadataRegistry for JsonFileRegistry {
    fn version(&self, name: &PackageName) -> RegistryResult<Version> {
        self.load()?.version(name)
    }
}
