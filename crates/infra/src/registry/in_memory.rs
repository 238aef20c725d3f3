// crates/infra/src/registry/in_memory.rs
use std::collections::HashMap;

use star_template_ports::metadata::{MetadataRegistry, PackageRecord};
use star_template_shared_kernel::{PackageName, RegistryError, RegistryResult, Version};

/// Registry held entirely in memory, keyed by normalized package name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    packages: HashMap<String, PackageRecord>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_package(mut self, name: PackageName, version: Version) -> Self {
        self.insert(PackageRecord::new(name, version));
        self
    }

    /// Registers `record`, replacing any entry whose name normalizes the same.
    /// Returns the replaced record.
    pub fn insert(&mut self, record: PackageRecord) -> Option<PackageRecord> {
        self.packages.insert(record.name.normalized(), record)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<PackageRecord> for InMemoryRegistry {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

impl MetadataRegistry for InMemoryRegistry {
    fn version(&self, name: &PackageName) -> RegistryResult<Version> {
        self.packages
            .get(&name.normalized())
            .map(|record| record.version.clone())
            .ok_or_else(|| RegistryError::not_found(name.as_str()))
    }
}
