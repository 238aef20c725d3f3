// crates/ports/src/metadata.rs
use serde::{Deserialize, Serialize};
use star_template_shared_kernel::{PackageName, RegistryResult, Version};

/// DTO representing one registered package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: PackageName,
    pub version: Version,
}

impl PackageRecord {
    pub fn new(name: PackageName, version: Version) -> Self {
        Self { name, version }
    }
}

/// Port for querying installed-package metadata by name.
///
/// Absence must be reported as `RegistryError::PackageNotFound`; callers
/// branch on that variant to apply a fallback.
pub trait MetadataRegistry: Send + Sync {
    fn version(&self, name: &PackageName) -> RegistryResult<Version>;
}

impl<R: MetadataRegistry + ?Sized> MetadataRegistry for &R {
    fn version(&self, name: &PackageName) -> RegistryResult<Version> {
        (**self).version(name)
    }
}

impl<R: MetadataRegistry + ?Sized> MetadataRegistry for Box<R> {
    fn version(&self, name: &PackageName) -> RegistryResult<Version> {
        (**self).version(name)
    }
}
