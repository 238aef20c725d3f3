// src/version.rs
//! Package identity and the process-wide resolved version.
//!
//! The host registry is built from the package metadata Cargo records at
//! build time. When the crate is compiled outside Cargo that metadata is
//! missing, the lookup reports the package as not found, and the version
//! falls back to [`FALLBACK_VERSION`].

use std::sync::OnceLock;

use serde::Serialize;
use star_template_infra::InMemoryRegistry;
use star_template_ports::metadata::{MetadataRegistry, PackageRecord};
use star_template_shared_kernel::{PackageName, Result, Version};
use star_template_usecase::{BootstrapConfig, ResolveVersion, ResolvedVersion, VersionSource};

/// Registered name this package is looked up under.
pub const PACKAGE_NAME: &str = "star_template";

/// Version reported when the package is not registered.
pub const FALLBACK_VERSION: &str = Version::FALLBACK;

const BUILD_NAME: Option<&str> = option_env!("CARGO_PKG_NAME");
const BUILD_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

static PACKAGE: OnceLock<PackageInfo> = OnceLock::new();

/// Identity of this package as resolved at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: Version,
    pub source: VersionSource,
}

impl PackageInfo {
    fn from_resolved(resolved: ResolvedVersion) -> Self {
        Self { name: PACKAGE_NAME, version: resolved.version, source: resolved.source }
    }

    fn fallback() -> Self {
        Self { name: PACKAGE_NAME, version: Version::fallback(), source: VersionSource::Fallback }
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }
}

/// Resolves the package version against the host registry, once per process.
///
/// Every call returns the same record. Resolution never fails from the
/// caller's point of view.
pub fn init() -> &'static PackageInfo {
    PACKAGE.get_or_init(|| load(&host_registry()))
}

/// The initialized package record; initializes on first use.
pub fn package() -> &'static PackageInfo {
    init()
}

/// The process-wide version string.
pub fn version() -> &'static str {
    init().version()
}

/// Registry of the metadata Cargo recorded for this build.
pub fn host_registry() -> InMemoryRegistry {
    build_registry(BUILD_NAME, BUILD_VERSION)
}

/// Resolves this package's version against `registry`, falling back to
/// [`FALLBACK_VERSION`] when the registry does not know the package.
pub fn resolve_with(registry: &dyn MetadataRegistry) -> Result<ResolvedVersion> {
    let config = BootstrapConfig::new(PackageName::new(PACKAGE_NAME)?);
    ResolveVersion::new(registry).run(&config)
}

fn build_registry(name: Option<&str>, version: Option<&str>) -> InMemoryRegistry {
    let record = name.zip(version).and_then(|(name, version)| {
        Some(PackageRecord::new(PackageName::new(name).ok()?, Version::new(version).ok()?))
    });
    record.into_iter().collect()
}

// The host registry only ever reports not-found, which `resolve_with` turns
// into the fallback; the error arm covers registries that cannot occur here.
fn load(registry: &dyn MetadataRegistry) -> PackageInfo {
    match resolve_with(registry) {
        Ok(resolved) => PackageInfo::from_resolved(resolved),
        Err(err) => {
            log::warn!("version lookup for {PACKAGE_NAME} failed: {err}; using {FALLBACK_VERSION}");
            PackageInfo::fallback()
        }
    }
}
