//! Package bootstrap for `star_template`.
//!
//! Exposes the package's resolved version and a trivial [`ping`]
//! diagnostic. The version is looked up once, at [`init`], in the metadata
//! Cargo recorded for the build, and falls back to [`FALLBACK_VERSION`] when
//! that metadata is missing.

#![allow(clippy::multiple_crate_versions)]

pub mod version;

pub use star_template_shared_kernel::{PackageName, StarTemplateError, Version};
pub use star_template_usecase::{ResolvedVersion, VersionSource};
pub use version::{
    FALLBACK_VERSION, PACKAGE_NAME, PackageInfo, host_registry, init, package, resolve_with, version,
};

/// Liveness check; always returns `"pong"`.
pub fn ping() -> &'static str {
    "pong"
}
