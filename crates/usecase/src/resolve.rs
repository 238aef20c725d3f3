// crates/usecase/src/resolve.rs
use star_template_ports::metadata::MetadataRegistry;
use star_template_shared_kernel::{ErrorContext, RegistryError, Result};

use crate::{
    config::BootstrapConfig,
    dto::{ResolvedVersion, VersionSource},
};

/// Looks a package up in a registry and applies the configured fallback when
/// the registry does not know the package.
///
/// Only `RegistryError::PackageNotFound` triggers the fallback; every other
/// registry failure is returned to the caller.
pub struct ResolveVersion<'a> {
    registry: &'a dyn MetadataRegistry,
}

impl<'a> ResolveVersion<'a> {
    pub fn new(registry: &'a dyn MetadataRegistry) -> Self {
        Self { registry }
    }

    pub fn run(&self, config: &BootstrapConfig) -> Result<ResolvedVersion> {
        match self.registry.version(&config.package_name) {
            Ok(version) => {
                log::debug!("resolved {} {version} from registry", config.package_name);
                Ok(ResolvedVersion { version, source: VersionSource::Registry })
            }
            Err(RegistryError::PackageNotFound { name }) => {
                log::debug!("package {name} is not registered; using version {}", config.fallback);
                Ok(ResolvedVersion { version: config.fallback.clone(), source: VersionSource::Fallback })
            }
            Err(err) => Err(err).with_context(|| format!("resolving version of {}", config.package_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use star_template_shared_kernel::{PackageName, RegistryResult, Version};

    use super::*;

    struct StubRegistry {
        answer: fn(&PackageName) -> RegistryResult<Version>,
        calls: AtomicUsize,
    }

    impl StubRegistry {
        fn new(answer: fn(&PackageName) -> RegistryResult<Version>) -> Self {
            Self { answer, calls: AtomicUsize::new(0) }
        }
    }

    impl MetadataRegistry for StubRegistry {
        fn version(&self, name: &PackageName) -> RegistryResult<Version> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)(name)
        }
    }

    fn config() -> BootstrapConfig {
        BootstrapConfig::new(PackageName::new("star_template").unwrap())
    }

    #[test]
    fn registry_version_is_used() {
        let stub = StubRegistry::new(|_| Ok(Version::new("1.2.3").unwrap()));
        let resolved = ResolveVersion::new(&stub).run(&config()).expect("run succeeds");

        assert_eq!(resolved.version, "1.2.3");
        assert_eq!(resolved.source, VersionSource::Registry);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn not_found_applies_fallback() {
        let stub = StubRegistry::new(|name| Err(RegistryError::not_found(name.as_str())));
        let resolved = ResolveVersion::new(&stub).run(&config()).expect("run succeeds");

        assert_eq!(resolved.version, "0.0.0");
        assert!(resolved.is_fallback());
    }

    #[test]
    fn custom_fallback_is_honoured() {
        let stub = StubRegistry::new(|name| Err(RegistryError::not_found(name.as_str())));
        let config = config().with_fallback(Version::new("0.0.0+local").unwrap());
        let resolved = ResolveVersion::new(&stub).run(&config).expect("run succeeds");

        assert_eq!(resolved.version, "0.0.0+local");
    }

    #[test]
    fn other_registry_errors_propagate() {
        let stub = StubRegistry::new(|_| {
            Err(RegistryError::Malformed { origin: "stub".into(), details: "broken".into() })
        });
        let err = ResolveVersion::new(&stub).run(&config()).unwrap_err();

        assert!(err.to_string().contains("resolving version of star_template"));
        assert!(matches!(err.registry_error(), Some(RegistryError::Malformed { .. })));
    }
}
