// tests/integration/resolve.rs
use std::fs;

use star_template::{FALLBACK_VERSION, PackageName, Version, VersionSource, host_registry, resolve_with};
use star_template_infra::{InMemoryRegistry, JsonFileRegistry};

#[test]
fn registered_at_1_2_3_resolves_to_1_2_3() {
    let registry = InMemoryRegistry::new()
        .with_package(PackageName::new("star_template").unwrap(), Version::new("1.2.3").unwrap());

    let resolved = resolve_with(&registry).unwrap();
    assert_eq!(resolved.version, "1.2.3");
    assert_eq!(resolved.source, VersionSource::Registry);
}

#[test]
fn absent_package_resolves_to_fallback() {
    let resolved = resolve_with(&InMemoryRegistry::new()).unwrap();
    assert_eq!(resolved.version, FALLBACK_VERSION);
    assert_eq!(resolved.version, "0.0.0");
    assert!(resolved.is_fallback());
}

#[test]
fn host_registry_knows_this_package() {
    let resolved = resolve_with(&host_registry()).unwrap();
    assert_eq!(resolved.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn manifest_registry_can_stand_in_for_the_host() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("packages.json");
    fs::write(&manifest, r#"[{"name":"Star-Template","version":"4.5.6"}]"#).unwrap();

    let resolved = resolve_with(&JsonFileRegistry::new(&manifest)).unwrap();
    assert_eq!(resolved.version, "4.5.6");
}
