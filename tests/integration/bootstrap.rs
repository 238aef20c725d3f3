// tests/integration/bootstrap.rs
use std::thread;

use star_template::{PACKAGE_NAME, VersionSource, init, package, version};

#[test]
fn built_by_cargo_resolves_the_manifest_version() {
    let info = init();
    assert_eq!(info.name, PACKAGE_NAME);
    assert_eq!(info.version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(info.source, VersionSource::Registry);
}

#[test]
fn version_is_never_empty() {
    assert!(!version().is_empty());
}

#[test]
fn repeated_reads_return_the_same_record() {
    let first = init();
    assert!(std::ptr::eq(first, init()));
    assert!(std::ptr::eq(first, package()));
    assert_eq!(version(), first.version());
}

#[test]
fn concurrent_first_reads_agree() {
    let versions: Vec<&'static str> =
        (0..8).map(|_| thread::spawn(version)).map(|h| h.join().unwrap()).collect();
    assert!(versions.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn package_info_serializes_for_diagnostics() {
    let json = serde_json::to_value(init()).unwrap();
    assert_eq!(json["name"], "star_template");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["source"], "registry");
}
