// crates/shared-kernel/tests/error_context.rs
use star_template_shared_kernel::{ErrorContext, RegistryError, StarTemplateError};

fn lookup() -> std::result::Result<(), RegistryError> {
    Err(RegistryError::Malformed { origin: "packages.json".into(), details: "expected array".into() })
}

#[test]
fn context_wraps_and_formats() {
    let err = lookup().context("resolving version").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("resolving version"));
    assert!(display.contains("Malformed registry 'packages.json'"));
}

#[test]
fn registry_error_is_found_through_context_layers() {
    let err = Err::<(), _>(RegistryError::not_found("star_template"))
        .context("inner")
        .with_context(|| "outer".to_string())
        .unwrap_err();

    assert!(err.registry_error().is_some_and(RegistryError::is_not_found));
}

#[test]
fn json_errors_become_serialization_errors() {
    let err: StarTemplateError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
    assert!(matches!(err, StarTemplateError::Serialization { ref format, .. } if format == "JSON"));
}
