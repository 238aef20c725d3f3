// crates/shared-kernel/src/value_objects/mod.rs
pub mod package_name;
pub mod version;

pub use package_name::PackageName;
pub use version::Version;
