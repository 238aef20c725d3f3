//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`config`]: Bootstrap settings (package name, fallback version)
//! - [`dto`]: Data transfer objects for use case boundaries
//! - [`resolve`]: Version lookup with fallback on a missing package
//!
//! Use cases depend on ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod dto;
pub mod resolve;

pub use config::BootstrapConfig;
pub use dto::{ResolvedVersion, VersionSource};
pub use resolve::ResolveVersion;
