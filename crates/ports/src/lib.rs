//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`metadata`]: Installed-package metadata lookup
//!
//! The use case layer depends on these traits only, never on a concrete
//! registry.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod metadata;
