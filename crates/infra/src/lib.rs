// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod registry;

pub use registry::{ChainedRegistry, InMemoryRegistry, JsonFileRegistry};
