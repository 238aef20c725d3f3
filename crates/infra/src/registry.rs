// crates/infra/src/registry.rs
//! Adapters implementing the [`MetadataRegistry`] port.
//!
//! [`MetadataRegistry`]: star_template_ports::metadata::MetadataRegistry

pub mod chained;
pub mod in_memory;
pub mod json_file;

pub use chained::ChainedRegistry;
pub use in_memory::InMemoryRegistry;
pub use json_file::JsonFileRegistry;
