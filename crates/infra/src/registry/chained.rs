// crates/infra/src/registry/chained.rs
use star_template_ports::metadata::MetadataRegistry;
use star_template_shared_kernel::{PackageName, RegistryError, RegistryResult, Version};

/// Consults registries in order.
///
/// A registry that reports `PackageNotFound` passes the lookup on to the next
/// one; any other error ends the lookup.
#[derive(Default)]
pub struct ChainedRegistry {
    registries: Vec<Box<dyn MetadataRegistry>>,
}

impl ChainedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, registry: impl MetadataRegistry + 'static) -> Self {
        self.push(registry);
        self
    }

    pub fn push(&mut self, registry: impl MetadataRegistry + 'static) {
        self.registries.push(Box::new(registry));
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

impl MetadataRegistry for ChainedRegistry {
    fn version(&self, name: &PackageName) -> RegistryResult<Version> {
        for registry in &self.registries {
            match registry.version(name) {
                Err(err) if err.is_not_found() => continue,
                result => return result,
            }
        }
        Err(RegistryError::not_found(name.as_str()))
    }
}
