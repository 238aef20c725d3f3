// crates/usecase/src/dto.rs
use serde::{Deserialize, Serialize};
use star_template_shared_kernel::Version;

/// Where a resolved version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    Registry,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVersion {
    pub version: Version,
    pub source: VersionSource,
}

impl ResolvedVersion {
    pub fn is_fallback(&self) -> bool {
        self.source == VersionSource::Fallback
    }
}
