// crates/shared-kernel/src/value_objects/version.rs
use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A non-empty version identifier.
///
/// The registry's value is kept verbatim apart from surrounding whitespace;
/// no semver parsing is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(String);

impl Version {
    /// Sentinel used when no real version can be resolved.
    pub const FALLBACK: &'static str = "0.0.0";

    pub fn new(version: impl Into<String>) -> DomainResult<Self> {
        let version = version.into();
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyVersion);
        }
        if trimmed.len() == version.len() {
            Ok(Self(version))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self(Self::FALLBACK.to_string())
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.0 == Self::FALLBACK
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::fallback()
    }
}

impl TryFrom<String> for Version {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Version {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl FromStr for Version {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::new(s)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl Deref for Version {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
