// crates/shared-kernel/src/value_objects/package_name.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Registered distribution name used as a registry lookup key.
///
/// Names are made of ASCII alphanumerics plus `-`, `_` and `.`, and must start
/// and end with an alphanumeric. Two names refer to the same package when
/// their [`normalized`](Self::normalized) forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form with every run of `-`, `_`, `.` collapsed to one `-`.
    #[must_use]
    pub fn normalized(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut in_separator = false;
        for ch in self.0.chars() {
            if is_separator(ch) {
                if !in_separator {
                    out.push('-');
                }
                in_separator = true;
            } else {
                out.push(ch.to_ascii_lowercase());
                in_separator = false;
            }
        }
        out
    }

    #[must_use]
    pub fn matches(&self, other: &PackageName) -> bool {
        self.normalized() == other.normalized()
    }
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_' | '.')
}

fn validate(name: &str) -> DomainResult<()> {
    let invalid = |reason: &str| DomainError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let (Some(first), Some(last)) = (name.chars().next(), name.chars().last()) else {
        return Err(invalid("name is empty"));
    };
    if let Some(bad) = name.chars().find(|&c| !c.is_ascii_alphanumeric() && !is_separator(c)) {
        return Err(invalid(&format!("unexpected character {bad:?}")));
    }
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return Err(invalid("must start and end with a letter or digit"));
    }
    Ok(())
}

impl TryFrom<String> for PackageName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PackageName {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::new(s)
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
