//! Profile identifiers.

use crate::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a profile on the host.
///
/// Hosts usually use upper-case UUIDs, but any non-blank string is accepted;
/// whether it names an existing profile is only known to the host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileGuid(String);

impl ProfileGuid {
    /// Validate and wrap an identifier (surrounding whitespace is trimmed)
    pub fn parse(guid: &str) -> Result<Self> {
        let trimmed = guid.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::BadReference(
                "profile guid must not be empty".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(ProfileError::BadReference(format!(
                "profile guid contains control characters: {guid:?}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProfileGuid {
    type Error = ProfileError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ProfileGuid> for String {
    fn from(guid: ProfileGuid) -> Self {
        guid.0
    }
}

impl std::str::FromStr for ProfileGuid {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
