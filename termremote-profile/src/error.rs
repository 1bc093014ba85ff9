//! Typed error variants for the termremote-profile crate.
//!
//! Callers at the crate boundary can match on specific failure modes
//! instead of relying on opaque strings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while staging, seeding or applying profile changes.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A value could not be represented as JSON text, or stored JSON text
    /// could not be decoded again.
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// A profile identifier was malformed or does not name a known profile.
    #[error("Bad profile reference: {0}")]
    BadReference(String),

    /// A typed setter received an argument outside its accepted range.
    #[error("Profile validation error: {0}")]
    Validation(String),

    /// A seed file could not be read.
    #[error("Failed to read seed file '{}': {source}", path.display())]
    Io {
        /// Path of the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML seed document could not be parsed.
    #[error("YAML parse error in seed: {0}")]
    SeedParse(#[from] serde_yaml_ng::Error),

    /// A seed document parsed but was not a mapping of field names to values.
    #[error("Seed must be a mapping of profile field names to values: {0}")]
    SeedFormat(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProfileError>;
