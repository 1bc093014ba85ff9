//! Typed error variants for the termremote-color crate.

use thiserror::Error;

/// Errors produced while parsing a [`Color`](crate::Color) from text or from
/// a channel mapping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// The hex string was not `#rrggbb` or `#rrggbbaa`.
    #[error("Invalid hex color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidHex(String),

    /// A required channel key was absent from the mapping.
    #[error("Color mapping is missing '{0}'")]
    MissingComponent(&'static str),

    /// A channel was present but not a number in `0.0..=1.0`.
    #[error("Color component '{name}' must be a number in 0.0..=1.0, got {value}")]
    ComponentOutOfRange {
        /// Channel key.
        name: &'static str,
        /// Offending value as it appeared in the mapping.
        value: String,
    },

    /// The `Color Space` entry named a space this crate does not know.
    #[error("Unknown color space '{0}'")]
    UnknownColorSpace(String),
}
