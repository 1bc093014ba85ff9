//! Keyboard option types.

use serde::{Deserialize, Serialize};

/// What the Option (Alt) key sends when combined with a character key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionKeySends {
    /// Platform special character (Option+f sends ƒ)
    #[default]
    Normal,
    /// Set the high bit on the character
    Meta,
    /// Send ESC before the character
    Esc,
}

impl OptionKeySends {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::Meta => 1,
            Self::Esc => 2,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Meta => "Meta",
            Self::Esc => "Esc+",
        }
    }

    /// All available modes for UI iteration
    pub fn all() -> &'static [OptionKeySends] {
        &[
            OptionKeySends::Normal,
            OptionKeySends::Meta,
            OptionKeySends::Esc,
        ]
    }
}
