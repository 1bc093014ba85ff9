//! Session startup option types.

use serde::{Deserialize, Serialize};

/// Where a new session starts its working directory
///
/// Unlike the other profile enums this one is stored as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitialWorkingDirectory {
    /// The profile's custom directory
    Custom,
    /// The user's home directory (default)
    #[default]
    Home,
    /// The working directory of the current session
    Recycle,
    /// Separate policies for windows, tabs and panes
    Advanced,
}

impl InitialWorkingDirectory {
    /// Value stored in the profile
    pub fn value(&self) -> &'static str {
        match self {
            Self::Custom => "Yes",
            Self::Home => "No",
            Self::Recycle => "Recycle",
            Self::Advanced => "Advanced",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Custom => "Custom Directory",
            Self::Home => "Home Directory",
            Self::Recycle => "Reuse Previous Session's Directory",
            Self::Advanced => "Advanced Configuration",
        }
    }

    /// All available policies for UI iteration
    pub fn all() -> &'static [InitialWorkingDirectory] {
        &[
            InitialWorkingDirectory::Custom,
            InitialWorkingDirectory::Home,
            InitialWorkingDirectory::Recycle,
            InitialWorkingDirectory::Advanced,
        ]
    }
}
