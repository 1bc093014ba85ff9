//! Appearance option types: background image, cursor, font smoothing, icon.

use serde::{Deserialize, Serialize};

// ============================================================================
// Background Image
// ============================================================================

/// How a background image is laid out behind the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundImageMode {
    /// Stretch to fill the session exactly (ignores aspect ratio)
    #[default]
    Stretch,
    /// Repeat the image at its original size
    Tile,
    /// Scale to fill while keeping aspect ratio (may crop edges)
    AspectFill,
    /// Scale to fit while keeping aspect ratio (may letterbox)
    AspectFit,
}

impl BackgroundImageMode {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::Stretch => 0,
            Self::Tile => 1,
            Self::AspectFill => 2,
            Self::AspectFit => 3,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stretch => "Stretch",
            Self::Tile => "Tile",
            Self::AspectFill => "Scale to Fill",
            Self::AspectFit => "Scale to Fit",
        }
    }

    /// All available modes for UI iteration
    pub fn all() -> &'static [BackgroundImageMode] {
        &[
            BackgroundImageMode::Stretch,
            BackgroundImageMode::Tile,
            BackgroundImageMode::AspectFill,
            BackgroundImageMode::AspectFit,
        ]
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Cursor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorType {
    /// Horizontal line at the cell bottom
    Underline,
    /// Vertical bar at the cell start
    Vertical,
    /// Filled block (default)
    #[default]
    Box,
}

impl CursorType {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::Underline => 0,
            Self::Vertical => 1,
            Self::Box => 2,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Underline => "Underline",
            Self::Vertical => "Vertical Bar",
            Self::Box => "Box",
        }
    }

    /// All available cursor types for UI iteration
    pub fn all() -> &'static [CursorType] {
        &[CursorType::Underline, CursorType::Vertical, CursorType::Box]
    }
}

// ============================================================================
// Thin Strokes
// ============================================================================

/// When to draw text with thin strokes (lighter font smoothing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThinStrokes {
    /// Never use thin strokes
    Never,
    /// Only on Retina displays with dark backgrounds
    RetinaDarkBackgroundsOnly,
    /// Only on dark backgrounds
    DarkBackgroundsOnly,
    /// Always use thin strokes
    Always,
    /// Only on Retina displays (default)
    #[default]
    RetinaOnly,
}

impl ThinStrokes {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::Never => 0,
            Self::RetinaDarkBackgroundsOnly => 1,
            Self::DarkBackgroundsOnly => 2,
            Self::Always => 3,
            Self::RetinaOnly => 4,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::RetinaDarkBackgroundsOnly => "Retina + Dark Backgrounds",
            Self::DarkBackgroundsOnly => "Dark Backgrounds",
            Self::Always => "Always",
            Self::RetinaOnly => "Retina",
        }
    }

    /// All available settings for UI iteration
    pub fn all() -> &'static [ThinStrokes] {
        &[
            ThinStrokes::Never,
            ThinStrokes::RetinaDarkBackgroundsOnly,
            ThinStrokes::DarkBackgroundsOnly,
            ThinStrokes::Always,
            ThinStrokes::RetinaOnly,
        ]
    }
}

// ============================================================================
// Icon
// ============================================================================

/// Which icon a session shows in its tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// No icon
    #[default]
    None,
    /// Icon of the running application
    Automatic,
    /// Icon loaded from the profile's custom icon path
    Custom,
}

impl IconMode {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::Automatic => 1,
            Self::Custom => 2,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "No Icon",
            Self::Automatic => "Job Icon",
            Self::Custom => "Custom Icon",
        }
    }

    /// All available icon modes for UI iteration
    pub fn all() -> &'static [IconMode] {
        &[IconMode::None, IconMode::Automatic, IconMode::Custom]
    }
}
