//! Color type and its channel-mapping projection.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Mapping keys
// ============================================================================

/// Red channel key in a color mapping.
pub const RED_COMPONENT: &str = "Red Component";
/// Green channel key in a color mapping.
pub const GREEN_COMPONENT: &str = "Green Component";
/// Blue channel key in a color mapping.
pub const BLUE_COMPONENT: &str = "Blue Component";
/// Alpha channel key in a color mapping.
pub const ALPHA_COMPONENT: &str = "Alpha Component";
/// Color space key in a color mapping.
pub const COLOR_SPACE: &str = "Color Space";

// ============================================================================
// Color space
// ============================================================================

/// Color space a [`Color`]'s channels are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColorSpace {
    /// Standard sRGB (default)
    #[default]
    #[serde(rename = "sRGB")]
    Srgb,
    /// Device-calibrated RGB
    Calibrated,
}

impl ColorSpace {
    /// Name used for this space inside a color mapping
    pub fn value(&self) -> &'static str {
        match self {
            ColorSpace::Srgb => "sRGB",
            ColorSpace::Calibrated => "Calibrated",
        }
    }

    /// Parse the mapping name of a color space
    pub fn from_value(value: &str) -> Result<Self, ColorError> {
        match value {
            "sRGB" => Ok(ColorSpace::Srgb),
            "Calibrated" => Ok(ColorSpace::Calibrated),
            other => Err(ColorError::UnknownColorSpace(other.to_string())),
        }
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    #[serde(default)]
    pub color_space: ColorSpace,
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Color {
    /// Opaque sRGB color
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
            color_space: ColorSpace::Srgb,
        }
    }

    /// Same color with a different alpha channel
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Same channels tagged with a different color space
    pub const fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };

        let mut color = Self::new(channel(0)?, channel(2)?, channel(4)?);
        if digits.len() == 8 {
            color.alpha = channel(6)?;
        }
        Ok(color)
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.alpha == 255 {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }

    /// Rebuild a color from its channel mapping.
    ///
    /// Red, green and blue are required. Alpha defaults to opaque and the
    /// color space defaults to sRGB.
    pub fn from_dict(dict: &Map<String, Value>) -> Result<Self, ColorError> {
        let required = |name: &'static str| {
            component(dict, name)?.ok_or(ColorError::MissingComponent(name))
        };
        let red = required(RED_COMPONENT)?;
        let green = required(GREEN_COMPONENT)?;
        let blue = required(BLUE_COMPONENT)?;
        let alpha = component(dict, ALPHA_COMPONENT)?.unwrap_or(255);

        let color_space = match dict.get(COLOR_SPACE) {
            None | Some(Value::Null) => ColorSpace::default(),
            Some(Value::String(name)) => ColorSpace::from_value(name)?,
            Some(other) => return Err(ColorError::UnknownColorSpace(other.to_string())),
        };

        Ok(Self {
            red,
            green,
            blue,
            alpha,
            color_space,
        })
    }
}

/// Read one channel fraction and scale it back to 0..=255
fn component(dict: &Map<String, Value>, name: &'static str) -> Result<Option<u8>, ColorError> {
    let Some(value) = dict.get(name) else {
        return Ok(None);
    };
    match value.as_f64() {
        Some(f) if (0.0..=1.0).contains(&f) => Ok(Some((f * 255.0).round() as u8)),
        _ => Err(ColorError::ComponentOutOfRange {
            name,
            value: value.to_string(),
        }),
    }
}

#[inline]
fn fraction(channel: u8) -> Value {
    Value::from(channel as f64 / 255.0)
}

// ============================================================================
// Mapping capability
// ============================================================================

/// Values that can be projected onto a profile color mapping.
///
/// Colors are not directly encodable profile values: a setter first asks for
/// this mapping and then encodes the mapping itself.
pub trait ColorDict {
    /// Channel mapping in the form the host stores in a profile
    fn color_dict(&self) -> Map<String, Value>;
}

impl ColorDict for Color {
    fn color_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(RED_COMPONENT.to_string(), fraction(self.red));
        dict.insert(GREEN_COMPONENT.to_string(), fraction(self.green));
        dict.insert(BLUE_COMPONENT.to_string(), fraction(self.blue));
        dict.insert(ALPHA_COMPONENT.to_string(), fraction(self.alpha));
        dict.insert(
            COLOR_SPACE.to_string(),
            Value::from(self.color_space.value()),
        );
        dict
    }
}

impl<C: ColorDict + ?Sized> ColorDict for &C {
    fn color_dict(&self) -> Map<String, Value> {
        (**self).color_dict()
    }
}
