//! Color values for terminal profile remote control.
//!
//! A profile stores colors as a mapping of channel fractions rather than as a
//! plain scalar, so colors cannot be handed straight to a JSON encoder. This
//! crate provides:
//!
//! - [`Color`]: an RGBA color tagged with its [`ColorSpace`]
//! - [`ColorDict`]: the capability of projecting a color onto that mapping
//! - [`ColorError`]: failures parsing hex strings or channel mappings

pub mod color;
pub mod error;

pub use color::{
    ALPHA_COMPONENT, BLUE_COMPONENT, COLOR_SPACE, Color, ColorDict, ColorSpace, GREEN_COMPONENT,
    RED_COMPONENT,
};
pub use error::ColorError;
