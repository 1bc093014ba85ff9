//! Profile configuration types for remote-controlling a terminal emulator.
//!
//! This crate provides:
//!
//! - Profile option enumerations (cursor, background image, encoding, ...)
//! - [`TitleComponents`] flags for composing session titles
//! - [`LocalWriteOnlyProfile`], a write-only set of pending property changes
//!   encoded as JSON text, ready for a sender to apply to a live profile
//! - Seeding change sets from YAML or JSON documents
//! - [`ProfileGuid`] and the [`ProfileError`] kinds shared with senders

mod env_vars;
pub mod error;
pub mod guid;
pub mod keys;
pub mod seed;
mod setters;
pub mod types;
pub mod write_only;

pub use env_vars::{ALLOWED_ENV_VARS, expand_references, is_env_var_allowed, substitute_in_value};
pub use error::{ProfileError, Result};
pub use guid::ProfileGuid;
pub use seed::SeedOptions;
pub use types::{
    BackgroundImageMode, CharacterEncoding, CursorType, IconMode, InitialWorkingDirectory,
    OptionKeySends, ThinStrokes, TitleComponents, UnicodeNormalization,
};
pub use write_only::{LocalWriteOnlyProfile, NULL_VALUE, PendingChanges};

// Color types are part of the setter signatures
pub use termremote_color::{Color, ColorDict, ColorError, ColorSpace};
