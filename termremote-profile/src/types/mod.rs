//! Profile option enumerations.
//!
//! Split into focused sub-modules by domain:
//! - `appearance`: background image mode, cursor type, thin strokes, icon mode
//! - `input`: option key behavior
//! - `session`: initial working directory policy
//! - `text`: unicode normalization and character encoding
//! - `title`: title component flags
//!
//! Every enum reports the value the host stores for it via `value()`.

pub mod appearance;
pub mod input;
pub mod session;
pub mod text;
pub mod title;

pub use appearance::{BackgroundImageMode, CursorType, IconMode, ThinStrokes};
pub use input::OptionKeySends;
pub use session::InitialWorkingDirectory;
pub use text::{CharacterEncoding, UnicodeNormalization};
pub use title::TitleComponents;
