//! Profile property keys understood by the host.
//!
//! Only the keys that have typed setters are listed here; any other key can
//! still be staged through the generic setters.

// ── Identity ───────────────────────────────────────────────────────────

pub const NAME: &str = "Name";
pub const BADGE_TEXT: &str = "Badge Text";
pub const ICON: &str = "Icon";
pub const CUSTOM_ICON_PATH: &str = "Custom Icon Path";

// ── Title ──────────────────────────────────────────────────────────────

pub const TITLE_COMPONENTS: &str = "Title Components";
pub const TITLE_FUNCTION: &str = "Title Function";

// ── Colors ─────────────────────────────────────────────────────────────

pub const FOREGROUND_COLOR: &str = "Foreground Color";
pub const BACKGROUND_COLOR: &str = "Background Color";
pub const BOLD_COLOR: &str = "Bold Color";
pub const LINK_COLOR: &str = "Link Color";
pub const SELECTION_COLOR: &str = "Selection Color";
pub const SELECTED_TEXT_COLOR: &str = "Selected Text Color";
pub const CURSOR_COLOR: &str = "Cursor Color";
pub const CURSOR_TEXT_COLOR: &str = "Cursor Text Color";
pub const BADGE_COLOR: &str = "Badge Color";
pub const TAB_COLOR: &str = "Tab Color";
pub const USE_TAB_COLOR: &str = "Use Tab Color";
pub const UNDERLINE_COLOR: &str = "Underline Color";
pub const USE_UNDERLINE_COLOR: &str = "Use Underline Color";

/// Number of ANSI palette entries a profile carries.
pub const ANSI_COLOR_COUNT: u8 = 16;

/// Key of ANSI palette entry `index` (`"Ansi 0 Color"` .. `"Ansi 15 Color"`).
pub fn ansi_color(index: u8) -> String {
    format!("Ansi {index} Color")
}

// ── Text ───────────────────────────────────────────────────────────────

pub const NORMAL_FONT: &str = "Normal Font";
pub const NON_ASCII_FONT: &str = "Non Ascii Font";
pub const USE_NON_ASCII_FONT: &str = "Use Non-ASCII Font";
pub const THIN_STROKES: &str = "Thin Strokes";
pub const UNICODE_NORMALIZATION: &str = "Unicode Normalization";
pub const CHARACTER_ENCODING: &str = "Character Encoding";

// ── Cursor ─────────────────────────────────────────────────────────────

pub const CURSOR_TYPE: &str = "Cursor Type";
pub const BLINKING_CURSOR: &str = "Blinking Cursor";

// ── Keyboard ───────────────────────────────────────────────────────────

pub const OPTION_KEY_SENDS: &str = "Option Key Sends";
pub const RIGHT_OPTION_KEY_SENDS: &str = "Right Option Key Sends";

// ── Session ────────────────────────────────────────────────────────────

pub const CUSTOM_DIRECTORY: &str = "Custom Directory";
pub const WORKING_DIRECTORY: &str = "Working Directory";
pub const SCROLLBACK_LINES: &str = "Scrollback Lines";
pub const UNLIMITED_SCROLLBACK: &str = "Unlimited Scrollback";

// ── Window ─────────────────────────────────────────────────────────────

pub const COLUMNS: &str = "Columns";
pub const ROWS: &str = "Rows";
pub const TRANSPARENCY: &str = "Transparency";
pub const BACKGROUND_IMAGE_LOCATION: &str = "Background Image Location";
pub const BACKGROUND_IMAGE_MODE: &str = "Background Image Mode";
pub const BLEND: &str = "Blend";
