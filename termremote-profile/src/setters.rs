//! Typed setters for common profile fields.
//!
//! Each setter is a thin wrapper over [`LocalWriteOnlyProfile::set_property`]
//! or [`LocalWriteOnlyProfile::set_color_property`] with a fixed key.

use crate::error::{ProfileError, Result};
use crate::keys;
use crate::types::{
    BackgroundImageMode, CharacterEncoding, CursorType, IconMode, InitialWorkingDirectory,
    OptionKeySends, ThinStrokes, UnicodeNormalization,
};
use crate::write_only::LocalWriteOnlyProfile;
use termremote_color::Color;

impl LocalWriteOnlyProfile {
    // ── Identity ───────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.set_property(Some(keys::NAME), name)
    }

    /// Badge text; `None` clears the badge
    pub fn set_badge_text(&mut self, text: Option<&str>) -> Result<()> {
        self.set_property(Some(keys::BADGE_TEXT), &text)
    }

    pub fn set_icon_mode(&mut self, mode: IconMode) -> Result<()> {
        self.set_property(Some(keys::ICON), &mode.value())
    }

    /// Image shown when the icon mode is [`IconMode::Custom`]
    pub fn set_custom_icon_path(&mut self, path: &str) -> Result<()> {
        self.set_property(Some(keys::CUSTOM_ICON_PATH), path)
    }

    // ── Colors ─────────────────────────────────────────────────────────

    pub fn set_foreground_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::FOREGROUND_COLOR, Some(color))
    }

    pub fn set_background_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::BACKGROUND_COLOR, Some(color))
    }

    pub fn set_bold_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::BOLD_COLOR, Some(color))
    }

    pub fn set_link_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::LINK_COLOR, Some(color))
    }

    pub fn set_selection_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::SELECTION_COLOR, Some(color))
    }

    pub fn set_selected_text_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::SELECTED_TEXT_COLOR, Some(color))
    }

    pub fn set_cursor_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::CURSOR_COLOR, Some(color))
    }

    pub fn set_cursor_text_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::CURSOR_TEXT_COLOR, Some(color))
    }

    pub fn set_badge_color(&mut self, color: &Color) -> Result<()> {
        self.set_color_property(keys::BADGE_COLOR, Some(color))
    }

    /// Tab color; `None` clears it. Only shown while "Use Tab Color" is on.
    pub fn set_tab_color(&mut self, color: Option<&Color>) -> Result<()> {
        self.set_color_property(keys::TAB_COLOR, color)
    }

    pub fn set_use_tab_color(&mut self, enabled: bool) -> Result<()> {
        self.set_property(Some(keys::USE_TAB_COLOR), &enabled)
    }

    /// Underline color; `None` means "same as text"
    pub fn set_underline_color(&mut self, color: Option<&Color>) -> Result<()> {
        self.set_color_property(keys::UNDERLINE_COLOR, color)
    }

    pub fn set_use_underline_color(&mut self, enabled: bool) -> Result<()> {
        self.set_property(Some(keys::USE_UNDERLINE_COLOR), &enabled)
    }

    /// Set ANSI palette entry `index` (0-15).
    pub fn set_ansi_color(&mut self, index: u8, color: &Color) -> Result<()> {
        if index >= keys::ANSI_COLOR_COUNT {
            return Err(ProfileError::Validation(format!(
                "ANSI color index {index} out of range 0..{}",
                keys::ANSI_COLOR_COUNT
            )));
        }
        self.set_color_property(&keys::ansi_color(index), Some(color))
    }

    // ── Text ───────────────────────────────────────────────────────────

    /// Primary font, as `"<postscript name> <size>"` (e.g. `"Menlo-Regular 12"`)
    pub fn set_normal_font(&mut self, font: &str) -> Result<()> {
        self.set_property(Some(keys::NORMAL_FONT), font)
    }

    /// Font for non-ASCII text, same format as the normal font
    pub fn set_non_ascii_font(&mut self, font: &str) -> Result<()> {
        self.set_property(Some(keys::NON_ASCII_FONT), font)
    }

    pub fn set_use_non_ascii_font(&mut self, enabled: bool) -> Result<()> {
        self.set_property(Some(keys::USE_NON_ASCII_FONT), &enabled)
    }

    pub fn set_thin_strokes(&mut self, setting: ThinStrokes) -> Result<()> {
        self.set_property(Some(keys::THIN_STROKES), &setting.value())
    }

    pub fn set_unicode_normalization(&mut self, form: UnicodeNormalization) -> Result<()> {
        self.set_property(Some(keys::UNICODE_NORMALIZATION), &form.value())
    }

    pub fn set_character_encoding(&mut self, encoding: CharacterEncoding) -> Result<()> {
        self.set_property(Some(keys::CHARACTER_ENCODING), &encoding.value())
    }

    // ── Cursor ─────────────────────────────────────────────────────────

    pub fn set_cursor_type(&mut self, cursor: CursorType) -> Result<()> {
        self.set_property(Some(keys::CURSOR_TYPE), &cursor.value())
    }

    pub fn set_blinking_cursor(&mut self, blinking: bool) -> Result<()> {
        self.set_property(Some(keys::BLINKING_CURSOR), &blinking)
    }

    // ── Keyboard ───────────────────────────────────────────────────────

    pub fn set_option_key_sends(&mut self, mode: OptionKeySends) -> Result<()> {
        self.set_property(Some(keys::OPTION_KEY_SENDS), &mode.value())
    }

    pub fn set_right_option_key_sends(&mut self, mode: OptionKeySends) -> Result<()> {
        self.set_property(Some(keys::RIGHT_OPTION_KEY_SENDS), &mode.value())
    }

    // ── Session ────────────────────────────────────────────────────────

    pub fn set_initial_directory_mode(&mut self, mode: InitialWorkingDirectory) -> Result<()> {
        self.set_property(Some(keys::CUSTOM_DIRECTORY), mode.value())
    }

    /// Directory used when the initial directory mode is
    /// [`InitialWorkingDirectory::Custom`]
    pub fn set_custom_directory(&mut self, path: &str) -> Result<()> {
        self.set_property(Some(keys::WORKING_DIRECTORY), path)
    }

    pub fn set_scrollback_lines(&mut self, lines: u32) -> Result<()> {
        self.set_property(Some(keys::SCROLLBACK_LINES), &lines)
    }

    pub fn set_unlimited_scrollback(&mut self, unlimited: bool) -> Result<()> {
        self.set_property(Some(keys::UNLIMITED_SCROLLBACK), &unlimited)
    }

    // ── Window ─────────────────────────────────────────────────────────

    pub fn set_columns(&mut self, columns: u32) -> Result<()> {
        self.set_property(Some(keys::COLUMNS), &columns)
    }

    pub fn set_rows(&mut self, rows: u32) -> Result<()> {
        self.set_property(Some(keys::ROWS), &rows)
    }

    /// Window transparency, 0.0 (opaque) to 1.0
    pub fn set_transparency(&mut self, transparency: f64) -> Result<()> {
        check_fraction("transparency", transparency)?;
        self.set_property(Some(keys::TRANSPARENCY), &transparency)
    }

    /// Background image path; `None` removes the image
    pub fn set_background_image_location(&mut self, path: Option<&str>) -> Result<()> {
        self.set_property(Some(keys::BACKGROUND_IMAGE_LOCATION), &path)
    }

    pub fn set_background_image_mode(&mut self, mode: BackgroundImageMode) -> Result<()> {
        self.set_property(Some(keys::BACKGROUND_IMAGE_MODE), &mode.value())
    }

    /// How strongly the background image shows through, 0.0 to 1.0
    pub fn set_blend(&mut self, blend: f64) -> Result<()> {
        check_fraction("blend", blend)?;
        self.set_property(Some(keys::BLEND), &blend)
    }
}

fn check_fraction(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::Validation(format!(
            "{field} must be between 0.0 and 1.0, got {value}"
        )))
    }
}
