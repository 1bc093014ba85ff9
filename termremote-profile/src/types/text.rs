//! Text handling option types: unicode normalization and character encoding.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unicode Normalization
// ============================================================================

/// Normalization form applied to text received from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeNormalization {
    /// Leave text as received (default)
    #[default]
    None,
    /// Canonical composition
    Nfc,
    /// Canonical decomposition
    Nfd,
    /// HFS+ variant of NFD used by macOS file names
    HfsPlus,
}

impl UnicodeNormalization {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::Nfc => 1,
            Self::Nfd => 2,
            Self::HfsPlus => 3,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::HfsPlus => "HFS+",
        }
    }

    /// All available forms for UI iteration
    pub fn all() -> &'static [UnicodeNormalization] {
        &[
            UnicodeNormalization::None,
            UnicodeNormalization::Nfc,
            UnicodeNormalization::Nfd,
            UnicodeNormalization::HfsPlus,
        ]
    }
}

// ============================================================================
// Character Encoding
// ============================================================================

/// Character encoding used to talk to the session's process.
///
/// Values are the host platform's string-encoding numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CharacterEncoding {
    Ascii,
    NextStep,
    JapaneseEuc,
    #[default]
    Utf8,
    IsoLatin1,
    Symbol,
    NonLossyAscii,
    ShiftJis,
    IsoLatin2,
    Unicode,
    WindowsCp1251,
    WindowsCp1252,
    WindowsCp1253,
    WindowsCp1254,
    WindowsCp1250,
    Iso2022Jp,
    MacOsRoman,
    Utf16BigEndian,
    Utf16LittleEndian,
    Utf32,
    Utf32BigEndian,
    Utf32LittleEndian,
}

impl CharacterEncoding {
    /// Value stored in the profile
    pub fn value(&self) -> i64 {
        match self {
            Self::Ascii => 1,
            Self::NextStep => 2,
            Self::JapaneseEuc => 3,
            Self::Utf8 => 4,
            Self::IsoLatin1 => 5,
            Self::Symbol => 6,
            Self::NonLossyAscii => 7,
            Self::ShiftJis => 8,
            Self::IsoLatin2 => 9,
            Self::Unicode => 10,
            Self::WindowsCp1251 => 11,
            Self::WindowsCp1252 => 12,
            Self::WindowsCp1253 => 13,
            Self::WindowsCp1254 => 14,
            Self::WindowsCp1250 => 15,
            Self::Iso2022Jp => 21,
            Self::MacOsRoman => 30,
            Self::Utf16BigEndian => 0x9000_0100,
            Self::Utf16LittleEndian => 0x9400_0100,
            Self::Utf32 => 0x8c00_0100,
            Self::Utf32BigEndian => 0x9800_0100,
            Self::Utf32LittleEndian => 0x9c00_0100,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ascii => "ASCII",
            Self::NextStep => "NEXTSTEP",
            Self::JapaneseEuc => "Japanese (EUC)",
            Self::Utf8 => "UTF-8",
            Self::IsoLatin1 => "Western (ISO Latin 1)",
            Self::Symbol => "Symbol",
            Self::NonLossyAscii => "Non-lossy ASCII",
            Self::ShiftJis => "Japanese (Shift JIS)",
            Self::IsoLatin2 => "Central European (ISO Latin 2)",
            Self::Unicode => "Unicode (UTF-16)",
            Self::WindowsCp1251 => "Cyrillic (Windows)",
            Self::WindowsCp1252 => "Western (Windows Latin 1)",
            Self::WindowsCp1253 => "Greek (Windows)",
            Self::WindowsCp1254 => "Turkish (Windows Latin 5)",
            Self::WindowsCp1250 => "Central European (Windows Latin 2)",
            Self::Iso2022Jp => "Japanese (ISO 2022-JP)",
            Self::MacOsRoman => "Western (Mac OS Roman)",
            Self::Utf16BigEndian => "Unicode (UTF-16BE)",
            Self::Utf16LittleEndian => "Unicode (UTF-16LE)",
            Self::Utf32 => "Unicode (UTF-32)",
            Self::Utf32BigEndian => "Unicode (UTF-32BE)",
            Self::Utf32LittleEndian => "Unicode (UTF-32LE)",
        }
    }

    /// All available encodings for UI iteration
    pub fn all() -> &'static [CharacterEncoding] {
        &[
            CharacterEncoding::Ascii,
            CharacterEncoding::NextStep,
            CharacterEncoding::JapaneseEuc,
            CharacterEncoding::Utf8,
            CharacterEncoding::IsoLatin1,
            CharacterEncoding::Symbol,
            CharacterEncoding::NonLossyAscii,
            CharacterEncoding::ShiftJis,
            CharacterEncoding::IsoLatin2,
            CharacterEncoding::Unicode,
            CharacterEncoding::WindowsCp1251,
            CharacterEncoding::WindowsCp1252,
            CharacterEncoding::WindowsCp1253,
            CharacterEncoding::WindowsCp1254,
            CharacterEncoding::WindowsCp1250,
            CharacterEncoding::Iso2022Jp,
            CharacterEncoding::MacOsRoman,
            CharacterEncoding::Utf16BigEndian,
            CharacterEncoding::Utf16LittleEndian,
            CharacterEncoding::Utf32,
            CharacterEncoding::Utf32BigEndian,
            CharacterEncoding::Utf32LittleEndian,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encoding_values_unique() {
        let values: HashSet<i64> = CharacterEncoding::all().iter().map(|e| e.value()).collect();
        assert_eq!(values.len(), CharacterEncoding::all().len());
    }

    #[test]
    fn test_utf8_is_default() {
        assert_eq!(CharacterEncoding::default().value(), 4);
    }

    #[test]
    fn test_normalization_values() {
        assert_eq!(UnicodeNormalization::HfsPlus.value(), 3);
        assert_eq!(UnicodeNormalization::default(), UnicodeNormalization::None);
    }
}
