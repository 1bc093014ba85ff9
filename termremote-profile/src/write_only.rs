//! Write-only profile change set.
//!
//! [`LocalWriteOnlyProfile`] stages profile property assignments without
//! reading or touching a live profile. Each value is encoded to JSON text the
//! moment it is set, so the staged mapping can be handed as-is to whatever
//! sends it to the host.

use crate::error::Result;
use crate::keys;
use crate::types::TitleComponents;
use serde::Serialize;
use std::collections::BTreeMap;
use termremote_color::ColorDict;

/// Field name -> JSON-encoded value.
pub type PendingChanges = BTreeMap<String, String>;

/// Encoded form of a cleared value.
pub const NULL_VALUE: &str = "null";

/// A set of pending profile property changes.
///
/// Setters overwrite: the last assignment to a key wins. Nothing is sent or
/// validated against a schema here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalWriteOnlyProfile {
    values: PendingChanges,
}

impl LocalWriteOnlyProfile {
    /// Create an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a change set pre-seeded with raw values.
    ///
    /// Every value is encoded immediately; the first value that cannot be
    /// encoded aborts construction with [`ProfileError::Encoding`].
    ///
    /// [`ProfileError::Encoding`]: crate::ProfileError::Encoding
    pub fn with_values<I, K, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        let mut profile = Self::new();
        for (key, value) in values {
            let key = key.into();
            let encoded = serde_json::to_string(&value)?;
            log::trace!("seed {key} = {encoded}");
            profile.values.insert(key, encoded);
        }
        log::debug!("Seeded profile change set with {} value(s)", profile.len());
        Ok(profile)
    }

    /// Stage a raw value under `key`.
    ///
    /// A `None` key is inert: some setters target fields the host does not
    /// have yet and route through here with no key, in which case nothing is
    /// encoded or stored. On an encoding failure the previous value for the
    /// key is left untouched.
    pub fn set_property<T>(&mut self, key: Option<&str>, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let Some(key) = key else {
            log::debug!("Ignoring profile assignment with no field name");
            return Ok(());
        };

        let encoded = serde_json::to_string(value)?;
        log::trace!("set {key} = {encoded}");
        self.values.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Stage a color value under `key`, or clear it with `None`.
    ///
    /// Colors are stored as their channel mapping, never as the color value
    /// itself. `None` stores the literal `null`.
    pub fn set_color_property<C>(&mut self, key: &str, color: Option<&C>) -> Result<()>
    where
        C: ColorDict + ?Sized,
    {
        let encoded = match color {
            None => NULL_VALUE.to_string(),
            Some(color) => serde_json::to_string(&color.color_dict())?,
        };
        log::trace!("set color {key} = {encoded}");
        self.values.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Select which components make up the session title.
    ///
    /// The flags are OR-ed together. [`TitleComponents::CUSTOM`] is documented
    /// as exclusive but combinations are accepted and stored as given.
    pub fn set_title_components<I>(&mut self, components: I) -> Result<()>
    where
        I: IntoIterator<Item = TitleComponents>,
    {
        let bits = components
            .into_iter()
            .fold(TitleComponents::empty(), |acc, c| acc | c);
        if bits.has_conflicting_custom() {
            log::debug!("Title components combine CUSTOM with other flags: {bits:?}");
        }
        self.set_property(Some(keys::TITLE_COMPONENTS), &bits.bits())
    }

    /// Register the function that generates a custom title.
    ///
    /// Only takes effect when the title components include
    /// [`TitleComponents::CUSTOM`]. `identifier` is conventionally a
    /// reverse-domain name such as `com.example.title`.
    pub fn set_title_function(&mut self, display_name: &str, identifier: &str) -> Result<()> {
        self.set_property(Some(keys::TITLE_FUNCTION), &[display_name, identifier])
    }

    /// All staged changes
    pub fn values(&self) -> &PendingChanges {
        &self.values
    }

    /// All staged changes, mutably. Edits made here are what a later
    /// [`values`](Self::values) call sees.
    pub fn values_mut(&mut self) -> &mut PendingChanges {
        &mut self.values
    }

    /// Consume the change set and return its staged changes
    pub fn into_values(self) -> PendingChanges {
        self.values
    }

    /// Number of staged keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is staged
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileError;
    use std::collections::HashMap;
    use termremote_color::Color;

    #[test]
    fn test_new_is_empty() {
        let profile = LocalWriteOnlyProfile::new();
        assert!(profile.is_empty());
        assert!(profile.values().is_empty());
    }

    #[test]
    fn test_with_values_encodes_each_entry() {
        let profile = LocalWriteOnlyProfile::with_values([
            ("Columns", serde_json::json!(80)),
            ("Name", serde_json::json!("Work")),
            ("Tags", serde_json::json!(["a", "b"])),
            ("Nothing", serde_json::Value::Null),
        ])
        .unwrap();

        assert_eq!(profile.values()["Columns"], "80");
        assert_eq!(profile.values()["Name"], "\"Work\"");
        assert_eq!(profile.values()["Tags"], "[\"a\",\"b\"]");
        assert_eq!(profile.values()["Nothing"], "null");
    }

    #[test]
    fn test_with_values_empty() {
        let profile =
            LocalWriteOnlyProfile::with_values(Vec::<(String, serde_json::Value)>::new()).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_with_values_encoding_failure() {
        let mut bad = HashMap::new();
        bad.insert((1, 2), "tuple keys are not JSON object keys");

        let result = LocalWriteOnlyProfile::with_values([("Bad", bad)]);
        assert!(matches!(result, Err(ProfileError::Encoding(_))));
    }

    #[test]
    fn test_set_property_overwrites() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile.set_property(Some("Rows"), &24).unwrap();
        profile.set_property(Some("Rows"), &50).unwrap();

        assert_eq!(profile.len(), 1);
        assert_eq!(profile.values()["Rows"], "50");
    }

    #[test]
    fn test_set_property_none_key_is_inert() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile.set_property(None, &"ignored").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_set_property_null_value() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile.set_property(Some("Badge Text"), &None::<String>).unwrap();
        assert_eq!(profile.values()["Badge Text"], NULL_VALUE);
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile.set_property(Some("Key"), &"before").unwrap();

        let mut bad = HashMap::new();
        bad.insert(vec![1u8], 1);
        assert!(profile.set_property(Some("Key"), &bad).is_err());

        assert_eq!(profile.values()["Key"], "\"before\"");
    }

    #[test]
    fn test_color_none_is_literal_null() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile
            .set_color_property::<Color>("Tab Color", None)
            .unwrap();
        assert_eq!(profile.values()["Tab Color"], "null");
    }

    #[test]
    fn test_color_is_encoded_as_mapping() {
        let mut profile = LocalWriteOnlyProfile::new();
        let color = Color::new(255, 0, 0);
        profile
            .set_color_property("Foreground Color", Some(&color))
            .unwrap();

        let decoded: serde_json::Value =
            serde_json::from_str(&profile.values()["Foreground Color"]).unwrap();
        assert_eq!(decoded, serde_json::Value::Object(color.color_dict()));
        assert_eq!(decoded["Red Component"], 1.0);
    }

    #[test]
    fn test_title_components_sum() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile
            .set_title_components([TitleComponents::SESSION_NAME, TitleComponents::JOB])
            .unwrap();
        assert_eq!(profile.values()[keys::TITLE_COMPONENTS], "3");
    }

    #[test]
    fn test_title_components_custom_combination_accepted() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile
            .set_title_components([TitleComponents::CUSTOM])
            .unwrap();
        assert_eq!(profile.values()[keys::TITLE_COMPONENTS], "16");

        profile
            .set_title_components([TitleComponents::CUSTOM, TitleComponents::HOST])
            .unwrap();
        assert_eq!(profile.values()[keys::TITLE_COMPONENTS], "272");
    }

    #[test]
    fn test_title_components_empty() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile
            .set_title_components(Vec::<TitleComponents>::new())
            .unwrap();
        assert_eq!(profile.values()[keys::TITLE_COMPONENTS], "0");
    }

    #[test]
    fn test_title_function_pair() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile
            .set_title_function("My Title", "com.example.title")
            .unwrap();
        assert_eq!(
            profile.values()[keys::TITLE_FUNCTION],
            "[\"My Title\",\"com.example.title\"]"
        );
    }

    #[test]
    fn test_values_mut_aliases_storage() {
        let mut profile = LocalWriteOnlyProfile::new();
        profile.set_property(Some("Name"), &"one").unwrap();

        profile
            .values_mut()
            .insert("Rows".to_string(), "40".to_string());
        profile.values_mut().remove("Name");

        assert_eq!(profile.values().len(), 1);
        assert_eq!(profile.values()["Rows"], "40");
    }
}
