//! Seeding a change set from a YAML or JSON document.
//!
//! A seed is a flat mapping of profile field names to raw values:
//!
//! ```yaml
//! Name: Work
//! Columns: 120
//! Badge Text: "${USER}@prod"
//! Title Function: ["My Title", "com.example.title"]
//! ```
//!
//! `${VAR}` references inside string values are expanded after parsing
//! (see [`expand_references`]). An expanded value stays a string even when
//! it looks like a number.
//!
//! [`expand_references`]: crate::expand_references

use crate::env_vars::substitute_in_value;
use crate::error::{ProfileError, Result};
use crate::write_only::LocalWriteOnlyProfile;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Options controlling how a seed document is read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Expand every `${VAR}`, not only allowlisted ones
    pub allow_all_env_vars: bool,
}

impl SeedOptions {
    fn expand<'a>(self, values: impl IntoIterator<Item = &'a mut Value>) {
        for value in values {
            substitute_in_value(value, self.allow_all_env_vars);
        }
    }
}

impl LocalWriteOnlyProfile {
    /// Seed from a YAML mapping. An empty document yields an empty change set.
    pub fn from_yaml_str(yaml: &str, options: SeedOptions) -> Result<Self> {
        let document: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml)?;

        let mut values: BTreeMap<String, Value> = match document {
            serde_yaml_ng::Value::Null => BTreeMap::new(),
            mapping @ serde_yaml_ng::Value::Mapping(_) => serde_yaml_ng::from_value(mapping)?,
            other => return Err(ProfileError::SeedFormat(describe_yaml(&other).to_string())),
        };
        options.expand(values.values_mut());
        Self::with_values(values)
    }

    /// Seed from a JSON object.
    pub fn from_json_str(json: &str, options: SeedOptions) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(mut map) => {
                options.expand(map.values_mut());
                Self::with_values(map)
            }
            other => Err(ProfileError::SeedFormat(format!(
                "expected a JSON object, found {}",
                describe_json(&other)
            ))),
        }
    }

    /// Seed from a file; `.json` files are read as JSON, anything else as YAML.
    pub fn load_seed(path: &Path, options: SeedOptions) -> Result<Self> {
        log::info!("Loading profile seed from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents, options)
        } else {
            Self::from_yaml_str(&contents, options)
        }
    }
}

fn describe_yaml(value: &serde_yaml_ng::Value) -> &'static str {
    match value {
        serde_yaml_ng::Value::Null => "expected a YAML mapping, found null",
        serde_yaml_ng::Value::Bool(_) => "expected a YAML mapping, found a boolean",
        serde_yaml_ng::Value::Number(_) => "expected a YAML mapping, found a number",
        serde_yaml_ng::Value::String(_) => "expected a YAML mapping, found a string",
        serde_yaml_ng::Value::Sequence(_) => "expected a YAML mapping, found a sequence",
        serde_yaml_ng::Value::Mapping(_) => "expected a YAML mapping",
        serde_yaml_ng::Value::Tagged(_) => "expected a YAML mapping, found a tagged value",
    }
}

fn describe_json(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_seed() {
        let profile = LocalWriteOnlyProfile::from_yaml_str(
            "Name: Work\nColumns: 120\nTitle Function: [\"My Title\", \"com.example.title\"]\n",
            SeedOptions::default(),
        )
        .unwrap();

        assert_eq!(profile.values()["Name"], "\"Work\"");
        assert_eq!(profile.values()["Columns"], "120");
        assert_eq!(
            profile.values()["Title Function"],
            "[\"My Title\",\"com.example.title\"]"
        );
    }

    #[test]
    fn test_yaml_nested_and_null() {
        let profile = LocalWriteOnlyProfile::from_yaml_str(
            "Tab Color: ~\nBackground Color:\n  Red Component: 0.5\n",
            SeedOptions::default(),
        )
        .unwrap();

        assert_eq!(profile.values()["Tab Color"], "null");
        assert_eq!(
            profile.values()["Background Color"],
            "{\"Red Component\":0.5}"
        );
    }

    #[test]
    fn test_empty_yaml_is_empty() {
        let profile = LocalWriteOnlyProfile::from_yaml_str("", SeedOptions::default()).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_yaml_not_a_mapping() {
        let err = LocalWriteOnlyProfile::from_yaml_str("- a\n- b\n", SeedOptions::default());
        assert!(matches!(err, Err(ProfileError::SeedFormat(_))));
    }

    #[test]
    fn test_yaml_syntax_error() {
        let err = LocalWriteOnlyProfile::from_yaml_str("Name: [unclosed", SeedOptions::default());
        assert!(matches!(err, Err(ProfileError::SeedParse(_))));
    }

    #[test]
    fn test_json_seed() {
        let profile = LocalWriteOnlyProfile::from_json_str(
            r#"{"Rows": 40, "Blinking Cursor": true}"#,
            SeedOptions::default(),
        )
        .unwrap();

        assert_eq!(profile.values()["Rows"], "40");
        assert_eq!(profile.values()["Blinking Cursor"], "true");
    }

    #[test]
    fn test_json_not_an_object() {
        let err = LocalWriteOnlyProfile::from_json_str("[1, 2]", SeedOptions::default());
        assert!(matches!(err, Err(ProfileError::SeedFormat(_))));

        let err = LocalWriteOnlyProfile::from_json_str("{", SeedOptions::default());
        assert!(matches!(err, Err(ProfileError::Encoding(_))));
    }

    #[test]
    fn test_seed_substitutes_defaults() {
        let profile = LocalWriteOnlyProfile::from_yaml_str(
            "Working Directory: \"${TERMREMOTE_TEST_SURELY_UNSET:-/srv/app}\"\n",
            SeedOptions::default(),
        )
        .unwrap();
        assert_eq!(profile.values()["Working Directory"], "\"/srv/app\"");
    }

    #[test]
    fn test_expanded_backslashes_stay_in_value() {
        // SAFETY: `set_var` is `unsafe` in Rust 2024 because it is not
        // thread-safe. The variable name is unique to this test and nothing
        // else reads it.
        unsafe {
            std::env::set_var("TERMREMOTE_SEED_TEST_DIR", r"C:\Users\me");
        }

        let profile = LocalWriteOnlyProfile::from_json_str(
            r#"{"Working Directory": "${TERMREMOTE_SEED_TEST_DIR}"}"#,
            SeedOptions::default(),
        )
        .unwrap();
        assert_eq!(
            profile.values()["Working Directory"],
            r#""C:\\Users\\me""#
        );
    }

    #[test]
    fn test_expanded_newline_cannot_add_keys() {
        // SAFETY: see `test_expanded_backslashes_stay_in_value`.
        unsafe {
            std::env::set_var("TERMREMOTE_SEED_TEST_NAME", "Work\nColumns: 999");
        }

        let profile = LocalWriteOnlyProfile::from_yaml_str(
            "Name: ${TERMREMOTE_SEED_TEST_NAME}\n",
            SeedOptions::default(),
        )
        .unwrap();
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.values()["Name"], "\"Work\\nColumns: 999\"");
    }

    #[test]
    fn test_expanded_number_stays_string() {
        let profile = LocalWriteOnlyProfile::from_yaml_str(
            "Columns: \"${TERMREMOTE_TEST_SURELY_UNSET:-120}\"\nRows: 40\n",
            SeedOptions::default(),
        )
        .unwrap();
        assert_eq!(profile.values()["Columns"], "\"120\"");
        assert_eq!(profile.values()["Rows"], "40");
    }

    #[test]
    fn test_load_seed_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("seed.JSON");
        fs::write(&json_path, r#"{"Rows": 30}"#).unwrap();
        let profile = LocalWriteOnlyProfile::load_seed(&json_path, SeedOptions::default()).unwrap();
        assert_eq!(profile.values()["Rows"], "30");

        let yaml_path = dir.path().join("seed.yaml");
        fs::write(&yaml_path, "Rows: 31\n").unwrap();
        let profile = LocalWriteOnlyProfile::load_seed(&yaml_path, SeedOptions::default()).unwrap();
        assert_eq!(profile.values()["Rows"], "31");
    }

    #[test]
    fn test_load_seed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = LocalWriteOnlyProfile::load_seed(&missing, SeedOptions::default());
        assert!(matches!(err, Err(ProfileError::Io { .. })));
    }
}
