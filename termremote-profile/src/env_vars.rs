//! `${VAR}` expansion inside seed values.
//!
//! Expansion runs on string values after the seed document has been parsed,
//! so whatever a variable holds ends up as text inside that one value. It
//! can never add keys or change the document's structure. Mapping keys are
//! never expanded.
//!
//! Only a small set of variables (plus `TERMREMOTE_*` and `LC_*` names) is
//! expanded unless the caller passes `allow_all`. This keeps a seed from
//! elsewhere from copying arbitrary environment values into a profile.

use regex::{Captures, Regex};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `${NAME}`, `${NAME:-fallback}`, or the escaped form `$${NAME}`
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(\$?)\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
        .expect("variable reference pattern is valid")
});

/// Variables a seed may always reference.
pub const ALLOWED_ENV_VARS: &[&str] = &[
    "HOME", "USER", "USERNAME", "LOGNAME", "SHELL", "TERM", "LANG", "TMPDIR", "HOSTNAME",
];

/// True if `name` may be expanded without `allow_all`.
pub fn is_env_var_allowed(name: &str) -> bool {
    ALLOWED_ENV_VARS.contains(&name) || name.starts_with("TERMREMOTE_") || name.starts_with("LC_")
}

/// Expand variable references in one piece of text.
///
/// An unset variable uses its `:-fallback` if it has one, and otherwise the
/// reference is kept as written. `$${NAME}` always yields the literal
/// `${NAME}`. Text without references is returned borrowed.
pub fn expand_references(text: &str, allow_all: bool) -> Cow<'_, str> {
    REFERENCE.replace_all(text, |caps: &Captures| {
        let reference = &caps[0];
        if !caps[1].is_empty() {
            return reference[1..].to_string();
        }

        let name = &caps[2];
        if !allow_all && !is_env_var_allowed(name) {
            log::warn!("Seed reference to ${{{name}}} is not allowlisted and was not expanded");
            return reference.to_string();
        }

        std::env::var(name)
            .ok()
            .or_else(|| caps.get(3).map(|fallback| fallback.as_str().to_string()))
            .unwrap_or_else(|| reference.to_string())
    })
}

/// Expand references in every string inside `value`, recursing into arrays
/// and object values.
pub fn substitute_in_value(value: &mut Value, allow_all: bool) {
    match value {
        Value::String(text) => {
            if REFERENCE.is_match(text) {
                *text = expand_references(text, allow_all).into_owned();
            }
        }
        Value::Array(items) => {
            for item in items {
                substitute_in_value(item, allow_all);
            }
        }
        Value::Object(fields) => {
            for field in fields.values_mut() {
                substitute_in_value(field, allow_all);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_used_when_unset() {
        let out = expand_references("${TERMREMOTE_TEST_SURELY_UNSET:-/tmp}/logs", false);
        assert_eq!(out, "/tmp/logs");
    }

    #[test]
    fn test_unset_without_fallback_is_kept() {
        let out = expand_references("${TERMREMOTE_TEST_SURELY_UNSET}", false);
        assert_eq!(out, "${TERMREMOTE_TEST_SURELY_UNSET}");
    }

    #[test]
    fn test_escaped_reference() {
        assert_eq!(expand_references("$${HOME}", false), "${HOME}");
        assert_eq!(expand_references("cost: $5", false), "cost: $5");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(expand_references("no refs", false), Cow::Borrowed(_)));
    }

    #[test]
    fn test_non_allowlisted_kept_unless_allow_all() {
        assert_eq!(expand_references("${SECRET_TOKEN:-x}", false), "${SECRET_TOKEN:-x}");
        assert_eq!(expand_references("${SECRET_TOKEN_SURELY_UNSET:-x}", true), "x");
    }

    #[test]
    fn test_allowlist() {
        assert!(is_env_var_allowed("HOME"));
        assert!(is_env_var_allowed("TERMREMOTE_THEME"));
        assert!(is_env_var_allowed("LC_ALL"));
        assert!(!is_env_var_allowed("AWS_SECRET_ACCESS_KEY"));
    }

    #[test]
    fn test_value_walk_touches_only_strings() {
        let mut value = json!({
            "dir": "${TERMREMOTE_TEST_SURELY_UNSET:-/srv}",
            "list": ["${TERMREMOTE_TEST_SURELY_UNSET:-a}", 7, null],
            "${TERMREMOTE_TEST_SURELY_UNSET:-key}": true,
        });
        substitute_in_value(&mut value, false);

        assert_eq!(
            value,
            json!({
                "dir": "/srv",
                "list": ["a", 7, null],
                "${TERMREMOTE_TEST_SURELY_UNSET:-key}": true,
            })
        );
    }
}
