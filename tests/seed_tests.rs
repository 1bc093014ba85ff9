//! Tests for seeding change sets from files and the CLI change-set builder

use std::fs;
use termremote::cli::{ChangeArgs, build_change_set};
use termremote::profile::{LocalWriteOnlyProfile, ProfileError, SeedOptions, keys};

#[test]
fn test_yaml_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work.yaml");
    fs::write(
        &path,
        concat!(
            "Name: Work\n",
            "Columns: 120\n",
            "Title Components: 3\n",
            "Background Color:\n",
            "  Red Component: 0.1\n",
            "  Green Component: 0.1\n",
            "  Blue Component: 0.1\n",
        ),
    )
    .unwrap();

    let profile = LocalWriteOnlyProfile::load_seed(&path, SeedOptions::default()).unwrap();
    assert_eq!(profile.values()[keys::NAME], "\"Work\"");
    assert_eq!(profile.values()[keys::COLUMNS], "120");
    assert_eq!(profile.values()[keys::TITLE_COMPONENTS], "3");
    assert!(profile.values()[keys::BACKGROUND_COLOR].starts_with('{'));
}

#[test]
fn test_seed_with_non_string_key_fails() {
    let err = LocalWriteOnlyProfile::from_yaml_str("? [1, 2]\n: value\n", SeedOptions::default());
    assert!(matches!(err, Err(ProfileError::SeedParse(_))));
}

#[test]
fn test_flags_override_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(&path, r#"{"Rows": 24, "Name": "Seeded"}"#).unwrap();

    let args = ChangeArgs {
        seed: Some(path),
        set: vec!["Rows=50".to_string()],
        ..Default::default()
    };
    let profile = build_change_set(&args).unwrap();

    assert_eq!(profile.values()[keys::ROWS], "50");
    assert_eq!(profile.values()[keys::NAME], "\"Seeded\"");
}

#[test]
fn test_missing_seed_reports_path() {
    let args = ChangeArgs {
        seed: Some("/definitely/not/here.yaml".into()),
        ..Default::default()
    };
    let err = build_change_set(&args).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}
