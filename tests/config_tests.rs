//! Integration tests for configuration management

use cgpa_tracker::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.records_dir.is_empty(),
        "Default records_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        config.planner.semester_credits > 0.0,
        "Default semester_credits should be positive"
    );
    assert!(
        config.planner.total_semesters > 0,
        "Default total_semesters should be positive"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
records_dir = "./records"
reports_dir = "./reports"

[planner]
semester_credits = 18.0
total_semesters = 12
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.records_dir, "./records");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert!((config.planner.semester_credits - 18.0).abs() < f64::EPSILON);
    assert_eq!(config.planner.total_semesters, 12);
}

#[test]
fn test_config_missing_planner_uses_defaults() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    assert!((config.planner.semester_credits - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.planner.total_semesters, 8);
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml("[logging]\nlevel = \"\"").expect("parse");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.records_dir, defaults.paths.records_dir);
}

#[test]
fn test_merge_defaults_preserves_user_values() {
    let toml_str = r#"
[logging]
level = "error"
file = "/custom/log.txt"

[paths]
records_dir = "/my/records"
reports_dir = "/my/reports"
"#;
    let mut config = Config::from_toml(toml_str).expect("parse");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/log.txt");
    assert_eq!(config.paths.records_dir, "/my/records");
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: Some("/tmp/override.log".to_string()),
        verbose: Some(true),
        records_dir: Some("/override/records".to_string()),
        reports_dir: Some("/override/reports".to_string()),
        semester_credits: Some(15.0),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/tmp/override.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.records_dir, "/override/records");
    assert_eq!(config.paths.reports_dir, "/override/reports");
    assert!((config.planner.semester_credits - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_apply_empty_overrides_changes_nothing() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.logging.level, before.logging.level);
    assert_eq!(config.paths.records_dir, before.paths.records_dir);
    assert!(
        (config.planner.semester_credits - before.planner.semester_credits).abs() < f64::EPSILON
    );
}

#[test]
fn test_get_and_set_by_key() {
    let mut config = Config::from_defaults();

    config.set("level", "info").expect("set level");
    assert_eq!(config.get("level"), Some("info".to_string()));

    config.set("verbose", "true").expect("set verbose");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config
        .set("semester-credits", "17.5")
        .expect("set semester credits");
    assert_eq!(config.get("semester_credits"), Some("17.5".to_string()));

    config.set("total_semesters", "10").expect("set semesters");
    assert_eq!(config.get("total-semesters"), Some("10".to_string()));

    assert!(config.get("unknown").is_none());
    assert!(config.set("unknown", "x").is_err());
}

#[test]
fn test_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("semester_credits", "abc").is_err());
    assert!(config.set("semester_credits", "-5").is_err());
    assert!(config.set("semester_credits", "0").is_err());
    assert!(config.set("total_semesters", "0").is_err());
    assert!(config.set("total_semesters", "eight").is_err());
}

#[test]
fn test_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("set");
    config.unset("level", &defaults).expect("unset");
    assert_eq!(config.logging.level, defaults.logging.level);

    config.set("semester_credits", "10").expect("set");
    config.unset("semester_credits", &defaults).expect("unset");
    assert!(
        (config.planner.semester_credits - defaults.planner.semester_credits).abs()
            < f64::EPSILON
    );

    assert!(config.unset("unknown", &defaults).is_err());
}

#[test]
fn test_display_includes_all_sections() {
    let config = Config::from_defaults();
    let output = config.to_string();

    assert!(output.contains("[logging]"));
    assert!(output.contains("[paths]"));
    assert!(output.contains("[planner]"));
    assert!(output.contains("records_dir"));
    assert!(output.contains("semester_credits"));
}
