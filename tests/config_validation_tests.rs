//! Config Validation Tests
//!
//! Typo detection, limit validation and file round-trips for
//! `GenoviveConfig`, exercised independently from the engine.

use genovive::config::validation::{
    known_config_keys, suggest_correction, validate_plausible_limits, validate_unknown_keys,
};
use genovive::config::{ConfigError, GenoviveConfig, Limit};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_clinic_section_warns_with_suggestion() {
    let toml_str = r#"
[clinic]
naem = "North Clinic"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("naem"));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("clinic.name"));
}

#[test]
fn typo_in_limit_bound_suggests_bound() {
    let toml_str = r#"
[input_limits.bmi]
mx = 45.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("input_limits.bmi.max")
    );
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[clinic]
name = "North Clinic"
disclaimer = "For discussion with your clinician."

[input_limits.age]
min = 20.0
max = 45.0

[input_limits.estradiol]
min = 0.0
max = 800.0

[input_limits.cycle_length_days]
min = 21.0
max = 35.0

[report]
include_timeline = false
include_gene_insights = true

[export]
directory = "out"
plan_file = "plan.txt"
tests_file = "tests.csv"
medicines_file = "medicines.csv"
next_steps_file = "steps.csv"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        warnings.is_empty(),
        "Valid config should produce 0 warnings, got: {:?}",
        warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
    );
}

#[test]
fn unknown_section_warns() {
    let toml_str = r#"
[scoring]
threshold = 60
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(!warnings.is_empty());
    assert!(warnings.iter().any(|w| w.field == "scoring"));
}

#[test]
fn multiple_typos_all_warned() {
    let toml_str = r#"
[clinic]
naem = "Test"

[report]
include_timline = false
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(
        warnings.len(),
        2,
        "Expected 2 warnings for 2 typos, got {}",
        warnings.len()
    );
    assert!(warnings
        .iter()
        .any(|w| w.suggestion.as_deref() == Some("report.include_timeline")));
}

#[test]
fn empty_toml_produces_zero_warnings() {
    assert!(validate_unknown_keys("").is_empty());
}

#[test]
fn known_keys_set_is_complete() {
    let config = GenoviveConfig::default();
    let toml_str = config.to_toml().expect("Default config should serialize");
    let warnings = validate_unknown_keys(&toml_str);
    assert!(
        warnings.is_empty(),
        "Default config serialization should produce 0 unknown-key warnings, got: {:?}",
        warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
    );
}

#[test]
fn suggest_correction_finds_close_match() {
    let known = known_config_keys();
    let s = suggest_correction("export.medicine_file", &known);
    assert_eq!(s.as_deref(), Some("export.medicines_file"));
}

#[test]
fn suggest_correction_returns_none_for_garbage() {
    let known = known_config_keys();
    let s = suggest_correction("zzz_completely_invalid_xyz_12345", &known);
    assert!(s.is_none(), "Garbage string should not match anything");
}

#[test]
fn unknown_keys_are_not_fatal() {
    let config = GenoviveConfig::from_toml_str(
        r#"
[clinic]
naem = "Typo"
"#,
    )
    .expect("Unknown keys should only warn");
    assert_eq!(config.clinic.name, "Genovive");
}

// ============================================================================
// Limit Validation
// ============================================================================

#[test]
fn all_defaults_pass_validation() {
    let config = GenoviveConfig::default();
    assert!(
        validate_plausible_limits(&config).is_empty(),
        "Default limits should be plausible"
    );
    assert!(
        config.validate().is_ok(),
        "Default config must always pass full validation"
    );
}

#[test]
fn inverted_age_limit_is_error() {
    let mut config = GenoviveConfig::default();
    config.input_limits.age = Limit::new(50.0, 18.0);
    match config.validate() {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("input_limits.age")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn equal_bounds_are_error() {
    let mut config = GenoviveConfig::default();
    config.input_limits.bmi = Limit::new(22.0, 22.0);
    assert!(config.validate().is_err());
}

#[test]
fn negative_hormone_floor_is_error() {
    let mut config = GenoviveConfig::default();
    config.input_limits.amh = Limit::new(-1.0, 15.0);
    match config.validate() {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("input_limits.amh.min")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn infinite_limit_is_error() {
    let mut config = GenoviveConfig::default();
    config.input_limits.estradiol = Limit::new(0.0, f64::INFINITY);
    assert!(config.validate().is_err());
}

#[test]
fn empty_export_file_name_is_error() {
    let mut config = GenoviveConfig::default();
    config.export.tests_file = "  ".to_string();
    match config.validate() {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("export.tests_file")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn empty_clinic_name_is_error() {
    let mut config = GenoviveConfig::default();
    config.clinic.name = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn several_errors_are_reported_together() {
    let mut config = GenoviveConfig::default();
    config.input_limits.fsh = Limit::new(10.0, 1.0);
    config.export.plan_file = String::new();
    match config.validate() {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn implausible_cycle_limit_is_warning_only() {
    let mut config = GenoviveConfig::default();
    config.input_limits.cycle_length_days = Limit::new(21.0, 90.0);
    let warnings = validate_plausible_limits(&config);
    assert!(warnings
        .iter()
        .any(|w| w.field == "input_limits.cycle_length_days.max"));
    assert!(config.validate().is_ok());
}

// ============================================================================
// File Round-trips
// ============================================================================

#[test]
fn config_roundtrip_preserves_values() {
    let mut original = GenoviveConfig::default();
    original.clinic.name = "Roundtrip Clinic".to_string();
    original.input_limits.age = Limit::new(21.0, 44.0);
    original.report.include_timeline = false;

    let toml_str = original.to_toml().expect("Serialization should work");
    let roundtripped =
        GenoviveConfig::from_toml_str(&toml_str).expect("Deserialization should work");

    assert_eq!(roundtripped, original);
}

#[test]
fn save_and_load_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("genovive.toml");

    let mut original = GenoviveConfig::default();
    original.export.plan_file = "plan.txt".to_string();
    original.save_to_file(&path).expect("save");

    let loaded = GenoviveConfig::load_from_file(&path).expect("load");
    assert_eq!(loaded.export.plan_file, "plan.txt");
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[clinic\nname = 1").expect("write");

    match GenoviveConfig::load_from_file(&path) {
        Err(ConfigError::Parse(p, _)) => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        GenoviveConfig::load_from_file(&path),
        Err(ConfigError::Io(_, _))
    ));
}

#[test]
fn invalid_limits_in_file_fail_to_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad_limits.toml");
    std::fs::write(
        &path,
        r#"
[input_limits.lh]
min = 30.0
max = 5.0
"#,
    )
    .expect("write");
    assert!(matches!(
        GenoviveConfig::load_from_file(&path),
        Err(ConfigError::Validation(_))
    ));
}
