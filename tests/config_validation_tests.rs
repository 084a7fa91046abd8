//! Config Validation Tests
//!
//! Exercises typo detection, range validation and file loading of
//! `AdvisorConfig` independently of the session pipeline.

use dairy_advisor::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use dairy_advisor::config::{AdvisorConfig, ConfigError};
use std::io::Write;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_controls_warns_with_suggestion() {
    let toml_str = r#"
[controls]
feed_max_kg_per_dya = 18.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("feed_max_kg_per_dya"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("controls.feed_max_kg_per_day")
    );
}

#[test]
fn threshold_keys_are_reported_not_applied() {
    let toml_str = "[thresholds]\nemission_threshold = 1.2\ncost_threshold = 0.40\n";
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 3, "{warnings:?}");
    assert!(warnings.iter().all(|w| w.field.starts_with("thresholds")));
    assert!(warnings.iter().all(|w| w.suggestion.is_none()));

    let config = AdvisorConfig::from_toml_str(toml_str).expect("threshold keys only warn");
    assert!((config.thresholds.emission_threshold - 1.5).abs() < f64::EPSILON);
    assert!((config.thresholds.cost_threshold - 0.35).abs() < f64::EPSILON);
}

#[test]
fn typo_in_session_section_warns() {
    let toml_str = r#"
[session]
history_capacty = 6
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("session.history_capacity")
    );
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[controls]
feed_max_kg_per_day = 20.0
nitrogen_max_kg_per_ha = 300.0

[seed]
concentrate_feed = 8.08
nitrogen_rate = 250.0
feed_cost_per_kg = 0.35

[chart]
width = 500.0
height = 300.0
padding = 40.0
yield_min = 8000.0
yield_max = 9500.0
cost_min = 0.25
cost_max = 0.5

[session]
history_capacity = 4
max_log_entries = 500
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        warnings.is_empty(),
        "Valid config should produce 0 warnings, got: {:?}",
        warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
    );
    let config = AdvisorConfig::from_toml_str(toml_str).expect("valid config");
    assert_eq!(config, AdvisorConfig::default());
}

#[test]
fn unknown_section_warns_without_suggestion() {
    let warnings = validate_unknown_keys("[irrigation]\nlitres_per_day = 40\n");
    assert!(warnings.iter().any(|w| w.field == "irrigation"));
    assert!(warnings.iter().all(|w| w.suggestion.is_none()));
}

#[test]
fn suggestion_requires_close_match() {
    let known = known_config_keys();
    assert_eq!(
        suggest_correction("chart.widht", &known).as_deref(),
        Some("chart.width")
    );
    assert_eq!(suggest_correction("completely.different", &known), None);
}

#[test]
fn unknown_keys_do_not_fail_the_load() {
    let config = AdvisorConfig::from_toml_str("[session]\nmax_log_entires = 50\n")
        .expect("typos only warn");
    // The misspelt key is ignored, the default stays in force
    assert_eq!(config.session.max_log_entries, 500);
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn default_config_has_no_range_errors() {
    let (errors, warnings) = validate_physical_ranges(&AdvisorConfig::default());
    assert!(errors.is_empty(), "{errors:?}");
    assert!(warnings.is_empty());
}

#[test]
fn nitrogen_bound_accepts_up_to_500() {
    let config = AdvisorConfig::from_toml_str("[controls]\nnitrogen_max_kg_per_ha = 500.0\n")
        .expect("500 is the ceiling");
    assert!((config.controls.nitrogen_max_kg_per_ha - 500.0).abs() < f64::EPSILON);

    let err = AdvisorConfig::from_toml_str("[controls]\nnitrogen_max_kg_per_ha = 600.0\n")
        .expect_err("600 exceeds the ceiling");
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn inverted_chart_domain_is_rejected() {
    let err = AdvisorConfig::from_toml_str("[chart]\nyield_min = 9500.0\nyield_max = 8000.0\n")
        .expect_err("inverted domain");
    match err {
        ConfigError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("yield_max")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn seed_outside_bounds_is_rejected() {
    let err = AdvisorConfig::from_toml_str("[seed]\nconcentrate_feed = 25.0\n")
        .expect_err("seed above feed bound");
    assert!(err.to_string().contains("seed.concentrate_feed"));
}

#[test]
fn all_problems_reported_together() {
    let toml_str = r#"
[chart]
padding = 200.0

[session]
history_capacity = 0
"#;
    match AdvisorConfig::from_toml_str(toml_str).expect_err("two problems") {
        ConfigError::Validation(errors) => assert!(errors.len() >= 2, "{errors:?}"),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let err = AdvisorConfig::from_toml_str("[chart]\nwidth = \"wide\"\n")
        .expect_err("string width");
    assert!(matches!(err, ConfigError::Parse(..)));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_roundtrips_effective_config() {
    let mut config = AdvisorConfig::default();
    config.chart.width = 640.0;
    config.session.history_capacity = 6;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(config.to_toml().expect("serialize").as_bytes())
        .expect("write");

    let loaded = AdvisorConfig::load_from_file(file.path()).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = AdvisorConfig::load_from_file(&path).expect_err("file is absent");
    assert!(matches!(err, ConfigError::Io(ref p, _) if p == &path));
}

#[test]
fn parse_error_carries_file_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"[chart\nwidth = 600.0\n").expect("write");
    let err = AdvisorConfig::load_from_file(file.path()).expect_err("unterminated table");
    match err {
        ConfigError::Parse(path, _) => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other}"),
    }
}
