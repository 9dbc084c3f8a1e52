//! Configuration file loading tests.

use std::io::Write;

use lift_common::config::{ConfigError, SimConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn load_full_config_file() {
    let file = write_config(
        r#"
[tuning]
max_load_kg = 900.0
lift_speed = 0.5
lower_speed = 0.4
safe_stop_speed_eps = 0.02

[scan]
scan_time_us = 10000
status_interval = 25
"#,
    );

    let config = SimConfig::load(file.path()).expect("load config");
    assert_eq!(config.tuning.max_load_kg, 900.0);
    assert_eq!(config.tuning.lift_speed, 0.5);
    assert_eq!(config.scan.scan_time_us, 10_000);
    assert_eq!(config.scan.status_interval, 25);
}

#[test]
fn load_partial_config_keeps_defaults() {
    let file = write_config("[scan]\nstatus_interval = 5\n");

    let config = SimConfig::load(file.path()).expect("load config");
    assert_eq!(config.scan.status_interval, 5);
    assert_eq!(config.tuning, lift_common::config::LiftTuning::default());
}

#[test]
fn missing_file_is_file_not_found() {
    let result = SimConfig::load(std::path::Path::new("/nonexistent/lift.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn invalid_toml_is_parse_error() {
    let file = write_config("[tuning\nmax_load_kg = ");
    let result = SimConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_values_are_validation_errors() {
    let file = write_config("[tuning]\nmax_load_kg = -1.0\n");
    let result = SimConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}
