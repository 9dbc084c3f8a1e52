//! TOML configuration loading and validation.
//!
//! Tuning is loaded once at startup and fixed for the session; there is
//! no runtime retuning path. Every field defaults to the design constant,
//! so a missing file or an empty table yields the reference behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::consts::SCAN_TIME_US;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    #[error("configuration file not found")]
    FileNotFound,

    /// File read or TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

// ─── Controller Tuning ──────────────────────────────────────────────

/// Controller tuning constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftTuning {
    /// Maximum permitted load [kg]; strictly above latches Overload.
    pub max_load_kg: f64,
    /// Commanded lifting speed [units/s].
    pub lift_speed: f64,
    /// Commanded lowering speed [units/s].
    pub lower_speed: f64,
    /// Velocity magnitude below which the lift counts as stationary for
    /// the fault-reset gate [units/s].
    pub safe_stop_speed_eps: f64,
}

impl Default for LiftTuning {
    fn default() -> Self {
        Self {
            max_load_kg: 1200.0,
            lift_speed: 0.35,
            lower_speed: 0.30,
            safe_stop_speed_eps: 0.01,
        }
    }
}

impl LiftTuning {
    /// Validate tuning bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if any field is non-finite
    /// or non-positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_load_kg", self.max_load_kg),
            ("lift_speed", self.lift_speed),
            ("lower_speed", self.lower_speed),
            ("safe_stop_speed_eps", self.safe_stop_speed_eps),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ─── Scan Loop ──────────────────────────────────────────────────────

/// Scan loop timing and reporting cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Scan period [µs].
    pub scan_time_us: u32,
    /// Status line cadence [scans].
    pub status_interval: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_time_us: SCAN_TIME_US,
            status_interval: 10,
        }
    }
}

impl ScanConfig {
    /// Scan period in seconds — the fixed `dt` passed to the controller
    /// and the plant.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.scan_time_us as f64 / 1_000_000.0
    }

    /// Validate scan parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` on a zero period or cadence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_time_us == 0 {
            return Err(ConfigError::ValidationError(
                "scan_time_us must be positive".to_string(),
            ));
        }
        if self.status_interval == 0 {
            return Err(ConfigError::ValidationError(
                "status_interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ─── Bundle ─────────────────────────────────────────────────────────

/// Complete simulation configuration bundle.
///
/// # TOML Example
///
/// ```toml
/// [tuning]
/// max_load_kg = 1200.0
/// lift_speed = 0.35
///
/// [scan]
/// scan_time_us = 20000
/// status_interval = 10
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub tuning: LiftTuning,
    pub scan: ScanConfig,
}

impl SimConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if the file does not exist
    /// - `ConfigError::ParseError` on unreadable or invalid TOML
    /// - `ConfigError::ValidationError` if semantic validation fails
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound);
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the whole bundle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        self.scan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_design_constants() {
        let tuning = LiftTuning::default();
        assert_eq!(tuning.max_load_kg, 1200.0);
        assert_eq!(tuning.lift_speed, 0.35);
        assert_eq!(tuning.lower_speed, 0.30);
        assert_eq!(tuning.safe_stop_speed_eps, 0.01);
        assert_eq!(ScanConfig::default().scan_time_us, SCAN_TIME_US);
    }

    #[test]
    fn defaults_validate() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn scan_dt_matches_period() {
        let scan = ScanConfig::default();
        assert!((scan.dt() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn negative_speed_rejected() {
        let tuning = LiftTuning {
            lift_speed: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn nan_load_limit_rejected() {
        let tuning = LiftTuning {
            max_load_kg: f64::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn zero_scan_time_rejected() {
        let scan = ScanConfig {
            scan_time_us: 0,
            ..Default::default()
        };
        assert!(scan.validate().is_err());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: SimConfig = toml::from_str("").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let config: SimConfig = toml::from_str("[tuning]\nmax_load_kg = 800.0\n").unwrap();
        assert_eq!(config.tuning.max_load_kg, 800.0);
        assert_eq!(config.tuning.lift_speed, 0.35);
    }
}
