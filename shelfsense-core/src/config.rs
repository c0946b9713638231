//! Monitor configuration
//!
//! Every field has a default from [`crate::constants`], so a deployment only
//! overrides what differs on its board. With the `std` feature a JSON
//! document can supply partial overrides:
//!
//! ```rust
//! # #[cfg(feature = "std")]
//! # {
//! use shelfsense_core::MonitorConfig;
//!
//! let config = MonitorConfig::from_json_str(r#"{
//!     "gas": { "max_raw": 4095 },
//!     "cycle_interval_ms": 5000
//! }"#).unwrap();
//!
//! assert_eq!(config.gas.max_raw, 4095);
//! assert_eq!(config.gas.load_resistor_ohms, 10_000.0);
//! # }
//! ```

use crate::calibration::Calibrator;
use crate::constants::time::CYCLE_INTERVAL_MS;
use crate::errors::{MonitorError, MonitorResult};
use crate::estimator::MethaneCurve;
use crate::gas::GasResistanceModel;
use crate::shelf_life::ShelfLifeThresholds;
use crate::storage::StorageLimits;

/// Complete monitor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// ADC and voltage-divider circuit
    pub gas: GasResistanceModel,

    /// Clean-air calibration pass
    pub calibration: Calibrator,

    /// Ratio-to-ppm curve
    pub curve: MethaneCurve,

    /// Shelf-life bucket boundaries
    pub thresholds: ShelfLifeThresholds,

    /// Storage envelope for advisories
    pub storage: StorageLimits,

    /// Pause between cycles in milliseconds
    pub cycle_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            gas: GasResistanceModel::default(),
            calibration: Calibrator::default(),
            curve: MethaneCurve::default(),
            thresholds: ShelfLifeThresholds::default(),
            storage: StorageLimits::default(),
            cycle_interval_ms: CYCLE_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    /// Replace the ADC circuit
    pub fn with_gas(mut self, gas: GasResistanceModel) -> Self {
        self.gas = gas;
        self
    }

    /// Replace the calibration pass settings
    pub fn with_calibration(mut self, calibration: Calibrator) -> Self {
        self.calibration = calibration;
        self
    }

    /// Replace the concentration curve
    pub fn with_curve(mut self, curve: MethaneCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Replace the shelf-life thresholds
    pub fn with_thresholds(mut self, thresholds: ShelfLifeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the storage envelope
    pub fn with_storage(mut self, storage: StorageLimits) -> Self {
        self.storage = storage;
        self
    }

    /// Replace the pause between cycles
    pub fn with_cycle_interval_ms(mut self, ms: u32) -> Self {
        self.cycle_interval_ms = ms;
        self
    }

    /// Check every section
    pub fn validate(&self) -> MonitorResult<()> {
        self.gas.validate()?;
        self.calibration.validate()?;
        self.thresholds.validate()?;
        self.curve.validate()?;

        if self.storage.max_temp_c.is_nan() || self.storage.min_humidity_pct.is_nan() {
            return Err(MonitorError::InvalidConfig {
                reason: "storage limits must be numbers",
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> MonitorResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            log_warn!("Rejected configuration document: {}", err);
            MonitorError::ConfigParse {
                line: err.line(),
                column: err.column(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    #[cfg(feature = "std")]
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> MonitorResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            log_warn!("Cannot read configuration {}: {}", path.display(), err);
            MonitorError::Config {
                reason: "configuration file unreadable",
            }
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(MonitorConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = MonitorConfig::default()
            .with_cycle_interval_ms(1_000)
            .with_calibration(Calibrator::new(10, 20));

        assert_eq!(config.cycle_interval_ms, 1_000);
        assert_eq!(config.calibration.sample_count, 10);
        assert_eq!(config.calibration.clean_air_factor, 4.0);
    }

    #[test]
    fn invalid_sections_surface() {
        let config = MonitorConfig::default().with_curve(MethaneCurve { a: f32::INFINITY, b: -0.5 });
        assert!(matches!(config.validate(), Err(MonitorError::InvalidConfig { .. })));

        let config = MonitorConfig::default().with_curve(MethaneCurve { a: 12.0, b: 0.5 });
        assert!(matches!(config.validate(), Err(MonitorError::InvalidConfig { .. })));

        let config = MonitorConfig::default().with_calibration(Calibrator::new(0, 50));
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_partial_override() {
        let config = MonitorConfig::from_json_str(
            r#"{ "thresholds": { "fresh_ppm": 6.0 }, "calibration": { "sample_count": 20 } }"#,
        )
        .unwrap();

        assert_eq!(config.thresholds.fresh_ppm, 6.0);
        assert_eq!(config.thresholds.active_ppm, 12.0);
        assert_eq!(config.calibration.sample_count, 20);
        assert_eq!(config.calibration.inter_sample_delay_ms, 50);
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_errors() {
        assert!(matches!(
            MonitorConfig::from_json_str("{\n  \"cycle_interval_ms\": \"fast\"\n}"),
            Err(MonitorError::ConfigParse { line: 2, column }) if column > 20
        ));
        assert!(matches!(
            MonitorConfig::from_json_str("{ not json"),
            Err(MonitorError::ConfigParse { line: 1, .. })
        ));
        assert!(matches!(
            MonitorConfig::from_json_str(r#"{ "thresholds": { "fresh_ppm": 20.0 } }"#),
            Err(MonitorError::InvalidConfig { .. })
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_file_round_trip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "storage": {{ "max_temp_c": 14.0 }}, "cycle_interval_ms": 2000 }}"#).unwrap();

        let config = MonitorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.storage.max_temp_c, 14.0);
        assert_eq!(config.storage.min_humidity_pct, 70.0);
        assert_eq!(config.cycle_interval_ms, 2_000);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            MonitorConfig::from_json_file(missing),
            Err(MonitorError::Config { .. })
        ));
    }
}
