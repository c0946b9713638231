//! Error Types for the Monitoring Pipeline
//!
//! ## Design Philosophy
//!
//! Errors here follow the same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: payloads are numbers or `&'static str`, so the
//!    types work unchanged on `no_std` targets.
//!
//! 2. **Copy Semantics**: errors are returned from the hot read loop and
//!    carried in [`CycleReport`](crate::monitor::CycleReport) by value.
//!
//! 3. **Two Distinct Families**: a flaky sensor and a programming mistake
//!    are never the same error type.
//!
//! ## Error Categories
//!
//! ### Transient sensor failures ([`SensorError`])
//! Raised by a [`ClimateSensor`](crate::traits::ClimateSensor) driver. The
//! monitor recovers locally: the cycle's temperature and humidity become
//! absent and the display shows `N/A`. The next cycle tries again.
//!
//! ### Contract violations ([`MonitorError`])
//! - `Uncalibrated`: an estimate was requested before a baseline existed
//! - `InvalidBaseline`: calibration produced a zero or non-finite baseline
//! - `InvalidConfig`: a configuration value is out of its legal range
//! - `Config`: a configuration document could not be read (std only)
//! - `ConfigParse`: a configuration document is malformed, with its position (std only)
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use shelfsense_core::{Calibration, MethaneEstimator, MonitorError};
//!
//! let estimator = MethaneEstimator::default();
//! let calibration = Calibration::Uncalibrated;
//!
//! match estimator.estimate(&calibration, 9_500.0) {
//!     Ok(_ppm) => {
//!         // feed the smoothing filter
//!     }
//!     Err(MonitorError::Uncalibrated) => {
//!         // run a calibration pass first
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Result type for sensor driver operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Transient failures reported by sensor drivers
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Sensor did not answer in time
    #[error("Sensor read timed out")]
    Timeout,

    /// Frame arrived but its checksum did not match
    #[error("Sensor checksum mismatch")]
    Checksum,

    /// Bus-level failure (I2C NACK, GPIO glitch, ...)
    #[error("Sensor bus error: {reason}")]
    Bus {
        /// What the driver saw
        reason: &'static str,
    },

    /// Driver decoded a value the sensor cannot physically report
    #[error("Sensor value {value} out of range")]
    OutOfRange {
        /// The decoded value
        value: f32,
    },
}

/// Contract and configuration errors raised by the core
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MonitorError {
    /// An estimate was requested before the gas sensor was calibrated
    #[error("Gas sensor not calibrated; run a calibration pass first")]
    Uncalibrated,

    /// Calibration averaged to a baseline that cannot normalize readings
    #[error("Invalid baseline resistance {value} ohms")]
    InvalidBaseline {
        /// The rejected baseline
        value: f32,
    },

    /// A configuration value is outside its legal range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Which value and why
        reason: &'static str,
    },

    /// A configuration document could not be read
    #[error("Failed to load configuration: {reason}")]
    Config {
        /// What went wrong
        reason: &'static str,
    },

    /// A configuration document is not valid JSON for [`MonitorConfig`](crate::config::MonitorConfig)
    #[error("Malformed configuration at line {line}, column {column}")]
    ConfigParse {
        /// One-based line of the offending input
        line: usize,
        /// One-based column of the offending input
        column: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Timeout => defmt::write!(fmt, "Sensor timeout"),
            Self::Checksum => defmt::write!(fmt, "Sensor checksum mismatch"),
            Self::Bus { reason } => defmt::write!(fmt, "Sensor bus: {}", reason),
            Self::OutOfRange { value } => defmt::write!(fmt, "Sensor value {} out of range", value),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Uncalibrated => defmt::write!(fmt, "Uncalibrated"),
            Self::InvalidBaseline { value } => defmt::write!(fmt, "Invalid baseline {}", value),
            Self::InvalidConfig { reason } => defmt::write!(fmt, "Invalid config: {}", reason),
            Self::Config { reason } => defmt::write!(fmt, "Config load: {}", reason),
            Self::ConfigParse { line, column } => {
                defmt::write!(fmt, "Config parse at {}:{}", line, column)
            }
        }
    }
}
