//! Core engine for ShelfSense
//!
//! Watches the air around stored produce and turns a methane reading into a
//! coarse shelf-life estimate on a 16x2 character display.
//!
//! Key constraints:
//! - Runs on microcontrollers (`no_std`, no heap)
//! - Single-threaded, blocking control loop
//! - Sensor hiccups degrade to `N/A`, never to a crash
//!
//! ## Pipeline
//!
//! ```text
//! raw ADC sample → GasResistanceModel → Rs
//!                                        │  (setup) Calibrator → Ro
//!                                        ▼
//!                   MethaneEstimator (Rs/Ro → ppm)
//!                                        ▼
//!                   SmoothingFilter (last 5 readings)
//!                                        ▼
//!                   ShelfLifeClassifier → DisplayController
//! ```
//!
//! ```no_run
//! use shelfsense_core::{Calibration, Calibrator, GasResistanceModel, MethaneEstimator, time::MockDelay};
//!
//! let model = GasResistanceModel::default();
//! let mut calibration = Calibration::Uncalibrated;
//!
//! // Clean-air pass over a synthetic stream
//! Calibrator::default()
//!     .calibrate_with(|| model.resistance_from_raw(30_000), &mut MockDelay::new(), &mut calibration)
//!     .unwrap();
//!
//! let ppm = MethaneEstimator::default()
//!     .estimate(&calibration, model.resistance_from_raw(31_000))
//!     .unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(test, deny(missing_docs))]

#[macro_use]
mod logging;

pub mod buffer;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod display;
pub mod errors;
pub mod estimator;
pub mod filter;
pub mod gas;
pub mod monitor;
pub mod shelf_life;
pub mod storage;
pub mod time;
pub mod traits;

// Public API
pub use calibration::{BaselineResistance, Calibration, Calibrator};
pub use config::MonitorConfig;
pub use display::{render_climate, render_gas, DisplayController, Frame, Line, Readings, Screen};
pub use errors::{MonitorError, MonitorResult, SensorError, SensorResult};
pub use estimator::{MethaneCurve, MethaneEstimator};
pub use filter::SmoothingFilter;
pub use gas::GasResistanceModel;
pub use monitor::{CycleReport, CycleReportSummary, Monitor};
pub use shelf_life::{ShelfLifeBucket, ShelfLifeClassifier, ShelfLifeThresholds};
pub use storage::{StorageAdvisory, StorageLimits};
pub use time::Delay;
pub use traits::{AnalogSource, ClimateReading, ClimateSensor, DisplaySink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
