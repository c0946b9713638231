//! Constants for ShelfSense Core
//!
//! Every numeric default used by the pipeline lives here, next to a note on
//! where it comes from. Runtime configuration in [`crate::config`] starts
//! from these values.
//!
//! ## Organization
//!
//! - **ADC**: converter resolution and the MQ-4 voltage divider
//! - **Methane**: calibration, power-law curve and shelf-life thresholds
//! - **Display**: character LCD geometry
//! - **Time**: loop cadence and calibration pacing

/// Analog front-end: ADC resolution, reference voltage, load resistor.
pub mod adc;

/// Methane curve, calibration and freshness thresholds.
pub mod methane;

/// Character display geometry.
pub mod display;

/// Timing for the control loop and calibration pass.
pub mod time;

pub use adc::{ADC_MAX_RAW, LOAD_RESISTOR_OHMS, REFERENCE_VOLTAGE_V};

pub use methane::{
    CLEAN_AIR_FACTOR, CURVE_A, CURVE_B, MAX_PLAUSIBLE_PPM,
    METHANE_ACTIVE_PPM, METHANE_EARLY_PPM, METHANE_FRESH_PPM,
    STORAGE_MAX_TEMP_C, STORAGE_MIN_HUMIDITY_PCT,
};

pub use display::{LCD_COLUMNS, LCD_ROWS, SMOOTHING_WINDOW};

pub use time::{CALIBRATION_DELAY_MS, CALIBRATION_SAMPLES, CYCLE_INTERVAL_MS};
