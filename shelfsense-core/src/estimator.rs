//! Methane Concentration Estimate
//!
//! MQ-series datasheets plot concentration against Rs/Ro on log-log axes.
//! A straight line on that plot is a power law:
//!
//! ```text
//! ppm = a × (Rs/Ro)^b
//! ```
//!
//! The default coefficients (`a = 12`, `b = -0.5`) were fitted to the low
//! 10-12 ppm band that ripening produce emits. They are not the datasheet's
//! general MQ-4 curve.
//!
//! ## Degenerate Ratios
//!
//! | Ratio   | Cause                         | Result                  |
//! |---------|-------------------------------|-------------------------|
//! | `≤ 0`   | Rs = 0, sensor saturated      | [`MAX_PLAUSIBLE_PPM`]   |
//! | `+inf`  | Rs = inf, open circuit        | `0` (follows the curve) |
//! | `NaN`   | cannot come from a valid Ro   | `0`                     |
//!
//! A negative exponent makes the curve singular at zero. A saturated
//! reading is reported as the top of the sensor's range, so the shelf-life
//! classifier errs on the side of "spoiled" and never sees a fault.
//!
//! The first row applies to negative exponents only. With `b ≥ 0` the curve
//! is defined at zero and is evaluated as written, although
//! [`MethaneCurve::validate`] refuses such curves for a monitor.

use libm::powf;

use crate::calibration::Calibration;
use crate::constants::methane::{CURVE_A, CURVE_B, MAX_PLAUSIBLE_PPM};
use crate::errors::{MonitorError, MonitorResult};

/// Power-law coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MethaneCurve {
    /// Scale coefficient
    pub a: f32,
    /// Exponent
    pub b: f32,
}

impl Default for MethaneCurve {
    fn default() -> Self {
        Self { a: CURVE_A, b: CURVE_B }
    }
}

impl MethaneCurve {
    /// Coefficients must be finite and the curve must fall as Rs/Ro rises
    ///
    /// A shorted sensor is reported as [`MAX_PLAUSIBLE_PPM`], which only
    /// makes sense for a negative exponent.
    pub fn validate(&self) -> MonitorResult<()> {
        if !(self.a.is_finite() && self.b.is_finite()) {
            return Err(MonitorError::InvalidConfig {
                reason: "curve coefficients must be finite",
            });
        }
        if self.b >= 0.0 {
            return Err(MonitorError::InvalidConfig {
                reason: "curve exponent must be negative",
            });
        }
        Ok(())
    }
}

/// Converts resistance ratios to ppm
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MethaneEstimator {
    curve: MethaneCurve,
}

impl MethaneEstimator {
    /// Estimator for the given curve
    pub fn new(curve: MethaneCurve) -> Self {
        Self { curve }
    }

    /// Coefficients in use
    pub fn curve(&self) -> MethaneCurve {
        self.curve
    }

    /// Concentration for an Rs/Ro ratio, never negative
    pub fn ppm_for_ratio(&self, ratio: f32) -> f32 {
        if ratio.is_nan() {
            return 0.0;
        }
        if ratio <= 0.0 && self.curve.b < 0.0 {
            log_warn!("Gas sensor ratio {} is singular; reporting {} ppm", ratio, MAX_PLAUSIBLE_PPM);
            return MAX_PLAUSIBLE_PPM;
        }

        let ppm = self.curve.a * powf(ratio, self.curve.b);
        if ppm.is_nan() {
            0.0
        } else {
            ppm.max(0.0)
        }
    }

    /// Concentration for a sensor resistance, normalized against the baseline
    ///
    /// Returns [`MonitorError::Uncalibrated`](crate::errors::MonitorError::Uncalibrated)
    /// when no baseline has been measured.
    pub fn estimate(&self, calibration: &Calibration, resistance_ohms: f32) -> MonitorResult<f32> {
        let ratio = calibration.ratio(resistance_ohms)?;
        Ok(self.ppm_for_ratio(ratio))
    }
}
