//! Clean-Air Calibration
//!
//! ## Why Calibrate?
//!
//! MOx sensors vary widely from unit to unit, and each unit drifts as it
//! ages. The concentration curve works on the ratio Rs/Ro rather than on Rs
//! itself, where Ro is the resistance the sensor would show at the curve's
//! reference point. Ro is derived from a clean-air measurement:
//!
//! ```text
//! Rs(clean air) = average of N samples
//! Ro            = Rs(clean air) / clean_air_factor
//! ```
//!
//! ## Operational Requirement
//!
//! The pass assumes the sensor sits in clean ambient air, away from the
//! produce. Software cannot verify this. Calibrating next to ripening fruit
//! bakes the fruit's methane into the baseline and makes every later
//! estimate read low.
//!
//! ## State
//!
//! The outcome lives in a [`Calibration`] value owned by the caller (usually
//! the [`Monitor`](crate::monitor::Monitor)). It is passed by reference into
//! every estimate. Recalibrating overwrites it. A failed pass leaves the
//! previous state untouched.

use crate::constants::{
    methane::CLEAN_AIR_FACTOR,
    time::{CALIBRATION_DELAY_MS, CALIBRATION_SAMPLES},
};
use crate::errors::{MonitorError, MonitorResult};
use crate::gas::GasResistanceModel;
use crate::time::Delay;
use crate::traits::AnalogSource;

/// Clean-air baseline resistance (Ro), always finite and positive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaselineResistance(f32);

impl BaselineResistance {
    /// Wrap a resistance, rejecting zero, negative and non-finite values
    pub fn new(ohms: f32) -> MonitorResult<Self> {
        if ohms.is_finite() && ohms > 0.0 {
            Ok(Self(ohms))
        } else {
            Err(MonitorError::InvalidBaseline { value: ohms })
        }
    }

    /// Resistance in ohms
    pub fn ohms(&self) -> f32 {
        self.0
    }

    /// Normalize a sensor resistance against this baseline
    pub fn ratio(&self, resistance_ohms: f32) -> f32 {
        resistance_ohms / self.0
    }
}

/// Calibration state of the gas sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Calibration {
    /// No baseline yet; estimates are refused
    #[default]
    Uncalibrated,

    /// Baseline measured in clean air
    Calibrated(BaselineResistance),
}

impl Calibration {
    /// Baseline, or `Uncalibrated` if none has been measured
    pub fn baseline(&self) -> MonitorResult<BaselineResistance> {
        match self {
            Self::Calibrated(baseline) => Ok(*baseline),
            Self::Uncalibrated => Err(MonitorError::Uncalibrated),
        }
    }

    /// Rs/Ro for a sensor resistance
    pub fn ratio(&self, resistance_ohms: f32) -> MonitorResult<f32> {
        Ok(self.baseline()?.ratio(resistance_ohms))
    }

    /// Whether a baseline has been measured
    pub fn is_calibrated(&self) -> bool {
        matches!(self, Self::Calibrated(_))
    }
}

/// Runs clean-air sampling passes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Calibrator {
    /// Number of resistance samples averaged
    pub sample_count: u32,

    /// Pause after each sample in milliseconds
    pub inter_sample_delay_ms: u32,

    /// Expected Rs/Ro in clean air
    pub clean_air_factor: f32,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self {
            sample_count: CALIBRATION_SAMPLES,
            inter_sample_delay_ms: CALIBRATION_DELAY_MS,
            clean_air_factor: CLEAN_AIR_FACTOR,
        }
    }
}

impl Calibrator {
    /// Calibrator with the default clean-air factor
    pub fn new(sample_count: u32, inter_sample_delay_ms: u32) -> Self {
        Self {
            sample_count,
            inter_sample_delay_ms,
            ..Self::default()
        }
    }

    /// Override the clean-air ratio
    pub fn with_clean_air_factor(mut self, factor: f32) -> Self {
        self.clean_air_factor = factor;
        self
    }

    /// Reject an empty pass or an unusable clean-air factor
    pub fn validate(&self) -> MonitorResult<()> {
        if self.sample_count == 0 {
            return Err(MonitorError::InvalidConfig {
                reason: "calibration sample count must be positive",
            });
        }
        if !(self.clean_air_factor.is_finite() && self.clean_air_factor > 0.0) {
            return Err(MonitorError::InvalidConfig {
                reason: "clean-air factor must be positive and finite",
            });
        }
        Ok(())
    }

    /// Calibrate against the ADC
    ///
    /// Blocks for `sample_count × inter_sample_delay_ms`. On success the
    /// new baseline is stored in `state` and returned.
    pub fn calibrate<A, D>(
        &self,
        model: &GasResistanceModel,
        adc: &mut A,
        delay: &mut D,
        state: &mut Calibration,
    ) -> MonitorResult<BaselineResistance>
    where
        A: AnalogSource + ?Sized,
        D: Delay + ?Sized,
    {
        log_info!(
            "Calibrating gas sensor in clean air ({} samples, {} ms apart); keep the sensor away from produce",
            self.sample_count,
            self.inter_sample_delay_ms
        );
        self.calibrate_with(|| model.resistance_from_raw(adc.read_raw()), delay, state)
    }

    /// Calibrate against any stream of resistance readings
    pub fn calibrate_with<F, D>(
        &self,
        mut read_resistance: F,
        delay: &mut D,
        state: &mut Calibration,
    ) -> MonitorResult<BaselineResistance>
    where
        F: FnMut() -> f32,
        D: Delay + ?Sized,
    {
        self.validate()?;

        let mut total = 0.0f64;
        for _ in 0..self.sample_count {
            total += f64::from(read_resistance());
            delay.delay_ms(self.inter_sample_delay_ms);
        }

        let average = (total / f64::from(self.sample_count)) as f32;
        let baseline = BaselineResistance::new(average / self.clean_air_factor).map_err(|err| {
            log_warn!("Calibration rejected: average clean-air resistance {} ohms", average);
            err
        })?;

        *state = Calibration::Calibrated(baseline);
        log_info!("Calibration finished: Ro = {:.2} ohms", baseline.ohms());
        Ok(baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MockDelay;

    struct ConstantAdc(u16);

    impl AnalogSource for ConstantAdc {
        fn read_raw(&mut self) -> u16 {
            self.0
        }
    }

    #[test]
    fn constant_stream_divides_by_factor() {
        let mut state = Calibration::Uncalibrated;
        let mut delay = MockDelay::new();

        let baseline = Calibrator::default()
            .calibrate_with(|| 40_000.0, &mut delay, &mut state)
            .unwrap();

        assert_eq!(baseline.ohms(), 10_000.0);
        assert_eq!(state, Calibration::Calibrated(baseline));
    }

    #[test]
    fn delays_after_every_sample() {
        let mut state = Calibration::Uncalibrated;
        let mut delay = MockDelay::new();

        Calibrator::new(50, 50)
            .calibrate_with(|| 1_000.0, &mut delay, &mut state)
            .unwrap();

        assert_eq!(delay.calls(), 50);
        assert_eq!(delay.elapsed_ms(), 2_500);
    }

    #[test]
    fn calibrate_from_adc() {
        let model = GasResistanceModel::default();
        let mut adc = ConstantAdc(32768);
        let mut state = Calibration::Uncalibrated;

        let baseline = Calibrator::new(10, 0)
            .calibrate(&model, &mut adc, &mut MockDelay::new(), &mut state)
            .unwrap();

        let expected = model.resistance_from_raw(32768) / CLEAN_AIR_FACTOR;
        assert!((baseline.ohms() - expected).abs() < 1e-2);
    }

    #[test]
    fn zero_samples_rejected() {
        let mut state = Calibration::Uncalibrated;
        let result = Calibrator::new(0, 50).calibrate_with(|| 1_000.0, &mut MockDelay::new(), &mut state);

        assert!(matches!(result, Err(MonitorError::InvalidConfig { .. })));
        assert_eq!(state, Calibration::Uncalibrated);
    }

    #[test]
    fn shorted_sensor_keeps_previous_baseline() {
        let previous = BaselineResistance::new(2_500.0).unwrap();
        let mut state = Calibration::Calibrated(previous);

        let result = Calibrator::new(5, 0).calibrate_with(|| 0.0, &mut MockDelay::new(), &mut state);

        assert_eq!(result, Err(MonitorError::InvalidBaseline { value: 0.0 }));
        assert_eq!(state, Calibration::Calibrated(previous));
    }

    #[test]
    fn open_sensor_rejected() {
        let mut state = Calibration::Uncalibrated;
        let result = Calibrator::new(5, 0).calibrate_with(|| f32::INFINITY, &mut MockDelay::new(), &mut state);

        assert!(matches!(result, Err(MonitorError::InvalidBaseline { .. })));
        assert!(!state.is_calibrated());
    }

    #[test]
    fn recalibration_overwrites() {
        let mut state = Calibration::Uncalibrated;
        let calibrator = Calibrator::new(3, 0);

        calibrator.calibrate_with(|| 8_000.0, &mut MockDelay::new(), &mut state).unwrap();
        calibrator.calibrate_with(|| 12_000.0, &mut MockDelay::new(), &mut state).unwrap();

        assert_eq!(state.baseline().unwrap().ohms(), 3_000.0);
    }

    #[test]
    fn uncalibrated_ratio_is_an_error() {
        assert_eq!(Calibration::Uncalibrated.ratio(1.0), Err(MonitorError::Uncalibrated));
    }
}
