//! Gas Sensor Resistance Model
//!
//! ## Circuit
//!
//! The MQ-4 heater element changes resistance (Rs) with gas concentration.
//! It sits in series with a load resistor (RL), and the ADC measures the
//! voltage across RL:
//!
//! ```text
//!   Vref ──┬── Rs (sensor) ──┬── RL ── GND
//!          │                 │
//!                           ADC (Vout)
//!
//!   Vout = Vref × RL / (Rs + RL)
//!   Rs   = RL × (Vref − Vout) / Vout
//! ```
//!
//! ## Edge Cases
//!
//! The conversion has no error path. The two ends of the range map to
//! sentinel resistances instead:
//!
//! | Vout            | Rs     | Meaning                               |
//! |-----------------|--------|---------------------------------------|
//! | `≤ 0`           | `+inf` | open circuit / sensor unplugged       |
//! | `≥ Vref`        | `0`    | short circuit / sensor saturated      |
//!
//! Downstream stages ([`MethaneEstimator`](crate::estimator::MethaneEstimator))
//! know how to handle both.

use crate::constants::adc::{ADC_MAX_RAW, LOAD_RESISTOR_OHMS, REFERENCE_VOLTAGE_V};
use crate::errors::{MonitorError, MonitorResult};

/// Converts raw ADC samples to sensor resistance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GasResistanceModel {
    /// Full-scale raw value of the ADC
    pub max_raw: u16,

    /// ADC reference voltage in volts
    pub reference_voltage: f32,

    /// Load resistor in ohms
    pub load_resistor_ohms: f32,
}

impl Default for GasResistanceModel {
    fn default() -> Self {
        Self {
            max_raw: ADC_MAX_RAW,
            reference_voltage: REFERENCE_VOLTAGE_V,
            load_resistor_ohms: LOAD_RESISTOR_OHMS,
        }
    }
}

impl GasResistanceModel {
    /// Model for a custom ADC and divider
    pub fn new(max_raw: u16, reference_voltage: f32, load_resistor_ohms: f32) -> Self {
        Self {
            max_raw,
            reference_voltage,
            load_resistor_ohms,
        }
    }

    /// Voltage across the load resistor for a raw sample
    ///
    /// Samples above full scale are clamped to full scale, so the result
    /// always lies in `[0, reference_voltage]`.
    pub fn voltage_from_raw(&self, raw: u16) -> f32 {
        if self.max_raw == 0 {
            return 0.0;
        }
        let raw = raw.min(self.max_raw);
        (f32::from(raw) / f32::from(self.max_raw)) * self.reference_voltage
    }

    /// Sensor resistance for a measured voltage
    pub fn resistance_from_voltage(&self, voltage: f32) -> f32 {
        if voltage <= 0.0 {
            return f32::INFINITY;
        }
        if voltage >= self.reference_voltage {
            return 0.0;
        }
        self.load_resistor_ohms * (self.reference_voltage - voltage) / voltage
    }

    /// Sensor resistance straight from a raw sample
    pub fn resistance_from_raw(&self, raw: u16) -> f32 {
        self.resistance_from_voltage(self.voltage_from_raw(raw))
    }

    /// Reject circuits that cannot produce a meaningful resistance
    pub fn validate(&self) -> MonitorResult<()> {
        if self.max_raw == 0 {
            return Err(MonitorError::InvalidConfig {
                reason: "ADC full-scale value must be positive",
            });
        }
        if !(self.reference_voltage.is_finite() && self.reference_voltage > 0.0) {
            return Err(MonitorError::InvalidConfig {
                reason: "reference voltage must be positive and finite",
            });
        }
        if !(self.load_resistor_ohms.is_finite() && self.load_resistor_ohms > 0.0) {
            return Err(MonitorError::InvalidConfig {
                reason: "load resistor must be positive and finite",
            });
        }
        Ok(())
    }
}
