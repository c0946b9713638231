//! Storage-condition advisories
//!
//! Produce keeps longest when it is cool and humid. Warm or dry air does not
//! change the methane reading directly, but it shortens the shelf life that
//! the methane reading predicts, so the monitor flags it.

use crate::constants::methane::{STORAGE_MAX_TEMP_C, STORAGE_MIN_HUMIDITY_PCT};
use crate::traits::ClimateReading;

/// Recommended storage envelope
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StorageLimits {
    /// Warmest recommended temperature in °C
    pub max_temp_c: f32,
    /// Driest recommended relative humidity in %
    pub min_humidity_pct: f32,
}

impl Default for StorageLimits {
    fn default() -> Self {
        Self {
            max_temp_c: STORAGE_MAX_TEMP_C,
            min_humidity_pct: STORAGE_MIN_HUMIDITY_PCT,
        }
    }
}

/// Which limits the current climate violates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageAdvisory {
    /// Temperature above `max_temp_c`
    pub too_warm: bool,
    /// Humidity below `min_humidity_pct`
    pub too_dry: bool,
}

impl StorageAdvisory {
    /// True when every checked limit holds
    pub fn is_clear(&self) -> bool {
        !self.too_warm && !self.too_dry
    }
}

impl StorageLimits {
    /// Compare a reading against the envelope
    ///
    /// A missing reading raises nothing; the display already shows `N/A`.
    pub fn check(&self, reading: Option<ClimateReading>) -> StorageAdvisory {
        let Some(reading) = reading else {
            return StorageAdvisory::default();
        };

        let advisory = StorageAdvisory {
            too_warm: reading.temperature_c > self.max_temp_c,
            too_dry: reading.humidity_pct < self.min_humidity_pct,
        };

        if advisory.too_warm {
            log_warn!(
                "Storage too warm: {:.1}C above {:.1}C",
                reading.temperature_c,
                self.max_temp_c
            );
        }
        if advisory.too_dry {
            log_warn!(
                "Storage too dry: {:.0}% below {:.0}%",
                reading.humidity_pct,
                self.min_humidity_pct
            );
        }

        advisory
    }
}
