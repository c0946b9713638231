//! Shelf-life classification from smoothed methane
//!
//! Ripening produce gives off more methane as it ages. The smoothed
//! concentration falls into one of four ordered buckets, plus `Unknown` when
//! there is nothing to classify yet.
//!
//! | Smoothed ppm     | Bucket          |
//! |------------------|-----------------|
//! | absent           | `Unknown`       |
//! | `< fresh`        | `5-7 Days`      |
//! | `< early`        | `3-5 Days`      |
//! | `< active`       | `1-3 Days`      |
//! | `≥ active`       | `0 Days`        |
//!
//! Each threshold is the inclusive lower bound of the next bucket, so a
//! value sitting exactly on a threshold lands in the less fresh bucket.
//!
//! ```rust
//! use shelfsense_core::{ShelfLifeBucket, ShelfLifeClassifier};
//!
//! let classifier = ShelfLifeClassifier::default();
//! assert_eq!(classifier.classify(Some(9.2)), ShelfLifeBucket::ThreeToFiveDays);
//! assert_eq!(classifier.classify(None).label(), "Unknown");
//! ```

use core::fmt;

use crate::constants::methane::{METHANE_ACTIVE_PPM, METHANE_EARLY_PPM, METHANE_FRESH_PPM};
use crate::errors::{MonitorError, MonitorResult};

/// Remaining shelf life, ordered from unknown through freshest to spoiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShelfLifeBucket {
    /// No smoothed reading available
    Unknown,
    /// Fresh, 5 to 7 days left
    FiveToSevenDays,
    /// Ripening started, 3 to 5 days left
    ThreeToFiveDays,
    /// Ripening active, 1 to 3 days left
    OneToThreeDays,
    /// End of life
    ZeroDays,
}

impl ShelfLifeBucket {
    /// Label shown on the display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::FiveToSevenDays => "5-7 Days",
            Self::ThreeToFiveDays => "3-5 Days",
            Self::OneToThreeDays => "1-3 Days",
            Self::ZeroDays => "0 Days",
        }
    }
}

impl fmt::Display for ShelfLifeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ShelfLifeBucket {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

/// Bucket boundaries in ppm
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShelfLifeThresholds {
    /// Lower bound of `3-5 Days`
    pub fresh_ppm: f32,
    /// Lower bound of `1-3 Days`
    pub early_ppm: f32,
    /// Lower bound of `0 Days`
    pub active_ppm: f32,
}

impl Default for ShelfLifeThresholds {
    fn default() -> Self {
        Self {
            fresh_ppm: METHANE_FRESH_PPM,
            early_ppm: METHANE_EARLY_PPM,
            active_ppm: METHANE_ACTIVE_PPM,
        }
    }
}

impl ShelfLifeThresholds {
    /// Thresholds in ppm, lowest first
    pub fn new(fresh_ppm: f32, early_ppm: f32, active_ppm: f32) -> Self {
        Self {
            fresh_ppm,
            early_ppm,
            active_ppm,
        }
    }

    /// Thresholds must be finite and strictly increasing
    pub fn validate(&self) -> MonitorResult<()> {
        let all_finite = self.fresh_ppm.is_finite()
            && self.early_ppm.is_finite()
            && self.active_ppm.is_finite();
        if !all_finite || !(self.fresh_ppm < self.early_ppm && self.early_ppm < self.active_ppm) {
            return Err(MonitorError::InvalidConfig {
                reason: "shelf-life thresholds must be finite and strictly increasing",
            });
        }
        Ok(())
    }
}

/// Maps smoothed ppm to a [`ShelfLifeBucket`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShelfLifeClassifier {
    thresholds: ShelfLifeThresholds,
}

impl ShelfLifeClassifier {
    /// Classifier with custom thresholds
    pub fn new(thresholds: ShelfLifeThresholds) -> Self {
        Self { thresholds }
    }

    /// Boundaries in use
    pub fn thresholds(&self) -> ShelfLifeThresholds {
        self.thresholds
    }

    /// Bucket for a smoothed reading; `None` and NaN give `Unknown`
    pub fn classify(&self, smoothed_ppm: Option<f32>) -> ShelfLifeBucket {
        let t = &self.thresholds;
        match smoothed_ppm {
            None => ShelfLifeBucket::Unknown,
            Some(v) if v.is_nan() => ShelfLifeBucket::Unknown,
            Some(v) if v < t.fresh_ppm => ShelfLifeBucket::FiveToSevenDays,
            Some(v) if v < t.early_ppm => ShelfLifeBucket::ThreeToFiveDays,
            Some(v) if v < t.active_ppm => ShelfLifeBucket::OneToThreeDays,
            Some(_) => ShelfLifeBucket::ZeroDays,
        }
    }
}
