//! Methane Sensing and Freshness Thresholds

// ===== CALIBRATION =====

/// Ratio Rs/Ro expected in clean air.
///
/// The MQ-4 datasheet puts clean air at roughly 4.4; 4.0 is the value the
/// produce setup was tuned with.
pub const CLEAN_AIR_FACTOR: f32 = 4.0;

// ===== CONCENTRATION CURVE =====

/// Power-law coefficient `a` in `ppm = a * ratio^b`.
///
/// Tuned for the 10-12 ppm band emitted by ripening fruit, not the
/// datasheet's 200-10000 ppm methane curve.
pub const CURVE_A: f32 = 12.0;

/// Power-law exponent `b` in `ppm = a * ratio^b`.
pub const CURVE_B: f32 = -0.5;

/// Reported concentration when the curve is singular (ratio ≤ 0).
///
/// A zero ratio means Rs collapsed to zero, the short-circuit reading.
/// 10000 ppm is the top of the MQ-4 detection range.
///
/// Source: MQ-4 datasheet detection range
pub const MAX_PLAUSIBLE_PPM: f32 = 10_000.0;

// ===== SHELF-LIFE THRESHOLDS =====

/// Below this smoothed ppm the produce is fresh (5-7 days left).
pub const METHANE_FRESH_PPM: f32 = 8.0;

/// Below this smoothed ppm ripening has started (3-5 days left).
pub const METHANE_EARLY_PPM: f32 = 10.0;

/// Below this smoothed ppm ripening is active (1-3 days left).
/// At or above it the produce is at end of life.
pub const METHANE_ACTIVE_PPM: f32 = 12.0;

// ===== STORAGE ENVELOPE =====

/// Warmest recommended storage temperature (°C).
pub const STORAGE_MAX_TEMP_C: f32 = 20.0;

/// Driest recommended storage humidity (%RH).
pub const STORAGE_MIN_HUMIDITY_PCT: f32 = 70.0;
