//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Pause between two monitor cycles (milliseconds).
///
/// Slow enough for a DHT11, which needs at least 1 s between reads, and for
/// the reader to take in one screen before it toggles.
pub const CYCLE_INTERVAL_MS: u32 = 3 * MS_PER_SECOND;

/// Samples averaged during a calibration pass.
pub const CALIBRATION_SAMPLES: u32 = 50;

/// Pause after each calibration sample (milliseconds).
///
/// 50 samples × 50 ms keeps the pass at about 2.5 s.
pub const CALIBRATION_DELAY_MS: u32 = 50;
