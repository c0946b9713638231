//! Hardware ports
//!
//! The core talks to the outside world only through these traits. Drivers
//! for the DHT11, the ADC and the I2C LCD live with the firmware; tests and
//! host simulations plug in doubles. Keep them simple - embedded drivers
//! should be able to implement each one in a few lines.

use crate::errors::SensorResult;

/// One temperature/humidity measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimateReading {
    /// Air temperature in °C
    pub temperature_c: f32,

    /// Relative humidity in %
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// Reading from raw values
    pub fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }
}

/// Temperature/humidity sensor (DHT11 or similar)
pub trait ClimateSensor {
    /// Trigger a measurement and return both values
    ///
    /// Failures are transient: the monitor treats the cycle's values as
    /// absent and tries again next cycle.
    fn measure(&mut self) -> SensorResult<ClimateReading>;
}

/// Analog-to-digital converter wired to the gas sensor
pub trait AnalogSource {
    /// Take one raw sample in `[0, max_raw]`
    fn read_raw(&mut self) -> u16;
}

/// Character display (HD44780 behind an I2C backpack or similar)
pub trait DisplaySink {
    /// Blank the whole display
    fn clear(&mut self);

    /// Position the cursor, zero-based
    fn move_to(&mut self, column: u8, row: u8);

    /// Write text at the cursor
    fn write_text(&mut self, text: &str);
}

impl<T: ClimateSensor + ?Sized> ClimateSensor for &mut T {
    fn measure(&mut self) -> SensorResult<ClimateReading> {
        (**self).measure()
    }
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    fn read_raw(&mut self) -> u16 {
        (**self).read_raw()
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn move_to(&mut self, column: u8, row: u8) {
        (**self).move_to(column, row)
    }

    fn write_text(&mut self, text: &str) {
        (**self).write_text(text)
    }
}
