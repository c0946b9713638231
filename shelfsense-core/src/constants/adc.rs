//! Analog Front-End Specifications
//!
//! The MQ-4 sits in a voltage divider with a load resistor. The ADC samples
//! the voltage across the load resistor.

/// Full-scale value of a 16-bit ADC reading.
///
/// RP2040-class boards expose `read_u16()`, which left-justifies the 12-bit
/// conversion into the full 16-bit range.
pub const ADC_MAX_RAW: u16 = u16::MAX;

/// ADC reference voltage (V).
///
/// Source: RP2040 board 3V3 rail
pub const REFERENCE_VOLTAGE_V: f32 = 3.3;

/// Load resistor on the MQ-4 breakout (Ω).
///
/// Source: common MQ-4 breakout boards ship with a 10 kΩ RL
pub const LOAD_RESISTOR_OHMS: f32 = 10_000.0;
