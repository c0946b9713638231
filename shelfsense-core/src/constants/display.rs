//! Character Display Geometry

/// Columns on the HD44780-style LCD.
pub const LCD_COLUMNS: usize = 16;

/// Rows on the LCD.
pub const LCD_ROWS: usize = 2;

/// Number of ppm readings averaged before classification.
///
/// At one reading every 3 s this smooths over roughly 15 s.
pub const SMOOTHING_WINDOW: usize = 5;
