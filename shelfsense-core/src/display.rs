//! Two-screen round-robin display
//!
//! A 16x2 character LCD cannot fit every reading at once, so the controller
//! alternates between two fixed layouts on each update:
//!
//! ```text
//!  Climate screen          Gas screen
//! ┌────────────────┐      ┌────────────────┐
//! │Temp: 18.4C     │      │Methane: 9.87ppm│
//! │Humidity: 82%   │      │Shelf: 3-5 Days │
//! └────────────────┘      └────────────────┘
//! ```
//!
//! Every line is padded with spaces or truncated to exactly the column
//! width. The display is cleared before each render anyway, but fixed-width
//! lines also stop a shorter line from leaving stale characters on panels
//! that skip the clear.
//!
//! Missing values render as `N/A`. The two render functions are the only
//! place format strings live.

use core::fmt::{self, Write};

use heapless::String;

use crate::constants::display::{LCD_COLUMNS, LCD_ROWS};
use crate::shelf_life::ShelfLifeBucket;
use crate::traits::DisplaySink;

/// One rendered display line, exactly [`LCD_COLUMNS`] wide
pub type Line = String<LCD_COLUMNS>;

/// Every line of one screen
pub type Frame = [Line; LCD_ROWS];

/// The two screen layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Screen {
    /// Temperature and humidity
    #[default]
    Climate,
    /// Methane and shelf life
    Gas,
}

impl Screen {
    /// The screen shown after this one
    pub fn next(self) -> Self {
        match self {
            Self::Climate => Self::Gas,
            Self::Gas => Self::Climate,
        }
    }
}

/// Values handed to the display each cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    /// Air temperature in °C
    pub temperature_c: Option<f32>,
    /// Relative humidity in %
    pub humidity_pct: Option<f32>,
    /// Smoothed methane concentration
    pub methane_ppm: Option<f32>,
    /// Bucket for the smoothed reading
    pub shelf_life: Option<ShelfLifeBucket>,
}

/// Writer that silently drops whatever does not fit
struct LineWriter {
    line: Line,
}

impl Write for LineWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.line.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format into a line padded or truncated to the column width
fn fit(args: fmt::Arguments<'_>) -> Line {
    let mut writer = LineWriter { line: Line::new() };
    // LineWriter never fails; overflow is truncated.
    let _ = writer.write_fmt(args);

    let mut line = writer.line;
    while line.len() < LCD_COLUMNS {
        if line.push(' ').is_err() {
            break;
        }
    }
    line
}

/// A value worth printing: present and a real number
fn numeric(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

/// Lines for the climate screen
pub fn render_climate(temperature_c: Option<f32>, humidity_pct: Option<f32>) -> Frame {
    let temp = match numeric(temperature_c) {
        Some(t) => fit(format_args!("Temp: {:.1}C", t)),
        None => fit(format_args!("Temp: N/A")),
    };
    // Humidity is shown as a whole percentage, truncated
    let humidity = match numeric(humidity_pct) {
        Some(h) => fit(format_args!("Humidity: {}%", h as i32)),
        None => fit(format_args!("Humidity: N/A")),
    };
    [temp, humidity]
}

/// Lines for the gas screen
pub fn render_gas(methane_ppm: Option<f32>, shelf_life: Option<ShelfLifeBucket>) -> Frame {
    let methane = match numeric(methane_ppm) {
        Some(m) => fit(format_args!("Methane: {:.2}ppm", m)),
        None => fit(format_args!("Methane: N/A")),
    };
    let shelf = match shelf_life {
        Some(bucket) => fit(format_args!("Shelf: {}", bucket.label())),
        None => fit(format_args!("Shelf: N/A")),
    };
    [methane, shelf]
}

/// Drives a [`DisplaySink`] through the two screens
///
/// The display is cleared when the controller is dropped.
pub struct DisplayController<D: DisplaySink> {
    sink: D,
    screen: Screen,
    frame: Frame,
}

impl<D: DisplaySink> DisplayController<D> {
    /// Wrap a display, starting on the climate screen
    pub fn new(sink: D) -> Self {
        Self {
            sink,
            screen: Screen::Climate,
            frame: [Line::new(), Line::new()],
        }
    }

    /// Screen the next `update` will render
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Lines written by the most recent `update`
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Render the current screen, then advance to the other one
    pub fn update(&mut self, readings: &Readings) {
        self.frame = match self.screen {
            Screen::Climate => render_climate(readings.temperature_c, readings.humidity_pct),
            Screen::Gas => render_gas(readings.methane_ppm, readings.shelf_life),
        };

        self.sink.clear();
        self.sink.move_to(0, 0);
        self.sink.write_text(&self.frame[0]);
        self.sink.move_to(0, 1);
        self.sink.write_text(&self.frame[1]);

        self.screen = self.screen.next();
    }

    /// Blank the display without changing the next screen
    pub fn blank(&mut self) {
        self.sink.clear();
    }

    /// Blank the display and release the controller
    pub fn shutdown(mut self) {
        self.blank();
    }
}

impl<D: DisplaySink> Drop for DisplayController<D> {
    fn drop(&mut self) {
        self.sink.clear();
    }
}
