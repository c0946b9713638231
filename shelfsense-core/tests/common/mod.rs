//! Common test doubles for integration tests
//!
//! This module provides:
//! - Scripted climate sensor that replays readings and failures
//! - ADC double that replays raw samples
//! - Character LCD emulator that keeps a 16x2 cell grid
//! - Float tolerance assertion

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use shelfsense_core::constants::display::{LCD_COLUMNS, LCD_ROWS};
use shelfsense_core::{
    AnalogSource, ClimateReading, ClimateSensor, DisplaySink, SensorError, SensorResult,
};

/// Replays a script of climate results, repeating the last one forever
pub struct ScriptedClimate {
    script: VecDeque<SensorResult<ClimateReading>>,
    last: SensorResult<ClimateReading>,
}

impl ScriptedClimate {
    pub fn new(script: Vec<SensorResult<ClimateReading>>) -> Self {
        Self {
            script: script.into(),
            last: Err(SensorError::Timeout),
        }
    }

    /// Always returns the same reading
    pub fn steady(temperature_c: f32, humidity_pct: f32) -> Self {
        Self::new(vec![Ok(ClimateReading::new(temperature_c, humidity_pct))])
    }

    /// Never answers
    pub fn broken() -> Self {
        Self::new(vec![Err(SensorError::Timeout)])
    }
}

impl ClimateSensor for ScriptedClimate {
    fn measure(&mut self) -> SensorResult<ClimateReading> {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// Replays raw samples, repeating the last one forever
pub struct ScriptedAdc {
    samples: VecDeque<u16>,
    last: u16,
    reads: usize,
}

impl ScriptedAdc {
    pub fn new(samples: Vec<u16>) -> Self {
        Self {
            samples: samples.into(),
            last: 0,
            reads: 0,
        }
    }

    pub fn constant(raw: u16) -> Self {
        Self::new(vec![raw])
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AnalogSource for ScriptedAdc {
    fn read_raw(&mut self) -> u16 {
        if let Some(next) = self.samples.pop_front() {
            self.last = next;
        }
        self.reads += 1;
        self.last
    }
}

/// Cell grid of an HD44780-style display
#[derive(Debug)]
pub struct LcdState {
    pub cells: [[char; LCD_COLUMNS]; LCD_ROWS],
    pub cursor: (usize, usize),
    pub clears: usize,
}

impl LcdState {
    /// Row contents as a string
    pub fn row(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c == ' ')
    }
}

/// Emulated LCD; clones share the same grid
#[derive(Clone)]
pub struct MockLcd {
    state: Rc<RefCell<LcdState>>,
}

impl MockLcd {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(LcdState {
                cells: [[' '; LCD_COLUMNS]; LCD_ROWS],
                cursor: (0, 0),
                clears: 0,
            })),
        }
    }

    pub fn row(&self, row: usize) -> String {
        self.state.borrow().row(row)
    }

    pub fn clears(&self) -> usize {
        self.state.borrow().clears
    }

    pub fn is_blank(&self) -> bool {
        self.state.borrow().is_blank()
    }
}

impl DisplaySink for MockLcd {
    fn clear(&mut self) {
        let mut state = self.state.borrow_mut();
        state.cells = [[' '; LCD_COLUMNS]; LCD_ROWS];
        state.cursor = (0, 0);
        state.clears += 1;
    }

    fn move_to(&mut self, column: u8, row: u8) {
        self.state.borrow_mut().cursor = (column as usize, row as usize);
    }

    fn write_text(&mut self, text: &str) {
        let mut state = self.state.borrow_mut();
        for c in text.chars() {
            let (col, row) = state.cursor;
            // Characters past the last column fall off the edge
            if row < LCD_ROWS && col < LCD_COLUMNS {
                state.cells[row][col] = c;
            }
            state.cursor.0 += 1;
        }
    }
}

/// Assert two floats agree within a tolerance
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tol:expr) => {{
        let (actual, expected, tol) = ($actual as f32, $expected as f32, $tol as f32);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {} within {} of {}",
            actual,
            tol,
            expected
        );
    }};
}
