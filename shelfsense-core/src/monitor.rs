//! The monitoring control loop
//!
//! [`Monitor`] owns every piece of mutable state: the calibration, the
//! smoothing window and the display controller. It runs one cycle per call:
//!
//! ```text
//! ClimateSensor ──────────────────────────────────────────┐
//!                                                         ▼
//! AnalogSource → resistance → ppm → smoothing → bucket → DisplayController
//!                              ▲
//!                        Calibration (Ro)
//! ```
//!
//! Everything is single-threaded and blocking. A cycle runs to completion
//! before the next one starts. Climate read failures are absorbed per cycle.
//! Asking for an estimate before calibrating is the only error a cycle
//! returns.
//!
//! ```rust
//! use shelfsense_core::{
//!     AnalogSource, ClimateReading, ClimateSensor, DisplaySink, Monitor, MonitorConfig,
//!     SensorResult, time::MockDelay,
//! };
//!
//! struct Dht;
//! impl ClimateSensor for Dht {
//!     fn measure(&mut self) -> SensorResult<ClimateReading> {
//!         Ok(ClimateReading::new(16.0, 85.0))
//!     }
//! }
//!
//! struct Adc;
//! impl AnalogSource for Adc {
//!     fn read_raw(&mut self) -> u16 { 32768 }
//! }
//!
//! struct Lcd;
//! impl DisplaySink for Lcd {
//!     fn clear(&mut self) {}
//!     fn move_to(&mut self, _column: u8, _row: u8) {}
//!     fn write_text(&mut self, _text: &str) {}
//! }
//!
//! let mut monitor = Monitor::new(MonitorConfig::default(), Dht, Adc, Lcd).unwrap();
//! monitor.calibrate(&mut MockDelay::new()).unwrap();
//!
//! // Clean air reads Rs = 4 x Ro, which the curve maps to 6 ppm
//! let report = monitor.cycle().unwrap();
//! assert!((report.methane_ppm.unwrap() - 6.0).abs() < 1e-3);
//! ```

use crate::calibration::{BaselineResistance, Calibration, Calibrator};
use crate::config::MonitorConfig;
use crate::display::{DisplayController, Frame, Readings, Screen};
use crate::errors::{MonitorResult, SensorError};
use crate::estimator::MethaneEstimator;
use crate::filter::SmoothingFilter;
use crate::gas::GasResistanceModel;
use crate::shelf_life::{ShelfLifeBucket, ShelfLifeClassifier};
use crate::storage::{StorageAdvisory, StorageLimits};
use crate::time::Delay;
use crate::traits::{AnalogSource, ClimateReading, ClimateSensor, DisplaySink};

/// Outcome of one monitor cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// Climate reading, or why it failed
    pub climate: Result<ClimateReading, SensorError>,

    /// Instantaneous concentration from this cycle's sample
    pub methane_ppm: Option<f32>,

    /// Average over the smoothing window
    pub smoothed_ppm: Option<f32>,

    /// Bucket derived from the smoothed value
    pub shelf_life: ShelfLifeBucket,

    /// Screen rendered during this cycle
    pub screen: Screen,

    /// Storage envelope violations
    pub advisory: StorageAdvisory,
}

/// Owns the sensors, the display and the pipeline state
pub struct Monitor<C, A, D>
where
    C: ClimateSensor,
    A: AnalogSource,
    D: DisplaySink,
{
    climate: C,
    adc: A,
    display: DisplayController<D>,

    gas: GasResistanceModel,
    calibrator: Calibrator,
    calibration: Calibration,
    estimator: MethaneEstimator,
    filter: SmoothingFilter,
    classifier: ShelfLifeClassifier,
    storage: StorageLimits,
    cycle_interval_ms: u32,
}

impl<C, A, D> Monitor<C, A, D>
where
    C: ClimateSensor,
    A: AnalogSource,
    D: DisplaySink,
{
    /// Validate `config` and wire up the ports
    pub fn new(config: MonitorConfig, climate: C, adc: A, display: D) -> MonitorResult<Self> {
        config.validate()?;

        Ok(Self {
            climate,
            adc,
            display: DisplayController::new(display),
            gas: config.gas,
            calibrator: config.calibration,
            calibration: Calibration::Uncalibrated,
            estimator: MethaneEstimator::new(config.curve),
            filter: SmoothingFilter::new(),
            classifier: ShelfLifeClassifier::new(config.thresholds),
            storage: config.storage,
            cycle_interval_ms: config.cycle_interval_ms,
        })
    }

    /// Run a clean-air calibration pass
    ///
    /// Blocks for the whole pass. The smoothing window is cleared on
    /// success, since readings taken against the old baseline are not
    /// comparable with new ones.
    pub fn calibrate<T: Delay + ?Sized>(&mut self, delay: &mut T) -> MonitorResult<BaselineResistance> {
        let baseline = self
            .calibrator
            .calibrate(&self.gas, &mut self.adc, delay, &mut self.calibration)?;
        self.filter.clear();
        Ok(baseline)
    }

    /// Current calibration state
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Screen the next cycle will render
    pub fn screen(&self) -> Screen {
        self.display.screen()
    }

    /// Lines rendered by the most recent cycle
    pub fn frame(&self) -> &Frame {
        self.display.frame()
    }

    /// Average of the smoothing window
    pub fn smoothed_ppm(&self) -> Option<f32> {
        self.filter.average()
    }

    /// Read, estimate, smooth, classify and display once
    pub fn cycle(&mut self) -> MonitorResult<CycleReport> {
        let climate = self.climate.measure();
        if let Err(err) = &climate {
            log_warn!("Climate sensor read failed: {}", err);
        }

        let resistance = self.gas.resistance_from_raw(self.adc.read_raw());
        let ppm = self.estimator.estimate(&self.calibration, resistance)?;

        self.filter.push(ppm);
        let smoothed = self.filter.average();
        let shelf_life = self.classifier.classify(smoothed);

        let reading = climate.ok();
        let advisory = self.storage.check(reading);

        let screen = self.display.screen();
        self.display.update(&Readings {
            temperature_c: reading.map(|r| r.temperature_c),
            humidity_pct: reading.map(|r| r.humidity_pct),
            methane_ppm: smoothed,
            shelf_life: Some(shelf_life),
        });

        log_debug!(
            "Temp: {:?} C, Humidity: {:?} %, Methane: {:.2} ppm (avg {:?}), Shelf Life: {}",
            reading.map(|r| r.temperature_c),
            reading.map(|r| r.humidity_pct),
            ppm,
            smoothed,
            shelf_life
        );

        Ok(CycleReport {
            climate,
            methane_ppm: Some(ppm),
            smoothed_ppm: smoothed,
            shelf_life,
            screen,
            advisory,
        })
    }

    /// Cycle until `stop` returns true, pausing between cycles
    ///
    /// `stop` is checked before every cycle. The display is blanked when
    /// the loop exits, whether it stopped or a cycle failed.
    pub fn run_until<T, F>(&mut self, delay: &mut T, mut stop: F) -> MonitorResult<()>
    where
        T: Delay + ?Sized,
        F: FnMut(&CycleReportSummary) -> bool,
    {
        log_info!("Starting sensor readings and display");
        let mut summary = CycleReportSummary::default();

        let result = loop {
            if stop(&summary) {
                break Ok(());
            }
            match self.cycle() {
                Ok(report) => summary.record(&report),
                Err(err) => break Err(err),
            }
            delay.delay_ms(self.cycle_interval_ms);
        };

        self.display.blank();
        log_info!("Monitor stopped after {} cycles", summary.cycles);
        result
    }
}

/// Running tally handed to the `run_until` stop predicate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleReportSummary {
    /// Completed cycles
    pub cycles: u32,

    /// Cycles whose climate read failed
    pub climate_failures: u32,

    /// Most recent report
    pub last: Option<CycleReport>,
}

impl CycleReportSummary {
    fn record(&mut self, report: &CycleReport) {
        self.cycles += 1;
        if report.climate.is_err() {
            self.climate_failures += 1;
        }
        self.last = Some(*report);
    }
}
