//! Blocking delays for the control loop
//!
//! The core never sleeps on its own. Calibration and the monitor loop ask a
//! [`Delay`] implementation to block, so the same code runs against a
//! hardware timer, `std::thread::sleep`, or a test double.

/// Blocking delay provider
pub trait Delay {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Thread sleep delay (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Delay that returns immediately and records how long it was asked to wait
///
/// Useful in tests and host simulations where real sleeping only slows
/// things down.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    elapsed_ms: u64,
    calls: u32,
}

impl MockDelay {
    /// Delay with nothing recorded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Total milliseconds requested so far
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Number of `delay_ms` calls so far
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        self.calls += 1;
    }
}
