//! Windowed-average smoothing for noisy analog readings.
//!
//! Each potentiometer channel owns one [`SignalConditioner`]. Samples are
//! kept in insertion order in a fixed-size `heapless::Deque`; once the
//! window is full the oldest sample is evicted before the new one is
//! appended, so the retained count never exceeds `WINDOW`.

use heapless::Deque;

/// Default number of samples averaged per channel
pub const DEFAULT_WINDOW: usize = 20;

/// How the averaged value is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Truncate samples and the mean toward zero
    Truncate,
    /// Round the mean to the given number of decimal digits, ties to even
    Decimals(u8),
}

/// Moving average over the last `WINDOW` observations
#[derive(Debug, Clone)]
pub struct SignalConditioner<const WINDOW: usize = DEFAULT_WINDOW> {
    samples: Deque<f32, WINDOW>,
    precision: Precision,
}

impl<const WINDOW: usize> SignalConditioner<WINDOW> {
    /// Create an empty conditioner
    pub const fn new(precision: Precision) -> Self {
        Self {
            samples: Deque::new(),
            precision,
        }
    }

    /// Conditioner for color channels: integer samples, truncated mean
    pub const fn truncating() -> Self {
        Self::new(Precision::Truncate)
    }

    /// Conditioner reporting the mean rounded to `digits` decimals
    pub const fn rounding(digits: u8) -> Self {
        Self::new(Precision::Decimals(digits))
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Number of samples currently retained
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all retained samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Add a sample, evicting the oldest one when the window is full
    pub fn observe(&mut self, value: f32) {
        if WINDOW == 0 {
            return;
        }
        let value = match self.precision {
            Precision::Truncate => libm::truncf(value),
            Precision::Decimals(_) => value,
        };
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was freed above if the deque was full
        let _ = self.samples.push_back(value);
    }

    /// Mean of the retained samples.
    ///
    /// Returns `0.0` while no sample has been observed.
    #[allow(clippy::cast_precision_loss)]
    pub fn read(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().sum();
        let mean = sum / self.samples.len() as f32;
        match self.precision {
            Precision::Truncate => libm::truncf(mean),
            Precision::Decimals(digits) => round_to(mean, digits),
        }
    }
}

/// Round to `digits` decimal places, ties to even
pub fn round_to(value: f32, digits: u8) -> f32 {
    let factor = libm::powf(10.0, f32::from(digits));
    libm::rintf(value * factor) / factor
}
