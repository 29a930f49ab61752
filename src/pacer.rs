//! Per-mode render pacing.
//!
//! Every mode may declare a minimum interval between renders. The pacer
//! keeps one [`PaceWindow`] per mode, so a mode's timing is independent of
//! the loop rate and of every other mode. Windows survive mode switches: a
//! mode re-entered shortly after it last rendered waits out the remainder of
//! its interval.

use embassy_time::{Duration, Instant};

use crate::mode::Mode;

/// Minimum interval between two events plus the time of the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaceWindow {
    interval: Option<Duration>,
    last: Option<Instant>,
}

impl PaceWindow {
    /// Window gated by `interval`; `None` is always due
    pub const fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub const fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Time of the last recorded event
    pub const fn last(&self) -> Option<Instant> {
        self.last
    }

    /// Whether strictly more than `interval` has passed since the last event
    pub fn is_due(&self, now: Instant) -> bool {
        let (Some(interval), Some(last)) = (self.interval, self.last) else {
            return true;
        };
        now.checked_duration_since(last)
            .is_some_and(|elapsed| elapsed > interval)
    }

    /// Record an event at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Forget the last event
    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// Render gate for every mode of the catalog
#[derive(Debug, Clone)]
pub struct Pacer {
    windows: [PaceWindow; Mode::COUNT],
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer {
    /// Pacer using the intervals declared by the mode profiles
    pub fn new() -> Self {
        Self {
            windows: Mode::ALL.map(|mode| PaceWindow::new(mode.profile().pace)),
        }
    }

    /// Pacer with explicit intervals, indexed by [`Mode::index`]
    pub const fn with_intervals(intervals: [Option<Duration>; Mode::COUNT]) -> Self {
        let mut windows = [PaceWindow::new(None); Mode::COUNT];
        let mut i = 0;
        while i < Mode::COUNT {
            windows[i] = PaceWindow::new(intervals[i]);
            i += 1;
        }
        Self { windows }
    }

    /// Whether `mode` may render at `now`
    pub fn due(&self, mode: Mode, now: Instant) -> bool {
        self.windows[mode.index()].is_due(now)
    }

    /// Record that `mode` rendered at `now`
    pub fn record(&mut self, mode: Mode, now: Instant) {
        self.windows[mode.index()].mark(now);
    }

    /// Time `mode` last rendered
    pub fn last_render(&self, mode: Mode) -> Option<Instant> {
        self.windows[mode.index()].last()
    }
}

/// Two-phase blink timer, independent of render pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    window: PaceWindow,
    primary: bool,
}

impl Blink {
    pub const fn new(period: Duration) -> Self {
        Self {
            window: PaceWindow::new(Some(period)),
            primary: true,
        }
    }

    /// Current phase
    pub const fn is_primary(&self) -> bool {
        self.primary
    }

    /// Flip the phase if the period has elapsed.
    ///
    /// Returns the phase that was active before the flip, or `None` when
    /// not due. The first poll is always due.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        if !self.window.is_due(now) {
            return None;
        }
        let previous = self.primary;
        self.primary = !self.primary;
        self.window.mark(now);
        Some(previous)
    }
}
