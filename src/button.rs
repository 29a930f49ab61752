//! Debounced momentary button.

use embassy_time::{Duration, Instant};

/// Time a raw level has to stay unchanged before it is accepted
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(10);

/// A debounced digital input polled once per tick
pub trait ButtonInput {
    /// Sample the input; must be called once per tick
    fn update(&mut self, now: Instant);

    /// `true` exactly on the tick a clean rising edge was detected
    fn rose(&self) -> bool;

    /// Current debounced level
    fn value(&self) -> bool;
}

/// Debouncer over any raw level source.
///
/// The raw source is a closure so it can wrap a HAL input pin, including
/// active-low wiring (`|| pin.is_low()`).
pub struct Debouncer<F> {
    read: F,
    interval: Duration,
    unstable: bool,
    debounced: bool,
    changed: bool,
    last_bounce: Option<Instant>,
}

impl<F: FnMut() -> bool> Debouncer<F> {
    pub fn new(read: F) -> Self {
        Self::with_interval(read, DEFAULT_DEBOUNCE_INTERVAL)
    }

    /// Debouncer with a custom settle interval.
    ///
    /// The source is sampled once so the initial level is not reported as
    /// an edge.
    pub fn with_interval(mut read: F, interval: Duration) -> Self {
        let level = read();
        Self {
            read,
            interval,
            unstable: level,
            debounced: level,
            changed: false,
            last_bounce: None,
        }
    }

    /// `true` exactly on the tick a clean falling edge was detected
    pub fn fell(&self) -> bool {
        self.changed && !self.debounced
    }

    fn settled(&self, now: Instant) -> bool {
        self.last_bounce.is_none_or(|last| {
            now.checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.interval)
        })
    }
}

impl<F: FnMut() -> bool> ButtonInput for Debouncer<F> {
    fn update(&mut self, now: Instant) {
        self.changed = false;
        let level = (self.read)();
        if level != self.unstable {
            self.last_bounce = Some(now);
            self.unstable = level;
        } else if self.settled(now) && level != self.debounced {
            self.last_bounce = Some(now);
            self.debounced = level;
            self.changed = true;
        }
    }

    fn rose(&self) -> bool {
        self.changed && self.debounced
    }

    fn value(&self) -> bool {
        self.debounced
    }
}
