use embassy_time::{Duration, Instant};

use super::{Animation, AnimationSlot};
use crate::color::{BLACK, Rgb};

/// Plays animations one after another, advancing on a fixed interval
#[derive(Debug, Clone)]
pub struct AnimationSequence<const N: usize> {
    members: [AnimationSlot; N],
    current: usize,
    advance_interval: Duration,
    last_advance: Option<Instant>,
}

impl<const N: usize> AnimationSequence<N> {
    pub const fn new(members: [AnimationSlot; N], advance_interval: Duration) -> Self {
        Self {
            members,
            current: 0,
            advance_interval,
            last_advance: None,
        }
    }

    /// Index of the animation currently playing
    pub const fn current(&self) -> usize {
        self.current
    }

    fn advance(&mut self, pixels: &mut [Rgb]) {
        pixels.fill(BLACK);
        self.current = (self.current + 1) % N;
    }
}

impl<const N: usize> Animation for AnimationSequence<N> {
    fn set_color(&mut self, color: Rgb) {
        for member in &mut self.members {
            member.set_color(color);
        }
    }

    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool {
        if N == 0 {
            return false;
        }
        let mut advanced = false;
        match self.last_advance {
            None => self.last_advance = Some(now),
            Some(last) => {
                if now
                    .checked_duration_since(last)
                    .is_some_and(|elapsed| elapsed > self.advance_interval)
                {
                    self.advance(pixels);
                    self.last_advance = Some(now);
                    advanced = true;
                }
            }
        }
        self.members[self.current].step(now, pixels) || advanced
    }

    fn reset(&mut self) {
        for member in &mut self.members {
            member.reset();
        }
        self.current = 0;
        self.last_advance = None;
    }
}
