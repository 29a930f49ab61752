//! Animation primitives with compile-time known variants
//!
//! Every animation renders incremental frames into a pixel slice through
//! the [`Animation`] trait. Variants that need to be stored side by side
//! (for example in an [`AnimationSequence`]) are wrapped in
//! [`AnimationSlot`] to avoid heap allocations.

mod chase;
mod comet;
mod group;
mod rainbow;
mod sequence;

use embassy_time::{Duration, Instant};

pub use chase::{Chase, DEFAULT_CHASE_SIZE, DEFAULT_CHASE_SPACING};
pub use comet::Comet;
pub use group::{CometPair, StrandGroup};
pub use rainbow::{Rainbow, Sparkle};
pub use sequence::AnimationSequence;

use crate::color::Rgb;

pub trait Animation {
    /// Change the color used by subsequent frames
    fn set_color(&mut self, color: Rgb);

    /// Render one incremental frame if the animation is due.
    ///
    /// Returns `true` when pixels were written.
    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool;

    /// Reset animation state
    fn reset(&mut self) {}
}

/// Speed gate shared by all animations.
///
/// The first poll is always ready; afterwards the animation is ready once
/// `speed` has passed since the previous draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    speed: Duration,
    next_update: Option<Instant>,
}

impl Cadence {
    pub const fn new(speed: Duration) -> Self {
        Self {
            speed,
            next_update: None,
        }
    }

    /// Check readiness and, if ready, schedule the next update
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.next_update {
            Some(next) if now < next => false,
            _ => {
                self.next_update = Some(now + self.speed);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.next_update = None;
    }
}

/// Animation slot - enum containing all storable animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Chase(Chase),
    Comet(Comet),
    Rainbow(Rainbow),
    Sparkle(Sparkle),
}

impl Animation for AnimationSlot {
    fn set_color(&mut self, color: Rgb) {
        match self {
            Self::Chase(animation) => animation.set_color(color),
            Self::Comet(animation) => animation.set_color(color),
            Self::Rainbow(animation) => animation.set_color(color),
            Self::Sparkle(animation) => animation.set_color(color),
        }
    }

    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool {
        match self {
            Self::Chase(animation) => animation.step(now, pixels),
            Self::Comet(animation) => animation.step(now, pixels),
            Self::Rainbow(animation) => animation.step(now, pixels),
            Self::Sparkle(animation) => animation.step(now, pixels),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Chase(animation) => Animation::reset(animation),
            Self::Comet(animation) => Animation::reset(animation),
            Self::Rainbow(animation) => Animation::reset(animation),
            Self::Sparkle(animation) => Animation::reset(animation),
        }
    }
}

impl From<Chase> for AnimationSlot {
    fn from(animation: Chase) -> Self {
        Self::Chase(animation)
    }
}

impl From<Comet> for AnimationSlot {
    fn from(animation: Comet) -> Self {
        Self::Comet(animation)
    }
}

impl From<Rainbow> for AnimationSlot {
    fn from(animation: Rainbow) -> Self {
        Self::Rainbow(animation)
    }
}

impl From<Sparkle> for AnimationSlot {
    fn from(animation: Sparkle) -> Self {
        Self::Sparkle(animation)
    }
}
