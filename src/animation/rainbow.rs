//! Rainbow cycling animations
//!
//! Provides two variants:
//! - `Rainbow`: color wheel laid along the pixels, rotating once per period
//! - `Sparkle`: dimmed rainbow with random full-brightness sparkles

use embassy_time::{Duration, Instant};

use super::{Animation, Cadence};
use crate::color::{Rgb, color_wheel, intensity};

const DEFAULT_PERIOD_MS: u64 = 5_000;
const DEFAULT_SPARKLE_BACKGROUND: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct Rainbow {
    cadence: Cadence,
    /// Duration of one full wheel rotation
    period: Duration,
    /// Intensity applied to every pixel (0.0-1.0)
    level: f32,
    /// Position within the current period, in milliseconds
    position_ms: u64,
    last_update: Option<Instant>,
}

impl Rainbow {
    pub fn new(speed: Duration) -> Self {
        Self {
            cadence: Cadence::new(speed),
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
            level: 1.0,
            position_ms: 0,
            last_update: None,
        }
    }

    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Dim the whole rainbow
    #[must_use]
    pub fn with_level(mut self, level: f32) -> Self {
        self.level = level.clamp(0.0, 1.0);
        self
    }

    /// Number of wheel colors in one rotation
    const WHEEL_LEN: usize = 255;

    /// Wheel slot shown on the first pixel
    #[allow(clippy::cast_possible_truncation)]
    pub fn wheel_index(&self) -> usize {
        let period_ms = self.period.as_millis().max(1);
        ((self.position_ms * Self::WHEEL_LEN as u64) / period_ms) as usize
    }

    /// Full-brightness wheel color of a pixel
    #[allow(clippy::cast_possible_truncation)]
    fn wheel_color(&self, pixel: usize) -> Rgb {
        let slot = (self.wheel_index() + pixel) % Self::WHEEL_LEN;
        color_wheel(slot as u8)
    }

    fn advance(&mut self, now: Instant) {
        let elapsed = self
            .last_update
            .and_then(|last| now.checked_duration_since(last))
            .map_or(0, |elapsed| elapsed.as_millis());
        self.last_update = Some(now);
        self.position_ms = (self.position_ms + elapsed) % self.period.as_millis().max(1);
    }

    fn draw(&mut self, now: Instant, pixels: &mut [Rgb]) {
        self.advance(now);
        for (i, pixel) in pixels.iter_mut().enumerate() {
            let color = self.wheel_color(i);
            *pixel = if self.level < 1.0 {
                intensity(color, self.level)
            } else {
                color
            };
        }
    }
}

impl Animation for Rainbow {
    /// Rainbows ignore color changes
    fn set_color(&mut self, _color: Rgb) {}

    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }
        self.draw(now, pixels);
        true
    }

    fn reset(&mut self) {
        self.cadence.reset();
        self.position_ms = 0;
        self.last_update = None;
    }
}

/// Dimmed rainbow with randomly placed full-brightness sparkles
#[derive(Debug, Clone)]
pub struct Sparkle {
    rainbow: Rainbow,
    sparkles: usize,
    seed: u64,
    draws: u64,
}

impl Sparkle {
    pub fn new(speed: Duration, sparkles: usize) -> Self {
        Self {
            rainbow: Rainbow::new(speed).with_level(DEFAULT_SPARKLE_BACKGROUND),
            sparkles,
            seed: 0,
            draws: 0,
        }
    }

    /// Seed for sparkle placement
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// SplitMix64-style mixing
    const fn hash(x: u64) -> u64 {
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&mut self, now: Instant, pixels: &mut [Rgb]) {
        self.rainbow.draw(now, pixels);
        if pixels.is_empty() {
            return;
        }
        let len = pixels.len() as u64;
        for n in 0..self.sparkles as u64 {
            let key = self
                .seed
                .wrapping_add(self.draws.wrapping_mul(0x1_0000))
                .wrapping_add(n);
            let pixel = (Self::hash(key) % len) as usize;
            pixels[pixel] = self.rainbow.wheel_color(pixel);
        }
        self.draws = self.draws.wrapping_add(1);
    }
}

impl Animation for Sparkle {
    /// Sparkles ignore color changes
    fn set_color(&mut self, _color: Rgb) {}

    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool {
        if !self.rainbow.cadence.ready(now) {
            return false;
        }
        self.draw(now, pixels);
        true
    }

    fn reset(&mut self) {
        Animation::reset(&mut self.rainbow);
        self.draws = 0;
    }
}
