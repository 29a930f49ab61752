//! Theater-style chase
//!
//! Repeating units of `size` bar pixels followed by `spacing` gap pixels,
//! shifted by one pixel per frame. Bars take the chase paint; gaps are
//! colored by an injected [`GapFn`], which makes the pair chase a plain
//! chase with [`gap_paint`](crate::color::gap_paint) as its gap provider.

use embassy_time::{Duration, Instant};

use super::{Animation, Cadence};
use crate::color::{GapFn, Paint, Rgb, color_wheel, dark_gap, gap_paint};

pub const DEFAULT_CHASE_SIZE: usize = 2;
pub const DEFAULT_CHASE_SPACING: usize = 3;

/// Wheel step between neighbouring bars of a rainbow chase
const WHEEL_STEP: u8 = 8;

#[derive(Debug, Clone)]
pub struct Chase {
    cadence: Cadence,
    paint: Paint,
    gap: GapFn,
    size: usize,
    spacing: usize,
    reverse: bool,
    offset: usize,
    draw_count: usize,
    /// Wheel slot of the leading bar (rainbow paint only)
    wheel_index: usize,
}

impl Chase {
    /// Chase in a solid color with dark gaps
    pub fn new(speed: Duration, color: Rgb) -> Self {
        Self {
            cadence: Cadence::new(speed),
            paint: Paint::Solid(color),
            gap: dark_gap,
            size: DEFAULT_CHASE_SIZE,
            spacing: DEFAULT_CHASE_SPACING,
            reverse: false,
            offset: 0,
            draw_count: 0,
            wheel_index: 0,
        }
    }

    /// Chase whose gaps complement the bar color
    pub fn pair(speed: Duration, color: Rgb) -> Self {
        Self::new(speed, color).with_gap(gap_paint)
    }

    /// Chase whose bars walk the color wheel
    pub fn rainbow(speed: Duration) -> Self {
        Self {
            paint: Paint::Wheel,
            ..Self::new(speed, Rgb::default())
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size.max(1);
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Replace the gap color provider
    #[must_use]
    pub fn with_gap(mut self, gap: GapFn) -> Self {
        self.gap = gap;
        self
    }

    pub const fn paint(&self) -> Paint {
        self.paint
    }

    /// Color currently used for the gaps
    pub fn gap_color(&self) -> Rgb {
        (self.gap)(self.paint)
    }

    const fn repeat(&self) -> usize {
        self.size + self.spacing
    }

    /// Number of distinct wheel colors a rainbow chase cycles through
    const fn wheel_len() -> usize {
        256_usize.div_ceil(WHEEL_STEP as usize)
    }

    /// Bar number of pixel `i` for the given offset.
    ///
    /// The partial bar before `offset` is bar 0. Once its trailing gap has
    /// been fully shifted in, the first full bar counts as the next one.
    const fn bar_index(&self, i: usize, offset: usize) -> usize {
        if i < offset {
            return 0;
        }
        let lead = if self.spacing > 0 && offset >= self.spacing {
            1
        } else {
            0
        };
        (i - offset) / self.repeat() + lead
    }

    #[allow(clippy::cast_possible_truncation)]
    fn bar_color(&self, bar: usize) -> Rgb {
        match self.paint {
            Paint::Solid(color) => color,
            Paint::Wheel => {
                let len = Self::wheel_len();
                let slot = (self.wheel_index + len - bar % len) % len;
                color_wheel((slot * WHEEL_STEP as usize) as u8)
            }
        }
    }

    fn draw(&mut self, pixels: &mut [Rgb]) {
        let repeat = self.repeat();
        let offset = self.offset % repeat;
        let gap = self.gap_color();

        for (i, pixel) in pixels.iter_mut().enumerate() {
            let phase = (i + repeat - offset) % repeat;
            *pixel = if phase < self.size {
                self.bar_color(self.bar_index(i, offset))
            } else {
                gap
            };
        }

        self.draw_count += 1;
        if matches!(self.paint, Paint::Wheel)
            && !pixels.is_empty()
            && self.draw_count % pixels.len() == 0
        {
            let len = Self::wheel_len();
            self.wheel_index = if self.reverse {
                (self.wheel_index + len - 1) % len
            } else {
                (self.wheel_index + 1) % len
            };
        }

        self.offset = if self.reverse {
            (offset + repeat - 1) % repeat
        } else {
            (offset + 1) % repeat
        };
    }
}

impl Animation for Chase {
    /// Rainbow chases keep their wheel paint
    fn set_color(&mut self, color: Rgb) {
        if let Paint::Solid(_) = self.paint {
            self.paint = Paint::Solid(color);
        }
    }

    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }
        self.draw(pixels);
        true
    }

    fn reset(&mut self) {
        self.cadence.reset();
        self.offset = 0;
        self.draw_count = 0;
        self.wheel_index = 0;
    }
}
