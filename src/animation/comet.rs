//! Comet with a fading tail
//!
//! The comet is drawn as one dark pixel followed by `tail_length`
//! pixels of increasing intensity. Ring comets wrap around the strand,
//! bouncing comets reverse at either end, plain comets restart from the
//! beginning.

use embassy_time::{Duration, Instant};

use super::{Animation, Cadence};
use crate::color::{BLACK, Paint, Rgb, color_wheel, intensity};

/// Fraction of the intensity range covered by the tail
const TAIL_SPAN: f32 = 0.95;
/// Intensity of the dimmest tail pixel
const TAIL_FLOOR: f32 = 0.05;

#[derive(Debug, Clone)]
pub struct Comet {
    cadence: Cadence,
    paint: Paint,
    tail_length: usize,
    ring: bool,
    bounce: bool,
    initial_reverse: bool,
    reverse: bool,
    /// Position of the first drawn pixel; `None` until the strand length is known
    tail_start: Option<isize>,
    wheel_step: usize,
}

impl Comet {
    pub fn new(speed: Duration, color: Rgb, tail_length: usize) -> Self {
        let tail_length = tail_length.max(1);
        Self {
            cadence: Cadence::new(speed),
            paint: Paint::Solid(color),
            tail_length,
            ring: false,
            bounce: false,
            initial_reverse: false,
            reverse: false,
            tail_start: None,
            wheel_step: (256 / tail_length).max(1),
        }
    }

    /// Comet whose tail walks the color wheel
    pub fn rainbow(speed: Duration, tail_length: usize) -> Self {
        Self {
            paint: Paint::Wheel,
            ..Self::new(speed, BLACK, tail_length)
        }
    }

    /// Wrap around the end of the strand.
    ///
    /// Disables bouncing, the two are exclusive.
    #[must_use]
    pub fn with_ring(mut self, ring: bool) -> Self {
        self.ring = ring;
        if ring {
            self.bounce = false;
        }
        self
    }

    /// Reverse direction at either end of the strand.
    ///
    /// Disables ring mode, the two are exclusive.
    #[must_use]
    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        if bounce {
            self.ring = false;
        }
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.initial_reverse = reverse;
        self.reverse = reverse;
        self
    }

    /// Start the comet at a given pixel instead of just before the strand
    #[must_use]
    pub fn with_tail_start(mut self, start: isize) -> Self {
        self.tail_start = Some(start);
        self
    }

    pub const fn paint(&self) -> Paint {
        self.paint
    }

    pub const fn tail_start(&self) -> Option<isize> {
        self.tail_start
    }

    pub const fn is_reversed(&self) -> bool {
        self.reverse
    }

    const fn direction(&self) -> isize {
        if self.reverse { -1 } else { 1 }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn initial_start(&self, len: isize) -> isize {
        let tail = self.tail_length as isize;
        if self.reverse {
            len + tail + 1
        } else {
            -tail - 1
        }
    }

    /// Color of the `k`-th drawn pixel, the dark leading pixel first
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn color_at(&self, k: usize) -> Rgb {
        let k = if self.reverse { self.tail_length - k } else { k };
        if k == 0 {
            return BLACK;
        }
        let n = k - 1;
        let base = match self.paint {
            Paint::Solid(color) => color,
            Paint::Wheel => {
                let invert = self.tail_length - n - 1;
                color_wheel(((invert * self.wheel_step) % 256) as u8)
            }
        };
        let step = TAIL_SPAN / self.tail_length as f32;
        intensity(base, n as f32 * step + TAIL_FLOOR)
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn draw(&mut self, pixels: &mut [Rgb]) {
        if pixels.is_empty() {
            return;
        }
        let len = pixels.len() as isize;
        let tail_start = match self.tail_start {
            Some(start) => start,
            None => self.initial_start(len),
        };

        if self.ring {
            let mut position = tail_start.rem_euclid(len);
            for k in 0..=self.tail_length {
                pixels[position as usize] = self.color_at(k);
                position += 1;
                if position == len {
                    position = 0;
                }
            }
        } else {
            let mut position = tail_start;
            for k in 0..=self.tail_length {
                if position >= len {
                    break;
                }
                if position >= 0 {
                    pixels[position as usize] = self.color_at(k);
                }
                position += 1;
            }
        }

        let mut next = tail_start + self.direction();
        if self.ring {
            next = next.rem_euclid(len);
        } else if next < -(self.tail_length as isize) || (next >= len && !self.reverse) {
            if self.bounce {
                self.reverse = !self.reverse;
            } else {
                self.reverse = self.initial_reverse;
                next = self.initial_start(len);
            }
        }
        self.tail_start = Some(next);
    }
}

impl Animation for Comet {
    /// Rainbow comets keep their wheel paint
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
        self.reverse = self.initial_reverse;
        self.tail_start = None;
    }
}
