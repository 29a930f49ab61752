//! Shared pixel buffer split into equal strands.
//!
//! The buffer is a `[[Rgb; STRAND_LEN]; STRANDS]` array, so strands are
//! contiguous and never overlap. Nothing reaches the hardware until
//! [`PixelBuffer::commit`] is called.

use smart_leds::{SmartLedsWrite, brightness};

use crate::color::{BLACK, Rgb};

/// Brightness the buffer starts with before the first sensor read
pub const DEFAULT_BRIGHTNESS: f32 = 0.55;

#[derive(Debug, Clone)]
pub struct PixelBuffer<const STRANDS: usize, const STRAND_LEN: usize> {
    strands: [[Rgb; STRAND_LEN]; STRANDS],
    brightness: f32,
}

impl<const STRANDS: usize, const STRAND_LEN: usize> Default for PixelBuffer<STRANDS, STRAND_LEN> {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl<const STRANDS: usize, const STRAND_LEN: usize> PixelBuffer<STRANDS, STRAND_LEN> {
    /// Total number of pixels across all strands
    pub const LEN: usize = STRANDS * STRAND_LEN;

    /// Create a dark buffer with the given output brightness
    pub fn new(brightness: f32) -> Self {
        Self {
            strands: [[BLACK; STRAND_LEN]; STRANDS],
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    pub const fn strands(&self) -> &[[Rgb; STRAND_LEN]; STRANDS] {
        &self.strands
    }

    pub fn strands_mut(&mut self) -> &mut [[Rgb; STRAND_LEN]; STRANDS] {
        &mut self.strands
    }

    pub fn strand(&self, strand: usize) -> Option<&[Rgb; STRAND_LEN]> {
        self.strands.get(strand)
    }

    /// All pixels in bus order
    pub fn pixels(&self) -> &[Rgb] {
        self.strands.as_flattened()
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        self.strands.as_flattened_mut()
    }

    /// Set one pixel of one strand.
    ///
    /// Returns `false` if the address is out of range.
    pub fn set(&mut self, strand: usize, index: usize, color: Rgb) -> bool {
        match self
            .strands
            .get_mut(strand)
            .and_then(|pixels| pixels.get_mut(index))
        {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    /// Fill every pixel with one color
    pub fn set_all(&mut self, color: Rgb) {
        self.pixels_mut().fill(color);
    }

    pub fn clear(&mut self) {
        self.set_all(BLACK);
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Set the output brightness (0.0-1.0) used by the next commit
    pub fn set_brightness(&mut self, level: f32) {
        self.brightness = level.clamp(0.0, 1.0);
    }

    /// Output brightness as an 8-bit scale
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness_level(&self) -> u8 {
        libm::roundf(self.brightness * 255.0) as u8
    }

    /// Push the buffer to the hardware, scaled by the output brightness
    pub fn commit<D>(&self, driver: &mut D) -> Result<(), D::Error>
    where
        D: SmartLedsWrite<Color = Rgb>,
    {
        driver.write(brightness(
            self.pixels().iter().copied(),
            self.brightness_level(),
        ))
    }
}
