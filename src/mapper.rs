//! Conversion of raw potentiometer samples into brightness and color.

use crate::color::{Rgb, inverse};
use crate::conditioner::{DEFAULT_WINDOW, SignalConditioner, round_to};

/// Full scale of a raw ADC sample
pub const ADC_FULL_SCALE: f32 = 65_535.0;

/// Brightness ceiling for modes that are not power-safe
pub const POWER_LIMITED_BRIGHTNESS: f32 = 0.7;

/// Divisor mapping a raw sample onto an 8-bit channel
const CHANNEL_DIVISOR: u16 = 255;

/// Decimals kept when normalizing a brightness sample
const BRIGHTNESS_SAMPLE_DECIMALS: u8 = 3;

/// Decimals reported by the brightness conditioner
const BRIGHTNESS_READ_DECIMALS: u8 = 2;

/// One raw sample per potentiometer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSamples {
    pub brightness: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// Conditioned sensor state for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorState {
    /// Output brightness (0.0-1.0)
    pub brightness: f32,
    /// Color selected by the RGB pots
    pub color: Rgb,
    /// Channel-wise negative of `color`
    pub inverse: Rgb,
}

impl Default for SensorState {
    fn default() -> Self {
        let color = Rgb::default();
        Self {
            brightness: 0.0,
            color,
            inverse: inverse(color),
        }
    }
}

/// Maps raw samples onto a [`SensorState`], smoothing every channel.
///
/// All four conditioners advance together on every [`ColorMapper::update`]
/// call, so their windows cover the same ticks.
#[derive(Debug, Clone)]
pub struct ColorMapper<const WINDOW: usize = DEFAULT_WINDOW> {
    brightness: SignalConditioner<WINDOW>,
    red: SignalConditioner<WINDOW>,
    green: SignalConditioner<WINDOW>,
    blue: SignalConditioner<WINDOW>,
}

impl<const WINDOW: usize> Default for ColorMapper<WINDOW> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WINDOW: usize> ColorMapper<WINDOW> {
    pub const fn new() -> Self {
        Self {
            brightness: SignalConditioner::rounding(BRIGHTNESS_READ_DECIMALS),
            red: SignalConditioner::truncating(),
            green: SignalConditioner::truncating(),
            blue: SignalConditioner::truncating(),
        }
    }

    /// Feed one set of samples and return the resulting state.
    ///
    /// `power_safe` selects the full brightness range; otherwise brightness
    /// is capped at [`POWER_LIMITED_BRIGHTNESS`].
    pub fn update(&mut self, samples: RawSamples, power_safe: bool) -> SensorState {
        self.brightness
            .observe(normalize_brightness(samples.brightness, power_safe));
        self.red.observe(f32::from(channel_level(samples.red)));
        self.green.observe(f32::from(channel_level(samples.green)));
        self.blue.observe(f32::from(channel_level(samples.blue)));

        self.state()
    }

    /// Current state without feeding new samples
    pub fn state(&self) -> SensorState {
        let color = Rgb {
            r: to_channel(self.red.read()),
            g: to_channel(self.green.read()),
            b: to_channel(self.blue.read()),
        };
        SensorState {
            brightness: self.brightness.read().clamp(0.0, 1.0),
            color,
            inverse: inverse(color),
        }
    }
}

/// Normalize a raw brightness sample, rounded to 3 decimals
pub fn normalize_brightness(raw: u16, power_safe: bool) -> f32 {
    let divisor = if power_safe {
        ADC_FULL_SCALE
    } else {
        ADC_FULL_SCALE / POWER_LIMITED_BRIGHTNESS
    };
    round_to(f32::from(raw) / divisor, BRIGHTNESS_SAMPLE_DECIMALS)
}

/// Map a raw sample onto an 8-bit level, saturating at 255
#[allow(clippy::cast_possible_truncation)]
pub const fn channel_level(raw: u16) -> u8 {
    let level = raw / CHANNEL_DIVISOR;
    if level > 255 { 255 } else { level as u8 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
