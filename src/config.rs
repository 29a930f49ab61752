use crate::mode::Mode;
use crate::pixels::DEFAULT_BRIGHTNESS;

/// Configuration for the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Mode active after power-up
    pub initial_mode: Mode,
    /// Output brightness used until the first sensor read (0.0-1.0)
    pub brightness: f32,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        initial_mode: Mode::Chase,
        brightness: DEFAULT_BRIGHTNESS,
    };

    #[must_use]
    pub const fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
