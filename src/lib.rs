#![no_std]

pub mod animation;
pub mod button;
pub mod color;
pub mod conditioner;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod mapper;
pub mod mode;
pub mod pacer;
pub mod pixels;
pub mod stage;

pub use animation::{Animation, AnimationSlot};
pub use button::{ButtonInput, Debouncer};
pub use conditioner::{Precision, SignalConditioner};
pub use config::ControllerConfig;
pub use dispatcher::{Dispatcher, Tick};
pub use error::Error;
pub use mapper::{ColorMapper, RawSamples, SensorState};
pub use mode::{Mode, ModeController, ModeProfile, RenderCommand};
pub use pacer::{Blink, PaceWindow, Pacer};
pub use pixels::PixelBuffer;
pub use stage::Stage;

pub use color::{Paint, Rgb, gap_color};
pub use embassy_time::{Duration, Instant};
pub use smart_leds::SmartLedsWrite;

/// Potentiometer channels sampled every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pot {
    Brightness,
    Red,
    Green,
    Blue,
}

/// Abstract ADC trait
///
/// Implement this trait to read the potentiometers on a given board.
/// Samples cover the full `u16` range.
pub trait AnalogInput {
    type Error;

    /// Read one raw sample
    fn read(&mut self, pot: Pot) -> Result<u16, Self::Error>;
}

/// On-board status outputs: one status pixel and a pair of indicator LEDs
pub trait StatusIndicator {
    /// Show a color on the status pixel at the given brightness (0.0-1.0)
    fn set_pixel(&mut self, color: Rgb, brightness: f32);

    /// Switch the indicator LEDs
    fn set_leds(&mut self, on: bool);
}
