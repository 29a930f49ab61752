#![allow(dead_code)]

use myrtio_strand_controller::{
    AnalogInput, ButtonInput, Instant, Pot, Rgb, SmartLedsWrite, color::BLACK,
    dispatcher::Dispatcher, mode::Mode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

/// ADC returning fixed raw values per pot
#[derive(Debug, Default)]
pub struct MockAdc {
    pub brightness: u16,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub fail: bool,
    pub reads: usize,
}

impl MockAdc {
    pub fn new(brightness: u16, red: u16, green: u16, blue: u16) -> Self {
        Self {
            brightness,
            red,
            green,
            blue,
            ..Self::default()
        }
    }
}

impl AnalogInput for MockAdc {
    type Error = AdcError;

    fn read(&mut self, pot: Pot) -> Result<u16, Self::Error> {
        if self.fail {
            return Err(AdcError);
        }
        self.reads += 1;
        Ok(match pot {
            Pot::Brightness => self.brightness,
            Pot::Red => self.red,
            Pot::Green => self.green,
            Pot::Blue => self.blue,
        })
    }
}

/// Button that reports one rising edge on the tick after `press`
#[derive(Debug, Default)]
pub struct ScriptedButton {
    pending: bool,
    rose: bool,
    pub updates: usize,
}

impl ScriptedButton {
    pub fn press(&mut self) {
        self.pending = true;
    }
}

impl ButtonInput for ScriptedButton {
    fn update(&mut self, _now: Instant) {
        self.updates += 1;
        self.rose = core::mem::take(&mut self.pending);
    }

    fn rose(&self) -> bool {
        self.rose
    }

    fn value(&self) -> bool {
        self.rose
    }
}

/// Pixel bus keeping every committed frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
    pub fail: bool,
}

impl RecordingDriver {
    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl SmartLedsWrite for RecordingDriver {
    type Error = BusError;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err(BusError);
        }
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

/// Status outputs recording every call
#[derive(Debug, Default)]
pub struct MockIndicator {
    pub pixels: Vec<(Rgb, f32)>,
    pub leds: Vec<bool>,
}

impl MockIndicator {
    pub fn last_pixel(&self) -> Option<Rgb> {
        self.pixels.last().map(|(color, _)| *color)
    }
}

impl myrtio_strand_controller::StatusIndicator for MockIndicator {
    fn set_pixel(&mut self, color: Rgb, brightness: f32) {
        self.pixels.push((color, brightness));
    }

    fn set_leds(&mut self, on: bool) {
        self.leds.push(on);
    }
}

pub const STRANDS: usize = 2;
pub const STRAND_LEN: usize = 10;

pub type TestDispatcher =
    Dispatcher<MockAdc, ScriptedButton, RecordingDriver, MockIndicator, STRANDS, STRAND_LEN>;

/// Dispatcher over mocks, starting in `mode`
pub fn dispatcher(mode: Mode, adc: MockAdc) -> TestDispatcher {
    let config = myrtio_strand_controller::ControllerConfig::DEFAULT.with_initial_mode(mode);
    Dispatcher::new(
        adc,
        ScriptedButton::default(),
        RecordingDriver::default(),
        MockIndicator::default(),
        &config,
    )
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn is_dark(frame: &[Rgb]) -> bool {
    frame.iter().all(|pixel| *pixel == BLACK)
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
