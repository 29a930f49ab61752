//! Per-tick control loop.
//!
//! The [`Dispatcher`] owns every piece of runtime state: the sensors,
//! the mode controller, the pacer, the pixel buffer and the animations.
//! One call to [`Dispatcher::tick`] runs one iteration of the loop:
//!
//! 1. update the debounced button; on a rising edge switch mode, clear and
//!    commit the display and stop
//! 2. read all potentiometers and condition them
//! 3. if the active mode is due, drive the status outputs, plan and run the
//!    mode's render step and commit the frame

use core::convert::Infallible;

use embassy_time::{Duration, Instant};
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::Animation;
use crate::button::ButtonInput;
use crate::color::{BLACK, Rgb};
use crate::config::ControllerConfig;
use crate::error::Error;
use crate::mapper::{ColorMapper, RawSamples, SensorState};
use crate::mode::{Indicator, Mode, ModeController, RenderCommand};
use crate::pacer::{Blink, Pacer};
use crate::pixels::PixelBuffer;
use crate::stage::{Stage, WalkCursor};
use crate::{AnalogInput, Pot, StatusIndicator};

/// Status pixel colors played by [`Dispatcher::start`]
pub const GREETING: [Rgb; 4] = [
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb {
        r: 255,
        g: 255,
        b: 255,
    },
];

/// How long each greeting color is shown
pub const GREETING_STEP: Duration = Duration::from_millis(500);

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The button rose; the display was cleared and nothing was rendered
    Switched(Mode),
    /// The active mode rendered and the frame was committed
    Rendered(Mode),
    /// Sensors were sampled but the active mode was not due
    Idle,
}

/// Owns the collaborators and all runtime state of the controller
pub struct Dispatcher<A, B, D, S, const STRANDS: usize, const STRAND_LEN: usize> {
    // External dependencies
    adc: A,
    button: B,
    driver: D,
    indicator: S,

    // Internal state
    controller: ModeController,
    mapper: ColorMapper,
    pacer: Pacer,
    blinks: [Option<Blink>; Mode::COUNT],
    cursor: WalkCursor,
    sensors: SensorState,
    status_color: Rgb,
    leds_lit: bool,
    pixels: PixelBuffer<STRANDS, STRAND_LEN>,
    stage: Stage<STRANDS>,
}

impl<A, B, D, S, const STRANDS: usize, const STRAND_LEN: usize>
    Dispatcher<A, B, D, S, STRANDS, STRAND_LEN>
where
    A: AnalogInput,
    B: ButtonInput,
    D: SmartLedsWrite<Color = Rgb>,
    S: StatusIndicator,
{
    pub fn new(adc: A, button: B, driver: D, indicator: S, config: &ControllerConfig) -> Self {
        Self {
            adc,
            button,
            driver,
            indicator,
            controller: ModeController::new(config.initial_mode),
            mapper: ColorMapper::new(),
            pacer: Pacer::new(),
            blinks: Mode::ALL.map(|mode| mode.profile().indicator.period().map(Blink::new)),
            cursor: WalkCursor::new(),
            sensors: SensorState::default(),
            status_color: BLACK,
            leds_lit: false,
            pixels: PixelBuffer::new(config.brightness),
            stage: Stage::new(STRAND_LEN),
        }
    }

    /// Blank the strands, light the indicator LEDs and play the greeting on
    /// the status pixel.
    ///
    /// `delay` is called between greeting colors and should block for the
    /// given duration.
    pub fn start(
        &mut self,
        mut delay: impl FnMut(Duration),
    ) -> Result<(), Error<A::Error, D::Error>> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Dispatcher.start] {} strands x {} pixels, mode {}",
            STRANDS,
            STRAND_LEN,
            self.controller.active().as_str()
        );
        self.pixels.clear();
        self.pixels.commit(&mut self.driver).map_err(Error::Output)?;
        self.set_leds(true);
        for color in GREETING {
            self.indicator.set_pixel(color, 1.0);
            delay(GREETING_STEP);
        }
        Ok(())
    }

    /// Run the control loop until an error occurs
    pub fn run(
        &mut self,
        mut clock: impl FnMut() -> Instant,
    ) -> Result<Infallible, Error<A::Error, D::Error>> {
        loop {
            if let Err(err) = self.tick(clock()) {
                #[cfg(feature = "esp32-log")]
                println!("[Dispatcher.run] stopping control loop");
                return Err(err);
            }
        }
    }

    /// Run one iteration of the control loop
    pub fn tick(&mut self, now: Instant) -> Result<Tick, Error<A::Error, D::Error>> {
        self.button.update(now);
        if self.button.rose() {
            let mode = self.switch_mode()?;
            return Ok(Tick::Switched(mode));
        }

        let mode = self.controller.active();
        let profile = mode.profile();

        let samples = self.read_samples().map_err(Error::Sensor)?;
        let sensors = self.mapper.update(samples, profile.power_safe);
        self.sensors = sensors;

        if !self.pacer.due(mode, now) {
            return Ok(Tick::Idle);
        }
        self.pacer.record(mode, now);

        self.drive_indicator(mode, profile.indicator, now);
        self.render(profile.plan(&sensors), now);

        self.pixels.set_brightness(sensors.brightness);
        self.pixels.commit(&mut self.driver).map_err(Error::Output)?;

        Ok(Tick::Rendered(mode))
    }

    /// Advance to the next mode and blank the display
    fn switch_mode(&mut self) -> Result<Mode, Error<A::Error, D::Error>> {
        let mode = self.controller.advance();
        #[cfg(feature = "esp32-log")]
        println!(
            "[Dispatcher.switch_mode] switched to {} ({})",
            mode.as_str(),
            mode.id()
        );
        self.cursor.reset();
        self.pixels.clear();
        self.pixels.commit(&mut self.driver).map_err(Error::Output)?;
        Ok(mode)
    }

    /// Sample every potentiometer before anything is conditioned
    fn read_samples(&mut self) -> Result<RawSamples, A::Error> {
        Ok(RawSamples {
            brightness: self.adc.read(Pot::Brightness)?,
            red: self.adc.read(Pot::Red)?,
            green: self.adc.read(Pot::Green)?,
            blue: self.adc.read(Pot::Blue)?,
        })
    }

    fn set_leds(&mut self, on: bool) {
        self.leds_lit = on;
        self.indicator.set_leds(on);
    }

    fn drive_indicator(&mut self, mode: Mode, indicator: Indicator, now: Instant) {
        let flipped = self.blinks[mode.index()]
            .as_mut()
            .and_then(|blink| blink.poll(now));

        match indicator {
            Indicator::FollowColor => {
                self.set_leds(true);
                self.status_color = self.sensors.color;
            }
            Indicator::Alternate(_) => {
                self.set_leds(true);
                if let Some(was_primary) = flipped {
                    self.status_color = if was_primary {
                        self.sensors.inverse
                    } else {
                        self.sensors.color
                    };
                }
            }
            Indicator::Heartbeat { pixel, .. } => {
                if flipped.is_some() {
                    self.set_leds(!self.leds_lit);
                }
                self.status_color = pixel;
            }
        }
        self.indicator
            .set_pixel(self.status_color, self.sensors.brightness);
    }

    /// Execute one planned render step against the pixel buffer
    fn render(&mut self, command: RenderCommand, now: Instant) {
        let stage = &mut self.stage;
        match command {
            RenderCommand::WalkStrands(color) => {
                if let Some(index) = self.cursor.advance(STRAND_LEN) {
                    for strand in self.pixels.strands_mut() {
                        strand[index] = color;
                    }
                }
            }
            RenderCommand::WalkBuffer(color) => {
                let pixels = self.pixels.pixels_mut();
                if let Some(index) = self.cursor.advance(pixels.len()) {
                    pixels[index] = color;
                }
            }
            RenderCommand::CometPairs { chase, comet } => {
                for pair in stage.comet_pairs.members_mut() {
                    pair.set_colors(chase, comet);
                }
                stage.comet_pairs.step(now, self.pixels.strands_mut());
            }
            RenderCommand::RainbowShow => {
                stage.rainbow_show.step(now, self.pixels.pixels_mut());
            }
            RenderCommand::Strandbows => {
                stage.strandbows.step(now, self.pixels.strands_mut());
            }
            RenderCommand::Chase(color) => {
                stage.chase.set_color(color);
                stage.chase.step(now, self.pixels.strands_mut());
            }
            RenderCommand::PairChase(color) => {
                stage.pair_chase.set_color(color);
                stage.pair_chase.step(now, self.pixels.strands_mut());
            }
            RenderCommand::ChunkChase(color) => {
                stage.chunk_chase.set_color(color);
                stage.chunk_chase.step(now, self.pixels.strands_mut());
            }
        }
    }

    /// Currently active mode
    pub const fn mode(&self) -> Mode {
        self.controller.active()
    }

    /// Sensor state computed on the last non-switching tick
    pub const fn sensors(&self) -> &SensorState {
        &self.sensors
    }

    pub const fn pixels(&self) -> &PixelBuffer<STRANDS, STRAND_LEN> {
        &self.pixels
    }

    pub const fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    pub const fn stage(&self) -> &Stage<STRANDS> {
        &self.stage
    }

    /// Color last shown on the status pixel
    pub const fn status_color(&self) -> Rgb {
        self.status_color
    }

    pub const fn leds_lit(&self) -> bool {
        self.leds_lit
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn indicator(&self) -> &S {
        &self.indicator
    }

    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}
