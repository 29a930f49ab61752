use embassy_time::Duration;

use super::Mode;
use crate::color::Rgb;
use crate::mapper::SensorState;

const STRAND_WALK_PACE: Duration = Duration::from_millis(50);
const BUFFER_WALK_PACE: Duration = Duration::from_millis(25);
const COMET_CHASE_PACE: Duration = Duration::from_millis(250);

const ALTERNATE_PERIOD: Duration = Duration::from_millis(750);
const HEARTBEAT_PERIOD: Duration = Duration::from_millis(1_000);

const RAINBOW_SHOW_PIXEL: Rgb = Rgb {
    r: 25,
    g: 25,
    b: 255,
};
const STRANDBOWS_PIXEL: Rgb = Rgb {
    r: 255,
    g: 25,
    b: 25,
};

/// How the on-board status outputs behave while a mode is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Status pixel follows the selected color, indicator LEDs lit
    FollowColor,
    /// Status pixel alternates between the inverse and the selected color
    /// once per period, indicator LEDs lit
    Alternate(Duration),
    /// Status pixel shows a fixed color while the indicator LEDs toggle
    /// once per period
    Heartbeat { pixel: Rgb, period: Duration },
}

impl Indicator {
    /// Blink period, if the indicator blinks at all
    pub const fn period(self) -> Option<Duration> {
        match self {
            Self::FollowColor => None,
            Self::Alternate(period) | Self::Heartbeat { period, .. } => Some(period),
        }
    }
}

/// One render step, planned from the sensor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCommand {
    /// Paint the pixel under the cursor on every strand
    WalkStrands(Rgb),
    /// Paint the pixel under the cursor of the whole buffer
    WalkBuffer(Rgb),
    /// Step the chase + comet pair on every strand
    CometPairs { chase: Rgb, comet: Rgb },
    /// Step the whole-buffer rainbow sequence
    RainbowShow,
    /// Step the per-strand rainbows
    Strandbows,
    /// Step the plain chase group
    Chase(Rgb),
    /// Step the complementary-gap chase group
    PairChase(Rgb),
    /// Step the long-bar chase group
    ChunkChase(Rgb),
}

/// Static description of a mode
#[derive(Debug)]
pub struct ModeProfile {
    pub mode: Mode,
    /// Full brightness range allowed
    pub power_safe: bool,
    /// Minimum interval between renders; `None` renders every tick
    pub pace: Option<Duration>,
    pub indicator: Indicator,
    planner: fn(&SensorState) -> RenderCommand,
}

impl ModeProfile {
    /// Plan the render step for the given sensor state
    pub fn plan(&self, sensors: &SensorState) -> RenderCommand {
        (self.planner)(sensors)
    }
}

/// Dispatch table, indexed by [`Mode::index`]
pub static PROFILES: [ModeProfile; Mode::COUNT] = [
    ModeProfile {
        mode: Mode::StrandWalk,
        power_safe: false,
        pace: Some(STRAND_WALK_PACE),
        indicator: Indicator::FollowColor,
        planner: |s| RenderCommand::WalkStrands(s.color),
    },
    ModeProfile {
        mode: Mode::BufferWalk,
        power_safe: false,
        pace: Some(BUFFER_WALK_PACE),
        indicator: Indicator::FollowColor,
        planner: |s| RenderCommand::WalkBuffer(s.color),
    },
    ModeProfile {
        mode: Mode::CometChase,
        power_safe: true,
        pace: Some(COMET_CHASE_PACE),
        indicator: Indicator::FollowColor,
        planner: |s| RenderCommand::CometPairs {
            chase: s.color,
            comet: s.color,
        },
    },
    ModeProfile {
        mode: Mode::DuelingComets,
        power_safe: true,
        pace: None,
        indicator: Indicator::Alternate(ALTERNATE_PERIOD),
        planner: |s| RenderCommand::CometPairs {
            chase: s.inverse,
            comet: s.color,
        },
    },
    ModeProfile {
        mode: Mode::RainbowShow,
        power_safe: true,
        pace: None,
        indicator: Indicator::Heartbeat {
            pixel: RAINBOW_SHOW_PIXEL,
            period: HEARTBEAT_PERIOD,
        },
        planner: |_| RenderCommand::RainbowShow,
    },
    ModeProfile {
        mode: Mode::Strandbows,
        power_safe: true,
        pace: None,
        indicator: Indicator::Heartbeat {
            pixel: STRANDBOWS_PIXEL,
            period: HEARTBEAT_PERIOD,
        },
        planner: |_| RenderCommand::Strandbows,
    },
    ModeProfile {
        mode: Mode::Chase,
        power_safe: true,
        pace: None,
        indicator: Indicator::FollowColor,
        planner: |s| RenderCommand::Chase(s.color),
    },
    ModeProfile {
        mode: Mode::PairChase,
        power_safe: false,
        pace: None,
        indicator: Indicator::Alternate(ALTERNATE_PERIOD),
        planner: |s| RenderCommand::PairChase(s.color),
    },
    ModeProfile {
        mode: Mode::ChunkChase,
        power_safe: false,
        pace: None,
        indicator: Indicator::FollowColor,
        planner: |s| RenderCommand::ChunkChase(s.color),
    },
];
