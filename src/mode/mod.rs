//! Mode catalog and the button-driven mode state machine
//!
//! Modes are numbered 1..=9 and cycle in order on every button press.
//! Each mode has a static [`ModeProfile`] describing its pacing, indicator
//! behavior and render planner.

mod profile;

pub use profile::{Indicator, ModeProfile, PROFILES, RenderCommand};

const MODE_NAME_STRAND_WALK: &str = "strand_walk";
const MODE_NAME_BUFFER_WALK: &str = "buffer_walk";
const MODE_NAME_COMET_CHASE: &str = "comet_chase";
const MODE_NAME_DUELING_COMETS: &str = "dueling_comets";
const MODE_NAME_RAINBOW_SHOW: &str = "rainbow_show";
const MODE_NAME_STRANDBOWS: &str = "strandbows";
const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_PAIR_CHASE: &str = "pair_chase";
const MODE_NAME_CHUNK_CHASE: &str = "chunk_chase";

const MODE_ID_STRAND_WALK: u8 = 1;
const MODE_ID_BUFFER_WALK: u8 = 2;
const MODE_ID_COMET_CHASE: u8 = 3;
const MODE_ID_DUELING_COMETS: u8 = 4;
const MODE_ID_RAINBOW_SHOW: u8 = 5;
const MODE_ID_STRANDBOWS: u8 = 6;
const MODE_ID_CHASE: u8 = 7;
const MODE_ID_PAIR_CHASE: u8 = 8;
const MODE_ID_CHUNK_CHASE: u8 = 9;

/// Display modes, in button cycling order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Single pixel walking along every strand at once
    StrandWalk = MODE_ID_STRAND_WALK,
    /// Single pixel walking along the whole buffer
    BufferWalk = MODE_ID_BUFFER_WALK,
    /// Chase with a ring comet on each strand
    CometChase = MODE_ID_COMET_CHASE,
    /// Chase and comet in complementary colors
    DuelingComets = MODE_ID_DUELING_COMETS,
    /// Rotating sequence of rainbow animations
    RainbowShow = MODE_ID_RAINBOW_SHOW,
    /// Independent rainbow on each strand
    Strandbows = MODE_ID_STRANDBOWS,
    /// Plain chase in the selected color
    #[default]
    Chase = MODE_ID_CHASE,
    /// Chase with complementary gaps
    PairChase = MODE_ID_PAIR_CHASE,
    /// Long bars with short dark gaps
    ChunkChase = MODE_ID_CHUNK_CHASE,
}

impl Mode {
    /// Number of modes in the catalog
    pub const COUNT: usize = 9;

    /// All modes in cycling order
    pub const ALL: [Self; Self::COUNT] = [
        Self::StrandWalk,
        Self::BufferWalk,
        Self::CometChase,
        Self::DuelingComets,
        Self::RainbowShow,
        Self::Strandbows,
        Self::Chase,
        Self::PairChase,
        Self::ChunkChase,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STRAND_WALK => Self::StrandWalk,
            MODE_ID_BUFFER_WALK => Self::BufferWalk,
            MODE_ID_COMET_CHASE => Self::CometChase,
            MODE_ID_DUELING_COMETS => Self::DuelingComets,
            MODE_ID_RAINBOW_SHOW => Self::RainbowShow,
            MODE_ID_STRANDBOWS => Self::Strandbows,
            MODE_ID_CHASE => Self::Chase,
            MODE_ID_PAIR_CHASE => Self::PairChase,
            MODE_ID_CHUNK_CHASE => Self::ChunkChase,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based position in [`Mode::ALL`]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Next mode in the cycle, wrapping from the last back to the first
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Whether the mode may use the full brightness range
    pub fn is_power_safe(self) -> bool {
        self.profile().power_safe
    }

    /// Static profile of this mode
    pub fn profile(self) -> &'static ModeProfile {
        &PROFILES[self.index()]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrandWalk => MODE_NAME_STRAND_WALK,
            Self::BufferWalk => MODE_NAME_BUFFER_WALK,
            Self::CometChase => MODE_NAME_COMET_CHASE,
            Self::DuelingComets => MODE_NAME_DUELING_COMETS,
            Self::RainbowShow => MODE_NAME_RAINBOW_SHOW,
            Self::Strandbows => MODE_NAME_STRANDBOWS,
            Self::Chase => MODE_NAME_CHASE,
            Self::PairChase => MODE_NAME_PAIR_CHASE,
            Self::ChunkChase => MODE_NAME_CHUNK_CHASE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STRAND_WALK => Some(Self::StrandWalk),
            MODE_NAME_BUFFER_WALK => Some(Self::BufferWalk),
            MODE_NAME_COMET_CHASE => Some(Self::CometChase),
            MODE_NAME_DUELING_COMETS => Some(Self::DuelingComets),
            MODE_NAME_RAINBOW_SHOW => Some(Self::RainbowShow),
            MODE_NAME_STRANDBOWS => Some(Self::Strandbows),
            MODE_NAME_CHASE => Some(Self::Chase),
            MODE_NAME_PAIR_CHASE => Some(Self::PairChase),
            MODE_NAME_CHUNK_CHASE => Some(Self::ChunkChase),
            _ => None,
        }
    }
}

/// Finite state machine over the mode catalog
#[derive(Debug, Clone)]
pub struct ModeController {
    active: Mode,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ModeController {
    pub const fn new(initial: Mode) -> Self {
        Self { active: initial }
    }

    pub const fn active(&self) -> Mode {
        self.active
    }

    /// Move to the next mode and return it
    pub fn advance(&mut self) -> Mode {
        self.active = self.active.next();
        self.active
    }
}
