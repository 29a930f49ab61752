//! Animation instances used by the mode catalog.
//!
//! Every animation is created once and kept for the life of the
//! controller, so a mode resumes where it left off when it is re-entered.

use embassy_time::Duration;

use crate::animation::{
    AnimationSequence, Chase, Comet, CometPair, Rainbow, Sparkle, StrandGroup,
};
use crate::color::{BLACK, Rgb, WHITE};

const FAST_CHASE_SPEED: Duration = Duration::from_millis(150);
const COMET_SPEED: Duration = Duration::from_millis(25);
const CHASE_SPEED: Duration = Duration::from_millis(250);
const RAINBOW_SPEED: Duration = Duration::from_millis(100);

const COMET_COLOR: Rgb = Rgb { r: 255, g: 20, b: 20 };
const COMET_TAIL: usize = 10;

const RAINBOW_SHOW_ADVANCE: Duration = Duration::from_secs(20);
const RAINBOW_SHOW_PERIOD: Duration = Duration::from_secs(4);
const RAINBOW_COMET_TAIL: usize = 69;
const RAINBOW_SPARKLES: usize = 15;

/// Animations played by the rainbow show, in order
pub const RAINBOW_SHOW_LEN: usize = 4;

/// Walking single-pixel cursor shared by the walk modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkCursor {
    position: Option<usize>,
}

impl WalkCursor {
    pub const fn new() -> Self {
        Self { position: None }
    }

    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// Move one pixel forward over a run of `len` pixels, wrapping at the end
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = match self.position {
            Some(position) if position + 1 < len => position + 1,
            _ => 0,
        };
        self.position = Some(next);
        self.position
    }

    /// Start again from the first pixel
    pub fn reset(&mut self) {
        self.position = None;
    }
}

/// Every animation instance the modes draw with
#[derive(Debug, Clone)]
pub struct Stage<const STRANDS: usize> {
    /// Chase plus ring comet on each strand
    pub comet_pairs: StrandGroup<CometPair, STRANDS>,
    /// Plain chase on each strand
    pub chase: StrandGroup<Chase, STRANDS>,
    /// Complementary-gap chase on each strand
    pub pair_chase: StrandGroup<Chase, STRANDS>,
    /// Long-bar chase on each strand
    pub chunk_chase: StrandGroup<Chase, STRANDS>,
    /// Whole-buffer rainbow sequence
    pub rainbow_show: AnimationSequence<RAINBOW_SHOW_LEN>,
    /// Rainbow on each strand
    pub strandbows: StrandGroup<Rainbow, STRANDS>,
}

impl<const STRANDS: usize> Stage<STRANDS> {
    /// Build the stage for strands of `strand_len` pixels
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(strand_len: usize) -> Self {
        Self {
            comet_pairs: StrandGroup::from_fn(|strand| {
                // Stagger comet start positions across strands
                let slot = 2 * strand + 1;
                CometPair::new(
                    Chase::new(FAST_CHASE_SPEED, BLACK)
                        .with_size(3)
                        .with_spacing(6),
                    Comet::new(COMET_SPEED, COMET_COLOR, COMET_TAIL)
                        .with_ring(true)
                        .with_tail_start((strand_len * 5 * slot / 8) as isize),
                )
            }),
            chase: StrandGroup::from_fn(|_| Chase::new(CHASE_SPEED, WHITE)),
            pair_chase: StrandGroup::from_fn(|_| {
                Chase::pair(CHASE_SPEED, BLACK)
                    .with_size(3)
                    .with_spacing(2)
            }),
            chunk_chase: StrandGroup::from_fn(|_| {
                Chase::new(CHASE_SPEED, BLACK)
                    .with_size(20)
                    .with_spacing(7)
            }),
            rainbow_show: AnimationSequence::new(
                [
                    Rainbow::new(RAINBOW_SPEED)
                        .with_period(RAINBOW_SHOW_PERIOD)
                        .into(),
                    Chase::rainbow(FAST_CHASE_SPEED)
                        .with_size(20)
                        .with_spacing(6)
                        .into(),
                    Comet::rainbow(COMET_SPEED, RAINBOW_COMET_TAIL)
                        .with_bounce(true)
                        .into(),
                    Sparkle::new(RAINBOW_SPEED, RAINBOW_SPARKLES).into(),
                ],
                RAINBOW_SHOW_ADVANCE,
            ),
            strandbows: StrandGroup::from_fn(|_| Rainbow::new(RAINBOW_SPEED)),
        }
    }
}
