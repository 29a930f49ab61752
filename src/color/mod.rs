mod gap;
mod utils;

pub use gap::{
    GAP_FALLBACK, GAP_FOR_BLUE, GAP_FOR_GREEN, GAP_FOR_MAGENTA, GAP_FOR_RED, GAP_FOR_WHITE,
    GapFn, OFF_THRESHOLD, ON_THRESHOLD, dark_gap, gap_color, gap_paint,
};
pub use utils::{BLACK, WHITE, color_wheel, intensity, inverse};

pub type Rgb = smart_leds::RGB8;

/// What a chase bar or comet is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// A concrete RGB color
    Solid(Rgb),
    /// Color taken from the color wheel at draw time
    Wheel,
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(BLACK)
    }
}

impl From<Rgb> for Paint {
    fn from(color: Rgb) -> Self {
        Self::Solid(color)
    }
}
