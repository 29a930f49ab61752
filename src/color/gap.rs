//! Complementary gap color
//!
//! Chase animations leave "gaps" between their bars. Instead of going dark,
//! a pair chase fills them with a color picked from threshold bands of the
//! bar color, so that the gap visually complements the active hue.

use super::{Paint, Rgb, inverse};

/// Channel level below which a channel counts as "off"
pub const OFF_THRESHOLD: u8 = 20;
/// Channel level above which a channel counts as "on"
pub const ON_THRESHOLD: u8 = 220;

/// Level above which all three channels are considered pinned to full scale
const SATURATED_THRESHOLD: u8 = ON_THRESHOLD.saturating_add(10);

/// Gap for a saturated red bar
pub const GAP_FOR_RED: Rgb = Rgb { r: 0, g: 0, b: 255 };
/// Gap for a saturated blue bar
pub const GAP_FOR_BLUE: Rgb = Rgb { r: 255, g: 100, b: 0 };
/// Gap for a saturated green bar
pub const GAP_FOR_GREEN: Rgb = Rgb { r: 180, g: 0, b: 255 };
/// Gap for a saturated magenta bar
pub const GAP_FOR_MAGENTA: Rgb = Rgb { r: 10, g: 10, b: 255 };
/// Gap used when all channels are pinned near full scale
pub const GAP_FOR_WHITE: Rgb = Rgb { r: 0, g: 0, b: 0 };
/// Gap used when the bar has no concrete RGB value
pub const GAP_FALLBACK: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Signature of a gap color provider
pub type GapFn = fn(Paint) -> Rgb;

/// Compute the complementary gap color for a bar color.
///
/// Bands are evaluated in order and the first match wins. Pots pinned at
/// full scale land in the all-on band and get a dark gap instead of a
/// near-black negative.
pub const fn gap_color(color: Rgb) -> Rgb {
    let Rgb { r, g, b } = color;

    if is_on(r) && is_off(g) && is_off(b) {
        GAP_FOR_RED
    } else if is_on(b) && is_off(r) && is_off(g) {
        GAP_FOR_BLUE
    } else if is_on(g) && is_off(r) && is_off(b) {
        GAP_FOR_GREEN
    } else if is_on(r) && is_on(b) && is_off(g) {
        GAP_FOR_MAGENTA
    } else if r > SATURATED_THRESHOLD && g > SATURATED_THRESHOLD && b > SATURATED_THRESHOLD {
        GAP_FOR_WHITE
    } else {
        inverse(color)
    }
}

#[inline]
const fn is_on(channel: u8) -> bool {
    channel > ON_THRESHOLD
}

#[inline]
const fn is_off(channel: u8) -> bool {
    channel < OFF_THRESHOLD
}

/// Gap color for any paint.
///
/// Symbolic paints have no channel values to band, so they get
/// [`GAP_FALLBACK`].
pub fn gap_paint(paint: Paint) -> Rgb {
    match paint {
        Paint::Solid(color) => gap_color(color),
        Paint::Wheel => GAP_FALLBACK,
    }
}

/// Gap provider that leaves gaps dark
pub fn dark_gap(_paint: Paint) -> Rgb {
    Rgb { r: 0, g: 0, b: 0 }
}
