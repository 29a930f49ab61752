use crate::color::Rgb;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Channel-wise photographic negative of a color
#[inline]
pub const fn inverse(color: Rgb) -> Rgb {
    Rgb {
        r: 255 - color.r,
        g: 255 - color.g,
        b: 255 - color.b,
    }
}

/// Classic 3-segment color wheel.
///
/// Position 0 is red, 85 is green, 170 is blue. Positions above 255 are
/// not representable, so every `u8` maps onto the wheel.
#[allow(clippy::cast_possible_truncation)]
pub const fn color_wheel(position: u8) -> Rgb {
    let pos = position as u16;
    if pos < 85 {
        Rgb {
            r: (255 - pos * 3) as u8,
            g: (pos * 3) as u8,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: (255 - pos * 3) as u8,
            b: (pos * 3) as u8,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: (pos * 3) as u8,
            g: 0,
            b: (255 - pos * 3) as u8,
        }
    }
}

/// Scale a color by a floating point intensity (0.0-1.0).
///
/// Channels are truncated, not rounded.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn intensity(color: Rgb, level: f32) -> Rgb {
    let level = level.clamp(0.0, 1.0);
    let scale = |c: u8| (f32::from(c) * level) as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
