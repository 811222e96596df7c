use crate::color::Rgb;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale every channel of a color by `scale`
#[inline]
pub const fn scale_rgb(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Scale each channel of a color by the matching channel of `factors`
#[inline]
pub const fn scale_channels(color: Rgb, factors: Rgb) -> Rgb {
    Rgb {
        r: scale8(color.r, factors.r),
        g: scale8(color.g, factors.g),
        b: scale8(color.b, factors.b),
    }
}

/// Dim a single color towards black by `amount` (0 = untouched, 255 = black)
#[inline]
pub const fn fade_to_black(color: Rgb, amount: u8) -> Rgb {
    scale_rgb(color, 255 - amount)
}

/// Dim every LED towards black by the same `amount`
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    for led in leds {
        *led = fade_to_black(*led, amount);
    }
}
