//! Floating point HSV conversion
//!
//! `smart_leds::hsv` works on a 0-255 hue wheel with integer rounding, which
//! cannot express the degree-based cool color band, so the conversion is done
//! here in `f32`.

use super::{Rgb, scale_channel};

/// Lower bound of the cool hue band, in degrees
pub const COOL_HUE_MIN: u16 = 160;
/// Upper bound of the cool hue band, in degrees (inclusive)
pub const COOL_HUE_MAX: u16 = 260;

/// Convert hue/saturation/value to RGB
///
/// * `hue` - position on the color wheel, `0.0..1.0`
/// * `saturation` - `0.0..=1.0`
/// * `value` - `0.0..=1.0`
///
/// Uses the classic six sector conversion: the sector is
/// `floor(hue * 6) mod 6` and the fractional part drives the secondary channel.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let scaled = hue * 6.0;
    let sector_start = libm::floorf(scaled);
    let fractional = scaled - sector_start;

    let v = value;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fractional * saturation);
    let t = value * (1.0 - (1.0 - fractional) * saturation);

    let (r, g, b) = match (sector_start as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: scale_channel(255, r),
        g: scale_channel(255, g),
        b: scale_channel(255, b),
    }
}

/// Fully saturated, full value color for a hue given in degrees
pub fn cool_hue_color(degrees: u16) -> Rgb {
    hsv_to_rgb(f32::from(degrees) / 360.0, 1.0, 1.0)
}
