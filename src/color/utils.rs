use crate::color::Rgb;

/// Round a floating point channel value and clamp it into `0..=255`
///
/// `NaN` maps to 0 so a broken factor can never leak garbage into a frame.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::roundf(value).clamp(0.0, 255.0) as u8
}

/// Scale an 8-bit channel by a floating point intensity
///
/// The product is rounded to the nearest integer and clamped.
#[inline]
pub fn scale_channel(value: u8, factor: f32) -> u8 {
    clamp_channel(f32::from(value) * factor)
}

/// Scale every channel of a color by the same intensity
#[inline]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: scale_channel(color.r, factor),
        g: scale_channel(color.g, factor),
        b: scale_channel(color.b, factor),
    }
}
