//! Woven rug
//!
//! Horizontal bands of 4 rows alternate between two colors. Inside a band,
//! 4 pixel wide stripes alternate between the full band color and a quarter
//! brightness accent, shifted by one stripe on every other band.

use crate::{
    color::{ColorSource, Rgb},
    frame::Frame,
};

const STRIPE_WIDTH: usize = 4;
const BAND_HEIGHT: usize = 4;
/// Divisor for the dim accent stripes
const ACCENT_DIVISOR: u8 = 4;

/// Fills `frame` with the rug, drawing two cool colors from `source`.
///
/// The first color is used for even bands, the second for odd ones.
pub fn rug<S: ColorSource + ?Sized>(source: &mut S, frame: &mut Frame) {
    let even_band = source.cool_color();
    let odd_band = source.cool_color();

    for (x, y, pixel) in frame.enumerate_mut() {
        let band_parity = (y / BAND_HEIGHT) % 2;
        let band_color = if band_parity == 0 { even_band } else { odd_band };

        *pixel = if (x / STRIPE_WIDTH) % 2 == band_parity {
            band_color
        } else {
            dim(band_color)
        };
    }
}

const fn dim(color: Rgb) -> Rgb {
    Rgb {
        r: color.r / ACCENT_DIVISOR,
        g: color.g / ACCENT_DIVISOR,
        b: color.b / ACCENT_DIVISOR,
    }
}
