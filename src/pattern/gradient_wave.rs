//! Diagonal sine wave in a single cool color

use crate::{
    color::{ColorSource, scale_color},
    frame::Frame,
};

/// Spatial frequency of the wave along `x + y`.
const WAVE_FREQUENCY: f32 = 0.2;

/// Fills `frame` with a diagonal brightness wave of one cool color.
#[allow(clippy::cast_precision_loss)]
pub fn gradient_wave<S: ColorSource + ?Sized>(source: &mut S, frame: &mut Frame) {
    let base = source.cool_color();

    for (x, y, pixel) in frame.enumerate_mut() {
        let factor = (libm::sinf((x + y) as f32 * WAVE_FREQUENCY) + 1.0) / 2.0;
        *pixel = scale_color(base, factor);
    }
}
