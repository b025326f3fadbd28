use crate::{
    color::{BLACK, ColorSource},
    frame::Frame,
};

/// Side of one checker block.
const BLOCK_SIZE: usize = 8;

/// Fills `frame` with an 8x8 checkerboard in one cool color.
///
/// Blocks with an even block coordinate sum are lit, the rest are black.
pub fn checker_diamond<S: ColorSource + ?Sized>(source: &mut S, frame: &mut Frame) {
    let color = source.cool_color();

    for (x, y, pixel) in frame.enumerate_mut() {
        *pixel = if (x / BLOCK_SIZE + y / BLOCK_SIZE) % 2 == 0 {
            color
        } else {
            BLACK
        };
    }
}
