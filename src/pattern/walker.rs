//! Sky and ground scene
//!
//! The top third holds a cloud made of five overlapping disks, the middle
//! third is empty and the bottom third is solid ground.

use crate::{
    color::{BLACK, ColorSource},
    frame::{Frame, HEIGHT, WIDTH},
};

const THIRD_HEIGHT: usize = HEIGHT / 3;
const CLOUD_RADIUS: f32 = 4.0;

#[allow(clippy::cast_possible_wrap)]
const CLOUD_X: i32 = (WIDTH / 2) as i32;
#[allow(clippy::cast_possible_wrap)]
const CLOUD_Y: i32 = (HEIGHT / 5) as i32;

/// Disk centers making up the cloud
const CLOUD_CENTERS: [(i32, i32); 5] = [
    (CLOUD_X, CLOUD_Y),
    (CLOUD_X - 4, CLOUD_Y + 1),
    (CLOUD_X + 4, CLOUD_Y + 1),
    (CLOUD_X - 2, CLOUD_Y - 1),
    (CLOUD_X + 2, CLOUD_Y - 1),
];

/// Fills `frame` with the sky and ground scene.
///
/// Takes the ground color from `source` first, then the cloud color.
pub fn walker<S: ColorSource + ?Sized>(source: &mut S, frame: &mut Frame) {
    let ground = source.cool_color();
    let sky = source.cool_color();

    for (x, y, pixel) in frame.enumerate_mut() {
        *pixel = if y < THIRD_HEIGHT {
            if in_cloud(x, y) { sky } else { BLACK }
        } else if y < 2 * THIRD_HEIGHT {
            BLACK
        } else {
            ground
        };
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn in_cloud(x: usize, y: usize) -> bool {
    let (x, y) = (x as i32, y as i32);
    CLOUD_CENTERS.iter().any(|&(cx, cy)| {
        libm::hypotf((x - cx) as f32, (y - cy) as f32) < CLOUD_RADIUS
    })
}
