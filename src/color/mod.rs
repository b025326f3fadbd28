mod hsv;
mod source;
mod utils;

use smart_leds::RGB8;

pub use hsv::{COOL_HUE_MAX, COOL_HUE_MIN, cool_hue_color, hsv_to_rgb};
pub use source::{ColorSource, RandomColorSource, random_cool_color};
pub use utils::{clamp_channel, scale_channel, scale_color};

pub type Rgb = RGB8;

/// Fully lit white
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Unlit pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
