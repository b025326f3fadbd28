//! "Zzz" sleep indicator
//!
//! Three Z glyphs stepping down and to the right. Every nine seconds they
//! draw themselves top to bottom, three frame rows per second, then vanish.

use embassy_time::Duration;

use crate::{
    color::{Rgb, WHITE},
    frame::Frame,
};

/// Side length of one glyph.
pub const GLYPH_SIZE: i32 = 5;
/// Number of glyphs.
pub const GLYPH_COUNT: i32 = 3;
/// Horizontal distance between glyph origins.
pub const GLYPH_STEP_X: i32 = GLYPH_SIZE;
/// Vertical distance between glyph origins.
pub const GLYPH_STEP_Y: i32 = 6;

/// Length of one reveal cycle.
pub const INDICATOR_CYCLE: Duration = Duration::from_millis(9_000);
/// Frame rows revealed per second of the cycle.
pub const ROWS_PER_SECOND: u64 = 3;

/// Z glyph, one byte per row, most significant used bit is the left column
const GLYPH: [u8; GLYPH_SIZE as usize] = [0b11111, 0b00010, 0b00100, 0b01000, 0b11111];

/// The "Zzz" shown above the closed eyes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepIndicator {
    /// Left column of the first glyph.
    pub origin_x: i32,
    /// Top row of the first glyph.
    pub origin_y: i32,
    /// Color of lit glyph pixels.
    pub color: Rgb,
}

impl Default for SleepIndicator {
    fn default() -> Self {
        Self::new(38, 8, WHITE)
    }
}

impl SleepIndicator {
    /// Creates an indicator whose first glyph starts at `(origin_x, origin_y)`.
    pub const fn new(origin_x: i32, origin_y: i32, color: Rgb) -> Self {
        Self {
            origin_x,
            origin_y,
            color,
        }
    }

    /// Returns the number of frame rows visible at `elapsed`.
    ///
    /// Rows with an index at or past this value are hidden.
    pub fn lines_to_show(elapsed: Duration) -> i32 {
        let position = elapsed.as_millis() % INDICATOR_CYCLE.as_millis();
        i32::try_from(position * ROWS_PER_SECOND / 1_000).unwrap_or(0)
    }

    /// Composites the glyphs onto `frame`.
    ///
    /// Only lit glyph pixels are written; everything else is left as is.
    /// Pixels outside of the matrix are clipped.
    pub fn render(&self, frame: &mut Frame, elapsed: Duration) {
        let lines_to_show = Self::lines_to_show(elapsed);
        if lines_to_show == 0 {
            return;
        }

        for glyph in 0..GLYPH_COUNT {
            let glyph_x = self.origin_x + glyph * GLYPH_STEP_X;
            let glyph_y = self.origin_y + glyph * GLYPH_STEP_Y;

            for (row, bits) in (0..).zip(GLYPH) {
                let y = glyph_y + row;
                if y >= lines_to_show {
                    break;
                }
                for column in 0..GLYPH_SIZE {
                    if bits & (1 << (GLYPH_SIZE - 1 - column)) != 0 {
                        frame.set(glyph_x + column, y, self.color);
                    }
                }
            }
        }
    }
}
