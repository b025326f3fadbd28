//! Full-frame pixel buffer for the square LED matrix

use core::fmt;

use crate::color::{BLACK, Rgb};

/// Matrix width in pixels
pub const WIDTH: usize = 64;
/// Matrix height in pixels
pub const HEIGHT: usize = 64;
/// Number of pixels in one frame
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// One 64x64 image, row-major with the origin in the top-left corner
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [Rgb; PIXEL_COUNT],
}

impl Frame {
    /// All-black frame
    pub const fn new() -> Self {
        Self::filled(BLACK)
    }

    /// Frame with every pixel set to `color`
    pub const fn filled(color: Rgb) -> Self {
        Self {
            pixels: [color; PIXEL_COUNT],
        }
    }

    /// Reset every pixel to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Pixel at `(x, y)`, `None` outside of the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        self.pixels.get(y * WIDTH + x).copied()
    }

    /// Write a pixel, silently skipping coordinates outside of the matrix
    ///
    /// Returns `true` if the pixel was written.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        let Some(index) = index_of(x, y) else {
            return false;
        };
        self.pixels[index] = color;
        true
    }

    /// One row of pixels
    ///
    /// Rows past the bottom edge yield an empty slice.
    pub fn row(&self, y: usize) -> &[Rgb] {
        if y >= HEIGHT {
            return &[];
        }
        &self.pixels[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(WIDTH)
    }

    /// Pixels together with their `(x, y)` coordinates
    pub fn enumerate_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Rgb)> {
        self.pixels
            .iter_mut()
            .enumerate()
            .map(|(i, pixel)| (i % WIDTH, i / WIDTH, pixel))
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Number of pixels that are not black
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| **pixel != BLACK).count()
    }

    /// Returns `true` if no pixel is lit.
    pub fn is_black(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == BLACK)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("lit", &self.lit_count())
            .finish()
    }
}

/// Linear index for signed coordinates, `None` when clipped
#[inline]
fn index_of(x: i32, y: i32) -> Option<usize> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }
    Some(y * WIDTH + x)
}
