//! Ellipse rasterization for the eye shapes

use core::ops::Range;

/// Normalized squared distance below which a pixel is inside an ellipse
///
/// Slightly under 1.0 so the discrete outline does not grow single-pixel
/// spikes at the ends of each axis.
pub const ELLIPSE_THRESHOLD: f32 = 0.95;

/// Check whether pixel `(x, y)` lies inside the ellipse centered at
/// `(center_x, center_y)` with the given radii.
///
/// A zero radius never contains anything.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn in_ellipse(
    x: i32,
    y: i32,
    center_x: i32,
    center_y: i32,
    radius_x: i32,
    radius_y: i32,
) -> bool {
    let nx = (x - center_x) as f32 / radius_x as f32;
    let ny = (y - center_y) as f32 / radius_y as f32;
    nx * nx + ny * ny < ELLIPSE_THRESHOLD
}

/// Axis-aligned ellipse on the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    /// Center column.
    pub center_x: i32,
    /// Center row.
    pub center_y: i32,
    /// Horizontal half-axis in pixels.
    pub radius_x: i32,
    /// Vertical half-axis in pixels.
    pub radius_y: i32,
}

impl Ellipse {
    /// Creates an ellipse centered at `(center_x, center_y)`.
    pub const fn new(center_x: i32, center_y: i32, radius_x: i32, radius_y: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius_x,
            radius_y,
        }
    }

    /// Returns the same ellipse moved by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..self
        }
    }

    /// Returns `true` if pixel `(x, y)` is inside; see [`in_ellipse`].
    pub fn contains(self, x: i32, y: i32) -> bool {
        in_ellipse(
            x,
            y,
            self.center_x,
            self.center_y,
            self.radius_x,
            self.radius_y,
        )
    }

    /// Returns the topmost row of the bounding box.
    pub const fn top(self) -> i32 {
        self.center_y - self.radius_y
    }

    /// Returns the columns covered by the bounding box.
    pub const fn columns(self) -> Range<i32> {
        (self.center_x - self.radius_x)..(self.center_x + self.radius_x + 1)
    }

    /// Returns the rows covered by the bounding box.
    pub const fn rows(self) -> Range<i32> {
        (self.center_y - self.radius_y)..(self.center_y + self.radius_y + 1)
    }
}
