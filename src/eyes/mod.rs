//! Eye animations
//!
//! Both animations are pure functions of the time spent in the current mode:
//! - blinking: eyes toggle every 750 ms
//! - sleeping: the eyelids drop row by row, the head settles, then the eyes
//!   bob gently while the sleep indicator draws itself

mod indicator;
mod pose;

use core::ops::Range;

use embassy_time::Duration;
pub use indicator::{
    GLYPH_COUNT, GLYPH_SIZE, GLYPH_STEP_X, GLYPH_STEP_Y, INDICATOR_CYCLE, ROWS_PER_SECOND,
    SleepIndicator,
};
pub use pose::{
    BOUNCE_START, EYELID_MAX_OFFSET, EYELID_STEP, SETTLE_OFFSET_X, SETTLE_OFFSET_Y, SleepPose,
};

use crate::{
    color::{BLACK, Rgb, WHITE},
    frame::Frame,
    geometry::Ellipse,
};

/// Left eye outline in the open, unshifted position.
pub const LEFT_EYE: Ellipse = Ellipse::new(22, 24, 6, 10);
/// Right eye outline in the open, unshifted position.
pub const RIGHT_EYE: Ellipse = Ellipse::new(42, 24, 6, 10);

/// Half of the blink period.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(750);

/// Whether the blinking eyes are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkState {
    /// Both eyes drawn in the open color.
    Open,
    /// Eyes hidden; the frame is all black.
    Closed,
}

impl BlinkState {
    /// Returns the blink state after `elapsed` time in blink mode.
    ///
    /// Even intervals are closed, odd intervals open.
    pub fn at(elapsed: Duration) -> Self {
        if (elapsed.as_millis() / BLINK_INTERVAL.as_millis()) % 2 == 0 {
            Self::Closed
        } else {
            Self::Open
        }
    }
}

/// Eye animation engine.
///
/// Stateless apart from its colors and geometry: every frame is derived
/// from the elapsed time alone.
#[derive(Debug, Clone)]
pub struct EyeAnimator {
    open_color: Rgb,
    closed_color: Rgb,
    eyes: [Ellipse; 2],
    indicator: SleepIndicator,
}

impl Default for EyeAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl EyeAnimator {
    /// Creates the engine with white eyes, black eyelids and the default
    /// sleep indicator.
    pub fn new() -> Self {
        Self {
            open_color: WHITE,
            closed_color: BLACK,
            eyes: [LEFT_EYE, RIGHT_EYE],
            indicator: SleepIndicator::default(),
        }
    }

    /// Renders the blink animation at `elapsed` into a new frame.
    pub fn blinking_frame(&self, elapsed: Duration) -> Frame {
        let mut frame = Frame::new();
        self.render_blinking(elapsed, &mut frame);
        frame
    }

    /// Renders the blink animation into an existing frame.
    pub fn render_blinking(&self, elapsed: Duration, frame: &mut Frame) {
        frame.clear();
        let color = match BlinkState::at(elapsed) {
            BlinkState::Open => self.open_color,
            BlinkState::Closed => self.closed_color,
        };
        for eye in self.eyes {
            paint_ellipse(frame, eye, eye.rows(), color);
        }
    }

    /// Renders the falling asleep animation at `elapsed` into a new frame.
    pub fn sleeping_frame(&self, elapsed: Duration) -> Frame {
        let mut frame = Frame::new();
        self.render_sleeping(elapsed, &mut frame);
        frame
    }

    /// Renders the falling asleep animation into an existing frame.
    pub fn render_sleeping(&self, elapsed: Duration, frame: &mut Frame) {
        frame.clear();
        let pose = SleepPose::at(elapsed);
        let eyes = self
            .eyes
            .map(|eye| eye.offset(pose.offset_x, pose.offset_y));

        for eye in eyes {
            paint_ellipse(frame, eye, eye.rows(), self.open_color);
        }

        // Eyelids cover the top of each eye
        for eye in eyes {
            let top = eye.top();
            let lid = top..top + i32::from(pose.eyelid_offset);
            paint_ellipse(frame, eye, lid, self.closed_color);
        }

        if pose.eyes_closed {
            self.indicator.render(frame, elapsed);
        }
    }
}

/// Paint the part of `eye` that lies within `rows`
fn paint_ellipse(frame: &mut Frame, eye: Ellipse, rows: Range<i32>, color: Rgb) {
    for y in rows {
        for x in eye.columns() {
            if eye.contains(x, y) {
                frame.set(x, y, color);
            }
        }
    }
}
