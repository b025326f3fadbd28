//! Frame pacing
//!
//! Portable frame pacing without async/await or platform timers. The caller
//! sleeps between frames; the scheduler only says for how long. The frame
//! duration follows the renderer's mode, so eyes run at about 30 Hz and
//! pattern ticks at about 20 Hz.

use embassy_time::{Duration, Instant};

use crate::color::ColorSource;
use crate::{OutputDriver, Renderer};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a [`Renderer`] into an [`OutputDriver`] at the mode's frame rate.
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, panel);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, S: ColorSource> {
    output: O,
    renderer: Renderer<'a, S>,
    next_frame: Option<Instant>,
}

impl<'a, O: OutputDriver, S: ColorSource> FrameScheduler<'a, O, S> {
    /// Creates a scheduler; the first [`tick`](Self::tick) renders immediately.
    pub fn new(renderer: Renderer<'a, S>, driver: O) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: None,
        }
    }

    /// Render one frame, push it to the output and compute the next deadline
    ///
    /// If the schedule has fallen more than two frames behind, the deadline
    /// snaps to `now` instead of bursting to catch up.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame_duration = self.renderer.frame_duration();
        let max_drift = Duration::from_millis(frame_duration.as_millis() * 2);
        let scheduled = match self.next_frame {
            Some(deadline) if now <= deadline + max_drift => deadline,
            _ => now,
        };

        let frame = self.renderer.render(now);
        self.output.write(frame);

        // The mode may have changed while rendering
        let next_deadline = scheduled + self.renderer.frame_duration();
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    pub fn renderer(&self) -> &Renderer<'a, S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, S> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Give back the output driver, e.g. to blank the panel on shutdown
    pub fn into_output(self) -> O {
        self.output
    }
}
