#![no_std]

pub mod channel;
pub mod clock;
pub mod color;
pub mod eyes;
pub mod frame;
pub mod frame_scheduler;
pub mod gamma;
pub mod geometry;
pub mod intent_processor;
pub mod pattern;
pub mod renderer;
pub mod transition;

pub use clock::{ClockError, Epoch, MAX_ELAPSED_MICROS, elapsed_from_secs};
pub use eyes::{BlinkState, EyeAnimator, SleepIndicator, SleepPose};
pub use frame::{Frame, HEIGHT, WIDTH};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::{GAMMA, apply_fade};
pub use geometry::{Ellipse, in_ellipse};
pub use channel::{IntentChannel, IntentReceiver, IntentSender};
pub use intent_processor::{DisplayIntent, IntentEffects, IntentProcessor};
pub use pattern::PatternId;
pub use renderer::{DisplayMode, Renderer, RendererConfig};
pub use transition::{PatternManager, Phase, PhaseTimings};

pub use color::{ColorSource, RandomColorSource, Rgb, hsv_to_rgb};
pub use embassy_time::{Duration, Instant};

/// Display sink for rendered frames
///
/// Implement this for the LED matrix driver or a simulator window.
pub trait OutputDriver {
    /// Present one frame
    fn write(&mut self, frame: &Frame);
}
