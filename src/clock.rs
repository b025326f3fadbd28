//! Animation clock helpers
//!
//! The eye engine is a pure function of elapsed time. These helpers turn a
//! driver's notion of time into that elapsed value.

use core::fmt;

use embassy_time::{Duration, Instant, TICK_HZ};

/// Elapsed time that cannot be used to drive an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// `NaN` or infinite seconds
    NonFinite,
    /// Time before the mode epoch
    Negative,
    /// Too long to be represented as a [`Duration`]
    OutOfRange,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("elapsed time is not finite"),
            Self::Negative => f.write_str("elapsed time is negative"),
            Self::OutOfRange => f.write_str("elapsed time is out of range"),
        }
    }
}

impl core::error::Error for ClockError {}

/// Exclusive upper bound on microseconds that convert to ticks without
/// overflow.
///
/// The conversion scales by at most the tick rate and rounds up by less
/// than one second's worth of microseconds.
pub const MAX_ELAPSED_MICROS: u64 = (u64::MAX - 1_000_000) / TICK_HZ;

/// Convert elapsed seconds, as a simulator might track them, into a
/// [`Duration`] with microsecond precision.
///
/// Returns [`ClockError::OutOfRange`] for values whose microsecond count
/// reaches [`MAX_ELAPSED_MICROS`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn elapsed_from_secs(seconds: f32) -> Result<Duration, ClockError> {
    if !seconds.is_finite() {
        return Err(ClockError::NonFinite);
    }
    if seconds < 0.0 {
        return Err(ClockError::Negative);
    }
    let micros = libm::round(f64::from(seconds) * 1_000_000.0);
    if micros >= MAX_ELAPSED_MICROS as f64 {
        return Err(ClockError::OutOfRange);
    }
    Ok(Duration::from_micros(micros as u64))
}

/// Time origin of the current display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch {
    start: Instant,
}

impl Epoch {
    pub const fn new(start: Instant) -> Self {
        Self { start }
    }

    /// Move the origin to `now`
    pub fn reset(&mut self, now: Instant) {
        self.start = now;
    }

    /// Time since the origin; zero if `now` is earlier than the origin
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    pub const fn start(&self) -> Instant {
        self.start
    }
}
