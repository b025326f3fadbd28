use embassy_time::Duration;

/// Time for the eyelid to drop by one row.
pub const EYELID_STEP: Duration = Duration::from_millis(100);

/// Eyelid offset at which the eyes count as closed.
pub const EYELID_MAX_OFFSET: u8 = 19;

/// Horizontal head tilt applied once the eyes are closed.
pub const SETTLE_OFFSET_X: i32 = -4;
/// Vertical settle applied once the eyes are closed.
pub const SETTLE_OFFSET_Y: i32 = 8;

/// Breathing bounce starts after this much time in sleep mode.
///
/// The one second bounce delay is counted from the one second mark, so the
/// first bounce frame is at two seconds.
pub const BOUNCE_START: Duration = Duration::from_millis(2_000);

/// Derived state of the falling asleep animation at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPose {
    /// Number of eyelid rows painted over the eyes.
    pub eyelid_offset: u8,
    /// Whether the eyelids are fully down.
    pub eyes_closed: bool,
    /// Horizontal eye displacement.
    pub offset_x: i32,
    /// Vertical eye displacement, including the breathing bounce.
    pub offset_y: i32,
}

impl SleepPose {
    /// Returns the pose after `elapsed` time in sleep mode.
    pub fn at(elapsed: Duration) -> Self {
        let steps = elapsed.as_millis() / EYELID_STEP.as_millis();
        let eyelid_offset = u8::try_from(steps.min(u64::from(EYELID_MAX_OFFSET)))
            .unwrap_or(EYELID_MAX_OFFSET);
        let eyes_closed = eyelid_offset == EYELID_MAX_OFFSET;

        if !eyes_closed {
            return Self {
                eyelid_offset,
                eyes_closed,
                offset_x: 0,
                offset_y: 0,
            };
        }

        let mut offset_y = SETTLE_OFFSET_Y;
        if elapsed >= BOUNCE_START {
            offset_y += i32::from(elapsed.as_secs() % 2 == 1);
        }

        Self {
            eyelid_offset,
            eyes_closed,
            offset_x: SETTLE_OFFSET_X,
            offset_y,
        }
    }
}
