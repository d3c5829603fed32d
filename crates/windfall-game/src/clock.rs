//! Wall-clock frame timing with hitch clamping.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time accepted from the clock. A debugger pause or OS hitch
/// integrates as one slow frame instead of a catapult.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Measures per-frame elapsed time.
pub struct FrameClock {
    previous: Instant,
}

impl FrameClock {
    /// Creates a clock starting from the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
        }
    }

    /// Seconds since the previous call, clamped to [`MAX_FRAME_TIME`].
    pub fn frame_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        clamp_frame_time(dt)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamps a raw frame time, warning when a hitch is swallowed.
fn clamp_frame_time(dt: f32) -> f32 {
    if dt > MAX_FRAME_TIME {
        warn!(
            "frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
            dt * 1000.0,
            MAX_FRAME_TIME * 1000.0
        );
        MAX_FRAME_TIME
    } else {
        dt
    }
}
