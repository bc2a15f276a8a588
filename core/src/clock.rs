use core::time::Duration;

use web_time::Instant;

/// Turns wall-clock frames into deltas for [`crate::GameEngine::advance_clock`].
#[derive(Copy, Clone, Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time since the previous frame (or since creation).
    pub fn frame(&mut self) -> Duration {
        self.frame_at(Instant::now())
    }

    /// Like [`FrameClock::frame`] with an explicit timestamp; timestamps older
    /// than the last frame yield a zero delta.
    pub fn frame_at(&mut self, now: Instant) -> Duration {
        let delta = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);
        delta
    }

    /// Restarts measuring from now, dropping time spent e.g. in a hidden tab.
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
