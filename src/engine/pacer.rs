//! Frame pacing for the animation loop.

use std::thread;
use std::time::{Duration, Instant};

/// Absolute-deadline frame pacer.
///
/// Tracks the next tick deadline rather than sleeping a fixed amount, so
/// render-time jitter does not accumulate across frames. When a frame
/// runs more than one interval late, the deadline re-anchors to now
/// instead of queueing missed ticks.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    next_tick: Instant,
}

impl FramePacer {
    /// Create a pacer ticking at `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: Instant::now() + interval,
        }
    }

    /// Time between ticks.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep out the remainder of the current frame.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            thread::sleep(self.next_tick - now);
        }
        self.next_tick += self.interval;

        // Behind by more than a full frame: re-anchor, don't catch up.
        let now = Instant::now();
        if self.next_tick < now {
            self.next_tick = now + self.interval;
        }
    }
}
