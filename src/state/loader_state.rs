//! Loading ring animation state

use std::time::{Duration, Instant};

/// Number of arcs drawn around the ring
pub const RING_SEGMENTS: usize = 4;

/// Spinning ring shown while a submission is in flight
#[derive(Debug)]
pub struct LoaderState {
    /// When the ring appeared
    pub start_time: Instant,
    /// Current rotation in degrees, 0.0..360.0
    pub angle: f32,
}

impl LoaderState {
    /// Time for one full turn
    const TURN_DURATION: Duration = Duration::from_millis(1200);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            angle: 0.0,
        }
    }

    /// Advance the rotation from the wall clock
    pub fn update(&mut self) {
        let elapsed = self.start_time.elapsed();
        self.update_at(elapsed);
    }

    /// Advance the rotation as if `elapsed` had passed since start
    pub fn update_at(&mut self, elapsed: Duration) {
        let turn = Self::TURN_DURATION.as_secs_f32();
        let progress = (elapsed.as_secs_f32() % turn) / turn;
        // Each turn accelerates then settles, like a CSS cubic-bezier ring
        let eased = simple_easing::cubic_in_out(progress);
        self.angle = eased * 360.0;
    }

    /// Index of the arc currently leading the rotation
    pub fn lead_segment(&self) -> usize {
        let step = 360.0 / RING_SEGMENTS as f32;
        (self.angle / step) as usize % RING_SEGMENTS
    }
}

impl Default for LoaderState {
    fn default() -> Self {
        Self::new()
    }
}
