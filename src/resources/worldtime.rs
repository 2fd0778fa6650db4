//! World clock shared with ECS systems.
//!
//! The runner advances it by one simulation step per frame; the room reads
//! `elapsed` as the time value handed to object updates.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Scaled seconds since the clock started.
    pub elapsed: f32,
    /// Scaled length of the last step.
    pub delta: f32,
    pub time_scale: f32,
    /// Steps taken so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Take one step of `dt` unscaled seconds.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt * self.time_scale;
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_applies_scale() {
        let mut time = WorldTime::default().with_time_scale(0.5);
        time.advance(0.2);
        time.advance(0.2);
        assert!((time.elapsed - 0.2).abs() < 1e-6);
        assert!((time.delta - 0.1).abs() < 1e-6);
        assert_eq!(time.frame_count, 2);
    }

    #[test]
    fn paused_clock_still_counts_frames() {
        let mut time = WorldTime::default().with_time_scale(0.0);
        time.advance(1.0);
        assert_eq!(time.elapsed, 0.0);
        assert_eq!(time.frame_count, 1);
    }
}
