use bevy_ecs::prelude::Resource;

/// Simulation clock shared by all per-frame systems.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds elapsed since startup, scaled.
    pub elapsed: f32,
    /// Scaled delta of the current frame in seconds.
    pub delta: f32,
    /// Multiplier applied to raw frame deltas.
    pub time_scale: f32,
    /// Frames processed since startup.
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
}
