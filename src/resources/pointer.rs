//! Shared pointer sample resource.
//!
//! One process-wide "latest pointer position" that every magnetized entity
//! reads; updated once per frame by
//! [`update_pointer_state`](crate::systems::pointer::update_pointer_state).
//! Sampling rate is thereby decoupled from the render rate: bursts of raw
//! pointer events collapse into a single geometry evaluation per frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Latest pointer sample in world coordinates, plus platform capability.
#[derive(Resource, Clone, Copy, Debug)]
pub struct PointerState {
    /// Most recent pointer position in world space; `None` until the first
    /// sample arrives.
    pub position: Option<Vector2>,
    /// Whether the platform reports hover capability. Magnets configured as
    /// `mouse_only` stop tracking when this is false.
    pub hover_capable: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: None,
            hover_capable: true,
        }
    }
}

impl PointerState {
    pub fn with_hover_capable(mut self, hover_capable: bool) -> Self {
        self.hover_capable = hover_capable;
        self
    }
}
