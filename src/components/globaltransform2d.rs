//! Computed world-space position for entities in a hierarchy.
//!
//! When an entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent, its
//! [`MapPosition`](super::mapposition::MapPosition) is interpreted as local
//! to the parent. The
//! [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system computes the resulting world-space value and stores it here.

use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Computed world-space position for hierarchical entities.
///
/// Managed by the transform propagation system. For root entities it mirrors
/// the local `MapPosition`; for children it is the sum of the ancestor chain.
#[derive(Component, Clone, Copy, Debug)]
pub struct GlobalTransform2D {
    /// World-space position.
    pub position: Vector2,
}

impl Default for GlobalTransform2D {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
