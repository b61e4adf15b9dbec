use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) of an entity.
///
/// For entities with a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent the
/// position is local to the parent; see
/// [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms).
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn zero() -> Self {
        Self {
            pos: Vector2::zero(),
        }
    }
}
