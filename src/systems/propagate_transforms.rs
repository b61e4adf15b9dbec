//! Transform propagation for parent-child entity hierarchies.
//!
//! Computes [`GlobalTransform2D`] for every entity participating in a
//! hierarchy (root parents with [`Children`] and descendants with
//! [`ChildOf`]).
//!
//! # Schedule position
//!
//! Should run **after** all systems that mutate local positions (the pull
//! transition) and **before** rendering so that downstream systems see
//! up-to-date world positions.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::mapposition::MapPosition;

/// Propagate positions from root parents down through the hierarchy.
///
/// For each root entity (has [`Children`] but no [`ChildOf`]):
/// 1. Mirror its local [`MapPosition`] into its [`GlobalTransform2D`].
/// 2. Recursively traverse children, offsetting by each local position.
///
/// Entities that already have a `GlobalTransform2D` are updated in place.
/// Entities missing the component get it inserted via deferred [`Commands`]
/// (visible next frame).
pub fn propagate_transforms(
    roots: Query<(Entity, &MapPosition, &Children), Without<ChildOf>>,
    children_query: Query<(&MapPosition, Option<&Children>), With<ChildOf>>,
    mut globals: Query<&mut GlobalTransform2D>,
    mut commands: Commands,
) {
    for (root_entity, pos, children) in roots.iter() {
        let root_gt = GlobalTransform2D { position: pos.pos };

        if let Ok(mut gt) = globals.get_mut(root_entity) {
            *gt = root_gt;
        } else {
            commands.entity(root_entity).insert(root_gt);
        }

        propagate_children(
            root_gt.position,
            children,
            &children_query,
            &mut globals,
            &mut commands,
        );
    }
}

fn propagate_children(
    parent_position: Vector2,
    children: &Children,
    children_query: &Query<(&MapPosition, Option<&Children>), With<ChildOf>>,
    globals: &mut Query<&mut GlobalTransform2D>,
    commands: &mut Commands,
) {
    for child_entity in children.iter() {
        let Ok((pos, maybe_grandchildren)) = children_query.get(child_entity) else {
            continue;
        };

        let child_gt = GlobalTransform2D {
            position: parent_position + pos.pos,
        };

        if let Ok(mut gt) = globals.get_mut(child_entity) {
            *gt = child_gt;
        } else {
            commands.entity(child_entity).insert(child_gt);
        }

        if let Some(grandchildren) = maybe_grandchildren {
            propagate_children(
                child_gt.position,
                grandchildren,
                children_query,
                globals,
                commands,
            );
        }
    }
}
