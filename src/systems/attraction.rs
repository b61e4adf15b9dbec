//! Attraction system: the per-frame core of the magnet behavior.
//!
//! Once per frame, for every activated magnet:
//!
//! 1. Read the latest pointer sample from
//!    [`PointerState`](crate::resources::pointer::PointerState).
//! 2. Ask the geometry in [`bounds`](crate::components::bounds) for the
//!    offset and distance against the entity's current rectangle.
//! 3. Retarget the child's [`Pull`](crate::components::pull::Pull): toward
//!    `offset / dampening` inside the trigger distance, toward zero outside.
//! 4. Fire [`AttractedEvent`]/[`ReleasedEvent`] exactly once per boundary
//!    crossing, mirroring the state in
//!    [`MagnetState`](crate::components::magnet::MagnetState).
//!
//! The schedule re-runs this every frame while the components are attached,
//! so the pull keeps tracking the pointer through layout movement even when
//! no new pointer events arrive. Deactivation removes the components, which
//! stops evaluation and events immediately.

use bevy_ecs::hierarchy::Children;
use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::Vector2;

use crate::components::bounds::{Bounds, compute_offset};
use crate::components::magnet::{Magnet, MagnetState};
use crate::components::mapposition::MapPosition;
use crate::components::pull::Pull;
use crate::events::attraction::{AttractedEvent, ReleasedEvent};
use crate::resources::pointer::PointerState;

/// Evaluate every magnet against the latest pointer sample.
pub fn attraction_system(
    pointer: Res<PointerState>,
    mut magnets: Query<(
        Entity,
        &Magnet,
        &mut MagnetState,
        &MapPosition,
        &Bounds,
        &Children,
    )>,
    mut pulls: Query<&mut Pull>,
    mut commands: Commands,
) {
    for (entity, magnet, mut state, position, bounds, children) in magnets.iter_mut() {
        if magnet.mouse_only && !pointer.hover_capable {
            continue;
        }
        let Some(cursor) = pointer.position else {
            continue;
        };

        let (min, max) = bounds.rect(position.pos);
        let offset = compute_offset(cursor, min, max, magnet.shape);
        let inside = offset.distance < magnet.trigger_distance;

        if magnet.debug {
            trace!("{:?} distance: {:.0} px", entity, offset.distance);
        }

        // Retarget the pull on the transformed child.
        if let Some(child) = children.iter().next() {
            if let Ok(mut pull) = pulls.get_mut(child) {
                let target = if inside {
                    Vector2 {
                        x: offset.dx / magnet.dampening,
                        y: offset.dy / magnet.dampening,
                    }
                } else {
                    Vector2::zero()
                };
                pull.retarget(target, magnet.transition_secs(), magnet.easing);
            }
        }

        // Boundary crossings fire exactly one event each.
        if inside && !state.attracted {
            state.attracted = true;
            commands.trigger(AttractedEvent { magnet: entity });
        } else if !inside && state.attracted {
            state.attracted = false;
            commands.trigger(ReleasedEvent { magnet: entity });
        }
    }
}
