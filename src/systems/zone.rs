//! Attraction zone synchronization.
//!
//! Keeps every [`AttractionZone`](crate::components::attractionzone::AttractionZone)
//! overlay mirroring its parent's current
//! [`Magnet`](crate::components::magnet::Magnet) configuration, so a
//! configuration update re-decorates the overlay without touching the
//! attraction state.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;

use crate::components::attractionzone::AttractionZone;
use crate::components::magnet::Magnet;

/// Copy trigger distance and shape from each magnet to its overlay child.
pub fn zone_sync_system(
    mut zones: Query<(&mut AttractionZone, &ChildOf)>,
    magnets: Query<&Magnet>,
) {
    for (mut zone, child_of) in zones.iter_mut() {
        let Ok(magnet) = magnets.get(child_of.parent()) else {
            continue;
        };
        let synced = AttractionZone::new(magnet.trigger_distance, magnet.shape);
        if *zone != synced {
            *zone = synced;
        }
    }
}
