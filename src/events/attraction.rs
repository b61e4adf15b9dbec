//! Attraction boundary events and the marker observers.
//!
//! The attraction system fires [`AttractedEvent`] when the pointer crosses
//! into an entity's trigger zone and [`ReleasedEvent`] when it crosses back
//! out, exactly once per crossing. Observers subscribe to react in a
//! decoupled manner (styling, sound, counters, etc.).
//!
//! This module ships the default presentation strategy: a pair of observers
//! that toggle the configured marker flag on the pulled child. Alternate
//! strategies can subscribe to the same events instead.

use bevy_ecs::hierarchy::Children;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::magnet::Magnet;
use crate::components::markers::Markers;

/// Event fired when the pointer enters an entity's attraction zone.
///
/// Carries the magnetized entity so listeners can tell instances apart; no
/// other payload.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttractedEvent {
    pub magnet: Entity,
}

/// Event fired when the pointer leaves an entity's attraction zone.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReleasedEvent {
    pub magnet: Entity,
}

/// Map the attraction state onto presentation markers.
///
/// Pure: the flag is set while attracted and cleared while released, nothing
/// else is touched.
pub fn set_attraction_marker(markers: &mut Markers, flag: &str, attracted: bool) {
    if attracted {
        markers.set(flag);
    } else {
        markers.clear(flag);
    }
}

/// Observer that sets the configured marker flag on the pulled child.
pub fn attracted_marker_observer(
    trigger: On<AttractedEvent>,
    magnets: Query<(&Magnet, &Children)>,
    mut markers: Query<&mut Markers>,
) {
    apply_marker(trigger.event().magnet, true, &magnets, &mut markers);
}

/// Observer that clears the configured marker flag on the pulled child.
pub fn released_marker_observer(
    trigger: On<ReleasedEvent>,
    magnets: Query<(&Magnet, &Children)>,
    mut markers: Query<&mut Markers>,
) {
    apply_marker(trigger.event().magnet, false, &magnets, &mut markers);
}

fn apply_marker(
    entity: Entity,
    attracted: bool,
    magnets: &Query<(&Magnet, &Children)>,
    markers: &mut Query<&mut Markers>,
) {
    let Ok((magnet, children)) = magnets.get(entity) else {
        return;
    };
    let Some(child) = children.iter().next() else {
        return;
    };
    if let Ok(mut child_markers) = markers.get_mut(child) {
        set_attraction_marker(&mut child_markers, &magnet.attracted_flag, attracted);
        if magnet.debug {
            debug!(
                "{:?} {} marker '{}'",
                entity,
                if attracted { "set" } else { "cleared" },
                magnet.attracted_flag
            );
        }
    }
}
