//! Activation API: the host-facing lifecycle of the magnet behavior.
//!
//! A host attaches the behavior to an entity once ([`activate`]), may swap
//! the configuration while it runs ([`MagnetHandle::update`]) and detaches it
//! when the entity goes away ([`MagnetHandle::deactivate`]). All three are
//! synchronous and touch only the given entity and its children.
//!
//! Activation validates the host structure: the entity must have a footprint
//! ([`MapPosition`] + [`Bounds`]) to measure distances against, a first child
//! carrying a [`MapPosition`] to transform, and any second child must be an
//! [`AttractionZone`] overlay. A structurally invalid host yields an
//! inert handle (nothing is attached, every later call on the handle is a
//! no-op), with a warning logged when the configuration asks for debug
//! output. Invalid configuration values are rejected with a descriptive
//! [`MagnetConfigError`] instead.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::Vector2;

use crate::components::attractionzone::AttractionZone;
use crate::components::bounds::Bounds;
use crate::components::magnet::{Magnet, MagnetConfigError, MagnetState};
use crate::components::mapposition::MapPosition;
use crate::components::markers::Markers;
use crate::components::pull::Pull;

/// Handle to one activated magnet behavior.
///
/// Inert handles (from a failed structure validation) swallow every call.
#[derive(Debug, Clone, Copy)]
pub struct MagnetHandle {
    target: Option<Entity>,
}

/// Attach the magnet behavior to `target`.
///
/// On success the target gets [`Magnet`] + [`MagnetState`], its first child
/// gets a [`Pull`] anchored at the child's resting local position (plus
/// [`Markers`] if absent), and the overlay child is spawned when the
/// configuration asks for one. The per-frame systems pick the entity up on
/// the next schedule run.
pub fn activate(
    world: &mut World,
    target: Entity,
    config: Magnet,
) -> Result<MagnetHandle, MagnetConfigError> {
    config.validate()?;

    let Some(child) = validate_structure(world, target, &config) else {
        return Ok(MagnetHandle::inert());
    };

    let anchor = world
        .get::<MapPosition>(child)
        .map(|p| p.pos)
        .unwrap_or(Vector2::zero());

    if world.get::<Markers>(child).is_none() {
        world.entity_mut(child).insert(Markers::default());
    }
    world.entity_mut(child).insert(Pull::at_rest(anchor));

    if config.show_zone {
        ensure_zone(world, target, &config);
    }
    world
        .entity_mut(target)
        .insert((config, MagnetState::default()));

    Ok(MagnetHandle {
        target: Some(target),
    })
}

impl MagnetHandle {
    /// Handle that ignores every call.
    pub fn inert() -> Self {
        Self { target: None }
    }

    /// Whether this handle points at an activated entity.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// The activated entity, if any.
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Clone of the currently applied configuration, if still activated.
    pub fn config(&self, world: &World) -> Option<Magnet> {
        self.target
            .and_then(|target| world.get::<Magnet>(target).cloned())
    }

    /// Atomically swap the configuration.
    ///
    /// Re-validates the new values, reconciles the overlay child, and leaves
    /// the attraction state untouched; calling this twice with the same
    /// configuration changes nothing the second time. No-op on an inert or
    /// deactivated handle.
    pub fn update(&self, world: &mut World, config: Magnet) -> Result<(), MagnetConfigError> {
        config.validate()?;
        let Some(target) = self.target else {
            return Ok(());
        };
        if world.get::<Magnet>(target).is_none() {
            return Ok(());
        }

        if config.show_zone {
            ensure_zone(world, target, &config);
        } else if let Some(zone) = find_zone(world, target) {
            world.despawn(zone);
        }
        world.entity_mut(target).insert(config);
        Ok(())
    }

    /// Detach the behavior.
    ///
    /// Removes the magnet components, the child's pull and the overlay. After
    /// this returns the per-frame systems no longer match the entity, so no
    /// further transform changes or notifications can occur, including for a
    /// frame that was already due. Idempotent.
    pub fn deactivate(&self, world: &mut World) {
        let Some(target) = self.target else {
            return;
        };

        if let Some(zone) = find_zone(world, target) {
            world.despawn(zone);
        }
        if let Some(child) = first_child(world, target) {
            world.entity_mut(child).remove::<Pull>();
        }
        if world.get_entity(target).is_ok() {
            world.entity_mut(target).remove::<(Magnet, MagnetState)>();
        }
    }
}

/// Check the host structure; returns the child to transform when valid.
fn validate_structure(world: &World, target: Entity, config: &Magnet) -> Option<Entity> {
    if world.get::<MapPosition>(target).is_none() || world.get::<Bounds>(target).is_none() {
        if config.debug {
            warn!(
                "magnet target {:?} has no footprint (needs MapPosition and Bounds)",
                target
            );
        }
        return None;
    }

    let children: Vec<Entity> = world
        .get::<Children>(target)
        .map(|c| c.iter().collect())
        .unwrap_or_default();

    let Some(&first) = children.first() else {
        if config.debug {
            warn!("magnet target {:?} has no child to attract", target);
        }
        return None;
    };
    if world.get::<MapPosition>(first).is_none() {
        if config.debug {
            warn!(
                "magnet target {:?}: first child {:?} is not transformable (no MapPosition)",
                target, first
            );
        }
        return None;
    }
    if let Some(&second) = children.get(1) {
        if world.get::<AttractionZone>(second).is_none() {
            if config.debug {
                warn!(
                    "magnet target {:?} has extra children; only an attraction zone overlay may follow the first",
                    target
                );
            }
            return None;
        }
    }
    Some(first)
}

fn first_child(world: &World, target: Entity) -> Option<Entity> {
    world
        .get::<Children>(target)
        .and_then(|children| children.iter().next())
}

fn find_zone(world: &World, target: Entity) -> Option<Entity> {
    let children: Vec<Entity> = world
        .get::<Children>(target)
        .map(|c| c.iter().collect())
        .unwrap_or_default();
    children
        .into_iter()
        .find(|&child| world.get::<AttractionZone>(child).is_some())
}

/// Spawn or refresh the overlay child for the given configuration.
fn ensure_zone(world: &mut World, target: Entity, config: &Magnet) {
    let zone = AttractionZone::new(config.trigger_distance, config.shape);
    if let Some(existing) = find_zone(world, target) {
        if let Some(mut existing_zone) = world.get_mut::<AttractionZone>(existing) {
            *existing_zone = zone;
        }
    } else {
        world.spawn((zone, MapPosition::zero(), ChildOf(target)));
    }
}
