//! Attraction zone overlay component.
//!
//! An optional child entity of a magnetized entity that visualizes the
//! region within which attraction triggers. Its padding and shape mirror the
//! parent [`Magnet`](super::magnet::Magnet); see
//! [`zone_sync_system`](crate::systems::zone::zone_sync_system).

use bevy_ecs::prelude::Component;

use super::bounds::ZoneShape;

/// Visual overlay of the attraction zone.
///
/// Rendered around the parent's footprint: a circle of radius `padding` for
/// [`ZoneShape::Circle`], the footprint inflated by `padding` for
/// [`ZoneShape::Block`].
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AttractionZone {
    /// Distance from the footprint the overlay extends to, in pixels.
    pub padding: f32,
    /// Shape of the overlay boundary.
    pub shape: ZoneShape,
}

impl AttractionZone {
    pub fn new(padding: f32, shape: ZoneShape) -> Self {
        Self { padding, shape }
    }
}
