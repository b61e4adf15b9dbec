//! Rectangular footprint and pointer-distance geometry.
//!
//! [`Bounds`] describes the axis-aligned rectangle a magnetized entity
//! occupies in world space. The free functions compute the vector and scalar
//! distance between a pointer sample and that rectangle under the two zone
//! shapes; they are pure and safe to call at any frequency.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Geometric strategy for measuring pointer distance to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneShape {
    /// Distance to the rectangle's center.
    #[default]
    Circle,
    /// Distance to the nearest point on the rectangle's boundary.
    Block,
}

/// Axis-aligned rectangular footprint of an entity.
///
/// `origin` is the pivot offset (in pixels) from the rectangle's top-left to
/// the entity's [`MapPosition`](super::mapposition::MapPosition), mirroring
/// how sprites pick their pivot.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Bounds {
    pub size: Vector2,
    pub origin: Vector2,
}

impl Bounds {
    /// Create bounds of the given size with the pivot at the top-left corner.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            origin: Vector2::zero(),
        }
    }

    /// Create bounds of the given size with the pivot at the center.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            origin: Vector2::new(width * 0.5, height * 0.5),
        }
    }

    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }

    /// Returns (min, max) of the rectangle for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn rect(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position - self.origin;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// Geometric center of the rectangle for a given entity position.
    pub fn center(&self, position: Vector2) -> Vector2 {
        let (min, max) = self.rect(position);
        Vector2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5)
    }
}

/// Vector and scalar distance from a reference point on the rectangle to the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
    pub distance: f32,
}

/// Compute the pointer offset against a rectangle under the given shape.
///
/// - [`ZoneShape::Circle`]: measured from the rectangle's center.
/// - [`ZoneShape::Block`]: measured from the nearest point on the rectangle's
///   boundary (the pointer clamped to the rect). A pointer inside the rect
///   yields distance 0.
pub fn compute_offset(pointer: Vector2, min: Vector2, max: Vector2, shape: ZoneShape) -> Offset {
    let (dx, dy) = match shape {
        ZoneShape::Circle => {
            let center = Vector2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5);
            (pointer.x - center.x, pointer.y - center.y)
        }
        ZoneShape::Block => {
            let cx = pointer.x.clamp(min.x, max.x);
            let cy = pointer.y.clamp(min.y, max.y);
            (pointer.x - cx, pointer.y - cy)
        }
    };
    Offset {
        dx,
        dy,
        distance: (dx * dx + dy * dy).sqrt(),
    }
}

/// Alternate block-mode formula: signed per-axis distance to the perimeter
/// with a 0.95 vertical correction factor.
///
/// Kept for compatibility with layouts tuned against it; the default path
/// uses [`compute_offset`] with [`ZoneShape::Block`], which is the
/// geometrically correct edge distance. Note that the returned `dx`/`dy` are
/// measured from the rectangle's center, not from the perimeter point.
pub fn perimeter_offset(pointer: Vector2, min: Vector2, max: Vector2) -> Offset {
    let width = max.x - min.x;
    let height = max.y - min.y;
    let center = Vector2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5);

    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;

    let px = (dx.abs() - width * 0.5) * if dx < 0.0 { -1.0 } else { 1.0 };
    let py = (dy.abs() - height * 0.5) * if dy < 0.0 { -1.0 } else { 1.0 };
    let py = py * 0.95;

    Offset {
        dx,
        dy,
        distance: (px * px + py * py).sqrt(),
    }
}
