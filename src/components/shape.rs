//! Flat-color shape rendering component.
//!
//! Entities drawn by the render pass carry a [`Shape`] describing a primitive
//! centered on their world position.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Primitive drawn for an entity.
#[derive(Debug, Clone, Copy)]
pub enum ShapeKind {
    /// Axis-aligned rectangle, centered on the entity position.
    Rect { width: f32, height: f32 },
    /// Circle, centered on the entity position.
    Circle { radius: f32 },
}

/// Renderable flat-color shape.
#[derive(Component, Debug, Clone, Copy)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
}

impl Shape {
    pub fn rect(width: f32, height: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Rect { width, height },
            color,
        }
    }

    pub fn circle(radius: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Circle { radius },
            color,
        }
    }
}
