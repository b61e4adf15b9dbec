//! Render pass and debug overlay.
//!
//! We render inside raylib's drawing scopes and query the ECS World
//! directly. Shapes are drawn sorted by [`ZIndex`], attraction zones as
//! outlines around their parent's footprint, and [`DebugMode`] adds
//! footprint rectangles, position cross-hairs and a diagnostics text block.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::attractionzone::AttractionZone;
use crate::components::bounds::{Bounds, ZoneShape};
use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::magnet::DEFAULT_ATTRACTED_FLAG;
use crate::components::mapposition::MapPosition;
use crate::components::markers::Markers;
use crate::components::shape::{Shape, ShapeKind};
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::pointer::PointerState;
use crate::resources::screensize::ScreenSize;

const ZONE_COLOR: Color = Color {
    r: 255,
    g: 161,
    b: 0,
    a: 120,
};
const HIGHLIGHT_COLOR: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 200,
};

/// Draw the world in 2D camera space.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    // Attraction zone outlines first, underneath the shapes.
    let zones: Vec<(AttractionZone, Entity)> = {
        let mut q = world.query::<(&AttractionZone, &ChildOf)>();
        q.iter(world)
            .map(|(zone, child_of)| (*zone, child_of.parent()))
            .collect()
    };
    for (zone, parent) in zones {
        let (Some(position), Some(bounds)) = (
            world.get::<MapPosition>(parent),
            world.get::<Bounds>(parent),
        ) else {
            continue;
        };
        let (min, max) = bounds.rect(position.pos);
        match zone.shape {
            ZoneShape::Circle => {
                let center = bounds.center(position.pos);
                d2.draw_circle_lines(
                    center.x as i32,
                    center.y as i32,
                    zone.padding,
                    ZONE_COLOR,
                );
            }
            ZoneShape::Block => {
                d2.draw_rectangle_lines(
                    (min.x - zone.padding) as i32,
                    (min.y - zone.padding) as i32,
                    (max.x - min.x + zone.padding * 2.0) as i32,
                    (max.y - min.y + zone.padding * 2.0) as i32,
                    ZONE_COLOR,
                );
            }
        }
    }

    // Query: (Shape, GlobalTransform2D, ZIndex, Markers)
    // Collect, sort by z, then draw.
    let mut to_draw: Vec<(Shape, Vector2, ZIndex, bool)> = {
        let mut q = world.query::<(&Shape, &GlobalTransform2D, &ZIndex, Option<&Markers>)>();
        q.iter(world)
            .map(|(shape, gt, z, markers)| {
                let highlighted = markers
                    .map(|m| m.has(DEFAULT_ATTRACTED_FLAG))
                    .unwrap_or(false);
                (*shape, gt.position, *z, highlighted)
            })
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z, _)| *z);

    for (shape, position, _z, highlighted) in to_draw {
        match shape.kind {
            ShapeKind::Rect { width, height } => {
                let x = position.x - width * 0.5;
                let y = position.y - height * 0.5;
                d2.draw_rectangle(x as i32, y as i32, width as i32, height as i32, shape.color);
                if highlighted {
                    d2.draw_rectangle_lines(
                        x as i32,
                        y as i32,
                        width as i32,
                        height as i32,
                        HIGHLIGHT_COLOR,
                    );
                }
            }
            ShapeKind::Circle { radius } => {
                d2.draw_circle(position.x as i32, position.y as i32, radius, shape.color);
                if highlighted {
                    d2.draw_circle_lines(position.x as i32, position.y as i32, radius, HIGHLIGHT_COLOR);
                }
            }
        }
    }

    if world.contains_resource::<DebugMode>() {
        // Footprint rectangles.
        let mut footprints = world.query::<(&Bounds, &MapPosition)>();
        for (bounds, position) in footprints.iter(world) {
            let (min, max) = bounds.rect(position.pos);
            d2.draw_rectangle_lines(
                min.x as i32,
                min.y as i32,
                (max.x - min.x) as i32,
                (max.y - min.y) as i32,
                Color::RED,
            );
        }
        // Cross-hair on every position.
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            d2.draw_line(
                position.pos.x as i32 - 5,
                position.pos.y as i32,
                position.pos.x as i32 + 5,
                position.pos.y as i32,
                Color::GREEN,
            );
            d2.draw_line(
                position.pos.x as i32,
                position.pos.y as i32 - 5,
                position.pos.x as i32,
                position.pos.y as i32 + 5,
                Color::GREEN,
            );
        }
    }
}

/// Draw the screen-space debug diagnostics block.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<DebugMode>() {
        let screen = *world.resource::<ScreenSize>();

        let fps = d.get_fps();
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::BLACK);

        let entity_count = world.iter_entities().count();
        let text = format!("Entities: {}", entity_count);
        d.draw_text(&text, 10, 30, 10, Color::BLACK);

        let pointer = *world.resource::<PointerState>();
        let pointer_text = match pointer.position {
            Some(p) => format!("Pointer world: ({:.1}, {:.1})", p.x, p.y),
            None => "Pointer world: none".to_string(),
        };
        d.draw_text(&pointer_text, 10, 50, 10, Color::BLACK);

        let cam = world.resource::<Camera2DRes>().0;
        let cam_text = format!(
            "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
            cam.target.x, cam.target.y, cam.zoom
        );
        d.draw_text(&cam_text, 10, (screen.h - 30) as i32, 10, Color::BLACK);
    }
}
