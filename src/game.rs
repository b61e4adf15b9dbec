//! Demo scene setup.
//!
//! Spawns a small set of magnetized widgets so the behavior can be felt with
//! a mouse: a row of circle-mode chips with different transition speeds and
//! a block-mode bar. Each widget is a parent entity carrying the footprint
//! and a child entity carrying the rendered shape; activation wires the
//! attraction behavior between them.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::activation::{MagnetHandle, activate};
use crate::components::bounds::{Bounds, ZoneShape};
use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::magnet::{Magnet, Speed};
use crate::components::mapposition::MapPosition;
use crate::components::shape::Shape;
use crate::components::zindex::ZIndex;
use crate::resources::appconfig::AppConfig;
use crate::resources::camera2d::Camera2DRes;

/// Spawn one magnetized widget and activate the behavior on it.
///
/// Returns the activation handle; inert when the world refuses the widget,
/// which cannot happen for the structures built here.
fn spawn_widget(
    world: &mut World,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
    config: Magnet,
) -> MagnetHandle {
    let parent = world
        .spawn((MapPosition::new(x, y), Bounds::centered(width, height)))
        .id();
    world.spawn((
        MapPosition::zero(),
        GlobalTransform2D::default(),
        Shape::rect(width, height, color),
        ZIndex(1),
        ChildOf(parent),
    ));

    match activate(world, parent, config) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("failed to activate widget at ({}, {}): {}", x, y, e);
            MagnetHandle::inert()
        }
    }
}

/// Build the demo scene and return the handles of all activated widgets.
pub fn setup(world: &mut World, config: &AppConfig) -> Vec<MagnetHandle> {
    // Identity camera: world coordinates are window pixels.
    let camera = Camera2D {
        target: Vector2::zero(),
        offset: Vector2::zero(),
        rotation: 0.0,
        zoom: 1.0,
    };
    world.insert_resource(Camera2DRes(camera));

    let (w, h) = config.window_size();
    let center_x = w as f32 * 0.5;
    let center_y = h as f32 * 0.5;

    // A little vertical jitter keeps the row from looking machine-placed.
    let jitter = || (fastrand::f32() - 0.5) * 16.0;

    let mut handles = Vec::new();

    // Row of circle-mode chips, slow to fast.
    let chips = [
        (Speed::Slow, Color::SKYBLUE),
        (Speed::Medium, Color::GOLD),
        (Speed::Fast, Color::LIME),
    ];
    for (i, (speed, color)) in chips.into_iter().enumerate() {
        let x = center_x + (i as f32 - 1.0) * 220.0;
        handles.push(spawn_widget(
            world,
            x,
            center_y - 120.0 + jitter(),
            96.0,
            96.0,
            color,
            config.magnet.clone().with_speed(speed),
        ));
    }

    // Wide block-mode bar: distance is measured from the nearest edge.
    handles.push(spawn_widget(
        world,
        center_x,
        center_y + 140.0,
        420.0,
        72.0,
        Color::ORANGE,
        config.magnet.clone().with_shape(ZoneShape::Block),
    ));

    handles
}
