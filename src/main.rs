//! Lodestone main entry point.
//!
//! A cursor-attraction toy built in Rust using:
//! - **raylib** for windowing, graphics, and mouse input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! This executable opens a window with a handful of magnetized widgets that
//! get pulled toward the mouse cursor when it comes close, and snap back when
//! it leaves. The attraction behavior itself lives in the library modules.
//!
//! # Project Structure
//!
//! - [`activation`] – host-facing attach/update/detach lifecycle
//! - [`components`] – ECS components (footprint, magnet config, pull, shapes)
//! - [`events`] – attraction notifications and debug toggling
//! - [`game`] – demo scene setup
//! - [`resources`] – ECS resources (pointer sample, config, camera, time)
//! - [`systems`] – ECS systems (pointer sampling, attraction, rendering)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, resources and observers
//! 2. Build the demo scene and activate the widgets
//! 3. Run the per-frame schedule: sample pointer, evaluate magnets, advance
//!    pull transitions, propagate transforms
//! 4. Render shapes, zone overlays and the debug block
//!
//! # Keys
//!
//! - `M` – cycle every widget between circle and block mode
//! - `Z` – toggle the attraction zone overlays
//! - `F11` – toggle debug rendering
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod activation;
mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use crate::activation::MagnetHandle;
use crate::components::bounds::ZoneShape;
use crate::events::attraction::{attracted_marker_observer, released_marker_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::appconfig::AppConfig;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::pointer::PointerState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::attraction::attraction_system;
use crate::systems::input::update_input_state;
use crate::systems::pointer::update_pointer_state;
use crate::systems::propagate_transforms::propagate_transforms;
use crate::systems::pull::pull_transition_system;
use crate::systems::render::{render_debug_ui, render_pass};
use crate::systems::time::update_world_time;
use crate::systems::zone::zone_sync_system;

/// Lodestone cursor-attraction demo
#[derive(Parser)]
#[command(version, about = "Widgets that lean toward your mouse cursor.")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the attraction zone overlays from the start.
    #[arg(long)]
    zones: bool,

    /// Start with debug rendering and verbose magnet logging enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Config file is optional; defaults are safe.
    let mut config = match cli.config {
        Some(path) => AppConfig::with_path(path),
        None => AppConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("Using default configuration ({})", e);
    }
    if cli.zones {
        config.magnet.show_zone = true;
    }
    if cli.debug {
        config.magnet.debug = true;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Lodestone");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(PointerState::default().with_hover_capable(config.hover));
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Observers must be registered before any system can trigger events.
    world.spawn(Observer::new(attracted_marker_observer));
    world.spawn(Observer::new(released_marker_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let handles = game::setup(&mut world, &config);
    world.insert_resource(config);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(update_pointer_state);
    update.add_systems(attraction_system.after(update_pointer_state));
    update.add_systems(pull_transition_system.after(attraction_system));
    update.add_systems(zone_sync_system.after(attraction_system));
    update.add_systems(propagate_transforms.after(pull_transition_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        handle_reconfigure_keys(&mut world, &handles);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Track window resizes.
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = new_w;
            screen.h = new_h;
        }

        render(&mut world);
    }
}

/// Apply the runtime reconfiguration keys through the activation API.
///
/// Going through [`MagnetHandle::update`] keeps the swap validated and the
/// overlay children reconciled, exactly as a host framework would do it.
fn handle_reconfigure_keys(world: &mut World, handles: &[MagnetHandle]) {
    let (cycle_shape, toggle_zones) = {
        let rl = world.non_send_resource::<raylib::RaylibHandle>();
        (
            rl.is_key_pressed(KeyboardKey::KEY_M),
            rl.is_key_pressed(KeyboardKey::KEY_Z),
        )
    };
    if !cycle_shape && !toggle_zones {
        return;
    }

    for handle in handles {
        let Some(mut config) = handle.config(world) else {
            continue;
        };
        if cycle_shape {
            config.shape = match config.shape {
                ZoneShape::Circle => ZoneShape::Block,
                ZoneShape::Block => ZoneShape::Circle,
            };
        }
        if toggle_zones {
            config.show_zone = !config.show_zone;
        }
        if let Err(e) = handle.update(world, config) {
            log::error!("reconfigure failed: {}", e);
        }
    }
}

/// Draw one frame: world pass in camera space, then the debug block.
fn render(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("raylib handle in world");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("raylib thread in world");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        {
            let cam = world.resource::<Camera2DRes>().0;
            let mut d2 = d.begin_mode2D(cam);
            render_pass(world, &mut d2);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
