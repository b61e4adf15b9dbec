//! Engine tick integration tests for the attraction behavior: geometry,
//! boundary events, pull transitions, and deactivation.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use lodestone::activation::{MagnetHandle, activate};
use lodestone::components::bounds::{Bounds, ZoneShape};
use lodestone::components::magnet::{Magnet, MagnetState};
use lodestone::components::mapposition::MapPosition;
use lodestone::components::markers::Markers;
use lodestone::components::pull::{Easing, Pull};
use lodestone::events::attraction::{
    AttractedEvent, ReleasedEvent, attracted_marker_observer, released_marker_observer,
};
use lodestone::resources::pointer::PointerState;
use lodestone::resources::worldtime::WorldTime;
use lodestone::systems::attraction::attraction_system;
use lodestone::systems::pull::pull_transition_system;
use lodestone::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Counts boundary events as they fire.
#[derive(Resource, Default)]
struct EventLog {
    attracted: Vec<Entity>,
    released: Vec<Entity>,
}

fn log_attracted(trigger: On<AttractedEvent>, mut log: ResMut<EventLog>) {
    log.attracted.push(trigger.event().magnet);
}

fn log_released(trigger: On<ReleasedEvent>, mut log: ResMut<EventLog>) {
    log.released.push(trigger.event().magnet);
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PointerState::default());
    world.init_resource::<EventLog>();
    world.spawn(Observer::new(log_attracted));
    world.spawn(Observer::new(log_released));
    world.spawn(Observer::new(attracted_marker_observer));
    world.spawn(Observer::new(released_marker_observer));
    world.flush();
    world
}

/// Parent with a centered footprint plus a transformable child, activated.
fn spawn_magnet(world: &mut World, x: f32, y: f32, size: f32, config: Magnet) -> (Entity, Entity, MagnetHandle) {
    let target = world
        .spawn((MapPosition::new(x, y), Bounds::centered(size, size)))
        .id();
    let child = world.spawn((MapPosition::zero(), ChildOf(target))).id();
    let handle = activate(world, target, config).expect("valid config");
    assert!(handle.is_active());
    (target, child, handle)
}

fn set_pointer(world: &mut World, x: f32, y: f32) {
    world.resource_mut::<PointerState>().position = Some(Vector2 { x, y });
}

/// One frame: advance time, evaluate magnets, advance pull transitions.
fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((attraction_system, pull_transition_system).chain());
    schedule.run(world);
}

#[test]
fn pointer_inside_trigger_attracts_once() {
    let mut world = make_world();
    // Rect centered at (100,100), trigger 75, dampening 2, circle mode.
    let (target, child, _handle) = spawn_magnet(
        &mut world,
        100.0,
        100.0,
        100.0,
        Magnet::new().with_transition_ms(0.0),
    );

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);

    // distance 30 < 75: pulled by (30,0)/2 = (15,0), attracted fired once.
    let state = world.get::<MagnetState>(target).unwrap();
    assert!(state.attracted);
    let pull = world.get::<Pull>(child).unwrap();
    assert!(approx_eq(pull.to.x, 15.0));
    assert!(approx_eq(pull.to.y, 0.0));
    let pos = world.get::<MapPosition>(child).unwrap();
    assert!(approx_eq(pos.pos.x, 15.0));
    assert!(approx_eq(pos.pos.y, 0.0));

    let log = world.resource::<EventLog>();
    assert_eq!(log.attracted, vec![target]);
    assert!(log.released.is_empty());
}

#[test]
fn pointer_leaving_trigger_releases_once() {
    let mut world = make_world();
    let (target, child, _handle) = spawn_magnet(
        &mut world,
        100.0,
        100.0,
        100.0,
        Magnet::new().with_transition_ms(0.0),
    );

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    // distance 230 >= 75: transform back to neutral, released fired once.
    set_pointer(&mut world, 300.0, 100.0);
    tick(&mut world, 1.0 / 60.0);

    let state = world.get::<MagnetState>(target).unwrap();
    assert!(!state.attracted);
    let pos = world.get::<MapPosition>(child).unwrap();
    assert!(approx_eq(pos.pos.x, 0.0));
    assert!(approx_eq(pos.pos.y, 0.0));

    let log = world.resource::<EventLog>();
    assert_eq!(log.attracted, vec![target]);
    assert_eq!(log.released, vec![target]);
}

#[test]
fn no_duplicate_events_on_same_side() {
    let mut world = make_world();
    let (target, _child, _handle) =
        spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());

    // Oscillate inside the zone.
    for x in [130.0, 120.0, 140.0, 110.0] {
        set_pointer(&mut world, x, 100.0);
        tick(&mut world, 1.0 / 60.0);
    }
    // Then oscillate outside.
    for x in [300.0, 280.0, 320.0] {
        set_pointer(&mut world, x, 100.0);
        tick(&mut world, 1.0 / 60.0);
    }

    let log = world.resource::<EventLog>();
    assert_eq!(log.attracted, vec![target]);
    assert_eq!(log.released, vec![target]);
}

#[test]
fn boundary_distance_counts_as_outside() {
    let mut world = make_world();
    // No hysteresis: distance == trigger_distance means released.
    let (_target, _child, _handle) =
        spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());

    set_pointer(&mut world, 175.0, 100.0); // distance exactly 75
    tick(&mut world, 1.0 / 60.0);

    let log = world.resource::<EventLog>();
    assert!(log.attracted.is_empty());
}

#[test]
fn block_mode_measures_from_nearest_edge() {
    let mut world = make_world();
    // Rect spans x:[50,150], y:[50,150].
    let (target, child, _handle) = spawn_magnet(
        &mut world,
        100.0,
        100.0,
        100.0,
        Magnet::new()
            .with_shape(ZoneShape::Block)
            .with_transition_ms(0.0),
    );

    set_pointer(&mut world, 200.0, 100.0); // nearest edge point (150,100)
    tick(&mut world, 1.0 / 60.0);

    // distance 50 < 75, pulled by (50,0)/2 = (25,0).
    assert!(world.get::<MagnetState>(target).unwrap().attracted);
    let pos = world.get::<MapPosition>(child).unwrap();
    assert!(approx_eq(pos.pos.x, 25.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn pull_transition_eases_toward_target() {
    let mut world = make_world();
    let (_target, child, _handle) = spawn_magnet(
        &mut world,
        100.0,
        100.0,
        100.0,
        Magnet::new()
            .with_transition_ms(1000.0)
            .with_easing(Easing::Linear),
    );

    set_pointer(&mut world, 130.0, 100.0); // target offset (15, 0)
    tick(&mut world, 0.5);

    // Half the transition elapsed within the same frame as the retarget.
    let pull = world.get::<Pull>(child).unwrap();
    assert!(approx_eq(pull.current.x, 7.5));
    let pos = world.get::<MapPosition>(child).unwrap();
    assert!(approx_eq(pos.pos.x, 7.5));

    tick(&mut world, 0.5);
    let pos = world.get::<MapPosition>(child).unwrap();
    assert!(approx_eq(pos.pos.x, 15.0));
}

#[test]
fn transform_keeps_tracking_without_new_pointer_samples() {
    let mut world = make_world();
    let (target, child, _handle) = spawn_magnet(
        &mut world,
        100.0,
        100.0,
        100.0,
        Magnet::new().with_transition_ms(0.0),
    );

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    assert!(world.get::<MagnetState>(target).unwrap().attracted);

    // The element moves; the pointer sample stays. The loop re-evaluates and
    // the offset follows the new geometry.
    world.get_mut::<MapPosition>(target).unwrap().pos.x = 110.0;
    tick(&mut world, 1.0 / 60.0);

    let pos = world.get::<MapPosition>(child).unwrap();
    assert!(approx_eq(pos.pos.x, 10.0)); // (130-110)/2
}

#[test]
fn marker_flag_mirrors_attraction() {
    let mut world = make_world();
    let (_target, child, _handle) =
        spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    assert!(world.get::<Markers>(child).unwrap().has("attracted"));

    set_pointer(&mut world, 300.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    assert!(!world.get::<Markers>(child).unwrap().has("attracted"));
}

#[test]
fn deactivate_stops_transforms_and_events() {
    let mut world = make_world();
    let (target, child, handle) = spawn_magnet(
        &mut world,
        100.0,
        100.0,
        100.0,
        Magnet::new().with_transition_ms(0.0),
    );

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    assert!(world.get::<MagnetState>(target).is_some());

    handle.deactivate(&mut world);
    let frozen = world.get::<MapPosition>(child).unwrap().pos;

    // Pointer keeps moving; nothing may change, nothing may fire.
    for x in [300.0, 100.0, 130.0, 500.0] {
        set_pointer(&mut world, x, 100.0);
        tick(&mut world, 1.0 / 60.0);
    }

    let pos = world.get::<MapPosition>(child).unwrap().pos;
    assert!(approx_eq(pos.x, frozen.x));
    assert!(approx_eq(pos.y, frozen.y));
    let log = world.resource::<EventLog>();
    assert_eq!(log.attracted.len(), 1);
    assert!(log.released.is_empty());
}

#[test]
fn update_with_identical_config_is_idempotent() {
    let mut world = make_world();
    let (target, child, handle) =
        spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);

    let config = handle.config(&world).unwrap();
    let state_before = world.get::<MagnetState>(target).unwrap().attracted;
    let pull_before = *world.get::<Pull>(child).unwrap();

    handle.update(&mut world, config.clone()).unwrap();
    handle.update(&mut world, config.clone()).unwrap();

    assert_eq!(world.get::<Magnet>(target).unwrap(), &config);
    assert_eq!(world.get::<MagnetState>(target).unwrap().attracted, state_before);
    let pull_after = world.get::<Pull>(child).unwrap();
    assert!(approx_eq(pull_before.to.x, pull_after.to.x));

    tick(&mut world, 1.0 / 60.0);
    let log = world.resource::<EventLog>();
    assert_eq!(log.attracted.len(), 1);
    assert!(log.released.is_empty());
}

#[test]
fn update_can_shrink_trigger_and_release_on_next_frame() {
    let mut world = make_world();
    let (target, _child, handle) =
        spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());

    set_pointer(&mut world, 160.0, 100.0); // distance 60
    tick(&mut world, 1.0 / 60.0);
    assert!(world.get::<MagnetState>(target).unwrap().attracted);

    let config = handle.config(&world).unwrap().with_trigger_distance(40.0);
    handle.update(&mut world, config).unwrap();
    tick(&mut world, 1.0 / 60.0);

    assert!(!world.get::<MagnetState>(target).unwrap().attracted);
    let log = world.resource::<EventLog>();
    assert_eq!(log.released, vec![target]);
}

#[test]
fn mouse_only_magnet_ignores_non_hover_platforms() {
    let mut world = make_world();
    world.resource_mut::<PointerState>().hover_capable = false;

    let (target, _child, _handle) =
        spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());
    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    assert!(!world.get::<MagnetState>(target).unwrap().attracted);

    // A magnet that opts in keeps working without hover capability.
    let (target2, _child2, _handle2) = spawn_magnet(
        &mut world,
        400.0,
        100.0,
        100.0,
        Magnet::new().with_mouse_only(false),
    );
    set_pointer(&mut world, 430.0, 100.0);
    tick(&mut world, 1.0 / 60.0);
    assert!(world.get::<MagnetState>(target2).unwrap().attracted);
}

#[test]
fn no_pointer_sample_means_no_evaluation() {
    let mut world = make_world();
    let (target, _child, _handle) =
        spawn_magnet(&mut world, 0.0, 0.0, 100.0, Magnet::new());

    // Pointer has never been sampled; even though the rect contains the
    // origin, nothing may fire.
    tick(&mut world, 1.0 / 60.0);

    assert!(!world.get::<MagnetState>(target).unwrap().attracted);
    assert!(world.resource::<EventLog>().attracted.is_empty());
}

#[test]
fn instances_are_independent() {
    let mut world = make_world();
    let (near, _c1, _h1) = spawn_magnet(&mut world, 100.0, 100.0, 100.0, Magnet::new());
    let (far, _c2, _h2) = spawn_magnet(&mut world, 600.0, 100.0, 100.0, Magnet::new());

    set_pointer(&mut world, 130.0, 100.0);
    tick(&mut world, 1.0 / 60.0);

    assert!(world.get::<MagnetState>(near).unwrap().attracted);
    assert!(!world.get::<MagnetState>(far).unwrap().attracted);
    let log = world.resource::<EventLog>();
    assert_eq!(log.attracted, vec![near]);
}
