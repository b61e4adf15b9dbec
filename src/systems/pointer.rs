//! Pointer sampling system.
//!
//! Stores the mouse position, converted to world space through the active
//! camera, into the shared [`PointerState`] resource once per frame. Every
//! magnetized entity reads this single sample, so a burst of raw pointer
//! events still costs one geometry evaluation per frame per entity.

use bevy_ecs::prelude::*;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::pointer::PointerState;

/// Update the shared [`PointerState`] from the current mouse position.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    camera_res: Res<Camera2DRes>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let mouse_position = rl.get_mouse_position();
    let world_position = rl.get_screen_to_world2D(mouse_position, camera_res.0);
    pointer.position = Some(world_position);
}
