//! Input system.
//!
//! Polls raylib for the keys the demo shell cares about and turns them into
//! events. Magnet reconfiguration keys are handled by the main loop because
//! they go through the activation API, which needs exclusive world access.

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;

/// Key binding that toggles debug rendering.
pub const DEBUG_KEY: KeyboardKey = KeyboardKey::KEY_F11;

/// Poll raylib for keyboard input and emit the matching events.
pub fn update_input_state(rl: NonSend<raylib::RaylibHandle>, mut commands: Commands) {
    if rl.is_key_pressed(DEBUG_KEY) {
        commands.trigger(SwitchDebugEvent {});
    }
}
