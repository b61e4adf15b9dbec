//! Pull transition system.
//!
//! Advances every [`Pull`](crate::components::pull::Pull) toward its target
//! offset and writes `anchor + current` into the child's local
//! [`MapPosition`](crate::components::mapposition::MapPosition). Together
//! with the retargeting done by
//! [`attraction_system`](crate::systems::attraction::attraction_system) this
//! behaves like a retargetable style transition: each retarget restarts from
//! the currently rendered offset and eases toward the new target over the
//! configured duration.

use bevy_ecs::prelude::*;
use raylib::math::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::pull::{Easing, Pull};
use crate::resources::worldtime::WorldTime;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Advance pull transitions and update child positions.
pub fn pull_transition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut Pull)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut position, mut pull) in query.iter_mut() {
        pull.time += dt;
        let t = if pull.duration <= 0.0 {
            1.0
        } else {
            (pull.time / pull.duration).min(1.0)
        };
        let eased = ease(pull.easing, t);
        pull.current = lerp_v2(pull.from, pull.to, eased);
        position.pos = pull.anchor + pull.current;
    }
}
