//! Pull component for the rendered attraction offset.
//!
//! A [`Pull`] sits on the transformed child of a magnetized entity and holds
//! the child's resting position plus a retargetable transition: whenever the
//! attraction system picks a new target offset, the transition restarts from
//! the currently rendered offset and eases toward the target over `duration`
//! seconds. See [`crate::systems::pull`] for the update system.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Easing functions for the pull transition.
///
/// These transform a linear `t` value (0.0 to 1.0) to create different
/// acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic). The classic "ease-out" feel.
    #[default]
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

impl Easing {
    /// Look up an easing by its configuration-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "quad-in" => Some(Easing::QuadIn),
            "quad-out" => Some(Easing::QuadOut),
            "quad-in-out" => Some(Easing::QuadInOut),
            "cubic-in" => Some(Easing::CubicIn),
            "cubic-out" => Some(Easing::CubicOut),
            "cubic-in-out" => Some(Easing::CubicInOut),
            _ => None,
        }
    }
}

/// Retargetable offset transition applied to a magnetized child.
///
/// The child's local [`MapPosition`](super::mapposition::MapPosition) is
/// rewritten every frame to `anchor + current`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Pull {
    /// Resting local position of the child.
    pub anchor: Vector2,
    /// Offset rendered this frame.
    pub current: Vector2,
    /// Offset at the moment of the last retarget.
    pub from: Vector2,
    /// Offset the transition is easing toward.
    pub to: Vector2,
    /// Transition duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Seconds elapsed since the last retarget.
    pub time: f32,
}

impl Pull {
    /// Create a pull at rest: no offset, no transition in flight.
    pub fn at_rest(anchor: Vector2) -> Self {
        Self {
            anchor,
            current: Vector2::zero(),
            from: Vector2::zero(),
            to: Vector2::zero(),
            duration: 0.0,
            easing: Easing::default(),
            time: 0.0,
        }
    }

    /// Point the transition at a new target offset.
    ///
    /// Restarts from the currently rendered offset. Retargeting to the offset
    /// already being eased toward only refreshes `duration`/`easing`, so
    /// per-frame calls with an unchanged target do not stall the transition.
    pub fn retarget(&mut self, to: Vector2, duration: f32, easing: Easing) {
        if self.to != to {
            self.from = self.current;
            self.to = to;
            self.time = 0.0;
        }
        self.duration = duration;
        self.easing = easing;
    }

    /// Whether the transition has reached its target.
    pub fn settled(&self) -> bool {
        self.current == self.to
    }
}
