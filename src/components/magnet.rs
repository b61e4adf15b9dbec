//! Magnet configuration and per-element attraction state.
//!
//! A [`Magnet`] on an entity makes that entity's first child get pulled
//! toward the pointer whenever the pointer enters the trigger zone, and snap
//! back when it leaves. Configuration is plain data merged from defaults via
//! builder methods; it is validated at the activation boundary (see
//! [`crate::activation`]) and swapped wholesale on update.
//!
//! [`MagnetState`] holds the runtime side of the behavior and survives
//! configuration swaps.

use bevy_ecs::prelude::Component;
use thiserror::Error;

use super::bounds::ZoneShape;
use super::pull::Easing;

/// Default trigger distance in pixels.
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 75.0;
/// Default dampening divisor.
pub const DEFAULT_DAMPENING: f32 = 2.0;
/// Default marker flag set on the child while attracted.
pub const DEFAULT_ATTRACTED_FLAG: &str = "attracted";

/// Named transition speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Snail,
    Slow,
    Medium,
    Fast,
    Instant,
}

impl Speed {
    /// Transition duration in milliseconds.
    pub fn millis(self) -> f32 {
        match self {
            Speed::Snail => 2000.0,
            Speed::Slow => 600.0,
            Speed::Medium => 300.0,
            Speed::Fast => 150.0,
            Speed::Instant => 7.0,
        }
    }
}

/// Validation failure for magnet configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MagnetConfigError {
    #[error("trigger_distance must be finite and greater than zero, got {0}")]
    TriggerDistance(f32),
    #[error("dampening must be finite and non-zero, got {0}")]
    Dampening(f32),
    #[error("transition_ms must be finite and not negative, got {0}")]
    TransitionMs(f32),
}

/// Cursor-attraction configuration for one entity.
///
/// Immutable per activation; replace it wholesale through
/// [`MagnetHandle::update`](crate::activation::MagnetHandle::update).
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Magnet {
    /// Radius (circle) or edge margin (block) of the attraction zone, pixels.
    pub trigger_distance: f32,
    /// Divisor applied to the raw offset; larger values give a subtler pull.
    pub dampening: f32,
    /// Distance-measurement strategy.
    pub shape: ZoneShape,
    /// Transition duration toward a new pull target, milliseconds.
    pub transition_ms: f32,
    /// Easing curve of the pull transition.
    pub easing: Easing,
    /// Only track the pointer on platforms with hover capability.
    pub mouse_only: bool,
    /// Marker flag toggled on the child while attracted.
    pub attracted_flag: String,
    /// Render the attraction zone overlay.
    pub show_zone: bool,
    /// Log structure warnings and per-frame distances.
    pub debug: bool,
}

impl Default for Magnet {
    fn default() -> Self {
        Self {
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            dampening: DEFAULT_DAMPENING,
            shape: ZoneShape::Circle,
            transition_ms: Speed::Medium.millis(),
            easing: Easing::QuadOut,
            mouse_only: true,
            attracted_flag: DEFAULT_ATTRACTED_FLAG.into(),
            show_zone: false,
            debug: false,
        }
    }
}

impl Magnet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger_distance(mut self, pixels: f32) -> Self {
        self.trigger_distance = pixels;
        self
    }

    pub fn with_dampening(mut self, dampening: f32) -> Self {
        self.dampening = dampening;
        self
    }

    pub fn with_shape(mut self, shape: ZoneShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.transition_ms = speed.millis();
        self
    }

    pub fn with_transition_ms(mut self, millis: f32) -> Self {
        self.transition_ms = millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_mouse_only(mut self, mouse_only: bool) -> Self {
        self.mouse_only = mouse_only;
        self
    }

    pub fn with_attracted_flag(mut self, flag: impl Into<String>) -> Self {
        self.attracted_flag = flag.into();
        self
    }

    pub fn with_zone(mut self, show_zone: bool) -> Self {
        self.show_zone = show_zone;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Transition duration in seconds, as consumed by the pull transition.
    pub fn transition_secs(&self) -> f32 {
        self.transition_ms / 1000.0
    }

    /// Reject out-of-range numeric fields.
    ///
    /// Called at activation and on every update so NaN or infinity never
    /// reaches the rendered offset.
    pub fn validate(&self) -> Result<(), MagnetConfigError> {
        if !self.trigger_distance.is_finite() || self.trigger_distance <= 0.0 {
            return Err(MagnetConfigError::TriggerDistance(self.trigger_distance));
        }
        if !self.dampening.is_finite() || self.dampening == 0.0 {
            return Err(MagnetConfigError::Dampening(self.dampening));
        }
        if !self.transition_ms.is_finite() || self.transition_ms < 0.0 {
            return Err(MagnetConfigError::TransitionMs(self.transition_ms));
        }
        Ok(())
    }
}

/// Runtime attraction state of a magnetized entity.
///
/// Strictly mirrors "last computed distance < trigger distance"; flipped only
/// by the attraction system at boundary crossings.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MagnetState {
    pub attracted: bool,
}
