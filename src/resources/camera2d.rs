//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems agree on a
//! single world/screen transform.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera2D;

/// ECS resource that holds the active 2D camera parameters.
///
/// Inserted during setup, read by the pointer sampler and the render pass.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);
