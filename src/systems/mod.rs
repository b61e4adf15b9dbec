//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`attraction`] – per-frame magnet evaluation, pull retargeting, events
//! - [`input`] – read hardware input and emit shell events
//! - [`pointer`] – sample the mouse into the shared pointer resource
//! - [`propagate_transforms`] – compute world positions for hierarchies
//! - [`pull`] – advance pull transitions and write child positions
//! - [`render`] – draw shapes, zones and debug overlays using raylib
//! - [`time`] – update simulation time and delta
//! - [`zone`] – mirror magnet configuration onto zone overlays

pub mod attraction;
pub mod input;
pub mod pointer;
pub mod propagate_transforms;
pub mod pull;
pub mod render;
pub mod time;
pub mod zone;
