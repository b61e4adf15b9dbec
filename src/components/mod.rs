//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the world. Components define data such as position, footprint geometry,
//! attraction configuration and the rendered pull offset.
//!
//! Submodules overview:
//! - [`attractionzone`] – visual overlay of the attraction trigger region
//! - [`bounds`] – axis-aligned footprint and pointer-distance geometry
//! - [`globaltransform2d`] – computed world-space position for hierarchies
//! - [`magnet`] – cursor-attraction configuration and runtime state
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`markers`] – presentation flag set toggled by attraction observers
//! - [`pull`] – retargetable offset transition applied to the pulled child
//! - [`shape`] – flat-color primitive for the render pass
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod attractionzone;
pub mod bounds;
pub mod globaltransform2d;
pub mod magnet;
pub mod mapposition;
pub mod markers;
pub mod pull;
pub mod shape;
pub mod zindex;
