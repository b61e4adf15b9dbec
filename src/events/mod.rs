//! Event types and observers used by the engine.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`attraction`] – attracted/released notifications and marker observers
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off

pub mod attraction;
pub mod switchdebug;
