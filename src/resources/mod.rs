//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `appconfig` – window and magnet settings loaded from an INI file
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles optional debug overlays and logs
//! - `pointer` – latest pointer sample shared by all magnetized entities
//! - `screensize` – current framebuffer dimensions in pixels
//! - `worldtime` – simulation time and delta

pub mod appconfig;
pub mod camera2d;
pub mod debugmode;
pub mod pointer;
pub mod screensize;
pub mod worldtime;
