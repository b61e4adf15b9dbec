//! Application configuration resource.
//!
//! Manages window and magnet settings loaded from an INI configuration file.
//! Provides defaults for safe startup; missing values keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//! fullscreen = false
//!
//! [input]
//! hover = true
//!
//! [magnet]
//! trigger_distance = 75
//! dampening = 2
//! mode = circle
//! speed_ms = 300
//! easing = quad-out
//! mouse_only = true
//! attraction_zone = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::bounds::ZoneShape;
use crate::components::magnet::Magnet;
use crate::components::pull::Easing;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_HOVER: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
///
/// Stores window settings, the platform hover capability, and the magnet
/// defaults applied to demo entities at setup.
#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Whether the platform is treated as hover-capable. Set to false to
    /// emulate a touch-only device.
    pub hover: bool,
    /// Magnet configuration applied to demo entities.
    pub magnet: Magnet,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            hover: DEFAULT_HOVER,
            magnet: Magnet::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [input] section
        if let Some(hover) = config.getbool("input", "hover").ok().flatten() {
            self.hover = hover;
        }

        // [magnet] section
        if let Some(trigger) = config.getfloat("magnet", "trigger_distance").ok().flatten() {
            self.magnet.trigger_distance = trigger as f32;
        }
        if let Some(dampening) = config.getfloat("magnet", "dampening").ok().flatten() {
            self.magnet.dampening = dampening as f32;
        }
        if let Some(mode) = config.get("magnet", "mode") {
            match mode.as_str() {
                "circle" => self.magnet.shape = ZoneShape::Circle,
                "block" => self.magnet.shape = ZoneShape::Block,
                other => warn!("Unknown magnet mode '{}', keeping {:?}", other, self.magnet.shape),
            }
        }
        if let Some(speed) = config.getfloat("magnet", "speed_ms").ok().flatten() {
            self.magnet.transition_ms = speed as f32;
        }
        if let Some(easing) = config.get("magnet", "easing") {
            match Easing::from_name(&easing) {
                Some(e) => self.magnet.easing = e,
                None => warn!("Unknown easing '{}', keeping {:?}", easing, self.magnet.easing),
            }
        }
        if let Some(mouse_only) = config.getbool("magnet", "mouse_only").ok().flatten() {
            self.magnet.mouse_only = mouse_only;
        }
        if let Some(zone) = config.getbool("magnet", "attraction_zone").ok().flatten() {
            self.magnet.show_zone = zone;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, fullscreen={}, hover={}, magnet={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.hover,
            self.magnet
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
