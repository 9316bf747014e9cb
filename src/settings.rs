//! Simulation settings
//!
//! Every tunable the engine reads lives here. Defaults reproduce the classic
//! climb; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::CameraPolicy;

/// Engine tuning and policy selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Player ===
    /// Visual size; horizontal movement is clamped to keep it on screen
    pub player_size: f32,
    /// Collision extent, smaller than the sprite
    pub player_hitbox: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub move_speed: f32,
    pub max_jumps: u8,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub start_platform_width: f32,
    /// Distance of the spawn platform above the bottom edge
    pub start_platform_offset: f32,
    pub initial_platform_count: usize,
    pub initial_platform_spacing: f32,
    /// Recycler refills up to this many platforms
    pub min_platforms: usize,
    pub platform_gap: f32,
    pub recycle_margin: f32,

    // === Run ===
    /// Fall distance below the viewport that ends the run
    pub fall_margin: f32,
    pub score_divisor: f32,
    pub band_thresholds: [f32; 4],

    // === Camera ===
    pub camera: CameraPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: GAME_WIDTH,
            viewport_height: GAME_HEIGHT,

            player_size: PLAYER_SIZE,
            player_hitbox: PLAYER_HITBOX,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            move_speed: MOVE_SPEED,
            max_jumps: MAX_JUMPS,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            start_platform_width: START_PLATFORM_WIDTH,
            start_platform_offset: START_PLATFORM_OFFSET,
            initial_platform_count: INITIAL_PLATFORM_COUNT,
            initial_platform_spacing: INITIAL_PLATFORM_SPACING,
            min_platforms: MIN_PLATFORMS,
            platform_gap: PLATFORM_GAP,
            recycle_margin: RECYCLE_MARGIN,

            fall_margin: FALL_MARGIN,
            score_divisor: SCORE_DIVISOR,
            band_thresholds: BAND_THRESHOLDS,

            camera: CameraPolicy::Anchor,
        }
    }
}

impl Settings {
    /// Anchor camera, tight margins
    pub fn classic() -> Self {
        Self::default()
    }

    /// Dead-zone camera that follows the player back down to the spawn floor.
    /// Margins are widened so platforms survive the downward swings.
    pub fn catch_up() -> Self {
        Self {
            camera: CameraPolicy::dead_zone(),
            recycle_margin: 1000.0,
            fall_margin: 800.0,
            ..Self::default()
        }
    }

    /// Look up a named preset
    pub fn from_preset_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "catch-up" | "catch_up" | "catchup" => Some(Self::catch_up()),
            _ => None,
        }
    }

    /// Preset name, or else a path to a JSON settings file
    pub fn from_arg(arg: &str) -> Self {
        Self::from_preset_name(arg).unwrap_or_else(|| Self::load(arg))
    }

    /// Rightmost x the player may occupy
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        (self.viewport_width - self.player_size).max(0.0)
    }

    /// Rightmost x a generated platform may start at
    #[inline]
    pub fn max_platform_x(&self) -> f32 {
        (self.viewport_width - self.platform_width).max(0.0)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
