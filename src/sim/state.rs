//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in [`WorldState`]; frontends own
//! one and pass it to [`super::tick`] by exclusive reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::autopilot::Autopilot;
use super::generator::generate_platform;
use crate::settings::Settings;

/// Which sprite the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPose {
    Standing,
    Airborne,
}

/// The player body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the hitbox, in screen coordinates (y grows downward)
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    /// y at the start of the current tick, before gravity and landings
    pub prev_y: f32,
    pub on_ground: bool,
    /// Jumps spent since the last landing
    pub jump_count: u8,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vy: 0.0,
            prev_y: pos.y,
            on_ground: false,
            jump_count: 0,
        }
    }

    pub fn pose(&self) -> PlayerPose {
        if self.on_ground {
            PlayerPose::Standing
        } else {
            PlayerPose::Airborne
        }
    }

    /// Top-left of the visual sprite. The hitbox sits centered at the
    /// sprite's feet, so the sprite extends left, right and upward from it.
    pub fn sprite_origin(&self, sprite_size: f32, hitbox: f32) -> Vec2 {
        let overhang = sprite_size - hitbox;
        Vec2::new(self.pos.x - overhang / 2.0, self.pos.y - overhang)
    }
}

/// A platform. Only `pos.y` changes after creation (camera scroll).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Top surface, the only side a player can land on
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// Engine-owned input latches.
///
/// The frontend reports raw key state each tick; the engine turns the jump
/// key into a one-shot request so a held key cannot rapid-fire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// A jump was pressed and has not fired yet
    pub jump_pending: bool,
    /// Jump key state seen on the previous tick
    pub jump_held: bool,
}

impl InputState {
    /// Latch the jump key for this tick. A new press arms a request;
    /// releasing the key drops any request that never fired.
    pub fn observe_jump(&mut self, pressed: bool) {
        if pressed && !self.jump_held {
            self.jump_pending = true;
        } else if !pressed {
            self.jump_pending = false;
        }
        self.jump_held = pressed;
    }

    /// Clear the request after a jump fired
    pub fn consume_jump(&mut self) {
        self.jump_pending = false;
    }
}

/// Complete simulation state for one session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Seed this run was generated from
    pub seed: u64,
    pub settings: Settings,
    pub player: Player,
    /// Unordered; the recycler prunes and refills it every tick
    pub platforms: Vec<Platform>,
    /// Cumulative world scroll
    pub camera_y: f32,
    /// Cumulative signed height climbed; never negative
    pub total_height: f32,
    /// Player y at spawn
    pub start_y: f32,
    /// False once the player has fallen out of the world
    pub running: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub input: InputState,
    /// Idle-mode climber memory
    #[serde(default)]
    pub autopilot: Autopilot,
    pub(super) rng: Pcg32,
}

impl WorldState {
    /// Create a new world with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        debug_assert!(settings.min_platforms > 0, "minimum platform window must be positive");

        let mut rng = Pcg32::seed_from_u64(seed);

        let start = Platform::new(
            settings.viewport_width / 2.0 - settings.start_platform_width / 2.0,
            settings.viewport_height - settings.start_platform_offset,
            settings.start_platform_width,
            settings.platform_height,
        );

        let mut platforms = Vec::with_capacity(settings.initial_platform_count.max(1));
        platforms.push(start);
        for i in 1..settings.initial_platform_count {
            let y = start.top() - i as f32 * settings.initial_platform_spacing;
            platforms.push(generate_platform(&mut rng, &settings, y));
        }

        // Sprite stands on the spawn platform; the hitbox settles onto it
        // within the first few ticks.
        let spawn_x = (start.pos.x + start.width / 2.0 - settings.player_size / 2.0)
            .clamp(0.0, settings.max_player_x());
        let spawn_y = start.top() - settings.player_size;
        let player = Player::new(Vec2::new(spawn_x, spawn_y));

        Self {
            seed,
            settings,
            player,
            platforms,
            camera_y: 0.0,
            total_height: 0.0,
            start_y: spawn_y,
            running: true,
            time_ticks: 0,
            input: InputState::default(),
            autopilot: Autopilot::default(),
            rng,
        }
    }

    /// Start a fresh run with the same settings and a new random layout
    pub fn reset(&mut self) {
        let seed = self.rng.random();
        let settings = self.settings.clone();
        *self = Self::new(settings, seed);
        log::info!("World reset with seed: {seed}");
    }

    /// Shift the whole world vertically by `delta` (positive moves things down
    /// the screen, i.e. the camera rises). Player x is never touched.
    pub fn scroll(&mut self, delta: f32) {
        self.player.pos.y += delta;
        self.camera_y += delta;
        self.total_height += delta;
        for platform in &mut self.platforms {
            platform.pos.y += delta;
        }
    }

    /// y of the highest (smallest y) platform, if any
    pub fn highest_platform_y(&self) -> Option<f32> {
        self.platforms.iter().map(|p| p.pos.y).reduce(f32::min)
    }
}
