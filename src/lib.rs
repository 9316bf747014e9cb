//! Sky Climb - simulation core for an endless vertical climbing platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, landings, camera scroll, platform recycling, score)
//! - `settings`: Data-driven tuning and camera policy selection
//! - `highscores`: Session leaderboard of finished runs
//!
//! Drawing, asset loading and keyboard capture live outside this crate. A
//! frontend owns a [`sim::WorldState`], feeds it a [`sim::TickInput`] once per
//! display refresh and draws the returned [`sim::RenderSnapshot`].

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::{HighScores, RunRecord};
pub use settings::Settings;

/// Game configuration constants (observed defaults; see [`Settings`] for overrides)
pub mod consts {
    /// Viewport dimensions
    pub const GAME_WIDTH: f32 = 360.0;
    pub const GAME_HEIGHT: f32 = 640.0;

    /// Visual size of the player sprite (also bounds horizontal movement)
    pub const PLAYER_SIZE: f32 = 80.0;
    /// Collision extent of the player, measured from its position
    pub const PLAYER_HITBOX: f32 = 24.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_POWER: f32 = -10.0;
    /// Horizontal displacement per tick while a direction is held
    pub const MOVE_SPEED: f32 = 4.0;
    /// Ground jump plus one mid-air jump
    pub const MAX_JUMPS: u8 = 2;

    /// Generated platform size
    pub const PLATFORM_WIDTH: f32 = 40.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;

    /// Spawn platform: wider, centered, lifted off the bottom edge
    pub const START_PLATFORM_WIDTH: f32 = 80.0;
    pub const START_PLATFORM_OFFSET: f32 = 40.0;

    /// Initial layout above the spawn platform
    pub const INITIAL_PLATFORM_COUNT: usize = 1000;
    pub const INITIAL_PLATFORM_SPACING: f32 = 100.0;

    /// Recycler keeps at least this many platforms alive
    pub const MIN_PLATFORMS: usize = 12;
    /// Vertical distance between refilled platforms
    pub const PLATFORM_GAP: f32 = 60.0;
    /// How far below the viewport platforms survive before pruning
    pub const RECYCLE_MARGIN: f32 = 20.0;
    /// How far below the viewport the player may fall before the run ends
    pub const FALL_MARGIN: f32 = 0.0;

    /// World units per score point
    pub const SCORE_DIVISOR: f32 = 100.0;
    /// Score thresholds separating the five altitude bands
    pub const BAND_THRESHOLDS: [f32; 4] = [10.0, 50.0, 80.0, 500.0];

    /// Dead-zone camera boundaries as fractions of viewport height
    pub const DEAD_ZONE_TOP: f32 = 0.3;
    pub const DEAD_ZONE_BOTTOM: f32 = 0.7;
}
