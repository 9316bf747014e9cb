//! Per-frame simulation tick
//!
//! Runs the whole pipeline once: integrate, land and jump, scroll the
//! camera, recycle platforms, check for game over, then score.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera;
use super::collision::{resolve_jump, resolve_landing};
use super::physics::integrate;
use super::recycler::recycle;
use super::score::{AltitudeBand, Score};
use super::state::{Platform, Player, PlayerPose, WorldState};

/// Raw key state for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump key is down. The engine fires once per press, not once per tick.
    pub jump: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub player: Player,
    pub pose: PlayerPose,
    /// Top-left of the player sprite (the hitbox is smaller)
    pub sprite_origin: Vec2,
    pub platforms: Vec<Platform>,
    pub camera_y: f32,
    pub total_height: f32,
    pub score: Score,
    pub score_text: String,
    pub band: AltitudeBand,
    /// False once the run is over; drives the game-over overlay
    pub running: bool,
    pub time_ticks: u64,
}

impl RenderSnapshot {
    pub fn capture(state: &WorldState) -> Self {
        let settings = &state.settings;
        let score = Score::from_world(state);
        Self {
            player: state.player.clone(),
            pose: state.player.pose(),
            sprite_origin: state
                .player
                .sprite_origin(settings.player_size, settings.player_hitbox),
            platforms: state.platforms.clone(),
            camera_y: state.camera_y,
            total_height: state.total_height,
            score,
            score_text: score.text(),
            band: score.band(&settings.band_thresholds),
            running: state.running,
            time_ticks: state.time_ticks,
        }
    }
}

/// Advance the world by one tick and return what to draw.
///
/// A finished run is frozen: the state is left untouched until
/// [`WorldState::reset`].
pub fn tick(state: &mut WorldState, input: &TickInput) -> RenderSnapshot {
    if !state.running {
        return RenderSnapshot::capture(state);
    }

    let input = if input.idle_mode {
        let mut pilot = std::mem::take(&mut state.autopilot);
        let planned = pilot.plan(state);
        state.autopilot = pilot;
        planned
    } else {
        input.clone()
    };

    state.time_ticks += 1;
    state.input.observe_jump(input.jump);

    integrate(
        &mut state.player,
        input.move_left,
        input.move_right,
        &state.settings,
    );

    let hitbox = state.settings.player_hitbox;
    if let Some(index) = resolve_landing(&mut state.player, &state.platforms, hitbox) {
        log::trace!("Landed on platform {index} at y={:.1}", state.platforms[index].top());
    }
    if resolve_jump(&mut state.player, &mut state.input, &state.settings) {
        log::trace!("Jump {} of {}", state.player.jump_count, state.settings.max_jumps);
    }

    camera::follow(state);
    recycle(state);

    let fall_limit = state.settings.viewport_height + state.settings.fall_margin;
    if state.player.pos.y > fall_limit {
        state.running = false;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            Score::from_world(state).text()
        );
    }

    RenderSnapshot::capture(state)
}
