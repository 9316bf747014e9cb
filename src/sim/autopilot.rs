//! Idle/demo mode - a simple climber that plays the game
//!
//! While standing, the autopilot picks the lowest platform above it that a
//! double jump can reach and commits to it until the next landing. It walks
//! until the target is within what one flight can cover horizontally, jumps,
//! steers toward the target in the air and spends the mid-air jump at the
//! apex if the feet are still below the target's top.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Platform, WorldState};
use super::tick::TickInput;
use crate::settings::Settings;

/// How close (in world units) a platform must stay to the remembered target
const TARGET_TOLERANCE: f32 = 1.0;
/// Feet may start this far above a target's top and still want the air jump
const AIR_JUMP_SLACK: f32 = 2.0;
/// Flight simulation cutoff
const MAX_FLIGHT_TICKS: u32 = 2000;

/// Autopilot memory carried between ticks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Autopilot {
    /// Committed target as (x, y - camera_y). Camera scrolls move a
    /// platform's y and `camera_y` together, so the key survives them.
    target: Option<Vec2>,
    /// Player was standing when the previous tick was planned
    was_grounded: bool,
}

impl Autopilot {
    /// Committed target, if it is still in the world
    pub fn target<'a>(&self, state: &'a WorldState) -> Option<&'a Platform> {
        let key = self.target?;
        state.platforms.iter().find(|p| {
            p.pos.x == key.x && (p.top() - state.camera_y - key.y).abs() < TARGET_TOLERANCE
        })
    }

    /// Input for the current tick. Updates the target while standing.
    pub fn plan(&mut self, state: &WorldState) -> TickInput {
        let player = &state.player;
        let settings = &state.settings;

        if player.on_ground || self.target.is_none() {
            self.target =
                target_platform(state).map(|p| Vec2::new(p.pos.x, p.top() - state.camera_y));
        }
        let walked_off = self.was_grounded && !player.on_ground && player.jump_count == 0;
        self.was_grounded = player.on_ground;

        let Some(target) = self.target(state) else {
            self.target = None;
            return TickInput::default();
        };

        let hitbox = settings.player_hitbox;
        let goal_x = (target.pos.x + target.width / 2.0 - hitbox / 2.0)
            .clamp(0.0, settings.max_player_x());
        let offset = goal_x - player.pos.x;
        // Hold still while dropping onto the spawn platform
        let steering = player.on_ground || player.jump_count > 0 || walked_off;
        let move_left = steering && offset <= -settings.move_speed;
        let move_right = steering && offset >= settings.move_speed;

        let feet = player.pos.y + hitbox;
        let jump = if player.on_ground {
            flight_ticks(settings, feet - target.top())
                .is_some_and(|t| offset.abs() <= t as f32 * settings.move_speed)
        } else {
            (player.jump_count > 0 || walked_off)
                && player.jump_count < settings.max_jumps
                && player.vy >= 0.0
                && feet > target.top() - AIR_JUMP_SLACK
        };

        TickInput {
            move_left,
            move_right,
            jump,
            idle_mode: false,
        }
    }
}

/// Ticks from a ground jump until the feet come back down to a platform
/// `rise` above them, spending further jumps at each apex that falls short.
/// `None` if the jumps run out below it.
pub fn flight_ticks(settings: &Settings, rise: f32) -> Option<u32> {
    if settings.gravity <= 0.0 || settings.max_jumps == 0 {
        return None;
    }

    let mut vy = settings.jump_power;
    let mut height = 0.0_f32;
    let mut apex = 0.0_f32;
    let mut jumps = 1;
    for t in 1..=MAX_FLIGHT_TICKS {
        vy += settings.gravity;
        height -= vy;
        apex = apex.max(height);
        if vy > 0.0 {
            if apex < rise {
                if jumps >= settings.max_jumps {
                    return None;
                }
                vy = settings.jump_power;
                jumps += 1;
            } else if height <= rise {
                return Some(t);
            }
        }
    }
    None
}

/// Lowest platform above the player that a double jump reaches and the
/// hitbox can overlap, nearest horizontally on ties
pub fn target_platform(state: &WorldState) -> Option<&Platform> {
    let settings = &state.settings;
    let hitbox = settings.player_hitbox;
    let feet = state.player.pos.y + hitbox;
    let center = state.player.pos.x + hitbox / 2.0;
    let max_x = settings.max_player_x();
    let dx = |p: &Platform| (p.pos.x + p.width / 2.0 - center).abs();

    state
        .platforms
        .iter()
        .filter(|p| p.top() < feet - 1.0)
        .filter(|p| p.pos.x < max_x + hitbox && p.right() > 0.0)
        .filter(|p| flight_ticks(settings, feet - p.top()).is_some())
        .max_by(|a, b| a.top().total_cmp(&b.top()).then(dx(b).total_cmp(&dx(a))))
}
