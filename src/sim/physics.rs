//! Player integration: horizontal input, gravity and position

use super::state::Player;
use crate::settings::Settings;

/// Advance the player one tick from horizontal input and gravity.
///
/// Landing is re-earned every tick, so `on_ground` starts out false. Both
/// directions held at once cancel out. There is no terminal velocity.
pub fn integrate(player: &mut Player, move_left: bool, move_right: bool, settings: &Settings) {
    player.on_ground = false;

    if move_left {
        player.pos.x -= settings.move_speed;
    }
    if move_right {
        player.pos.x += settings.move_speed;
    }
    player.pos.x = player.pos.x.clamp(0.0, settings.max_player_x());

    // Must be taken before gravity so the landing sweep sees the whole step
    player.prev_y = player.pos.y;
    player.vy += settings.gravity;
    player.pos.y += player.vy;
}
