//! Landing detection and jump resolution
//!
//! Platforms are one-way floors: the player passes through them going up and
//! can only land while falling. Landing uses a sweep between the previous and
//! current hitbox bottom so fast falls cannot tunnel through thin platforms.

use super::state::{InputState, Platform, Player};
use crate::settings::Settings;

/// Check whether `player` lands on `platform` this tick
///
/// Requires the player to be falling, the hitbox bottom to have crossed the
/// platform top between `prev_y` and `y`, and horizontal overlap.
pub fn lands_on(player: &Player, platform: &Platform, hitbox: f32) -> bool {
    let falling = player.vy > 0.0;

    let crossed = player.prev_y + hitbox <= platform.top() && player.pos.y + hitbox >= platform.top();

    let within_x = player.pos.x + hitbox > platform.pos.x && player.pos.x < platform.right();

    falling && crossed && within_x
}

/// Snap the player onto any platform it landed on this tick.
///
/// Every platform is tested against the motion the player had entering this
/// stage, in collection order, and the last one that qualifies wins. Returns
/// its index.
pub fn resolve_landing(player: &mut Player, platforms: &[Platform], hitbox: f32) -> Option<usize> {
    let motion = player.clone();
    let mut landed = None;
    for (i, platform) in platforms.iter().enumerate() {
        if lands_on(&motion, platform, hitbox) {
            player.pos.y = platform.top() - hitbox;
            player.vy = 0.0;
            player.on_ground = true;
            player.jump_count = 0;
            landed = Some(i);
        }
    }
    landed
}

/// Fire a pending jump if any jumps remain. Returns true if a jump fired.
///
/// An unfired request stays pending (while the key is held) so it fires on
/// the first tick after the next landing.
pub fn resolve_jump(player: &mut Player, input: &mut InputState, settings: &Settings) -> bool {
    if !input.jump_pending || player.jump_count >= settings.max_jumps {
        return false;
    }
    player.vy = settings.jump_power;
    player.jump_count += 1;
    player.on_ground = false;
    input.consume_jump();
    true
}
