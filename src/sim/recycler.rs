//! Platform recycling
//!
//! Keeps a fixed-size lookahead of platforms above the player: platforms that
//! scrolled far enough below the viewport are dropped, then new ones are
//! stacked above the highest survivor until the window is full again.

use super::generator::generate_platform;
use super::state::WorldState;

/// Prune and refill the platform window. Returns how many platforms were added.
pub fn recycle(state: &mut WorldState) -> usize {
    let WorldState {
        settings,
        platforms,
        rng,
        ..
    } = state;

    let limit = settings.viewport_height + settings.recycle_margin;
    platforms.retain(|p| p.pos.y <= limit);

    let mut added = 0;
    while platforms.len() < settings.min_platforms {
        // An emptied window restarts from the bottom edge
        let highest = platforms
            .iter()
            .map(|p| p.pos.y)
            .reduce(f32::min)
            .unwrap_or(settings.viewport_height);
        platforms.push(generate_platform(&mut *rng, settings, highest - settings.platform_gap));
        added += 1;
    }
    added
}
