//! Camera scroll policies
//!
//! The camera never moves on its own; it converts player position into a
//! world scroll. A positive delta moves the player and every platform down
//! the screen by the same amount and adds to the climbed height.

use serde::{Deserialize, Serialize};

use super::state::WorldState;
use crate::consts::{DEAD_ZONE_BOTTOM, DEAD_ZONE_TOP};

/// How the camera follows the player
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum CameraPolicy {
    /// Pin the player at the viewport midpoint while climbing; never scroll down
    #[default]
    Anchor,
    /// Scroll only when the player leaves the band between the two fractions
    /// of viewport height. Scrolls down to follow a fall, but never below the
    /// spawn floor.
    DeadZone { top_fraction: f32, bottom_fraction: f32 },
}

impl CameraPolicy {
    pub fn dead_zone() -> Self {
        CameraPolicy::DeadZone {
            top_fraction: DEAD_ZONE_TOP,
            bottom_fraction: DEAD_ZONE_BOTTOM,
        }
    }

    /// Scroll delta for the current player position (0.0 for no scroll)
    pub fn scroll(&self, state: &WorldState) -> f32 {
        let height = state.settings.viewport_height;
        let y = state.player.pos.y;

        match *self {
            CameraPolicy::Anchor => {
                let anchor = height / 2.0;
                if y < anchor { anchor - y } else { 0.0 }
            }
            CameraPolicy::DeadZone {
                top_fraction,
                bottom_fraction,
            } => {
                let top = height * top_fraction;
                let bottom = height * bottom_fraction;
                if y < top {
                    top - y
                } else if y > bottom && state.total_height > 0.0 {
                    let diff = bottom - y;
                    let limited = diff.max(-state.total_height);
                    if limited > diff {
                        log::debug!("Camera clamped at spawn floor ({diff:.1} -> {limited:.1})");
                    }
                    limited
                } else {
                    0.0
                }
            }
        }
    }
}

/// Apply the configured policy to the world. Returns the delta applied.
pub fn follow(state: &mut WorldState) -> f32 {
    let delta = state.settings.camera.scroll(state);
    if delta != 0.0 {
        state.scroll(delta);
        // Guard against float drift below the floor
        if state.total_height < 0.0 {
            state.total_height = 0.0;
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn world(camera: CameraPolicy) -> WorldState {
        let settings = Settings {
            camera,
            initial_platform_count: 5,
            ..Settings::default()
        };
        WorldState::new(settings, 11)
    }

    #[test]
    fn test_anchor_scrolls_up() {
        let mut state = world(CameraPolicy::Anchor);
        let platform_before = state.platforms[0].pos.y;
        state.player.pos.y = 300.0;

        assert_eq!(follow(&mut state), 20.0);
        assert_eq!(state.player.pos.y, 320.0);
        assert_eq!(state.camera_y, 20.0);
        assert_eq!(state.total_height, 20.0);
        assert_eq!(state.platforms[0].pos.y, platform_before + 20.0);
    }

    #[test]
    fn test_anchor_never_scrolls_down() {
        let mut state = world(CameraPolicy::Anchor);
        state.total_height = 100.0;
        state.player.pos.y = 600.0;
        assert_eq!(follow(&mut state), 0.0);
        assert_eq!(state.total_height, 100.0);
    }

    #[test]
    fn test_dead_zone_inside_band_is_still() {
        let mut state = world(CameraPolicy::dead_zone());
        state.total_height = 50.0;
        state.player.pos.y = 400.0;
        assert_eq!(follow(&mut state), 0.0);
    }

    #[test]
    fn test_dead_zone_scrolls_up_past_top() {
        let mut state = world(CameraPolicy::dead_zone());
        state.player.pos.y = 150.0;
        let top = state.settings.viewport_height * DEAD_ZONE_TOP;
        assert_eq!(follow(&mut state), top - 150.0);
        assert!((state.player.pos.y - top).abs() < 1e-4);
    }

    #[test]
    fn test_dead_zone_follows_fall() {
        let mut state = world(CameraPolicy::dead_zone());
        state.total_height = 100.0;
        state.camera_y = 100.0;
        state.player.pos.y = 458.0;
        assert_eq!(follow(&mut state), -10.0);
        assert_eq!(state.player.pos.y, 448.0);
        assert_eq!(state.total_height, 90.0);
        assert_eq!(state.camera_y, 90.0);
    }

    #[test]
    fn test_dead_zone_floor_clamp() {
        let mut state = world(CameraPolicy::dead_zone());
        state.total_height = 5.0;
        state.camera_y = 5.0;
        // bottom boundary is 448; this asks for a shift of -8
        state.player.pos.y = 456.0;
        let platform_before = state.platforms[1].pos.y;

        assert_eq!(state.settings.camera.scroll(&state), -5.0);
        assert_eq!(follow(&mut state), -5.0);
        assert_eq!(state.total_height, 0.0);
        assert_eq!(state.player.pos.y, 451.0);
        assert_eq!(state.platforms[1].pos.y, platform_before - 5.0);
    }

    #[test]
    fn test_dead_zone_at_floor_is_still() {
        let mut state = world(CameraPolicy::dead_zone());
        state.player.pos.y = 600.0;
        assert_eq!(follow(&mut state), 0.0);
        assert_eq!(state.total_height, 0.0);
    }
}
