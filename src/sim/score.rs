//! Score and altitude bands
//!
//! Both are derived from the world every tick and never fed back into physics.

use serde::{Deserialize, Serialize};

use super::state::WorldState;

/// Score derived from cumulative climb plus the player's offset from spawn
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Score(pub f32);

impl Score {
    pub fn from_world(state: &WorldState) -> Self {
        let raw = state.total_height + (state.start_y - state.player.pos.y);
        Score(raw.max(0.0) / state.settings.score_divisor)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Fixed-precision display text
    pub fn text(self) -> String {
        format!("{:.1}", self.0)
    }

    pub fn band(self, thresholds: &[f32; 4]) -> AltitudeBand {
        AltitudeBand::classify(self.0, thresholds)
    }
}

/// Cosmetic altitude range, used by renderers to pick a background
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum AltitudeBand {
    #[default]
    Ground,
    Forest,
    Clouds,
    Stratosphere,
    Space,
}

impl AltitudeBand {
    pub const ALL: [AltitudeBand; 5] = [
        AltitudeBand::Ground,
        AltitudeBand::Forest,
        AltitudeBand::Clouds,
        AltitudeBand::Stratosphere,
        AltitudeBand::Space,
    ];

    /// Step function: a score at or above a threshold enters the next band
    pub fn classify(score: f32, thresholds: &[f32; 4]) -> Self {
        let index = thresholds.iter().take_while(|&&t| score >= t).count();
        Self::ALL[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AltitudeBand::Ground => "Ground",
            AltitudeBand::Forest => "Forest",
            AltitudeBand::Clouds => "Clouds",
            AltitudeBand::Stratosphere => "Stratosphere",
            AltitudeBand::Space => "Space",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BAND_THRESHOLDS;
    use crate::settings::Settings;

    #[test]
    fn test_score_from_world() {
        let mut state = WorldState::new(
            Settings {
                initial_platform_count: 1,
                ..Settings::default()
            },
            1,
        );
        assert_eq!(Score::from_world(&state), Score(0.0));

        // Standing on the spawn platform sits below the spawn stance
        state.player.pos.y = state.start_y + 56.0;
        assert_eq!(Score::from_world(&state), Score(0.0));

        state.total_height = 1256.0;
        assert_eq!(Score::from_world(&state).value(), 12.0);
        assert_eq!(Score::from_world(&state).text(), "12.0");
    }

    #[test]
    fn test_score_text_precision() {
        assert_eq!(Score(7.46).text(), "7.5");
        assert_eq!(Score(0.0).text(), "0.0");
    }

    #[test]
    fn test_band_boundaries() {
        let t = &BAND_THRESHOLDS;
        assert_eq!(AltitudeBand::classify(0.0, t), AltitudeBand::Ground);
        assert_eq!(AltitudeBand::classify(9.99, t), AltitudeBand::Ground);
        assert_eq!(AltitudeBand::classify(10.0, t), AltitudeBand::Forest);
        assert_eq!(AltitudeBand::classify(49.9, t), AltitudeBand::Forest);
        assert_eq!(AltitudeBand::classify(50.0, t), AltitudeBand::Clouds);
        assert_eq!(AltitudeBand::classify(80.0, t), AltitudeBand::Stratosphere);
        assert_eq!(AltitudeBand::classify(500.0, t), AltitudeBand::Space);
        assert_eq!(AltitudeBand::classify(1.0e9, t), AltitudeBand::Space);
    }

    #[test]
    fn test_bands_ordered() {
        let t = &BAND_THRESHOLDS;
        let mut last = AltitudeBand::Ground;
        for i in 0..1000 {
            let band = Score(i as f32).band(t);
            assert!(band >= last);
            last = band;
        }
    }
}
