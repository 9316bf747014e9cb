//! Session leaderboard
//!
//! Tracks the best finished runs of the current process, top 10 by score.
//! Nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{AltitudeBand, RenderSnapshot, Score};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Best score reached during the run
    pub score: f32,
    /// Band at that best score
    pub band: AltitudeBand,
    /// Ticks survived
    pub ticks: u64,
    /// Layout seed, enough to replay the run with the same inputs
    pub seed: u64,
}

/// Follows one run tick by tick and remembers its best moment.
///
/// The score on the game-over frame is measured after the fall, so the
/// leaderboard records the peak instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunRecord {
    peak: Score,
    band: AltitudeBand,
    ticks: u64,
}

impl RunRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame of the run
    pub fn observe(&mut self, snapshot: &RenderSnapshot) {
        if snapshot.score.value() > self.peak.value() {
            self.peak = snapshot.score;
            self.band = snapshot.band;
        }
        self.ticks = snapshot.time_ticks;
    }

    pub fn peak(&self) -> Score {
        self.peak
    }

    pub fn band(&self) -> AltitudeBand {
        self.band
    }

    pub fn into_entry(self, seed: u64) -> HighScoreEntry {
        HighScoreEntry {
            score: self.peak.value(),
            band: self.band,
            ticks: self.ticks,
            seed,
        }
    }
}

/// High score leaderboard, sorted by descending score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: f32) -> bool {
        if score <= 0.0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: f32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self.potential_rank(entry.score)?;
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        log::debug!("New high score at rank {rank}");
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<f32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::WorldState;

    fn entry(score: f32) -> HighScoreEntry {
        HighScoreEntry {
            score,
            band: AltitudeBand::classify(score, &crate::consts::BAND_THRESHOLDS),
            ticks: 100,
            seed: 0,
        }
    }

    #[test]
    fn test_zero_score_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(entry(0.0)), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_insert() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(entry(5.0)), Some(1));
        assert_eq!(scores.add_score(entry(12.5)), Some(1));
        assert_eq!(scores.add_score(entry(7.0)), Some(2));
        let values: Vec<f32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![12.5, 7.0, 5.0]);
        assert_eq!(scores.top_score(), Some(12.5));
    }

    #[test]
    fn test_full_board_truncates() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES {
            scores.add_score(entry(i as f32));
        }
        assert!(!scores.qualifies(1.0));
        assert_eq!(scores.potential_rank(0.5), None);
        assert_eq!(scores.add_score(entry(100.0)), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(2.0));
    }

    #[test]
    fn test_equal_score_ranks_after_existing() {
        let mut scores = HighScores::new();
        scores.add_score(entry(3.0));
        assert_eq!(scores.potential_rank(3.0), Some(2));
    }

    #[test]
    fn test_run_record_keeps_peak_through_the_fall() {
        let mut state = WorldState::new(
            Settings {
                initial_platform_count: 20,
                ..Settings::default()
            },
            5,
        );
        let mut record = RunRecord::new();

        // Climbed 1200 units, well into the Forest band
        state.total_height = 1200.0;
        state.camera_y = 1200.0;
        record.observe(&RenderSnapshot::capture(&state));
        assert_eq!(record.peak(), Score(12.0));

        // Then the fall: falling below the start height scores zero
        state.player.pos.y = 1900.0;
        state.time_ticks = 250;
        state.running = false;
        let last = RenderSnapshot::capture(&state);
        record.observe(&last);
        assert_eq!(last.score.value(), 0.0);

        let entry = record.into_entry(state.seed);
        assert_eq!(entry.score, 12.0);
        assert_eq!(entry.band, AltitudeBand::Forest);
        assert_eq!(entry.ticks, 250);
        assert_eq!(entry.seed, 5);

        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(entry), Some(1));
    }

    #[test]
    fn test_run_record_without_climb_does_not_qualify() {
        let state = WorldState::new(Settings::default(), 5);
        let mut record = RunRecord::new();
        record.observe(&RenderSnapshot::capture(&state));
        assert_eq!(record.band(), AltitudeBand::Ground);
        assert!(!HighScores::new().qualifies(record.into_entry(5).score));
    }
}
