//! High score tracking
//!
//! Lives for one session only. Tracks the best score plus the top 10 runs.

use crate::settings::GameMode;

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq)]
pub struct HighScoreEntry {
    /// Final score
    pub score: i64,
    /// Mode the run was played in
    pub mode: GameMode,
    /// Unix timestamp (ms) when the run ended
    pub timestamp: f64,
}

/// Session leaderboard
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    /// Best score seen at any game over (starts at 0, never decreases)
    best: i64,
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            best: 0,
            entries: Vec::new(),
        }
    }

    /// The high score shown in the HUD
    pub fn best(&self) -> i64 {
        self.best
    }

    /// Check if a score would raise the high score
    pub fn beats_best(&self, score: i64) -> bool {
        score > self.best
    }

    /// Get the leaderboard rank a score would achieve (1-indexed)
    pub fn potential_rank(&self, score: i64) -> Option<usize> {
        let rank = self.entries.iter().position(|e| score > e.score);
        match rank {
            Some(i) => Some(i + 1),
            None if self.entries.len() < MAX_HIGH_SCORES => Some(self.entries.len() + 1),
            None => None,
        }
    }

    /// Record a finished run.
    ///
    /// Returns true if the run set a new high score.
    pub fn record(&mut self, score: i64, mode: GameMode, timestamp: f64) -> bool {
        if let Some(pos) = self.potential_rank(score) {
            self.entries.insert(
                pos - 1,
                HighScoreEntry {
                    score,
                    mode,
                    timestamp,
                },
            );
            self.entries.truncate(MAX_HIGH_SCORES);
        }

        if self.beats_best(score) {
            log::info!("New high score: {} (was {})", score, self.best);
            self.best = score;
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_only_rises() {
        let mut hs = HighScores::new();
        assert!(hs.record(5, GameMode::Classic, 0.0));
        assert_eq!(hs.best(), 5);
        assert!(!hs.record(3, GameMode::Classic, 1.0));
        assert!(!hs.record(5, GameMode::Classic, 2.0));
        assert_eq!(hs.best(), 5);
        assert!(hs.record(9, GameMode::Arcade, 3.0));
        assert_eq!(hs.best(), 9);
    }

    #[test]
    fn test_negative_run_keeps_zero_best() {
        let mut hs = HighScores::new();
        assert!(!hs.record(-4, GameMode::Classic, 0.0));
        assert_eq!(hs.best(), 0);
        assert_eq!(hs.entries.len(), 1);
    }

    #[test]
    fn test_leaderboard_sorted_and_trimmed() {
        let mut hs = HighScores::new();
        for score in 0..15 {
            hs.record(score, GameMode::Classic, score as f64);
        }
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries[0].score, 14);
        assert_eq!(hs.entries.last().map(|e| e.score), Some(5));
        assert_eq!(hs.potential_rank(2), None);
        assert_eq!(hs.potential_rank(100), Some(1));
    }
}
