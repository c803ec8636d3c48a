use knights_core::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Outcome of one interactive attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Every square visited
    FullTour,
    /// The knight got stuck with squares left over
    Partial,
}

/// Record of a single interactive attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Board width
    pub width: i32,
    /// Board height
    pub height: i32,
    /// Starting square
    pub start: Position,
    /// How the attempt ended
    pub outcome: AttemptOutcome,
    /// Squares visited before the knight got stuck (or all of them)
    pub squares_visited: u32,
    /// Total squares on the board
    pub total_squares: u32,
    /// Attempt duration in seconds
    pub duration_secs: u64,
    /// Unix timestamp when the attempt ended
    pub timestamp: u64,
}

impl AttemptRecord {
    /// Fraction of the board covered, as a percentage
    pub fn coverage(&self) -> f32 {
        self.squares_visited as f32 / self.total_squares as f32 * 100.0
    }
}

/// Attempt history persisted between runs as JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsManager {
    /// All recorded attempts (most recent first)
    pub history: Vec<AttemptRecord>,
}

impl StatsManager {
    /// Get the save file path
    fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("knights_stats.json")
    }

    /// Load stats from file, starting fresh if missing or unreadable
    pub fn load() -> Self {
        match fs::read_to_string(Self::save_path()) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save stats to file
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(Self::save_path(), json);
        }
    }

    /// Record a finished attempt
    pub fn record_attempt(
        &mut self,
        width: i32,
        height: i32,
        start: Position,
        squares_visited: u32,
        total_squares: u32,
        duration_secs: u64,
    ) -> &AttemptRecord {
        let outcome = if squares_visited == total_squares {
            AttemptOutcome::FullTour
        } else {
            AttemptOutcome::Partial
        };
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        self.history.insert(
            0,
            AttemptRecord {
                width,
                height,
                start,
                outcome,
                squares_visited,
                total_squares,
                duration_secs,
                timestamp,
            },
        );
        &self.history[0]
    }

    /// Total recorded attempts
    pub fn total_attempts(&self) -> usize {
        self.history.len()
    }

    /// Attempts that covered the whole board
    pub fn full_tours(&self) -> usize {
        self.history
            .iter()
            .filter(|r| r.outcome == AttemptOutcome::FullTour)
            .count()
    }

    /// Best board coverage over all attempts, as a percentage
    pub fn best_coverage(&self) -> Option<f32> {
        self.history
            .iter()
            .map(|r| r.coverage())
            .max_by(|a, b| a.partial_cmp(b).expect("coverage is never NaN"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_attempt_classifies_outcome() {
        let mut stats = StatsManager::default();
        stats.record_attempt(5, 5, Position::new(1, 1), 25, 25, 60);
        stats.record_attempt(8, 8, Position::new(1, 1), 40, 64, 120);

        assert_eq!(stats.total_attempts(), 2);
        assert_eq!(stats.full_tours(), 1);
        // Most recent first
        assert_eq!(stats.history[0].outcome, AttemptOutcome::Partial);
        assert_eq!(stats.history[1].outcome, AttemptOutcome::FullTour);
    }

    #[test]
    fn test_best_coverage() {
        let mut stats = StatsManager::default();
        assert_eq!(stats.best_coverage(), None);

        stats.record_attempt(8, 8, Position::new(1, 1), 16, 64, 30);
        stats.record_attempt(8, 8, Position::new(4, 4), 48, 64, 90);
        let best = stats.best_coverage().unwrap();
        assert!((best - 75.0).abs() < f32::EPSILON);
    }
}
