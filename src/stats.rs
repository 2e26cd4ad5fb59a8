//! Player statistics
//!
//! Win/loss counters, streaks and the time-trial record, persisted as a
//! JSON file in the platform data directory. Stats update exactly once per
//! concluded game.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lifetime counters for one player
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    pub time_trial_best: usize,
}

impl PlayerStats {
    /// Record a concluded standard game
    pub fn record_game(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Record a finished time trial; returns true on a new record
    pub fn record_time_trial(&mut self, score: usize) -> bool {
        if score > self.time_trial_best {
            self.time_trial_best = score;
            true
        } else {
            false
        }
    }

    /// Percentage of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Storage for player statistics
pub trait StatsStore {
    /// Load stats, falling back to zeroed counters
    fn load(&self) -> PlayerStats;

    /// Persist stats
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be written.
    fn save(&self, stats: &PlayerStats) -> io::Result<()>;
}

/// JSON file store in the platform data directory
#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    #[must_use]
    pub fn new() -> Self {
        let path = if let Some(dirs) = ProjectDirs::from("", "", "wordle-infinito") {
            dirs.data_local_dir().join("stats.json")
        } else {
            PathBuf::from("wordle_infinito_stats.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileStatsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsStore for FileStatsStore {
    fn load(&self) -> PlayerStats {
        if let Ok(bytes) = fs::read(&self.path)
            && let Ok(stats) = serde_json::from_slice::<PlayerStats>(&bytes)
        {
            return stats;
        }
        PlayerStats::default()
    }

    fn save(&self, stats: &PlayerStats) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(stats)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fresh_stats_are_zeroed() {
        let stats = PlayerStats::default();
        assert_eq!(stats.games_played, 0);
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wins_extend_the_streak() {
        let mut stats = PlayerStats::default();
        stats.record_game(true);
        stats.record_game(true);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = PlayerStats::default();
        stats.record_game(true);
        stats.record_game(true);
        stats.record_game(false);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.games_won, 2);
    }

    #[test]
    fn win_rate_percentage() {
        let mut stats = PlayerStats::default();
        stats.record_game(true);
        stats.record_game(false);
        stats.record_game(true);
        stats.record_game(false);

        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn time_trial_record_only_improves() {
        let mut stats = PlayerStats::default();
        assert!(stats.record_time_trial(7));
        assert!(!stats.record_time_trial(5));
        assert!(stats.record_time_trial(9));
        assert_eq!(stats.time_trial_best, 9);
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileStatsStore::with_path(dir.path().join("stats.json"));

        let mut stats = PlayerStats::default();
        stats.record_game(true);
        stats.record_time_trial(12);

        store.save(&stats).unwrap();
        assert_eq!(store.load(), stats);
    }

    #[test]
    fn missing_or_corrupt_file_loads_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let store = FileStatsStore::with_path(&path);

        assert_eq!(store.load(), PlayerStats::default());

        fs::write(&path, b"not json").unwrap();
        assert_eq!(store.load(), PlayerStats::default());
    }
}
