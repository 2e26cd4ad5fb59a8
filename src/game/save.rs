//! Saved in-progress games
//!
//! A save is a replayable snapshot: the solution words, the shared guess
//! stream, and the budget the game started with. Restoring rebuilds the
//! game by replaying the stream, so derived state (lives, completion) can
//! never drift from the rules. The save lives as a JSON file in the
//! platform data directory and is cleared when a game concludes.

use super::session::{Game, GameError, GuessError};
use crate::core::{Word, WordError};
use crate::dictionary::GameConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Replayable snapshot of an in-progress game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    solutions: Vec<String>,
    guesses: Vec<String>,
    extra_attempts: usize,
    initial_lives: usize,
}

/// Error type for corrupt or stale saves
#[derive(Debug)]
pub enum RestoreError {
    InvalidWord(WordError),
    Setup(GameError),
    Replay(GuessError),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Saved game holds an invalid word: {e}"),
            Self::Setup(e) => write!(f, "Saved game setup is invalid: {e}"),
            Self::Replay(e) => write!(f, "Saved game could not be replayed: {e}"),
        }
    }
}

impl std::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::Setup(e) => Some(e),
            Self::Replay(e) => Some(e),
        }
    }
}

impl SavedGame {
    /// Snapshot a running game
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        Self {
            solutions: game
                .boards()
                .iter()
                .map(|b| b.solution().text().to_string())
                .collect(),
            guesses: game.history().iter().map(|w| w.text().to_string()).collect(),
            extra_attempts: game.max_attempts() - game.boards().len(),
            initial_lives: game.initial_lives(),
        }
    }

    /// Rebuild the game by replaying the guess stream
    ///
    /// # Errors
    /// Returns `RestoreError` if any stored word fails validation, the
    /// setup is inconsistent, or a replayed guess is rejected.
    pub fn restore(&self) -> Result<Game, RestoreError> {
        let solutions = self
            .solutions
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RestoreError::InvalidWord)?;

        let mut game = Game::new(
            solutions,
            GameConfig {
                extra_attempts: self.extra_attempts,
                initial_lives: self.initial_lives,
            },
        )
        .map_err(RestoreError::Setup)?;

        for text in &self.guesses {
            let guess = Word::new(text).map_err(RestoreError::InvalidWord)?;
            game.submit(&guess).map_err(RestoreError::Replay)?;
        }

        Ok(game)
    }
}

/// Storage for the single in-progress game
pub trait SaveStore {
    /// Load the saved game, if one exists and parses
    fn load(&self) -> Option<SavedGame>;

    /// Persist a snapshot
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be written.
    fn save(&self, saved: &SavedGame) -> io::Result<()>;

    /// Delete the save; absent files are not an error
    ///
    /// # Errors
    /// Returns an I/O error if deletion fails for another reason.
    fn clear(&self) -> io::Result<()>;
}

/// JSON file store in the platform data directory
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    #[must_use]
    pub fn new() -> Self {
        let path = if let Some(dirs) = ProjectDirs::from("", "", "wordle-infinito") {
            dirs.data_local_dir().join("current_game.json")
        } else {
            PathBuf::from("wordle_infinito_game.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileSaveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveStore for FileSaveStore {
    fn load(&self) -> Option<SavedGame> {
        let bytes = fs::read(&self.path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    fn save(&self, saved: &SavedGame) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(saved)?;
        fs::write(&self.path, data)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
