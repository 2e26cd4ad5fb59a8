//! Per-length dictionaries and game configuration
//!
//! For each supported word length there is a list of common solution words,
//! a larger accepted-guess list, and a per-length attempt/lives budget.
//! Lists are embedded at build time; solutions are drawn by uniform
//! sampling without replacement.

mod embedded;
pub mod loader;

use crate::core::Word;
use loader::words_from_slice;
use rand::seq::IndexedRandom;
use std::fmt;

/// Word lengths with an embedded dictionary
pub const AVAILABLE_LENGTHS: &[usize] = &[2, 3, 4, 5, 6];

/// Per-length gameplay budget
///
/// `extra_attempts` is added to the board count to form the shared attempt
/// budget; `initial_lives` is the informational miss counter shown to the
/// player. Shorter words get more slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub extra_attempts: usize,
    pub initial_lives: usize,
}

/// Error type for dictionary lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    UnsupportedLength(usize),
    NotEnoughWords { requested: usize, available: usize },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(len) => {
                write!(f, "No dictionary for {len}-letter words")
            }
            Self::NotEnoughWords {
                requested,
                available,
            } => write!(
                f,
                "Requested {requested} solution words but the pool has {available}"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Word lists and config for one word length
#[derive(Debug, Clone)]
pub struct Dictionary {
    length: usize,
    common: Vec<Word>,
    accepted: Vec<Word>,
    config: GameConfig,
}

impl Dictionary {
    /// Load the dictionary for a word length
    ///
    /// # Errors
    /// Returns `DictionaryError::UnsupportedLength` if no word list exists
    /// for the requested length.
    pub fn for_length(length: usize) -> Result<Self, DictionaryError> {
        let (common, accepted) = match length {
            2 => (embedded::COMMON_2, embedded::ACCEPTED_2),
            3 => (embedded::COMMON_3, embedded::ACCEPTED_3),
            4 => (embedded::COMMON_4, embedded::ACCEPTED_4),
            5 => (embedded::COMMON_5, embedded::ACCEPTED_5),
            6 => (embedded::COMMON_6, embedded::ACCEPTED_6),
            other => return Err(DictionaryError::UnsupportedLength(other)),
        };

        Ok(Self {
            length,
            common: words_from_slice(common),
            accepted: words_from_slice(accepted),
            config: config_for_length(length)
                .ok_or(DictionaryError::UnsupportedLength(length))?,
        })
    }

    /// Word length this dictionary covers
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Common solution words
    #[must_use]
    pub fn common(&self) -> &[Word] {
        &self.common
    }

    /// All accepted guess words (superset of the common list)
    #[must_use]
    pub fn accepted(&self) -> &[Word] {
        &self.accepted
    }

    /// Gameplay budget for this word length
    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Check whether a word may be submitted as a guess
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Draw distinct solution words by uniform sampling without replacement
    ///
    /// With `rare` set, solutions come from the full accepted list instead
    /// of the common list.
    ///
    /// # Errors
    /// Returns `DictionaryError::NotEnoughWords` if the pool is smaller than
    /// the requested count.
    pub fn random_solutions(&self, count: usize, rare: bool) -> Result<Vec<Word>, DictionaryError> {
        let pool: &[Word] = if rare { &self.accepted } else { &self.common };

        if count > pool.len() {
            return Err(DictionaryError::NotEnoughWords {
                requested: count,
                available: pool.len(),
            });
        }

        let mut rng = rand::rng();
        Ok(pool.choose_multiple(&mut rng, count).cloned().collect())
    }
}

/// Attempt/lives budget per word length
///
/// The table mirrors the tuning of the original game: shorter words leave
/// more room for error.
#[must_use]
pub const fn config_for_length(length: usize) -> Option<GameConfig> {
    match length {
        2 => Some(GameConfig {
            extra_attempts: 8,
            initial_lives: 10,
        }),
        3 => Some(GameConfig {
            extra_attempts: 7,
            initial_lives: 8,
        }),
        4 => Some(GameConfig {
            extra_attempts: 6,
            initial_lives: 6,
        }),
        5 => Some(GameConfig {
            extra_attempts: 5,
            initial_lives: 5,
        }),
        6 => Some(GameConfig {
            extra_attempts: 4,
            initial_lives: 4,
        }),
        _ => None,
    }
}
