//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure and testable.

mod evaluation;
mod keyboard;
mod word;

pub use evaluation::{EvaluateError, Evaluation, LetterState, evaluate};
pub use keyboard::{KeyState, KeyboardState};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError, is_game_letter};
