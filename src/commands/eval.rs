//! One-shot evaluation command
//!
//! Validates two words and runs the evaluator once, for the `eval` CLI
//! subcommand.

use crate::core::{EvaluateError, Evaluation, Word, WordError, evaluate};
use std::fmt;

/// Result of evaluating a guess against a solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalResult {
    pub guess: Word,
    pub solution: Word,
    pub evaluation: Evaluation,
}

/// Error type for the eval command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalCommandError {
    Word(WordError),
    Evaluate(EvaluateError),
}

impl fmt::Display for EvalCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::Evaluate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalCommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Evaluate(e) => Some(e),
        }
    }
}

impl From<WordError> for EvalCommandError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<EvaluateError> for EvalCommandError {
    fn from(e: EvaluateError) -> Self {
        Self::Evaluate(e)
    }
}

/// Evaluate a guess string against a solution string
///
/// # Errors
/// Returns `EvalCommandError` if either word fails validation or the
/// lengths differ.
pub fn evaluate_words(guess: &str, solution: &str) -> Result<EvalResult, EvalCommandError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let evaluation = evaluate(&guess, &solution)?;

    Ok(EvalResult {
        guess,
        solution,
        evaluation,
    })
}
