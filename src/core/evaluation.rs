//! Guess evaluation
//!
//! Evaluating a guess against a solution classifies each position as
//! Correct (right letter, right position), Present (letter elsewhere in the
//! solution) or Absent. Duplicate letters are handled with a consumable pool
//! of solution letters: exact matches are resolved first and each Present
//! mark consumes one remaining occurrence, so a letter is never credited
//! more times than the solution contains it.

use super::Word;
use std::fmt;

/// Per-position outcome of comparing a guess letter to the solution
///
/// Ordered by display priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

/// Result of evaluating one guess against one solution
///
/// Holds one `LetterState` per guess position. Unfilled display cells are a
/// rendering concern (`game::Cell::Empty`) and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    states: Vec<LetterState>,
}

/// Error type for evaluation contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    LengthMismatch { guess: usize, solution: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, solution } => write!(
                f,
                "Guess has {guess} letters but solution has {solution}"
            ),
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Evaluate a guess against a solution
///
/// Implements the standard feedback rules, including proper handling of
/// duplicate letters:
///
/// 1. First pass: mark exact matches as Correct and remove each matched
///    letter from the available pool
/// 2. Second pass: mark remaining guess letters that still have a pooled
///    occurrence as Present, consuming one occurrence per mark
/// 3. Everything else stays Absent
///
/// Pure and deterministic: the same inputs always produce the same result.
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_infinito::core::{evaluate, LetterState, Word};
///
/// let guess = Word::new("SLATE").unwrap();
/// let solution = Word::new("CRANE").unwrap();
/// let result = evaluate(&guess, &solution).unwrap();
///
/// use LetterState::{Absent, Correct};
/// assert_eq!(result.states(), &[Absent, Absent, Correct, Absent, Correct]);
/// ```
pub fn evaluate(guess: &Word, solution: &Word) -> Result<Evaluation, EvaluateError> {
    if guess.len() != solution.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            solution: solution.len(),
        });
    }

    let mut states = vec![LetterState::Absent; guess.len()];
    let mut available = solution.letter_counts();

    // First pass: exact position matches
    for (i, &letter) in guess.letters().iter().enumerate() {
        if letter == solution.letter_at(i) {
            states[i] = LetterState::Correct;

            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an occurrence remains in the pool
    for (i, &letter) in guess.letters().iter().enumerate() {
        if states[i] == LetterState::Absent
            && let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            states[i] = LetterState::Present;
            *count -= 1;
        }
    }

    Ok(Evaluation { states })
}

impl Evaluation {
    /// Per-position states, in guess order
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Number of evaluated positions (equals the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True for the zero-length evaluation, which no valid word produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check if every position is Correct (the guess equals the solution)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Render as an emoji row (🟩 Correct, 🟨 Present, ⬜ Absent)
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states
            .iter()
            .map(|state| match state {
                LetterState::Correct => '🟩',
                LetterState::Present => '🟨',
                LetterState::Absent => '⬜',
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a LetterState;
    type IntoIter = std::slice::Iter<'a, LetterState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    fn eval(guess: &str, solution: &str) -> Evaluation {
        evaluate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap()).unwrap()
    }

    #[test]
    fn self_match_is_all_correct() {
        let result = eval("CRANE", "CRANE");
        assert_eq!(result.states(), &[Correct; 5]);
        assert!(result.is_win());
    }

    #[test]
    fn disjoint_alphabets_all_absent() {
        let result = eval("XXXXX", "ABCDE");
        assert_eq!(result.states(), &[Absent; 5]);
        assert_eq!(result.count(Correct), 0);
        assert_eq!(result.count(Present), 0);
    }

    #[test]
    fn positional_matches_only() {
        // SLATE vs CRANE: S, L, T miss; A and E are exact
        let result = eval("SLATE", "CRANE");
        assert_eq!(result.states(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn all_present_with_matching_multiplicity() {
        // ALLOY vs LOYAL shares every letter with equal counts, none in place
        let result = eval("ALLOY", "LOYAL");
        assert_eq!(result.states(), &[Present; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn duplicate_guess_letter_single_solution_occurrence() {
        // SPEED vs ERASE: solution has two E's, so both guess E's are Present;
        // the single S is Present, P and D are Absent
        let result = eval("SPEED", "ERASE");
        assert_eq!(result.states(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn exact_match_consumes_before_presence() {
        // ROBOT vs FLOOR: first O yields Present, second O is the exact match
        let result = eval("ROBOT", "FLOOR");
        assert_eq!(result.states(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn later_duplicate_gets_no_credit_once_pool_empty() {
        // Solution has one A; guess AABBB: position 0 is exact, position 1
        // must not be Present
        let result = eval("AABBB", "AXXXX");
        assert_eq!(result.states(), &[Correct, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn credit_conservation_per_letter() {
        for (guess, solution) in [
            ("AABBA", "ABABA"),
            ("SPEED", "ERASE"),
            ("ALLOY", "LOYAL"),
            ("ÑOÑOS", "SOÑAR"),
        ] {
            let g = Word::new(guess).unwrap();
            let s = Word::new(solution).unwrap();
            let result = evaluate(&g, &s).unwrap();

            let solution_counts = s.letter_counts();
            for (&letter, &available) in &solution_counts {
                let credited = g
                    .letters()
                    .iter()
                    .zip(result.states())
                    .filter(|&(&l, &st)| l == letter && st != Absent)
                    .count();
                assert!(
                    credited <= usize::from(available),
                    "{guess} vs {solution}: letter {letter} credited {credited} times, solution has {available}"
                );
            }
        }
    }

    #[test]
    fn length_preservation() {
        for (guess, solution) in [("DE", "LA"), ("MAR", "SOL"), ("BOSQUE", "PUERTA")] {
            let result = eval(guess, solution);
            assert_eq!(result.len(), guess.chars().count());
        }
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let guess = Word::new("MAR").unwrap();
        let solution = Word::new("CRANE").unwrap();
        assert_eq!(
            evaluate(&guess, &solution),
            Err(EvaluateError::LengthMismatch {
                guess: 3,
                solution: 5
            })
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let guess = Word::new("SPEED").unwrap();
        let solution = Word::new("ERASE").unwrap();
        let first = evaluate(&guess, &solution).unwrap();
        for _ in 0..10 {
            assert_eq!(evaluate(&guess, &solution).unwrap(), first);
        }
    }

    #[test]
    fn enye_participates_like_any_letter() {
        let result = eval("ÑOÑO", "NIÑO");
        // Ñ at 0: NIÑO has one Ñ, exact-matched at position 2 first, so Absent
        assert_eq!(result.states(), &[Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn state_priority_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(eval("SLATE", "CRANE").to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(eval("CRANE", "CRANE").to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
