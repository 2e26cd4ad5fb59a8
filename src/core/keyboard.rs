//! Keyboard key-state aggregation
//!
//! The on-screen keyboard highlights each letter with the best outcome it
//! has ever achieved across every guess of every board, under the priority
//! `Correct > Present > Absent > Unplayed`. This is a fold over past
//! evaluations, kept separate from the evaluator itself.

use super::{Evaluation, LetterState, Word};
use rustc_hash::FxHashMap;

/// Display state of a keyboard key
///
/// `Unplayed` is the initial state of every key; the other three mirror
/// `LetterState`. Ordered by priority so aggregation is a `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyState {
    #[default]
    Unplayed,
    Absent,
    Present,
    Correct,
}

impl From<LetterState> for KeyState {
    fn from(state: LetterState) -> Self {
        match state {
            LetterState::Correct => Self::Correct,
            LetterState::Present => Self::Present,
            LetterState::Absent => Self::Absent,
        }
    }
}

/// Best-state-per-letter map for keyboard highlighting
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    states: FxHashMap<char, KeyState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the map
    ///
    /// Each letter keeps the highest-priority state it has reached so far;
    /// a Correct is never downgraded by a later Absent for the same letter.
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &state) in guess.letters().iter().zip(evaluation.states()) {
            let entry = self.states.entry(letter).or_default();
            *entry = (*entry).max(KeyState::from(state));
        }
    }

    /// Aggregate a whole history of evaluated guesses
    ///
    /// The history may span multiple boards; order does not matter.
    #[must_use]
    pub fn aggregate<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Evaluation)>,
    {
        let mut keyboard = Self::new();
        for (guess, evaluation) in history {
            keyboard.record(guess, evaluation);
        }
        keyboard
    }

    /// Current display state for a letter
    #[inline]
    #[must_use]
    pub fn state(&self, letter: char) -> KeyState {
        self.states.get(&letter).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn scored(guess: &str, solution: &str) -> (Word, Evaluation) {
        let guess = Word::new(guess).unwrap();
        let solution = Word::new(solution).unwrap();
        let evaluation = evaluate(&guess, &solution).unwrap();
        (guess, evaluation)
    }

    #[test]
    fn unplayed_by_default() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.state('A'), KeyState::Unplayed);
        assert_eq!(keyboard.state('Ñ'), KeyState::Unplayed);
    }

    #[test]
    fn single_guess_states() {
        let (guess, evaluation) = scored("SLATE", "CRANE");
        let mut keyboard = KeyboardState::new();
        keyboard.record(&guess, &evaluation);

        assert_eq!(keyboard.state('A'), KeyState::Correct);
        assert_eq!(keyboard.state('E'), KeyState::Correct);
        assert_eq!(keyboard.state('S'), KeyState::Absent);
        assert_eq!(keyboard.state('L'), KeyState::Absent);
        assert_eq!(keyboard.state('C'), KeyState::Unplayed); // Never guessed
    }

    #[test]
    fn best_state_wins_across_guesses() {
        // R is Present in the first guess, Correct in the second
        let mut keyboard = KeyboardState::new();
        let (g1, e1) = scored("TORRE", "CRANE");
        let (g2, e2) = scored("CRUDO", "CRANE");
        keyboard.record(&g1, &e1);
        keyboard.record(&g2, &e2);

        assert_eq!(keyboard.state('R'), KeyState::Correct);
    }

    #[test]
    fn correct_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        // E is Correct against CRANE
        let (g1, e1) = scored("SLATE", "CRANE");
        keyboard.record(&g1, &e1);
        // Later guess where E is Absent against a different board's solution
        let (g2, e2) = scored("PESOS", "MUNDO");
        keyboard.record(&g2, &e2);

        assert_eq!(keyboard.state('E'), KeyState::Correct);
    }

    #[test]
    fn aggregate_spans_boards() {
        // Two boards sharing one guess stream, as in multi-board games
        let (g1a, e1a) = scored("LUNAR", "GATOS");
        let (g1b, e1b) = scored("LUNAR", "LUNAS");
        let keyboard =
            KeyboardState::aggregate([(&g1a, &e1a), (&g1b, &e1b)]);

        // L misses the first board but is exact on the second
        assert_eq!(keyboard.state('L'), KeyState::Correct);
        assert_eq!(keyboard.state('R'), KeyState::Absent);
        // A is Present on the first board and Correct on the second
        assert_eq!(keyboard.state('A'), KeyState::Correct);
    }

    #[test]
    fn duplicate_letters_take_best_position_outcome() {
        // In SPEED vs ERASE both E's are Present; state is Present, not Absent
        let (guess, evaluation) = scored("SPEED", "ERASE");
        let mut keyboard = KeyboardState::new();
        keyboard.record(&guess, &evaluation);

        assert_eq!(keyboard.state('E'), KeyState::Present);
        assert_eq!(keyboard.state('P'), KeyState::Absent);
    }

    #[test]
    fn priority_ordering() {
        assert!(KeyState::Correct > KeyState::Present);
        assert!(KeyState::Present > KeyState::Absent);
        assert!(KeyState::Absent > KeyState::Unplayed);
    }
}
