//! Multi-board game session
//!
//! N boards share one guess stream: every submitted guess is applied to all
//! unfinished boards at once. The session tracks a shared attempt budget
//! (`board count + extra attempts`) and an informational lives counter that
//! drops whenever a guess solves no board.

use super::board::Board;
use crate::core::{EvaluateError, KeyboardState, Word};
use crate::dictionary::GameConfig;
use std::fmt;

/// Error type for invalid game setups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoBoards,
    MismatchedLengths { first: usize, other: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBoards => write!(f, "A game needs at least one solution word"),
            Self::MismatchedLengths { first, other } => write!(
                f,
                "All solution words must share one length, got {first} and {other}"
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Finished,
    WrongLength { expected: usize, got: usize },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "The game is already over"),
            Self::WrongLength { expected, got } => {
                write!(f, "The word must have {expected} letters, got {got}")
            }
        }
    }
}

impl std::error::Error for GuessError {}

impl From<EvaluateError> for GuessError {
    fn from(err: EvaluateError) -> Self {
        match err {
            EvaluateError::LengthMismatch { guess, solution } => Self::WrongLength {
                expected: solution,
                got: guess,
            },
        }
    }
}

/// What one submitted guess changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub newly_solved: Vec<usize>,
    pub game_over: bool,
    pub won: bool,
    pub lives_remaining: usize,
}

/// A running multi-board game
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    boards: Vec<Board>,
    history: Vec<Word>,
    max_attempts: usize,
    initial_lives: usize,
    lives_remaining: usize,
    over: bool,
    won: bool,
}

impl Game {
    /// Start a game over the given solution words
    ///
    /// The shared attempt budget is `solutions.len() + config.extra_attempts`.
    ///
    /// # Errors
    /// Returns `GameError` if no solutions are given or their lengths differ.
    pub fn new(solutions: Vec<Word>, config: GameConfig) -> Result<Self, GameError> {
        let first = solutions.first().ok_or(GameError::NoBoards)?.len();
        if let Some(other) = solutions.iter().find(|w| w.len() != first) {
            return Err(GameError::MismatchedLengths {
                first,
                other: other.len(),
            });
        }

        let max_attempts = solutions.len() + config.extra_attempts;
        let boards = solutions
            .into_iter()
            .enumerate()
            .map(|(id, solution)| Board::new(id, solution))
            .collect();

        Ok(Self {
            boards,
            history: Vec::new(),
            max_attempts,
            initial_lives: config.initial_lives,
            lives_remaining: config.initial_lives,
            over: false,
            won: false,
        })
    }

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Every guess submitted so far, in order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Length shared by every solution word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.boards[0].solution().len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn initial_lives(&self) -> usize {
        self.initial_lives
    }

    #[inline]
    #[must_use]
    pub const fn lives_remaining(&self) -> usize {
        self.lives_remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.boards.iter().filter(|b| b.is_solved()).count()
    }

    /// True when the next submission is the game's last attempt
    #[must_use]
    pub fn is_last_attempt(&self) -> bool {
        self.history.len() + 1 == self.max_attempts
    }

    /// Submit a guess to every unfinished board
    ///
    /// A guess that matches at least one board's solution costs no life.
    /// The game ends won when every board is solved, or lost when the
    /// shared attempt budget runs out first.
    ///
    /// # Errors
    /// Returns `GuessError::Finished` after the game ended, or
    /// `GuessError::WrongLength` for a guess of the wrong length.
    pub fn submit(&mut self, guess: &Word) -> Result<GuessOutcome, GuessError> {
        if self.over {
            return Err(GuessError::Finished);
        }

        let expected = self.word_length();
        if guess.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                got: guess.len(),
            });
        }

        let matches_any = self
            .boards
            .iter()
            .any(|board| board.solution() == guess);

        let mut newly_solved = Vec::new();
        for board in &mut self.boards {
            if board.record_guess(guess)? {
                newly_solved.push(board.id());
            }
        }

        self.history.push(guess.clone());
        if !matches_any {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
        }

        let all_completed = self.boards.iter().all(Board::is_completed);
        let exhausted = self.history.len() >= self.max_attempts;

        self.over = all_completed || exhausted;
        self.won = all_completed;

        Ok(GuessOutcome {
            newly_solved,
            game_over: self.over,
            won: self.won,
            lives_remaining: self.lives_remaining,
        })
    }

    /// Keyboard highlighting aggregated over every board's history
    #[must_use]
    pub fn keyboard_state(&self) -> KeyboardState {
        KeyboardState::aggregate(
            self.boards
                .iter()
                .flat_map(Board::guesses)
                .map(|scored| (scored.word(), scored.evaluation())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyState;
    use crate::dictionary::config_for_length;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn config() -> GameConfig {
        config_for_length(5).unwrap()
    }

    #[test]
    fn new_game_budget() {
        let game = Game::new(words(&["GATOS", "LUNAS", "PERRO"]), config()).unwrap();
        assert_eq!(game.max_attempts(), 3 + 5);
        assert_eq!(game.lives_remaining(), 5);
        assert_eq!(game.word_length(), 5);
        assert!(!game.is_over());
    }

    #[test]
    fn setup_rejects_empty_and_mixed() {
        assert_eq!(Game::new(vec![], config()), Err(GameError::NoBoards));
        assert_eq!(
            Game::new(words(&["GATOS", "SOL"]), config()),
            Err(GameError::MismatchedLengths { first: 5, other: 3 })
        );
    }

    #[test]
    fn winning_single_board() {
        let mut game = Game::new(words(&["GATOS"]), config()).unwrap();
        let outcome = game.submit(&Word::new("GATOS").unwrap()).unwrap();

        assert_eq!(outcome.newly_solved, vec![0]);
        assert!(outcome.game_over);
        assert!(outcome.won);
        assert!(game.is_won());
    }

    #[test]
    fn guess_applies_to_all_boards() {
        let mut game = Game::new(words(&["GATOS", "LUNAS"]), config()).unwrap();
        game.submit(&Word::new("MUNDO").unwrap()).unwrap();

        assert_eq!(game.boards()[0].attempts_used(), 1);
        assert_eq!(game.boards()[1].attempts_used(), 1);
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn miss_costs_a_life_solve_does_not() {
        let mut game = Game::new(words(&["GATOS", "LUNAS"]), config()).unwrap();

        let outcome = game.submit(&Word::new("MUNDO").unwrap()).unwrap();
        assert_eq!(outcome.lives_remaining, 4);

        let outcome = game.submit(&Word::new("GATOS").unwrap()).unwrap();
        assert_eq!(outcome.lives_remaining, 4);
        assert_eq!(outcome.newly_solved, vec![0]);
    }

    #[test]
    fn solved_board_stops_accruing_guesses() {
        let mut game = Game::new(words(&["GATOS", "LUNAS"]), config()).unwrap();
        game.submit(&Word::new("GATOS").unwrap()).unwrap();
        game.submit(&Word::new("MUNDO").unwrap()).unwrap();

        assert_eq!(game.boards()[0].attempts_used(), 1);
        assert_eq!(game.boards()[1].attempts_used(), 2);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let solutions = words(&["GATOS"]);
        let mut game = Game::new(
            solutions,
            GameConfig {
                extra_attempts: 1,
                initial_lives: 5,
            },
        )
        .unwrap();

        // Budget is 1 board + 1 extra = 2 attempts
        game.submit(&Word::new("MUNDO").unwrap()).unwrap();
        let outcome = game.submit(&Word::new("LUNAS").unwrap()).unwrap();

        assert!(outcome.game_over);
        assert!(!outcome.won);
        assert!(game.is_over());
        assert!(!game.is_won());
    }

    #[test]
    fn submitting_after_game_over_is_rejected() {
        let mut game = Game::new(words(&["GATOS"]), config()).unwrap();
        game.submit(&Word::new("GATOS").unwrap()).unwrap();

        assert_eq!(
            game.submit(&Word::new("LUNAS").unwrap()),
            Err(GuessError::Finished)
        );
    }

    #[test]
    fn wrong_length_is_rejected_without_side_effects() {
        let mut game = Game::new(words(&["GATOS"]), config()).unwrap();
        assert_eq!(
            game.submit(&Word::new("SOL").unwrap()),
            Err(GuessError::WrongLength {
                expected: 5,
                got: 3
            })
        );
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.lives_remaining(), 5);
    }

    #[test]
    fn winning_all_boards_before_budget() {
        let mut game = Game::new(words(&["GATOS", "LUNAS"]), config()).unwrap();
        game.submit(&Word::new("GATOS").unwrap()).unwrap();
        let outcome = game.submit(&Word::new("LUNAS").unwrap()).unwrap();

        assert!(outcome.won);
        assert_eq!(game.solved_count(), 2);
    }

    #[test]
    fn lives_never_go_negative() {
        let mut game = Game::new(
            words(&["GATOS"]),
            GameConfig {
                extra_attempts: 5,
                initial_lives: 1,
            },
        )
        .unwrap();

        game.submit(&Word::new("MUNDO").unwrap()).unwrap();
        let outcome = game.submit(&Word::new("LUNAS").unwrap()).unwrap();
        assert_eq!(outcome.lives_remaining, 0);
    }

    #[test]
    fn keyboard_state_spans_boards() {
        let mut game = Game::new(words(&["GATOS", "LUNAS"]), config()).unwrap();
        game.submit(&Word::new("LUNAR").unwrap()).unwrap();

        let keyboard = game.keyboard_state();
        // L misses GATOS but is exact on LUNAS
        assert_eq!(keyboard.state('L'), KeyState::Correct);
        assert_eq!(keyboard.state('R'), KeyState::Absent);
        assert_eq!(keyboard.state('Z'), KeyState::Unplayed);
    }

    #[test]
    fn last_attempt_flag() {
        let mut game = Game::new(
            words(&["GATOS"]),
            GameConfig {
                extra_attempts: 1,
                initial_lives: 5,
            },
        )
        .unwrap();

        assert!(!game.is_last_attempt());
        game.submit(&Word::new("MUNDO").unwrap()).unwrap();
        assert!(game.is_last_attempt());
    }
}
