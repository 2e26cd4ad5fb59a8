//! Time-trial mode
//!
//! A queue of solution words played one board at a time against a
//! countdown. Solving a board, or spending its fixed attempt budget,
//! advances to the next; the score is the number of boards solved before
//! the clock or the queue runs out.

use super::board::Board;
use super::session::{GameError, GuessError};
use crate::core::{KeyboardState, Word};
use std::time::{Duration, Instant};

/// Default countdown for a trial
pub const DEFAULT_TRIAL_SECONDS: u64 = 300;

/// Attempt budget per board
pub const TRIAL_BOARD_ATTEMPTS: usize = 6;

/// How many solution words a trial queues up
pub const DEFAULT_TRIAL_BOARDS: usize = 100;

/// What one time-trial guess changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    pub solved: bool,
    pub board_finished: bool,
    pub trial_over: bool,
}

/// A running time trial
#[derive(Debug, Clone)]
pub struct TimeTrial {
    boards: Vec<Board>,
    current: usize,
    duration: Duration,
    started: Instant,
}

impl TimeTrial {
    /// Start a trial over the given solution queue
    ///
    /// # Errors
    /// Returns `GameError` if the queue is empty or word lengths differ.
    pub fn new(solutions: Vec<Word>, duration: Duration) -> Result<Self, GameError> {
        let first = solutions.first().ok_or(GameError::NoBoards)?.len();
        if let Some(other) = solutions.iter().find(|w| w.len() != first) {
            return Err(GameError::MismatchedLengths {
                first,
                other: other.len(),
            });
        }

        let boards = solutions
            .into_iter()
            .enumerate()
            .map(|(id, solution)| Board::new(id, solution))
            .collect();

        Ok(Self {
            boards,
            current: 0,
            duration,
            started: Instant::now(),
        })
    }

    /// Length shared by every queued solution
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.boards[0].solution().len()
    }

    /// The board currently being played, if any remain
    #[must_use]
    pub fn current_board(&self) -> Option<&Board> {
        self.boards.get(self.current)
    }

    /// Index of the board currently being played (forward-only)
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn total_boards(&self) -> usize {
        self.boards.len()
    }

    /// Boards solved so far
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.boards.iter().filter(|b| b.is_solved()).count()
    }

    /// Configured countdown length
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left on the countdown
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.started.elapsed())
    }

    /// True once the countdown hit zero
    #[must_use]
    pub fn expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// True once the trial accepts no more guesses
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.expired() || self.current >= self.boards.len()
    }

    /// Submit a guess against the current board
    ///
    /// Solving the board or spending its attempt budget advances to the
    /// next one; the index never moves backward.
    ///
    /// # Errors
    /// Returns `GuessError::Finished` once the trial is over, or
    /// `GuessError::WrongLength` for a guess of the wrong length.
    pub fn submit(&mut self, guess: &Word) -> Result<TrialOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::Finished);
        }

        let board = &mut self.boards[self.current];
        let solved = board.record_guess(guess)?;

        let exhausted = !solved && board.attempts_used() >= TRIAL_BOARD_ATTEMPTS;
        if exhausted {
            board.close();
        }

        let board_finished = solved || exhausted;
        if board_finished {
            self.current += 1;
        }

        Ok(TrialOutcome {
            solved,
            board_finished,
            trial_over: self.is_over(),
        })
    }

    /// Keyboard highlighting for the current board only
    ///
    /// Each trial board starts from a clean keyboard; earlier boards'
    /// outcomes do not carry over.
    #[must_use]
    pub fn keyboard_state(&self) -> KeyboardState {
        self.current_board().map_or_else(KeyboardState::new, |board| {
            KeyboardState::aggregate(
                board
                    .guesses()
                    .iter()
                    .map(|scored| (scored.word(), scored.evaluation())),
            )
        })
    }
}
