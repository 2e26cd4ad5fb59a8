//! Game engines: boards, multi-board sessions, time trials, saves

mod board;
mod save;
mod session;
mod time_trial;

pub use board::{Board, Cell, MIN_VISIBLE_ROWS, ScoredGuess};
pub use save::{FileSaveStore, RestoreError, SaveStore, SavedGame};
pub use session::{Game, GameError, GuessError, GuessOutcome};
pub use time_trial::{
    DEFAULT_TRIAL_BOARDS, DEFAULT_TRIAL_SECONDS, TRIAL_BOARD_ATTEMPTS, TimeTrial, TrialOutcome,
};
