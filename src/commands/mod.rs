//! Command implementations

pub mod eval;

pub use eval::{EvalCommandError, EvalResult, evaluate_words};
