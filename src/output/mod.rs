//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_eval_result, print_stats};
