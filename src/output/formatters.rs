//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterState};
use colored::{ColoredString, Colorize};

/// Human-readable name of a letter state
#[must_use]
pub const fn state_name(state: LetterState) -> &'static str {
    match state {
        LetterState::Correct => "correct",
        LetterState::Present => "present",
        LetterState::Absent => "absent",
    }
}

/// Color a single letter like its board tile
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green(),
        LetterState::Present => text.black().on_yellow(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Format an evaluated guess as a row of colored tiles
#[must_use]
pub fn tile_row(letters: &[char], evaluation: &Evaluation) -> String {
    letters
        .iter()
        .zip(evaluation.states())
        .map(|(&letter, &state)| tile(letter, state).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn state_names() {
        assert_eq!(state_name(LetterState::Correct), "correct");
        assert_eq!(state_name(LetterState::Present), "present");
        assert_eq!(state_name(LetterState::Absent), "absent");
    }

    #[test]
    fn tile_row_covers_every_position() {
        let guess = Word::new("SLATE").unwrap();
        let solution = Word::new("CRANE").unwrap();
        let evaluation = evaluate(&guess, &solution).unwrap();

        let row = tile_row(guess.letters(), &evaluation);
        for letter in guess.letters() {
            assert!(row.contains(*letter), "missing {letter} in tile row");
        }
    }
}
