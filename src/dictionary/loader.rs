//! Word list loading utilities

use crate::core::{Word, WordError};
use std::fmt;

/// Error type for custom word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomWordsError {
    Empty,
    InvalidWord { input: String, source: WordError },
    MixedLengths { first: usize, other: usize },
}

impl fmt::Display for CustomWordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Custom word list is empty"),
            Self::InvalidWord { input, source } => {
                write!(f, "Invalid custom word '{input}': {source}")
            }
            Self::MixedLengths { first, other } => write!(
                f,
                "Custom words must share one length, got {first} and {other}"
            ),
        }
    }
}

impl std::error::Error for CustomWordsError {}

/// Convert embedded string slice to Word vector
///
/// Skips entries that fail validation; the embedded lists are generated
/// from checked data files, so in practice nothing is skipped.
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse a comma-separated custom solution list
///
/// Custom games play against user-supplied words; every word must validate
/// and all must share one length. Duplicates are dropped, keeping first
/// occurrences.
///
/// # Errors
/// Returns `CustomWordsError` if the list is empty, any word is invalid, or
/// lengths are mixed.
///
/// # Examples
/// ```
/// use wordle_infinito::dictionary::loader::parse_custom_words;
///
/// let words = parse_custom_words("gatos, perro,LUNAS").unwrap();
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].text(), "GATOS");
/// ```
pub fn parse_custom_words(input: &str) -> Result<Vec<Word>, CustomWordsError> {
    let mut words: Vec<Word> = Vec::new();

    for part in input.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| CustomWordsError::InvalidWord {
            input: trimmed.to_string(),
            source,
        })?;

        if let Some(first) = words.first()
            && first.len() != word.len()
        {
            return Err(CustomWordsError::MixedLengths {
                first: first.len(),
                other: word.len(),
            });
        }

        if !words.contains(&word) {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(CustomWordsError::Empty);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["gatos", "perro", "lunas"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "GATOS");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["gatos", "abuelos", "perro"];
        let words = words_from_slice(input);

        // "abuelos" is seven letters and gets dropped
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_custom_words_normalizes_and_trims() {
        let words = parse_custom_words(" casa ,MESA, gato").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "MESA");
    }

    #[test]
    fn parse_custom_words_dedupes() {
        let words = parse_custom_words("casa,CASA,mesa").unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_custom_words_rejects_empty() {
        assert_eq!(parse_custom_words(""), Err(CustomWordsError::Empty));
        assert_eq!(parse_custom_words(" , ,"), Err(CustomWordsError::Empty));
    }

    #[test]
    fn parse_custom_words_rejects_invalid() {
        assert!(matches!(
            parse_custom_words("casa,c4sa"),
            Err(CustomWordsError::InvalidWord { .. })
        ));
    }

    #[test]
    fn parse_custom_words_rejects_mixed_lengths() {
        assert_eq!(
            parse_custom_words("casa,gatos"),
            Err(CustomWordsError::MixedLengths { first: 4, other: 5 })
        );
    }

    #[test]
    fn parse_custom_words_accepts_enye() {
        let words = parse_custom_words("ñoño,niño").unwrap();
        assert_eq!(words[0].text(), "ÑOÑO");
    }
}
