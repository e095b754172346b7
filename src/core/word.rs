//! Fixed-length word representation
//!
//! A Word is a lowercase, NFC-composed sequence of exactly [`WORD_LENGTH`]
//! letters. Letters are Unicode scalar values, so `ä`, `ש` and `ό` each
//! occupy one slot.

use super::WORD_LENGTH;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// A five-letter word in any script
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word contains non-letter characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is trimmed, NFC-composed and lowercased before validation, so
    /// a decomposed `u` + U+0308 becomes the single letter `ü`.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_global::core::Word;
    ///
    /// let word = Word::new("Grüne").unwrap();
    /// assert_eq!(word.text(), "grüne");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().nfc().collect::<String>().to_lowercase();

        let chars: Vec<char> = text.chars().collect();
        let letters: [char; WORD_LENGTH] = chars
            .as_slice()
            .try_into()
            .map_err(|_| WordError::InvalidLength(chars.len()))?;

        if !letters.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a letter array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("GRÜNE").unwrap().text(), "grüne");
    }

    #[test]
    fn word_creation_counts_letters_not_bytes() {
        // 5 letters, 6 bytes
        assert!(Word::new("grüne").is_ok());
        // Hebrew and Greek
        assert!(Word::new("ילדים").is_ok());
        assert!(Word::new("λόγος").is_ok());
    }

    #[test]
    fn word_creation_composes_combining_marks() {
        let decomposed = "gru\u{0308}ne";
        let word = Word::new(decomposed).unwrap();
        assert_eq!(word.text(), "grüne");
        assert_eq!(word.letter_at(2), 'ü');
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("grün"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cr ne").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("בננות").unwrap();
        assert_eq!(word.letter_at(0), 'ב');
        assert_eq!(word.letter_at(4), 'ת');
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
