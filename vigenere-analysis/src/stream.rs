//! Letter streams: the lowercase-only view of a ciphertext that all analysis runs on

use std::fmt;

use crate::error::{AnalysisError, Result};

/// An ordered sequence of lowercase ASCII letters (`a..=z`).
///
/// Casing, punctuation and whitespace never reach the analysis; they are
/// only needed again when a recovered key is applied to the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LetterStream {
    letters: String,
}

impl LetterStream {
    /// Wraps an already clean string, rejecting anything outside `a..=z`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere_analysis::LetterStream;
    ///
    /// assert!(LetterStream::new("attackatdawn").is_ok());
    /// assert!(LetterStream::new("attack at dawn").is_err());
    /// ```
    pub fn new(letters: impl Into<String>) -> Result<Self> {
        let letters = letters.into();
        if let Some((position, letter)) = letters
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(AnalysisError::InvalidLetter { letter, position });
        }
        Ok(Self { letters })
    }

    /// Extracts the letter stream from arbitrary text by dropping every
    /// character that is not a lowercase ASCII letter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere_analysis::LetterStream;
    ///
    /// let stream = LetterStream::from_text("Rijvs, uyvjn!");
    /// assert_eq!(stream.as_str(), "ijvsuyvjn");
    /// ```
    pub fn from_text(text: &str) -> Self {
        let letters = text.chars().filter(|c| c.is_ascii_lowercase()).collect();
        Self { letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.letters.as_bytes()
    }
}

impl fmt::Display for LetterStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Alphabet index (0-25) of a lowercase ASCII letter.
pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Lowercase ASCII letter for an alphabet index, wrapping modulo 26.
pub(crate) fn index_letter(index: usize) -> u8 {
    b'a' + (index % 26) as u8
}
