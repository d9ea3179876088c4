//! Vigenère encryption and decryption of lowercase text
//!
//! Only `a..=z` is transformed. Everything else (uppercase, digits,
//! punctuation, whitespace) is copied through and does not consume a key letter.

use crate::error::{AnalysisError, Result};
use crate::stream::{index_letter, letter_index};

/// Position in the repeating key, advanced once per transformed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyCursor(usize);

impl KeyCursor {
    pub fn new() -> Self {
        Self(0)
    }

    /// Index of the key letter the next letter will use.
    pub fn index(&self, key_len: usize) -> usize {
        self.0 % key_len
    }

    fn advance(self, key_len: usize) -> Self {
        Self((self.0 + 1) % key_len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn validate_key(key: &str) -> Result<&[u8]> {
    if key.is_empty() {
        return Err(AnalysisError::InvalidKey("key cannot be empty".to_string()));
    }
    if let Some(c) = key.chars().find(|c| !c.is_ascii_lowercase()) {
        return Err(AnalysisError::InvalidKey(format!(
            "unexpected character {c:?} (expected a-z)"
        )));
    }
    Ok(key.as_bytes())
}

fn transform(text: &str, key: &[u8], cursor: KeyCursor, direction: Direction) -> (String, KeyCursor) {
    let mut result = String::with_capacity(text.len());
    let mut cursor = cursor;

    for c in text.chars() {
        if !c.is_ascii_lowercase() {
            result.push(c);
            continue;
        }

        let shift = letter_index(key[cursor.index(key.len())]);
        let letter = letter_index(c as u8);
        let index = match direction {
            Direction::Encrypt => letter + shift,
            Direction::Decrypt => letter + 26 - shift,
        };
        result.push(index_letter(index) as char);
        cursor = cursor.advance(key.len());
    }

    (result, cursor)
}

/// Encrypts text with the Vigenère cipher.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::encrypt;
///
/// assert_eq!(encrypt("hello, world", "key").unwrap(), "rijvs, uyvjn");
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let key = validate_key(key)?;
    Ok(transform(text, key, KeyCursor::new(), Direction::Encrypt).0)
}

/// Decrypts text with the Vigenère cipher, preserving its formatting.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    let key = validate_key(key)?;
    Ok(transform(text, key, KeyCursor::new(), Direction::Decrypt).0)
}

/// Decrypts a single token starting at `cursor`, returning the plaintext
/// token and the cursor for the next one.
pub fn decrypt_word(word: &str, key: &str, cursor: KeyCursor) -> Result<(String, KeyCursor)> {
    let key = validate_key(key)?;
    Ok(transform(word, key, cursor, Direction::Decrypt))
}
