//! # Vigenère Analysis Library
//!
//! Recovers the repeating key of a Vigenère cipher over lowercase English text.
//!
//! ## Pipeline
//!
//! - **Letter stream**: the ciphertext reduced to `a..=z`
//! - **Key length**: the shift (2-14 by default) with the most self-coincidences
//! - **Columns**: every k-th letter, one Caesar cipher per key letter
//! - **Shifts**: per column, the rotation whose letter frequencies are closest
//!   (L1 distance) to English
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{decrypt, encrypt, estimate_key_length, recover_key, LetterStream};
//!
//! let plaintext = "thequickbrownfoxjumpsoverthelazydog".repeat(6);
//! let ciphertext = encrypt(&plaintext, "key")?;
//!
//! let stream = LetterStream::from_text(&ciphertext);
//! let key = recover_key(&stream, 3)?;
//! assert_eq!(key, "key");
//! assert_eq!(decrypt(&ciphertext, &key)?, plaintext);
//!
//! // Statistics need a longer, natural text to estimate the key length;
//! // a stream of 26 distinct letters shows no coincidences at all.
//! let alphabet = LetterStream::from_text("abcdefghijklmnopqrstuvwxyz");
//! assert!(estimate_key_length(&alphabet).is_err());
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```

pub mod analyzer;
pub mod cipher;
pub mod config;
pub mod error;
pub mod frequency;
pub mod key_length;
pub mod recovery;
pub mod shift;
pub mod stream;

pub use analyzer::{Analyzer, Solution};
pub use cipher::{decrypt, decrypt_word, encrypt, KeyCursor};
pub use config::{AnalysisConfig, ScanBound};
pub use error::{AnalysisError, Result};
pub use frequency::{estimate_frequency, Distribution, ENGLISH, ENGLISH_FREQUENCIES};
pub use key_length::{estimate_key_length, estimate_key_length_with, score_key_lengths, KeyLengthScores};
pub use recovery::{recover_key, recover_key_with_reference, split_columns};
pub use shift::{best_shift, ShiftScore};
pub use stream::LetterStream;
