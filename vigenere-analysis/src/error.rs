//! Error types for Vigenère analysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Empty letter stream (insufficient ciphertext for analysis)")]
    EmptyInput,

    #[error("Invalid key length {key_length} for a stream of {stream_len} letters")]
    InvalidKeyLength { key_length: usize, stream_len: usize },

    #[error("No coincidences for any of the {candidates} key length candidates (insufficient ciphertext for analysis)")]
    DegenerateCoincidence { candidates: usize },

    #[error("Invalid key length range {min}..={max}")]
    InvalidKeyLengthRange { min: usize, max: usize },

    #[error("Invalid letter {letter:?} at position {position} (expected a-z)")]
    InvalidLetter { letter: char, position: usize },

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl AnalysisError {
    /// True for the errors caused by too little ciphertext rather than bad arguments.
    pub fn is_insufficient_input(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput | AnalysisError::DegenerateCoincidence { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
