//! The full key recovery pipeline: key length, then per-column shifts

use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::key_length::{score_key_lengths, KeyLengthScores};
use crate::recovery::recover_key;
use crate::stream::LetterStream;

/// Result of analysing a ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub key_length: usize,
    pub key: String,
    /// Candidate scores, absent when the key length was given rather than estimated.
    pub scores: Option<KeyLengthScores>,
}

/// Runs key length estimation and key recovery with a validated configuration.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{encrypt, AnalysisConfig, Analyzer, LetterStream};
///
/// let plaintext = "thequickbrownfoxjumpsoverthelazydog".repeat(6);
/// let ciphertext = encrypt(&plaintext, "key")?;
/// let stream = LetterStream::from_text(&ciphertext);
///
/// let analyzer = Analyzer::new(AnalysisConfig::default())?;
/// let solution = analyzer.analyze_with_key_length(&stream, 3)?;
/// assert_eq!(solution.key, "key");
/// # Ok::<(), vigenere_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Estimates the key length, then recovers the key.
    ///
    /// A wrong key length estimate is not revisited; it simply yields a wrong key.
    pub fn analyze(&self, stream: &LetterStream) -> Result<Solution> {
        let scores = score_key_lengths(stream, &self.config)?;
        let best = scores.best()?;
        info!(
            key_length = best.key_length,
            coincidences = best.coincidences,
            "estimated key length"
        );

        let key = recover_key(stream, best.key_length)?;
        Ok(Solution {
            key_length: best.key_length,
            key,
            scores: Some(scores),
        })
    }

    /// Recovers the key for a known key length.
    pub fn analyze_with_key_length(&self, stream: &LetterStream, key_length: usize) -> Result<Solution> {
        let key = recover_key(stream, key_length)?;
        Ok(Solution {
            key_length,
            key,
            scores: None,
        })
    }
}
