//! Key length estimation by coincidence counting
//!
//! Two ciphertext letters a multiple of the key length apart were encrypted
//! with the same key letter, so they agree whenever the plaintext letters
//! agree. At other distances they agree only by chance. The candidate
//! distance with the most agreeing pairs is taken as the key length.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{AnalysisConfig, ScanBound};
use crate::error::{AnalysisError, Result};
use crate::stream::LetterStream;

/// Coincidence count for one candidate key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore {
    pub key_length: usize,
    pub coincidences: usize,
}

/// Coincidence counts for every candidate, in increasing candidate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLengthScores {
    scores: Vec<CandidateScore>,
}

impl KeyLengthScores {
    pub fn scores(&self) -> &[CandidateScore] {
        &self.scores
    }

    /// Coincidence count of a candidate, if it was scanned.
    pub fn coincidences(&self, key_length: usize) -> Option<usize> {
        self.scores
            .iter()
            .find(|score| score.key_length == key_length)
            .map(|score| score.coincidences)
    }

    /// The candidate with the most coincidences.
    ///
    /// Starts from a baseline of zero and only a strictly greater count
    /// replaces the current best, so ties go to the smaller candidate.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::DegenerateCoincidence`] if no candidate scored above zero.
    pub fn best(&self) -> Result<CandidateScore> {
        let mut best: Option<CandidateScore> = None;
        let mut matches = 0;
        for score in &self.scores {
            if score.coincidences > matches {
                matches = score.coincidences;
                best = Some(*score);
            }
        }

        best.ok_or(AnalysisError::DegenerateCoincidence {
            candidates: self.scores.len(),
        })
    }
}

/// Counts positions `i` with `letters[i] == letters[i + shift]`.
pub fn count_coincidences(letters: &[u8], shift: usize, bound: ScanBound) -> usize {
    let positions = bound.positions(letters.len(), shift);
    if positions == 0 {
        return 0;
    }
    letters[..positions]
        .iter()
        .zip(&letters[shift..])
        .filter(|(a, b)| a == b)
        .count()
}

/// Scores every candidate key length of `config` against the stream.
///
/// Candidates are independent and scanned in parallel; the table is built
/// fresh on every call.
pub fn score_key_lengths(stream: &LetterStream, config: &AnalysisConfig) -> Result<KeyLengthScores> {
    config.validate()?;

    let letters = stream.as_bytes();
    if letters.len() < config.max_key_length + 3 {
        warn!(
            "Letter stream of {} letters is too short to score key length {}",
            letters.len(),
            config.max_key_length
        );
    }

    let scores: Vec<CandidateScore> = config
        .candidates()
        .into_par_iter()
        .map(|key_length| CandidateScore {
            key_length,
            coincidences: count_coincidences(letters, key_length, config.scan_bound),
        })
        .collect();

    for score in &scores {
        debug!(
            key_length = score.key_length,
            coincidences = score.coincidences,
            "scored key length candidate"
        );
    }

    Ok(KeyLengthScores { scores })
}

/// Estimates the key length of a Vigenère ciphertext with the default
/// configuration (candidates 2..=14).
///
/// # Errors
///
/// [`AnalysisError::DegenerateCoincidence`] when no candidate shows a single
/// coincidence, which means the stream is too short or too uniform to say
/// anything about the key.
pub fn estimate_key_length(stream: &LetterStream) -> Result<usize> {
    estimate_key_length_with(stream, &AnalysisConfig::default())
}

/// [`estimate_key_length`] with an explicit configuration.
pub fn estimate_key_length_with(stream: &LetterStream, config: &AnalysisConfig) -> Result<usize> {
    let scores = score_key_lengths(stream, config)?;
    match scores.best() {
        Ok(best) => {
            info!(
                key_length = best.key_length,
                coincidences = best.coincidences,
                "estimated key length"
            );
            Ok(best.key_length)
        }
        Err(err) => {
            warn!("{}", err);
            Err(err)
        }
    }
}
