//! Analysis configuration

use crate::error::{AnalysisError, Result};

/// Smallest key length the coincidence scan can test.
pub const MIN_KEY_LENGTH: usize = 2;
/// Largest key length the coincidence scan can test.
pub const MAX_KEY_LENGTH: usize = 64;

/// Where the coincidence scan for a candidate shift `k` stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanBound {
    /// Stop once `i + k + 2 >= len`, as the historical solver did.
    #[default]
    Compat,
    /// Compare every pair `(i, i + k)` inside the stream.
    Natural,
}

impl ScanBound {
    /// Number of positions `i` compared for shift `k` in a stream of `len` letters.
    pub fn positions(self, len: usize, k: usize) -> usize {
        let margin = match self {
            ScanBound::Compat => 2,
            ScanBound::Natural => 0,
        };
        len.saturating_sub(k + margin)
    }
}

/// Tunables for key length estimation.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{AnalysisConfig, ScanBound};
///
/// let config = AnalysisConfig::default()
///     .with_max_key_length(20)
///     .with_scan_bound(ScanBound::Natural);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.candidates().count(), 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub min_key_length: usize,
    /// Inclusive
    pub max_key_length: usize,
    pub scan_bound: ScanBound,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_key_length: 2,
            max_key_length: 14,
            scan_bound: ScanBound::Compat,
        }
    }
}

impl AnalysisConfig {
    pub fn with_min_key_length(mut self, min_key_length: usize) -> Self {
        self.min_key_length = min_key_length;
        self
    }

    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    pub fn with_scan_bound(mut self, scan_bound: ScanBound) -> Self {
        self.scan_bound = scan_bound;
        self
    }

    /// Checks `MIN_KEY_LENGTH <= min <= max <= MAX_KEY_LENGTH`.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.min_key_length, self.max_key_length);
        if min < MIN_KEY_LENGTH || max > MAX_KEY_LENGTH || min > max {
            return Err(AnalysisError::InvalidKeyLengthRange { min, max });
        }
        Ok(())
    }

    /// Candidate key lengths in scan order.
    pub fn candidates(&self) -> std::ops::RangeInclusive<usize> {
        self.min_key_length..=self.max_key_length
    }
}
