//! Letter frequency distributions

use std::ops::Index;

use crate::error::{AnalysisError, Result};
use crate::stream::{letter_index, LetterStream};

/// English letter frequencies for frequency analysis (a-z)
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02280, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02361, 0.00150,
    0.01974, 0.00074,
];

/// The fixed English reference distribution.
pub const ENGLISH: Distribution = Distribution(ENGLISH_FREQUENCIES);

/// Relative frequency of each of the 26 letters, indexed a=0 .. z=25.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution([f64; 26]);

impl Distribution {
    pub const fn from_frequencies(frequencies: [f64; 26]) -> Self {
        Self(frequencies)
    }

    pub fn frequencies(&self) -> &[f64; 26] {
        &self.0
    }

    /// Frequency of a lowercase letter.
    pub fn get(&self, letter: char) -> Option<f64> {
        letter
            .is_ascii_lowercase()
            .then(|| self.0[letter_index(letter as u8)])
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The distribution of text shifted forward by `shift`: the value of
    /// letter `c` moves to letter `c + shift (mod 26)`.
    pub fn rotated(&self, shift: usize) -> Self {
        let mut rotated = [0.0; 26];
        for (i, &value) in self.0.iter().enumerate() {
            rotated[(i + shift) % 26] = value;
        }
        Self(rotated)
    }
}

impl Index<usize> for Distribution {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Counts the occurrences of each letter in the stream.
pub fn count_letters(letters: &[u8]) -> [u32; 26] {
    let mut counts: [u32; 26] = [0; 26];
    for &letter in letters {
        counts[letter_index(letter)] += 1;
    }
    counts
}

/// Empirical letter distribution of a stream.
///
/// Every one of the 26 letters gets a value, zero for letters that never
/// occur, and the values sum to 1.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if the stream holds no letters.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{estimate_frequency, LetterStream};
///
/// let stream = LetterStream::new("abba").unwrap();
/// let distribution = estimate_frequency(&stream).unwrap();
/// assert_eq!(distribution.get('a'), Some(0.5));
/// assert_eq!(distribution.get('z'), Some(0.0));
/// ```
pub fn estimate_frequency(stream: &LetterStream) -> Result<Distribution> {
    frequency_of(stream.as_bytes())
}

pub(crate) fn frequency_of(letters: &[u8]) -> Result<Distribution> {
    if letters.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let total = letters.len() as f64;
    let counts = count_letters(letters);
    let mut frequencies = [0.0; 26];
    for (frequency, &count) in frequencies.iter_mut().zip(counts.iter()) {
        *frequency = count as f64 / total;
    }
    Ok(Distribution(frequencies))
}
