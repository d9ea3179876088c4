//! Caesar shift scoring against a reference distribution

use crate::frequency::Distribution;
use crate::stream::index_letter;

/// Best-fit Caesar rotation of an empirical distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftScore {
    /// Rotation in 0..26
    pub shift: usize,
    /// L1 distance between the reference and the empirical distribution rotated back by `shift`
    pub error: f64,
}

impl ShiftScore {
    /// The key letter for this shift ('a' + shift).
    pub fn key_char(&self) -> char {
        index_letter(self.shift) as char
    }
}

/// L1 error of one candidate shift.
///
/// Ciphertext letters are plaintext letters shifted forward, so each
/// reference letter `c` is compared with the empirical frequency of
/// `c + shift (mod 26)`.
pub fn shift_error(empirical: &Distribution, reference: &Distribution, shift: usize) -> f64 {
    (0..26)
        .map(|c| (reference[c] - empirical[(c + shift) % 26]).abs())
        .sum()
}

/// Finds the rotation (0-25) that best aligns `empirical` with `reference`.
///
/// Shifts are scanned in increasing order and only a strictly smaller
/// error replaces the current best, so ties go to the smaller shift.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{best_shift, ENGLISH};
///
/// let score = best_shift(&ENGLISH.rotated(10), &ENGLISH);
/// assert_eq!(score.shift, 10);
/// assert_eq!(score.key_char(), 'k');
/// ```
pub fn best_shift(empirical: &Distribution, reference: &Distribution) -> ShiftScore {
    let mut best = ShiftScore {
        shift: 0,
        error: f64::MAX,
    };

    for shift in 0..26 {
        let error = shift_error(empirical, reference, shift);
        if error < best.error {
            best = ShiftScore { shift, error };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{estimate_frequency, ENGLISH};
    use crate::stream::LetterStream;

    #[test]
    fn test_best_shift_recovers_exact_rotation() {
        for k in 0..26 {
            let score = best_shift(&ENGLISH.rotated(k), &ENGLISH);
            assert_eq!(score.shift, k);
            assert!(score.error.abs() < 1e-12);
        }
    }

    #[test]
    fn test_key_char() {
        let score = ShiftScore { shift: 24, error: 0.0 };
        assert_eq!(score.key_char(), 'y');
    }

    #[test]
    fn test_degenerate_distribution_is_deterministic() {
        // A single repeated letter: the best shift maps 'e' onto it.
        let stream = LetterStream::new("qqqqqqqq").unwrap();
        let empirical = estimate_frequency(&stream).unwrap();
        let first = best_shift(&empirical, &ENGLISH);
        let second = best_shift(&empirical, &ENGLISH);
        assert_eq!(first, second);
        assert_eq!(first.key_char(), 'm');
    }

    #[test]
    fn test_ties_prefer_smaller_shift() {
        let uniform = Distribution::from_frequencies([1.0 / 26.0; 26]);
        let score = best_shift(&uniform, &uniform);
        assert_eq!(score.shift, 0);
    }

    #[test]
    fn test_shift_error_wraps_around() {
        // 'z' shifted by one lands on 'a'.
        let mut frequencies = [0.0; 26];
        frequencies[25] = 1.0;
        let reference = Distribution::from_frequencies(frequencies);
        let mut shifted = [0.0; 26];
        shifted[0] = 1.0;
        let empirical = Distribution::from_frequencies(shifted);
        assert_eq!(shift_error(&empirical, &reference, 1), 0.0);
        assert_eq!(shift_error(&empirical, &reference, 0), 2.0);
    }
}
