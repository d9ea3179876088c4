//! Key recovery by per-column frequency analysis

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::frequency::{frequency_of, Distribution, ENGLISH};
use crate::shift::{best_shift, ShiftScore};
use crate::stream::LetterStream;

/// Splits the stream into `key_length` interleaved columns.
///
/// Column `c` holds the letters at positions `c, c + key_length, c + 2 * key_length, ...`,
/// i.e. every letter that was encrypted with key letter `c`.
///
/// # Errors
///
/// [`AnalysisError::InvalidKeyLength`] if `key_length` is zero or longer than
/// the stream, either of which would leave a column empty.
pub fn split_columns(stream: &LetterStream, key_length: usize) -> Result<Vec<Vec<u8>>> {
    if key_length == 0 || key_length > stream.len() {
        return Err(AnalysisError::InvalidKeyLength {
            key_length,
            stream_len: stream.len(),
        });
    }

    let mut columns = vec![Vec::with_capacity(stream.len() / key_length + 1); key_length];
    for (i, &letter) in stream.as_bytes().iter().enumerate() {
        columns[i % key_length].push(letter);
    }
    Ok(columns)
}

/// Inverse of [`split_columns`]: reads the columns back row by row.
pub fn interleave_columns(columns: &[Vec<u8>]) -> LetterStream {
    let total = columns.iter().map(Vec::len).sum();
    let rows = columns.first().map_or(0, Vec::len);
    let mut letters = String::with_capacity(total);
    for row in 0..rows {
        for column in columns {
            if let Some(&letter) = column.get(row) {
                letters.push(letter as char);
            }
        }
    }
    LetterStream::from_text(&letters)
}

/// Recovers a key of `key_length` letters against the English reference.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{recover_key, LetterStream};
///
/// let stream = LetterStream::new("abc").unwrap();
/// assert!(recover_key(&stream, 4).is_err());
/// ```
pub fn recover_key(stream: &LetterStream, key_length: usize) -> Result<String> {
    recover_key_with_reference(stream, key_length, &ENGLISH)
}

/// Recovers a key of `key_length` letters against a given reference distribution.
///
/// Each column is a Caesar cipher on its own, so columns are solved
/// independently (in parallel) and their key letters joined in column order.
pub fn recover_key_with_reference(
    stream: &LetterStream,
    key_length: usize,
    reference: &Distribution,
) -> Result<String> {
    let columns = split_columns(stream, key_length)?;

    let shifts: Vec<ShiftScore> = columns
        .par_iter()
        .map(|column| frequency_of(column).map(|empirical| best_shift(&empirical, reference)))
        .collect::<Result<_>>()?;

    for (column, score) in shifts.iter().enumerate() {
        debug!(
            column,
            shift = score.shift,
            error = score.error,
            "recovered column shift"
        );
    }

    let key: String = shifts.iter().map(ShiftScore::key_char).collect();
    info!("Recovered key: {}", key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(letters: &str) -> LetterStream {
        LetterStream::new(letters).unwrap()
    }

    #[test]
    fn test_split_columns() {
        let columns = split_columns(&stream("abcdefgh"), 3).unwrap();
        assert_eq!(columns, vec![b"adg".to_vec(), b"beh".to_vec(), b"cf".to_vec()]);
    }

    #[test]
    fn test_column_round_trip() {
        let s = stream("harbourwasquietwhenthefishingboatscamehome");
        for key_length in 1..=s.len() {
            let columns = split_columns(&s, key_length).unwrap();
            assert_eq!(columns.len(), key_length);
            assert_eq!(columns.iter().map(Vec::len).sum::<usize>(), s.len());
            assert_eq!(interleave_columns(&columns), s);
        }
    }

    #[test]
    fn test_invalid_key_lengths() {
        let s = stream("abcde");
        for key_length in [0, 6, 100] {
            assert_eq!(
                recover_key(&s, key_length),
                Err(AnalysisError::InvalidKeyLength {
                    key_length,
                    stream_len: 5
                })
            );
        }
        assert!(matches!(
            recover_key(&LetterStream::default(), 1),
            Err(AnalysisError::InvalidKeyLength { .. })
        ));
    }

    #[test]
    fn test_recover_key_length_one_is_caesar() {
        // "eeee" under shift 3 reads "hhhh".
        assert_eq!(recover_key(&stream("hhhh"), 1).unwrap(), "d");
    }

    #[test]
    fn test_key_has_key_length_letters() {
        let s = stream("thequickbrownfoxjumpsoverthelazydog");
        for key_length in 1..=14 {
            let key = recover_key(&s, key_length).unwrap();
            assert_eq!(key.len(), key_length);
            assert!(key.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
