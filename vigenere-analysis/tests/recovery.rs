//! End-to-end key recovery on real English text.
//!
//! The fixture is a fixed 683-letter passage; the keys below are the ones
//! this estimator resolves exactly on it.

use vigenere_analysis::{
    decrypt, encrypt, estimate_key_length, estimate_key_length_with, recover_key, AnalysisConfig,
    AnalysisError, Analyzer, LetterStream, ScanBound,
};

const HARBOUR: &str = include_str!("data/harbour.txt");
const PANGRAM: &str = "thequickbrownfoxjumpsoverthelazydog";

fn cipher_stream(plaintext: &str, key: &str) -> LetterStream {
    LetterStream::from_text(&encrypt(plaintext, key).unwrap())
}

// ---------------------------------------------------------------------------
// Key length
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_has_enough_letters() {
    assert_eq!(LetterStream::from_text(HARBOUR).len(), 683);
}

#[test]
fn test_estimate_key_length_on_english_text() {
    for key in ["lemon", "cargo", "crypto", "rustacean"] {
        let stream = cipher_stream(HARBOUR, key);
        assert_eq!(estimate_key_length(&stream), Ok(key.len()), "key {key}");
    }
}

#[test]
fn test_natural_bound_agrees_on_fixture() {
    let config = AnalysisConfig::default().with_scan_bound(ScanBound::Natural);
    for key in ["lemon", "crypto", "rustacean"] {
        let stream = cipher_stream(HARBOUR, key);
        assert_eq!(estimate_key_length_with(&stream, &config), Ok(key.len()), "key {key}");
    }
}

#[test]
fn test_key_length_scores_peak_at_multiples() {
    let stream = cipher_stream(HARBOUR, "lemon");
    let analyzer = Analyzer::default();
    let scores = analyzer.analyze(&stream).unwrap().scores.unwrap();
    let five = scores.coincidences(5).unwrap();
    let ten = scores.coincidences(10).unwrap();
    for score in scores.scores() {
        if score.key_length % 5 != 0 {
            assert!(score.coincidences < ten, "{score:?}");
        }
    }
    assert!(five > ten);
}

// ---------------------------------------------------------------------------
// Key recovery
// ---------------------------------------------------------------------------

#[test]
fn test_recover_key_from_pangram() {
    let plaintext = PANGRAM.repeat(6);
    let stream = cipher_stream(&plaintext, "key");
    assert!(stream.len() >= 200);
    assert_eq!(recover_key(&stream, 3).unwrap(), "key");
}

#[test]
fn test_recover_key_on_english_text() {
    for key in ["lemon", "cargo", "crypto", "rustacean"] {
        let stream = cipher_stream(HARBOUR, key);
        assert_eq!(recover_key(&stream, key.len()).unwrap(), key);
    }
}

#[test]
fn test_solve_and_decrypt() {
    let ciphertext = encrypt(HARBOUR, "crypto").unwrap();
    let stream = LetterStream::from_text(&ciphertext);

    let solution = Analyzer::default().analyze(&stream).unwrap();
    assert_eq!(solution.key_length, 6);
    assert_eq!(solution.key, "crypto");
    assert_eq!(decrypt(&ciphertext, &solution.key).unwrap(), HARBOUR);
}

#[test]
fn test_formatting_is_ignored_by_analysis() {
    let ciphertext = encrypt(HARBOUR, "cargo").unwrap();
    let squashed: String = ciphertext.chars().filter(|c| c.is_ascii_lowercase()).collect();
    assert_eq!(
        LetterStream::from_text(&ciphertext),
        LetterStream::new(squashed).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_insufficient_ciphertext() {
    let stream = LetterStream::from_text("XYZ 123!");
    assert!(stream.is_empty());

    let err = estimate_key_length(&stream).unwrap_err();
    assert!(err.is_insufficient_input());

    let err = recover_key(&stream, 3).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InvalidKeyLength {
            key_length: 3,
            stream_len: 0
        }
    );
    assert!(!err.is_insufficient_input());
}
