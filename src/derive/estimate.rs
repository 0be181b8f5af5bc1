//! Security-level estimation.

use crate::error::SeedError;
use crate::seed::{CHECKSUM_LEN, VALID_WORD_COUNTS};

/// Estimates the total entropy of a seed plus passphrase, in bits.
///
/// The seed contributes 8 bits per data index: 176 for a 24-word seed,
/// 272 for 36 (the two checksum words carry none). The passphrase
/// contribution models the keyspace an attacker must search knowing
/// which character classes were used but not the characters:
/// `chars × log2(alphabet)`, where the alphabet is the sum of the
/// classes present (26 lowercase, 26 uppercase, 10 digits, 33 ASCII
/// symbols, a conservative 100 for anything non-ASCII).
pub fn entropy_bits(word_count: usize, passphrase: &str) -> Result<f64, SeedError> {
    if !VALID_WORD_COUNTS.contains(&word_count) {
        return Err(SeedError::InvalidWordCount(word_count));
    }
    let seed_bits = ((word_count - CHECKSUM_LEN) * 8) as f64;

    if passphrase.is_empty() {
        return Ok(seed_bits);
    }

    let mut alphabet = 0u32;
    if passphrase.chars().any(|c| c.is_lowercase()) {
        alphabet += 26;
    }
    if passphrase.chars().any(|c| c.is_uppercase()) {
        alphabet += 26;
    }
    if passphrase.chars().any(|c| c.is_numeric()) {
        alphabet += 10;
    }
    if passphrase
        .chars()
        .any(|c| c.is_ascii() && !c.is_alphanumeric())
    {
        alphabet += 33;
    }
    if passphrase.chars().any(|c| !c.is_ascii()) {
        alphabet += 100;
    }

    if alphabet == 0 {
        return Ok(seed_bits);
    }

    let per_char = f64::from(alphabet).log2();
    Ok(seed_bits + per_char * passphrase.chars().count() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_only() {
        assert_eq!(entropy_bits(24, "").unwrap(), 176.0);
        assert_eq!(entropy_bits(36, "").unwrap(), 272.0);
    }

    #[test]
    fn test_invalid_count() {
        assert!(matches!(
            entropy_bits(32, ""),
            Err(SeedError::InvalidWordCount(32))
        ));
    }

    #[test]
    fn test_digits_only() {
        // log2(10) ≈ 3.32 bits per character
        let bits = entropy_bits(24, "1234").unwrap();
        assert!((bits - (176.0 + 4.0 * 10f64.log2())).abs() < 1e-9);
    }

    #[test]
    fn test_character_classes_widen_alphabet() {
        let lower = entropy_bits(24, "abcd").unwrap();
        let mixed = entropy_bits(24, "abCD").unwrap();
        let mixed_digits = entropy_bits(24, "abC1").unwrap();
        let symbols = entropy_bits(24, "ab!1").unwrap();
        assert!(lower < mixed);
        assert!(mixed < mixed_digits);
        // Symbol class (33) outweighs the uppercase class (26).
        assert!(mixed_digits < symbols);
    }

    #[test]
    fn test_unicode_counts_chars_not_bytes() {
        // Four characters, twelve UTF-8 bytes.
        let bits = entropy_bits(24, "ねこねこ").unwrap();
        let expected = 176.0 + 4.0 * 100f64.log2();
        assert!((bits - expected).abs() < 1e-9);
    }

    #[test]
    fn test_longer_passphrase_more_bits() {
        let short = entropy_bits(36, "abc").unwrap();
        let long = entropy_bits(36, "abcdef").unwrap();
        assert!(long > short);
    }
}
