//! Seed checksum engine.
//!
//! The last two bytes of every seed are the leading bytes of an
//! HMAC-SHA-256 over the data indexes, keyed with the v2 checksum
//! domain. A single transcription error is caught with probability
//! 1 − 2⁻¹⁶.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Domain separator keying the checksum HMAC. Frozen for v2.
pub const CHECKSUM_DOMAIN: &[u8] = b"universal-seed-v2-checksum";

/// Number of checksum bytes appended to a seed.
pub const CHECKSUM_LEN: usize = 2;

/// Seed lengths the checksum engine accepts.
pub const VALID_WORD_COUNTS: [usize; 2] = [24, 36];

/// Computes the two checksum bytes over the data indexes.
pub fn compute_checksum(data_indexes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut mac =
        HmacSha256::new_from_slice(CHECKSUM_DOMAIN).expect("HMAC accepts any key length");
    mac.update(data_indexes);
    let digest = mac.finalize().into_bytes();
    [digest[0], digest[1]]
}

/// Verifies a full seed's trailing checksum.
///
/// Never errors: a seed of invalid length is simply `false`.
pub fn verify_checksum(full_seed: &[u8]) -> bool {
    if !VALID_WORD_COUNTS.contains(&full_seed.len()) {
        return false;
    }
    let (data, checksum) = full_seed.split_at(full_seed.len() - CHECKSUM_LEN);
    compute_checksum(data).as_slice() == checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(len: usize) -> Vec<u8> {
        (0..len as u8).collect()
    }

    #[test]
    fn test_round_trip() {
        for data_len in [22, 34] {
            let data = sample_data(data_len);
            let mut seed = data.clone();
            seed.extend_from_slice(&compute_checksum(&data));
            assert!(verify_checksum(&seed));
        }
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let data = sample_data(22);
        assert_eq!(compute_checksum(&data), compute_checksum(&data));
    }

    #[test]
    fn test_any_flipped_byte_detected() {
        let data = sample_data(34);
        let mut seed = data.clone();
        seed.extend_from_slice(&compute_checksum(&data));

        for pos in 0..seed.len() {
            let mut corrupted = seed.clone();
            corrupted[pos] ^= 0x01;
            assert!(
                !verify_checksum(&corrupted),
                "flip at position {pos} not detected"
            );
        }
    }

    #[test]
    fn test_invalid_length_is_false() {
        assert!(!verify_checksum(&[]));
        assert!(!verify_checksum(&sample_data(16)));
        assert!(!verify_checksum(&sample_data(32)));
        assert!(!verify_checksum(&sample_data(37)));
    }

    #[test]
    fn test_position_matters() {
        // Swapping two data bytes must change the checksum.
        let mut data = sample_data(22);
        let original = compute_checksum(&data);
        data.swap(0, 1);
        assert_ne!(compute_checksum(&data), original);
    }
}
