//! Public seed fingerprints.

use crate::error::SeedError;
use crate::lookup::LookupTable;
use crate::seed::{verify_checksum, SeedInput, CHECKSUM_LEN};

/// Computes the 8-character fingerprint of a seed.
///
/// The fingerprint is a 32-bit public identifier for visual
/// verification: enough to spot a typo, useless for recovering the
/// key. Without a passphrase it is a single HMAC over the positional
/// payload and returns instantly. With one, it runs the full KDF
/// pipeline so the fingerprint commits to both factors; expect the same
/// cost as key derivation.
pub fn fingerprint(
    table: &LookupTable,
    seed: &SeedInput,
    passphrase: &str,
) -> Result<String, SeedError> {
    let indexes = seed.to_indexes(table)?;
    if !verify_checksum(&indexes) {
        return Err(SeedError::ChecksumMismatch);
    }
    let data = &indexes[..indexes.len() - CHECKSUM_LEN];

    let leading = if passphrase.is_empty() {
        let payload = super::positional_payload(data, "");
        let prk = super::extract(&payload);
        prk[..4].to_vec()
    } else {
        let master = super::derive_from_data(data, passphrase);
        master.as_bytes()[..4].to_vec()
    };

    Ok(hex::encode_upper(leading))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::tests::test_seed_indexes;

    #[test]
    fn test_format() {
        let table = LookupTable::builtin();
        let input = SeedInput::from(test_seed_indexes().as_slice());
        let fp = fingerprint(&table, &input, "").unwrap();
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_deterministic() {
        let table = LookupTable::builtin();
        let input = SeedInput::from(test_seed_indexes().as_slice());
        assert_eq!(
            fingerprint(&table, &input, "").unwrap(),
            fingerprint(&table, &input, "").unwrap()
        );
    }

    #[test]
    fn test_seed_change_changes_fingerprint() {
        let table = LookupTable::builtin();
        let mut other = test_seed_indexes();
        // Swap two data indexes and recompute the checksum so both
        // seeds are valid but differ.
        other.swap(0, 1);
        let data = other[..34].to_vec();
        other[34..].copy_from_slice(&crate::seed::compute_checksum(&data));

        let a = fingerprint(&table, &SeedInput::from(test_seed_indexes().as_slice()), "").unwrap();
        let b = fingerprint(&table, &SeedInput::from(other.as_slice()), "").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_checksum_gate() {
        let table = LookupTable::builtin();
        let mut indexes = test_seed_indexes();
        indexes[0] ^= 0x10;
        let input = SeedInput::from(indexes.as_slice());
        assert!(matches!(
            fingerprint(&table, &input, ""),
            Err(SeedError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_passphrase_changes_fingerprint() {
        // Runs the full KDF once; slow but covers the second factor.
        let table = LookupTable::builtin();
        let input = SeedInput::from(test_seed_indexes().as_slice());
        let plain = fingerprint(&table, &input, "").unwrap();
        let secured = fingerprint(&table, &input, "hunter2").unwrap();
        assert_eq!(secured.len(), 8);
        assert_ne!(plain, secured);
    }
}
