//! Hardened key derivation.
//!
//! Six layers stand between a seed and its master key:
//!
//! ```text
//! verify ── checksum must match before anything is derived
//! bind ──── each index is committed to its slot position
//! mix ───── optional passphrase appended, raw UTF-8, no normalization
//! extract ─ HKDF-Extract (HMAC-SHA-512) collapses the payload to a PRK
//! stretch ─ PBKDF2-SHA-512 (600k rounds) then Argon2id (64 MiB, t=3)
//! expand ── HKDF-Expand derives the 64-byte master key
//! ```
//!
//! Every constant here is frozen for v2. Changing any of them breaks
//! cross-implementation compatibility and requires a new domain
//! separator, not an edit.

mod estimate;
mod fingerprint;
mod profile;

pub use estimate::entropy_bits;
pub use fingerprint::fingerprint;
pub use profile::{derive_profile, ProfileKey};

use std::time::Instant;

use argon2::{Algorithm, Argon2, Params, Version};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::error::SeedError;
use crate::lookup::LookupTable;
use crate::seed::{verify_checksum, SeedInput, CHECKSUM_LEN};

/// v2 domain separator. Keys HKDF-Extract and prefixes every derived
/// salt and info string.
pub const DOMAIN: &[u8] = b"universal-seed-v2";

const PBKDF2_SALT: &[u8] = b"universal-seed-v2-stretch-pbkdf2";
const PBKDF2_ROUNDS: u32 = 600_000;

const ARGON2_SALT: &[u8] = b"universal-seed-v2-stretch-argon2id";
const ARGON2_TIME: u32 = 3;
const ARGON2_MEMORY_KIB: u32 = 65536;
const ARGON2_LANES: u32 = 4;

const EXPAND_INFO: &[u8] = b"universal-seed-v2-master";

/// Length of every derived key, in bytes.
pub const KEY_LEN: usize = 64;

/// A derived 64-byte master key.
///
/// The first half is conventionally an encryption key and the second an
/// authentication key; the whole value can also feed further
/// derivation. Zeroed on drop.
#[derive(Clone)]
pub struct MasterKey([u8; KEY_LEN]);

impl MasterKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// The full 64 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Conventional encryption half (first 32 bytes).
    #[inline]
    pub fn encryption_key(&self) -> &[u8] {
        &self.0[..32]
    }

    /// Conventional authentication half (last 32 bytes).
    #[inline]
    pub fn authentication_key(&self) -> &[u8] {
        &self.0[32..]
    }
}

impl Drop for MasterKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey").finish_non_exhaustive()
    }
}

/// Derives the master key from a seed and optional passphrase.
///
/// Words resolve in strict mode; the checksum must verify; the
/// passphrase participates byte-for-byte as typed. Expect one to a few
/// seconds of wall clock and a 64 MiB peak: that cost is the point.
pub fn derive_master_key(
    table: &LookupTable,
    seed: &SeedInput,
    passphrase: &str,
) -> Result<MasterKey, SeedError> {
    let indexes = seed.to_indexes(table)?;
    if !verify_checksum(&indexes) {
        return Err(SeedError::ChecksumMismatch);
    }
    let data = &indexes[..indexes.len() - CHECKSUM_LEN];
    Ok(derive_from_data(data, passphrase))
}

/// The pure pipeline over already-verified data indexes.
pub(crate) fn derive_from_data(data_indexes: &[u8], passphrase: &str) -> MasterKey {
    let started = Instant::now();

    let payload = positional_payload(data_indexes, passphrase);
    let prk = extract(&payload);

    // Stage 1: PBKDF2-SHA512.
    let mut stage1 = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha512>(prk.as_ref(), PBKDF2_SALT, PBKDF2_ROUNDS, stage1.as_mut());

    // Stage 2: Argon2id over the PBKDF2 output. An attacker has to beat
    // both cost functions in series.
    let params = Params::new(ARGON2_MEMORY_KIB, ARGON2_TIME, ARGON2_LANES, Some(KEY_LEN))
        .expect("frozen Argon2 parameters are valid");
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let mut stage2 = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(stage1.as_ref(), ARGON2_SALT, stage2.as_mut())
        .expect("frozen Argon2 parameters are valid");

    // Expand with domain separation.
    let hk = Hkdf::<Sha512>::from_prk(stage2.as_ref()).expect("PRK is a full digest");
    let mut okm = [0u8; KEY_LEN];
    hk.expand(EXPAND_INFO, &mut okm)
        .expect("64 bytes is a valid HKDF-Expand length");

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Master key derived"
    );
    MasterKey::from_bytes(okm)
}

/// Builds the position-bound payload: `(pos, index)` byte pairs, then
/// the raw passphrase bytes. An empty passphrase appends nothing, which
/// makes it identical to no passphrase at all.
pub(crate) fn positional_payload(data_indexes: &[u8], passphrase: &str) -> Zeroizing<Vec<u8>> {
    let mut payload = Zeroizing::new(Vec::with_capacity(
        data_indexes.len() * 2 + passphrase.len(),
    ));
    for (pos, &index) in data_indexes.iter().enumerate() {
        payload.push(pos as u8);
        payload.push(index);
    }
    payload.extend_from_slice(passphrase.as_bytes());
    payload
}

/// HKDF-Extract over SHA-512 with the v2 domain as salt.
pub(crate) fn extract(payload: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
    let (prk, _) = Hkdf::<Sha512>::extract(Some(DOMAIN), payload);
    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    out.copy_from_slice(&prk);
    out
}

/// Describes the KDF pipeline for display in about screens.
pub fn kdf_info() -> String {
    format!(
        "HKDF-SHA512 extract + PBKDF2-SHA512 ({PBKDF2_ROUNDS} rounds) + \
         Argon2id (mem={ARGON2_MEMORY_KIB}KiB, t={ARGON2_TIME}, p={ARGON2_LANES}) + \
         HKDF-SHA512 expand"
    )
}
