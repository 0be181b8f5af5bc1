//! Multi-source entropy collection.
//!
//! The pool mixes eight independent source classes through SHA-512,
//! which acts as a randomness extractor: the output is uniformly
//! distributed as long as *any* source carries real entropy. A final
//! OS-CSPRNG fold makes the floor provable: the result is never weaker
//! than the system CSPRNG alone.
//!
//! Two of the sources (the paired CSPRNG calls) usually read the same
//! OS pool through different call paths; that is defense in depth
//! against a broken binding, not independent entropy.

mod jitter;
mod mouse;

pub use mouse::MouseEntropyPool;

use std::time::Instant;

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha512};

/// Domain prefix for all pool hashing.
pub(crate) const ENTROPY_DOMAIN: &[u8] = b"universal-seed-v2";

/// Validated 64-byte output of the entropy pool.
///
/// Expected to pass the four statistical gates in [`crate::analysis`];
/// seed generation enforces that before use.
#[derive(Clone)]
pub struct EntropySample([u8; 64]);

impl EntropySample {
    /// The sample bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl std::fmt::Debug for EntropySample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropySample").finish_non_exhaustive()
    }
}

/// Mixes the eight source classes into uniform output.
///
/// Stateless between extractions: every call re-collects all sources,
/// but extraction counts are tracked for diagnostics.
pub struct EntropyPool {
    total_extractions: u64,
}

impl EntropyPool {
    /// Creates a new pool.
    pub fn new() -> Self {
        Self {
            total_extractions: 0,
        }
    }

    /// Extracts 64 bytes of mixed entropy.
    ///
    /// `extra` is the optional caller-supplied source (e.g. a
    /// [`MouseEntropyPool`] digest).
    pub fn extract(&mut self, extra: Option<&[u8]>) -> EntropySample {
        EntropySample(self.collect(extra))
    }

    /// Extracts an arbitrary number of mixed bytes.
    ///
    /// Sizes beyond one digest are produced by counter-chained SHA-512
    /// expansion of a single collection pass.
    pub fn extract_bytes(&mut self, n: usize, extra: Option<&[u8]>) -> Vec<u8> {
        let digest = self.collect(extra);
        if n <= 64 {
            return digest[..n].to_vec();
        }

        let mut out = Vec::with_capacity(n + 64);
        let mut prev: Vec<u8> = Vec::new();
        let mut counter: u8 = 1;
        while out.len() < n {
            let mut h = Sha512::new();
            h.update(&prev);
            h.update(digest);
            h.update([counter]);
            prev = h.finalize().to_vec();
            out.extend_from_slice(&prev);
            counter = counter.wrapping_add(1);
        }
        out.truncate(n);
        out
    }

    /// Total extractions performed.
    pub fn total_extractions(&self) -> u64 {
        self.total_extractions
    }

    /// One full collection pass over all sources.
    fn collect(&mut self, extra: Option<&[u8]>) -> [u8; 64] {
        let mut hasher = Sha512::new();

        // Source 1: OS CSPRNG, primary call path.
        let mut csprng_a = [0u8; 64];
        OsRng.fill_bytes(&mut csprng_a);
        absorb(&mut hasher, &csprng_a);

        // Source 2: OS CSPRNG through a separate syscall path.
        let mut csprng_b = [0u8; 64];
        getrandom::getrandom(&mut csprng_b).expect("OS CSPRNG unavailable");
        absorb(&mut hasher, &csprng_b);

        // Source 3: monotonic clock LSBs. The low bits carry hardware
        // timer noise that stays unpredictable even to an attacker who
        // controls the OS CSPRNG.
        let origin = Instant::now();
        let mut ticks = [0u8; 32 * 8];
        for i in 0..32 {
            let ns = origin.elapsed().as_nanos() as u64;
            ticks[i * 8..(i + 1) * 8].copy_from_slice(&ns.to_le_bytes());
        }
        absorb(&mut hasher, &ticks);

        // Source 4: process-level uniqueness.
        absorb(&mut hasher, &std::process::id().to_le_bytes());

        // Sources 5-7: timing jitter classes.
        absorb(&mut hasher, &jitter::cpu_jitter());
        absorb(&mut hasher, &jitter::thread_jitter());
        absorb(&mut hasher, &jitter::hardware_fold());

        // Source 8: caller-supplied.
        if let Some(bytes) = extra {
            absorb(&mut hasher, bytes);
        }

        // Mandatory final CSPRNG fold: output is at minimum as strong
        // as the system CSPRNG alone.
        let mut fold = [0u8; 32];
        OsRng.fill_bytes(&mut fold);
        absorb(&mut hasher, &fold);

        self.total_extractions += 1;
        tracing::trace!(
            extraction = self.total_extractions,
            extra_bytes = extra.map_or(0, <[u8]>::len),
            "Entropy pool extraction"
        );

        hasher.finalize().into()
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Absorbs one length-prefixed segment, so segment boundaries cannot
/// shift under concatenation.
fn absorb(hasher: &mut Sha512, segment: &[u8]) {
    hasher.update((segment.len() as u64).to_le_bytes());
    hasher.update(segment);
}
