//! User-driven entropy from cursor movement.

use std::collections::HashSet;
use std::time::Instant;

use sha2::{Digest, Sha512};

use super::ENTROPY_DOMAIN;

/// Collects entropy from unique cursor positions.
///
/// Each accepted sample absorbs `(x, y, timestamp)` into a rolling
/// SHA-512 state, plus the deltas to the previous sample, which carry
/// the micro-movement jitter. Repeated positions are rejected outright: no
/// movement, no entropy.
///
/// The 2-bits-per-sample counter is a deliberately conservative display
/// convention for progress UIs. The entropy actually extracted is
/// bounded by the SHA-512 mixing, and nothing security-relevant gates
/// on the counter.
///
/// Not internally synchronized: callers must serialize `add_sample` and
/// `digest`.
pub struct MouseEntropyPool {
    hasher: Sha512,
    origin: Instant,
    seen: HashSet<(i32, i32)>,
    last: Option<(i32, i32, u64)>,
    samples: u64,
}

impl MouseEntropyPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        let mut hasher = Sha512::new();
        hasher.update(ENTROPY_DOMAIN);
        hasher.update(b"-mouse-entropy");
        Self {
            hasher,
            origin: Instant::now(),
            seen: HashSet::new(),
            last: None,
            samples: 0,
        }
    }

    /// Adds a cursor position sample with high-resolution timing.
    ///
    /// Returns `true` if the position was new and absorbed, `false` if
    /// it was a repeat (no state change).
    pub fn add_sample(&mut self, x: i32, y: i32) -> bool {
        if !self.seen.insert((x, y)) {
            return false;
        }
        let t = self.origin.elapsed().as_nanos() as u64;

        self.hasher.update(x.to_le_bytes());
        self.hasher.update(y.to_le_bytes());
        self.hasher.update(t.to_le_bytes());

        if let Some((lx, ly, lt)) = self.last {
            self.hasher.update(x.wrapping_sub(lx).to_le_bytes());
            self.hasher.update(y.wrapping_sub(ly).to_le_bytes());
            self.hasher.update(t.wrapping_sub(lt).to_le_bytes());
        }

        self.last = Some((x, y, t));
        self.samples += 1;
        true
    }

    /// Conservative entropy estimate: ~2 bits per unique sample.
    pub fn bits_collected(&self) -> u64 {
        self.samples * 2
    }

    /// Number of unique samples absorbed.
    pub fn sample_count(&self) -> u64 {
        self.samples
    }

    /// Extracts the collected entropy as 64 bytes.
    ///
    /// Snapshots the rolling state; the pool keeps collecting.
    pub fn digest(&self) -> [u8; 64] {
        self.hasher.clone().finalize().into()
    }

    /// Clears the pool and starts fresh.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MouseEntropyPool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MouseEntropyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseEntropyPool")
            .field("samples", &self.samples)
            .field("bits_collected", &self.bits_collected())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_samples_accepted() {
        let mut pool = MouseEntropyPool::new();
        assert!(pool.add_sample(10, 20));
        assert!(pool.add_sample(11, 20));
        assert_eq!(pool.sample_count(), 2);
        assert_eq!(pool.bits_collected(), 4);
    }

    #[test]
    fn test_repeat_position_rejected() {
        let mut pool = MouseEntropyPool::new();
        assert!(pool.add_sample(10, 20));
        assert!(!pool.add_sample(10, 20));
        assert_eq!(pool.sample_count(), 1);
    }

    #[test]
    fn test_revisited_position_rejected() {
        // Not just consecutive repeats: any previously seen position.
        let mut pool = MouseEntropyPool::new();
        assert!(pool.add_sample(10, 20));
        assert!(pool.add_sample(30, 40));
        assert!(!pool.add_sample(10, 20));
        assert_eq!(pool.sample_count(), 2);
    }

    #[test]
    fn test_digest_changes_with_samples() {
        let mut pool = MouseEntropyPool::new();
        let empty = pool.digest();
        pool.add_sample(1, 2);
        assert_ne!(pool.digest(), empty);
    }

    #[test]
    fn test_digest_is_snapshot() {
        let mut pool = MouseEntropyPool::new();
        pool.add_sample(1, 2);
        let first = pool.digest();
        assert_eq!(pool.digest(), first);
        pool.add_sample(3, 4);
        assert_ne!(pool.digest(), first);
    }

    #[test]
    fn test_reset() {
        let mut pool = MouseEntropyPool::new();
        pool.add_sample(1, 2);
        pool.reset();
        assert_eq!(pool.sample_count(), 0);
        assert!(pool.add_sample(1, 2));
    }
}
