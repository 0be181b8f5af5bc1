//! Crate-level error type.
//!
//! Every failure surfaced by the public API maps to one of these kinds.
//! Nothing is recovered silently: a checksum mismatch or a failed strict
//! lookup always aborts the operation that hit it.

use thiserror::Error;

/// Errors surfaced by seed generation, word resolution, and key derivation.
#[derive(Debug, Clone, Error)]
pub enum SeedError {
    /// Seed length is not 24 or 36 words.
    #[error("word count must be 24 or 36, got {0}")]
    InvalidWordCount(usize),

    /// An icon index fell outside the valid 0-255 range.
    #[error("icon index {0} outside 0-255")]
    InvalidIndex(u16),

    /// A word failed strict-mode lookup. Carries the offending word and
    /// its position so recovery UIs can point at the exact slot.
    #[error("unresolvable word '{word}' at position {position}")]
    Unresolvable {
        /// Zero-based slot of the word that failed.
        position: usize,
        /// The word as the caller supplied it.
        word: String,
    },

    /// The last two seed bytes do not match the computed checksum.
    #[error("seed checksum mismatch")]
    ChecksumMismatch,

    /// The entropy pipeline failed statistical validation on every
    /// attempt. Generation refuses to fall back to unvalidated output.
    #[error("entropy failed validation {attempts} consecutive times; RNG may be compromised")]
    EntropyUnavailable {
        /// How many full collection attempts were rejected.
        attempts: u32,
    },

    /// The lookup-table artifact is unavailable or malformed.
    #[error("lookup table unavailable: {0}")]
    LookupTableMissing(String),
}
