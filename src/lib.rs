//! Universal Seed Library
//!
//! Visual + multilingual seed phrases with hardened key derivation.
//! A seed is a sequence of 24 or 36 icon indexes (0-255), recordable as
//! words in any supported language, as emoji, or as bare numbers. The
//! library verifies the built-in checksum, derives a 64-byte master key
//! from the seed and an optional passphrase, and derives independent
//! profile keys for hidden accounts.
//!
//! # Architecture
//!
//! ```text
//! generation:  entropy → analysis (validate or retry) → seed → lookup
//! derivation:  resolve (strict) → seed (verify) → derive → master key
//!                                                    ↓
//!                                      profiles / fingerprint
//! ```
//!
//! # Design Principles
//!
//! - **Fail-closed**: no seed is generated from entropy that failed the
//!   statistical gates; no key is derived from a seed that failed its
//!   checksum.
//! - **Strict by default**: the key-derivation path never guesses.
//!   Fuzzy word matching exists for recovery UIs, where the checksum is
//!   the safety net.
//! - **Frozen constants**: the v2 domain separator and every KDF
//!   parameter are a compatibility contract, not tuning knobs.
//!
//! # Example
//!
//! ```no_run
//! use universal_seed::{
//!     derive_master_key, derive_profile, fingerprint,
//!     LookupTable, SeedGenerator, SeedInput,
//! };
//!
//! let table = LookupTable::builtin();
//! let mut generator = SeedGenerator::new();
//!
//! // Generate a 36-word seed and show its fingerprint.
//! let words = generator.generate(&table, 36, None, None).unwrap();
//! let input = SeedInput::Pairs(words);
//! println!("{}", fingerprint(&table, &input, "").unwrap());
//!
//! // Derive the master key and a hidden profile.
//! let master = derive_master_key(&table, &input, "correct horse").unwrap();
//! let hidden = derive_profile(&master, "business");
//! let _ = hidden.as_bytes();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod derive;
pub mod entropy;
pub mod error;
pub mod lookup;
pub mod resolve;
pub mod seed;

// Re-export commonly used types at crate root
pub use analysis::{verify_randomness, CheckConfig, RandomnessReport};
pub use derive::{
    derive_master_key, derive_profile, entropy_bits, fingerprint, kdf_info, MasterKey, ProfileKey,
};
pub use entropy::{EntropyPool, EntropySample, MouseEntropyPool};
pub use error::SeedError;
pub use lookup::LookupTable;
pub use resolve::{ResolveMode, Resolver};
pub use seed::{
    compute_checksum, verify_checksum, GeneratorConfig, Seed, SeedGenerator, SeedInput, SeedWord,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
