//! Seed model and generation.
//!
//! A seed is 24 or 36 icon indexes: the leading indexes are pure
//! entropy, the trailing two are a checksum over them. Generation is
//! fail-closed: the entropy pipeline must pass all four statistical
//! gates before any seed material is drawn from it.

mod checksum;
mod input;

pub use checksum::{
    compute_checksum, verify_checksum, CHECKSUM_DOMAIN, CHECKSUM_LEN, VALID_WORD_COUNTS,
};
pub use input::SeedInput;

use crate::analysis::run_tests;
use crate::entropy::EntropyPool;
use crate::error::SeedError;
use crate::lookup::LookupTable;

/// One seed slot: an icon index and its display word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedWord {
    /// Icon index, 0-255.
    pub index: u8,
    /// Primary display word in the language the seed was rendered for.
    pub word: String,
}

/// A checked, immutable seed.
///
/// Construction verifies length and checksum, so holding a `Seed` means
/// holding a valid one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Builds a seed from raw indexes, verifying length and checksum.
    pub fn from_indexes(indexes: Vec<u8>) -> Result<Self, SeedError> {
        if !VALID_WORD_COUNTS.contains(&indexes.len()) {
            return Err(SeedError::InvalidWordCount(indexes.len()));
        }
        if !verify_checksum(&indexes) {
            return Err(SeedError::ChecksumMismatch);
        }
        Ok(Self(indexes))
    }

    /// All indexes, data followed by checksum.
    #[inline]
    pub fn indexes(&self) -> &[u8] {
        &self.0
    }

    /// The entropy-carrying indexes (all but the last two).
    #[inline]
    pub fn data_indexes(&self) -> &[u8] {
        &self.0[..self.0.len() - CHECKSUM_LEN]
    }

    /// The two checksum indexes.
    #[inline]
    pub fn checksum(&self) -> &[u8] {
        &self.0[self.0.len() - CHECKSUM_LEN..]
    }

    /// Number of words in the seed.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.0.len()
    }

    /// Renders the seed as `(index, word)` pairs in the given language.
    ///
    /// Returns `None` for an unknown language code.
    pub fn words(&self, table: &LookupTable, language: &str) -> Option<Vec<SeedWord>> {
        self.0
            .iter()
            .map(|&index| {
                table.primary_word(index, language).map(|word| SeedWord {
                    index,
                    word: word.to_string(),
                })
            })
            .collect()
    }
}

impl SeedInput {
    /// Verifies the checksum of any accepted input form.
    ///
    /// Never errors: unresolvable words, bad lengths, or out-of-range
    /// indexes are all simply `false`.
    pub fn verify_checksum(&self, table: &LookupTable) -> bool {
        match self.to_indexes(table) {
            Ok(indexes) => verify_checksum(&indexes),
            Err(_) => false,
        }
    }
}

/// Configuration for seed generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Validation attempts before generation fails fatally.
    pub max_attempts: u32,
    /// Bytes drawn per validation sample. Must be large enough for the
    /// chi-squared test to see hundreds of observations per bucket
    /// group; 64 bytes is far too few.
    pub validation_sample_bytes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            validation_sample_bytes: 1024,
        }
    }
}

/// Generates validated seeds.
///
/// Owns an [`EntropyPool`] and gates every generation on the four
/// statistical tests. If validation fails on every attempt the
/// generator refuses to produce a seed: a broken RNG must surface, not
/// silently hand out output.
pub struct SeedGenerator {
    pool: EntropyPool,
    config: GeneratorConfig,
}

impl SeedGenerator {
    /// Creates a generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator with explicit configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            pool: EntropyPool::new(),
            config,
        }
    }

    /// Generates a seed and renders it in the requested language.
    ///
    /// `word_count` must be 24 or 36. `extra_entropy` is folded into the
    /// pool as the caller-supplied source. `language` defaults to the
    /// table's first language.
    pub fn generate(
        &mut self,
        table: &LookupTable,
        word_count: usize,
        extra_entropy: Option<&[u8]>,
        language: Option<&str>,
    ) -> Result<Vec<SeedWord>, SeedError> {
        if !VALID_WORD_COUNTS.contains(&word_count) {
            return Err(SeedError::InvalidWordCount(word_count));
        }

        let language = match language {
            Some(code) if table.has_language(code) => code.to_string(),
            Some(code) => {
                return Err(SeedError::LookupTableMissing(format!(
                    "unknown language '{code}'"
                )))
            }
            None => table.default_language().to_string(),
        };

        for attempt in 1..=self.config.max_attempts {
            // Validate the pipeline on a sample large enough for the
            // statistical tests to have real power, then draw the seed
            // material from the same sources.
            let sample = self
                .pool
                .extract_bytes(self.config.validation_sample_bytes, extra_entropy);
            let outcomes = run_tests(&sample);
            if let Some(failed) = outcomes.iter().find(|o| !o.passed) {
                tracing::warn!(
                    attempt,
                    test = failed.name,
                    detail = %failed.detail,
                    "Entropy validation failed, retrying"
                );
                continue;
            }

            let material = self.pool.extract(extra_entropy);
            let data = &material.as_bytes()[..word_count - CHECKSUM_LEN];
            let mut indexes = data.to_vec();
            indexes.extend_from_slice(&compute_checksum(data));

            let seed = Seed::from_indexes(indexes).expect("generated seed carries its checksum");
            tracing::debug!(word_count, attempt, "Seed generated");
            return seed
                .words(table, &language)
                .ok_or_else(|| SeedError::LookupTableMissing(format!("language '{language}'")));
        }

        tracing::error!(
            attempts = self.config.max_attempts,
            "Entropy failed validation on every attempt"
        );
        Err(SeedError::EntropyUnavailable {
            attempts: self.config.max_attempts,
        })
    }

    /// The generator's entropy pool, for diagnostics.
    pub fn pool_mut(&mut self) -> &mut EntropyPool {
        &mut self.pool
    }
}

impl Default for SeedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_seed_verifies() {
        let table = LookupTable::builtin();
        let mut generator = SeedGenerator::new();

        for count in [24, 36] {
            let words = generator.generate(&table, count, None, None).unwrap();
            assert_eq!(words.len(), count);

            let indexes: Vec<u8> = words.iter().map(|w| w.index).collect();
            assert!(verify_checksum(&indexes));

            // Every rendered word is the primary word for its index.
            for w in &words {
                assert_eq!(table.primary_word(w.index, "en"), Some(w.word.as_str()));
            }
        }
    }

    #[test]
    fn test_invalid_word_count() {
        let table = LookupTable::builtin();
        let mut generator = SeedGenerator::new();
        for count in [0, 16, 23, 25, 32, 37] {
            assert!(matches!(
                generator.generate(&table, count, None, None),
                Err(SeedError::InvalidWordCount(_))
            ));
        }
    }

    #[test]
    fn test_unknown_language_rejected() {
        let table = LookupTable::builtin();
        let mut generator = SeedGenerator::new();
        assert!(matches!(
            generator.generate(&table, 24, None, Some("zz")),
            Err(SeedError::LookupTableMissing(_))
        ));
    }

    #[test]
    fn test_extra_entropy_accepted() {
        let table = LookupTable::builtin();
        let mut generator = SeedGenerator::new();
        let words = generator
            .generate(&table, 24, Some(b"user entropy"), None)
            .unwrap();
        assert_eq!(words.len(), 24);
    }

    #[test]
    fn test_two_seeds_differ() {
        let table = LookupTable::builtin();
        let mut generator = SeedGenerator::new();
        let a = generator.generate(&table, 36, None, None).unwrap();
        let b = generator.generate(&table, 36, None, None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_from_indexes_rejects_bad_checksum() {
        let data: Vec<u8> = (100..122).collect();
        let mut indexes = data.clone();
        indexes.extend_from_slice(&compute_checksum(&data));
        indexes[23] ^= 0xFF;
        assert!(matches!(
            Seed::from_indexes(indexes),
            Err(SeedError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_seed_accessors() {
        let data: Vec<u8> = (0..34).collect();
        let mut indexes = data.clone();
        indexes.extend_from_slice(&compute_checksum(&data));
        let seed = Seed::from_indexes(indexes).unwrap();

        assert_eq!(seed.word_count(), 36);
        assert_eq!(seed.data_indexes(), data.as_slice());
        assert_eq!(seed.checksum(), compute_checksum(&data).as_slice());
    }

    #[test]
    fn test_input_checksum_never_errors() {
        let table = LookupTable::builtin();
        assert!(!SeedInput::Words(vec!["nope".into(); 24]).verify_checksum(&table));
        assert!(!SeedInput::Indexes(vec![999; 24]).verify_checksum(&table));
        assert!(!SeedInput::Indexes(vec![1; 10]).verify_checksum(&table));
    }
}
