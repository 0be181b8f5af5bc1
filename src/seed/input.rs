//! Accepted seed input shapes.

use crate::error::SeedError;
use crate::lookup::LookupTable;
use crate::resolve::{ResolveMode, Resolver};
use crate::seed::checksum::VALID_WORD_COUNTS;
use crate::seed::SeedWord;

/// The three input forms accepted by seed-consuming operations.
///
/// Every form must reduce to 24 or 36 icon indexes; words always
/// resolve in strict mode so that no fuzzy guess can alter what gets
/// derived.
#[derive(Debug, Clone)]
pub enum SeedInput {
    /// `(index, word)` pairs as returned by generation.
    Pairs(Vec<SeedWord>),
    /// Words or emoji in any supported language.
    Words(Vec<String>),
    /// Raw integer indexes; values above 255 are rejected.
    Indexes(Vec<u16>),
}

impl SeedInput {
    /// Reduces the input to raw icon indexes.
    ///
    /// Checks the word count and index range and strict-resolves words.
    /// Does not verify the checksum: callers decide whether a failure
    /// is a `bool` (`verify_checksum`) or an error (derivation).
    pub fn to_indexes(&self, table: &LookupTable) -> Result<Vec<u8>, SeedError> {
        let indexes = match self {
            SeedInput::Pairs(pairs) => pairs.iter().map(|p| p.index).collect(),
            SeedInput::Indexes(raw) => {
                let mut out = Vec::with_capacity(raw.len());
                for &value in raw {
                    if value > 255 {
                        return Err(SeedError::InvalidIndex(value));
                    }
                    out.push(value as u8);
                }
                out
            }
            SeedInput::Words(words) => {
                let resolver = Resolver::new(table);
                let (indexes, errors) = resolver.resolve_many(words, ResolveMode::Strict);
                if let Some((position, word)) = errors.into_iter().next() {
                    return Err(SeedError::Unresolvable { position, word });
                }
                indexes.into_iter().flatten().collect()
            }
        };

        if !VALID_WORD_COUNTS.contains(&indexes.len()) {
            return Err(SeedError::InvalidWordCount(indexes.len()));
        }
        Ok(indexes)
    }
}

impl From<Vec<SeedWord>> for SeedInput {
    fn from(pairs: Vec<SeedWord>) -> Self {
        SeedInput::Pairs(pairs)
    }
}

impl From<Vec<String>> for SeedInput {
    fn from(words: Vec<String>) -> Self {
        SeedInput::Words(words)
    }
}

impl From<&[&str]> for SeedInput {
    fn from(words: &[&str]) -> Self {
        SeedInput::Words(words.iter().map(|w| w.to_string()).collect())
    }
}

impl From<Vec<u16>> for SeedInput {
    fn from(indexes: Vec<u16>) -> Self {
        SeedInput::Indexes(indexes)
    }
}

impl From<&[u8]> for SeedInput {
    fn from(indexes: &[u8]) -> Self {
        SeedInput::Indexes(indexes.iter().map(|&i| i as u16).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::checksum::compute_checksum;

    fn valid_indexes() -> Vec<u8> {
        let data: Vec<u8> = (0..22).collect();
        let mut seed = data.clone();
        seed.extend_from_slice(&compute_checksum(&data));
        seed
    }

    #[test]
    fn test_indexes_round_trip() {
        let table = LookupTable::builtin();
        let seed = valid_indexes();
        let input = SeedInput::from(seed.as_slice());
        assert_eq!(input.to_indexes(&table).unwrap(), seed);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let table = LookupTable::builtin();
        let mut raw: Vec<u16> = valid_indexes().iter().map(|&i| i as u16).collect();
        raw[3] = 300;
        let input = SeedInput::from(raw);
        assert!(matches!(
            input.to_indexes(&table),
            Err(SeedError::InvalidIndex(300))
        ));
    }

    #[test]
    fn test_wrong_count_rejected() {
        let table = LookupTable::builtin();
        let input = SeedInput::Indexes(vec![1; 16]);
        assert!(matches!(
            input.to_indexes(&table),
            Err(SeedError::InvalidWordCount(16))
        ));
    }

    #[test]
    fn test_words_resolve_strictly() {
        let table = LookupTable::builtin();
        let seed = valid_indexes();
        let words: Vec<String> = seed
            .iter()
            .map(|&i| table.primary_word(i, "en").unwrap().to_string())
            .collect();
        let input = SeedInput::from(words);
        assert_eq!(input.to_indexes(&table).unwrap(), seed);
    }

    #[test]
    fn test_unresolvable_word_carries_position() {
        let table = LookupTable::builtin();
        let mut words: Vec<String> = valid_indexes()
            .iter()
            .map(|&i| table.primary_word(i, "en").unwrap().to_string())
            .collect();
        words[5] = "zzznotaword".to_string();
        let input = SeedInput::from(words);
        match input.to_indexes(&table) {
            Err(SeedError::Unresolvable { position, word }) => {
                assert_eq!(position, 5);
                assert_eq!(word, "zzznotaword");
            }
            other => panic!("expected Unresolvable, got {other:?}"),
        }
    }
}
