//! The frozen lookup table and its on-disk artifact.
//!
//! The table is compiled offline from one file per language and shipped
//! as a single `words.json` document. The runtime loads it once,
//! validates it, and never mutates it afterwards: concurrent readers
//! need no locking.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::base_words::BASE_WORDS;
use super::normalize::normalize;
use crate::error::SeedError;

/// Number of icon indexes every language must cover.
pub const ICON_COUNT: usize = 256;

/// One language's word lists in the artifact.
///
/// `words` has exactly 256 entries; each inner list is the accepted
/// words for that index, first element being the primary display word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageWords {
    /// Short language code, e.g. `"en"`, `"es"`, `"ja"`.
    pub code: String,
    /// Human-readable label, e.g. `"Español"`.
    pub label: String,
    /// Per-index accepted word lists.
    pub words: Vec<Vec<String>>,
}

/// The `words.json` document.
///
/// `keys` uses a sorted map so re-emitting the artifact from the same
/// inputs is byte-exact deterministic.
#[derive(Debug, Serialize, Deserialize)]
struct Artifact {
    languages: Vec<LanguageWords>,
    keys: BTreeMap<String, u8>,
}

/// Frozen mapping between words, emoji, and icon indexes.
///
/// Process-wide and immutable after load. Holds the flat key map, the
/// same keys sorted for prefix search, and per-language display lists.
pub struct LookupTable {
    keys: HashMap<String, u8>,
    sorted_keys: Vec<String>,
    languages: Vec<LanguageWords>,
    by_code: HashMap<String, usize>,
}

impl LookupTable {
    /// Loads and validates a `words.json` artifact from disk.
    ///
    /// A missing or malformed file is fatal: no degraded table is ever
    /// returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = fs::read(path.as_ref()).map_err(|e| {
            SeedError::LookupTableMissing(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_slice(&raw)
    }

    /// Parses and validates an artifact from raw JSON bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self, SeedError> {
        let artifact: Artifact = serde_json::from_slice(raw)
            .map_err(|e| SeedError::LookupTableMissing(format!("malformed artifact: {e}")))?;
        Self::from_artifact(artifact)
    }

    /// Builds the built-in English-only table from the 256 base words.
    ///
    /// Lets generation and derivation work without an artifact on disk;
    /// the artifact adds the remaining languages and the emoji keys.
    pub fn builtin() -> Self {
        let words: Vec<Vec<String>> = BASE_WORDS.iter().map(|w| vec![w.to_string()]).collect();
        let keys: BTreeMap<String, u8> = BASE_WORDS
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), i as u8))
            .collect();
        let artifact = Artifact {
            languages: vec![LanguageWords {
                code: "en".to_string(),
                label: "English".to_string(),
                words,
            }],
            keys,
        };
        Self::from_artifact(artifact).expect("built-in base words form a valid table")
    }

    fn from_artifact(artifact: Artifact) -> Result<Self, SeedError> {
        if artifact.languages.is_empty() {
            return Err(SeedError::LookupTableMissing("no languages".into()));
        }

        for lang in &artifact.languages {
            if lang.words.len() != ICON_COUNT {
                return Err(SeedError::LookupTableMissing(format!(
                    "language '{}' covers {} indexes, expected {ICON_COUNT}",
                    lang.code,
                    lang.words.len()
                )));
            }
            for (idx, words) in lang.words.iter().enumerate() {
                let primary = words.first().filter(|w| !w.is_empty()).ok_or_else(|| {
                    SeedError::LookupTableMissing(format!(
                        "language '{}' has no display word for index {idx}",
                        lang.code
                    ))
                })?;
                // Every canonical word must round-trip through the key map.
                match artifact.keys.get(&normalize(primary)) {
                    Some(&mapped) if mapped as usize == idx => {}
                    Some(&mapped) => {
                        return Err(SeedError::LookupTableMissing(format!(
                            "'{primary}' ({}) maps to index {mapped}, expected {idx}",
                            lang.code
                        )));
                    }
                    None => {
                        return Err(SeedError::LookupTableMissing(format!(
                            "primary word '{primary}' ({}) missing from key map",
                            lang.code
                        )));
                    }
                }
            }
        }

        let mut by_code = HashMap::with_capacity(artifact.languages.len());
        for (pos, lang) in artifact.languages.iter().enumerate() {
            if by_code.insert(lang.code.clone(), pos).is_some() {
                return Err(SeedError::LookupTableMissing(format!(
                    "duplicate language code '{}'",
                    lang.code
                )));
            }
        }

        // BTreeMap iteration is already lexicographic.
        let sorted_keys: Vec<String> = artifact.keys.keys().cloned().collect();
        let keys: HashMap<String, u8> = artifact.keys.into_iter().collect();

        tracing::debug!(
            entries = keys.len(),
            languages = by_code.len(),
            "Lookup table loaded"
        );

        Ok(Self {
            keys,
            sorted_keys,
            languages: artifact.languages,
            by_code,
        })
    }

    /// Exact lookup of an already-normalized key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<u8> {
        self.keys.get(key).copied()
    }

    /// All keys in lexicographic order, for prefix search.
    #[inline]
    pub(crate) fn sorted_keys(&self) -> &[String] {
        &self.sorted_keys
    }

    /// Number of lookup keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Ordered `(code, label)` pairs for every supported language.
    pub fn languages(&self) -> Vec<(String, String)> {
        self.languages
            .iter()
            .map(|l| (l.code.clone(), l.label.clone()))
            .collect()
    }

    /// Code of the first (default) language.
    pub fn default_language(&self) -> &str {
        &self.languages[0].code
    }

    /// Primary display word for an index in the given language.
    pub fn primary_word(&self, index: u8, code: &str) -> Option<&str> {
        let lang = &self.languages[*self.by_code.get(code)?];
        lang.words[index as usize].first().map(String::as_str)
    }

    /// All accepted words for an index in the given language.
    pub fn words_for(&self, index: u8, code: &str) -> Option<&[String]> {
        let lang = &self.languages[*self.by_code.get(code)?];
        Some(&lang.words[index as usize])
    }

    /// True if the language code is present in the table.
    pub fn has_language(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }
}

impl std::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTable")
            .field("entries", &self.keys.len())
            .field("languages", &self.languages.len())
            .finish()
    }
}
