//! Word and emoji resolution.
//!
//! Two semantic modes, deliberately kept apart:
//!
//! - **Strict**: normalization and exact table lookup only. This is the
//!   key-derivation input path: a silent misresolution must never alter
//!   what gets hashed, so nothing is guessed.
//! - **Fuzzy**: on a strict miss, walks a ladder of script-aware
//!   fallbacks (diacritic folding, article/contraction strips). Meant
//!   for recovery UIs, where the seed checksum is the safety net.

mod search;

use crate::lookup::{
    detect_script, fold_diacritics, normalize, LookupTable, Script, DEFINITE_SUFFIXES,
    MIN_STEM_CHARS,
};

/// How aggressively a lookup miss is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Normalize and look up exactly. Used before key derivation.
    Strict,
    /// Additionally try script-specific diacritic and affix fallbacks.
    Fuzzy,
}

/// Resolves words, emoji, and numeric strings to icon indexes.
pub struct Resolver<'a> {
    table: &'a LookupTable,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over a loaded table.
    pub fn new(table: &'a LookupTable) -> Self {
        Self { table }
    }

    /// Resolves a single word to its icon index, or `None`.
    pub fn resolve_one(&self, word: &str, mode: ResolveMode) -> Option<u8> {
        let key = normalize(word);
        if key.is_empty() {
            return None;
        }

        // Bare numeric index, "0" through "255".
        if key.len() <= 3 && key.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = key.parse::<u16>() {
                if n <= 255 {
                    return Some(n as u8);
                }
            }
        }

        if let Some(idx) = self.table.get(&key) {
            return Some(idx);
        }

        if mode == ResolveMode::Strict {
            return None;
        }

        for candidate in fallback_candidates(&key) {
            if let Some(idx) = self.table.get(&candidate) {
                tracing::debug!(word = %key, via = %candidate, index = idx, "Fuzzy match");
                return Some(idx);
            }
        }
        None
    }

    /// Resolves a list of words, collecting per-position failures.
    ///
    /// Returns one slot per input word (`None` where resolution failed)
    /// plus the `(position, word)` list of failures for recovery UIs.
    pub fn resolve_many<S: AsRef<str>>(
        &self,
        words: &[S],
        mode: ResolveMode,
    ) -> (Vec<Option<u8>>, Vec<(usize, String)>) {
        let mut indexes = Vec::with_capacity(words.len());
        let mut errors = Vec::new();
        for (pos, word) in words.iter().enumerate() {
            let idx = self.resolve_one(word.as_ref(), mode);
            if idx.is_none() {
                errors.push((pos, word.as_ref().to_string()));
            }
            indexes.push(idx);
        }
        (indexes, errors)
    }

    pub(crate) fn table(&self) -> &LookupTable {
        self.table
    }
}

/// Builds the ordered fuzzy fallback candidates for a normalized key.
///
/// Order matters and is fixed: diacritic fold first, then the Arabic
/// `ال` and Hebrew `ה` article strips, the Romance `l'` contraction
/// strip, and finally the definite-suffix strips. Each affix candidate
/// is also tried with the fold applied. Scripts outside the safe set
/// (Indic, Thai, CJK, ...) never fold.
fn fallback_candidates(key: &str) -> Vec<String> {
    let script = detect_script(key);
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |c: String| {
        if !c.is_empty() && c != key && !candidates.contains(&c) {
            candidates.push(c);
        }
    };

    let folded = fold_diacritics(key, script);
    push(folded.clone());

    match script {
        Script::Arabic => {
            if let Some(stem) = key.strip_prefix("ال") {
                push(stem.to_string());
                push(fold_diacritics(stem, script));
            }
        }
        Script::Hebrew => {
            if let Some(stem) = key.strip_prefix('ה') {
                push(stem.to_string());
                push(fold_diacritics(stem, script));
            }
        }
        Script::Latin => {
            for contraction in ["l'", "l\u{2019}"] {
                if let Some(stem) = key.strip_prefix(contraction) {
                    push(stem.to_string());
                    push(fold_diacritics(stem, script));
                }
            }
            for suffix in DEFINITE_SUFFIXES {
                if let Some(stem) = folded.strip_suffix(suffix) {
                    if stem.chars().count() >= MIN_STEM_CHARS {
                        push(stem.to_string());
                    }
                }
            }
        }
        _ => {}
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::BASE_WORDS;

    /// Table with the base words plus a few multilingual entries so the
    /// fallback ladder has something to hit.
    fn test_table() -> LookupTable {
        let mut keys = serde_json::Map::new();
        let mut words = Vec::new();
        for (i, w) in BASE_WORDS.iter().enumerate() {
            keys.insert(w.to_string(), serde_json::json!(i));
            words.push(vec![w.to_string()]);
        }
        // Accepted-but-not-primary extras: accented, emoji, other scripts.
        for (key, idx) in [
            ("perro", 15u8),
            ("犬", 15),
            ("собака", 15),
            ("🐕", 15),
            ("corazón", 8),
            ("coração", 8),
            ("σκύλος", 15),
            ("الكلب", 15),
            ("hunden", 15),
            ("l'ancora", 57),
        ] {
            keys.insert(key.to_string(), serde_json::json!(idx));
        }
        let raw = serde_json::json!({
            "languages": [{"code": "en", "label": "English", "words": words}],
            "keys": keys,
        });
        LookupTable::from_slice(raw.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_strict_exact_match() {
        let table = test_table();
        let r = Resolver::new(&table);
        assert_eq!(r.resolve_one("dog", ResolveMode::Strict), Some(15));
        assert_eq!(r.resolve_one("  Dog ", ResolveMode::Strict), Some(15));
    }

    #[test]
    fn test_cross_language_same_index() {
        let table = test_table();
        let r = Resolver::new(&table);
        for w in ["dog", "perro", "犬", "собака", "🐕"] {
            assert_eq!(r.resolve_one(w, ResolveMode::Strict), Some(15), "{w}");
        }
    }

    #[test]
    fn test_emoji_variation_selector() {
        let table = test_table();
        let r = Resolver::new(&table);
        assert_eq!(r.resolve_one("🐕\u{fe0f}", ResolveMode::Strict), Some(15));
    }

    #[test]
    fn test_numeric_input() {
        let table = test_table();
        let r = Resolver::new(&table);
        assert_eq!(r.resolve_one("0", ResolveMode::Strict), Some(0));
        assert_eq!(r.resolve_one("255", ResolveMode::Strict), Some(255));
        assert_eq!(r.resolve_one("256", ResolveMode::Strict), None);
    }

    #[test]
    fn test_strict_rejects_accent_stripped_form() {
        // "corazón" is registered; the bare form is not. Strict mode must
        // not invent a match by folding the query.
        let table = test_table();
        let r = Resolver::new(&table);
        assert_eq!(r.resolve_one("corazón", ResolveMode::Strict), Some(8));
        assert_eq!(r.resolve_one("corazon", ResolveMode::Strict), None);
    }

    #[test]
    fn test_fuzzy_folds_query_diacritics() {
        // Query carries an accent the table doesn't have: "hundén" folds
        // to the registered "hunden".
        let table = test_table();
        let r = Resolver::new(&table);
        assert_eq!(r.resolve_one("hundén", ResolveMode::Strict), None);
        assert_eq!(r.resolve_one("hundén", ResolveMode::Fuzzy), Some(15));
    }

    #[test]
    fn test_fuzzy_greek_tonos() {
        let table = test_table();
        let r = Resolver::new(&table);
        // σκυλος (no tonos) is not registered; the registered form has
        // the tonos, so only the exact form hits in either mode.
        assert_eq!(r.resolve_one("σκύλος", ResolveMode::Strict), Some(15));
    }

    #[test]
    fn test_fuzzy_arabic_article_strip() {
        let table = test_table();
        let r = Resolver::new(&table);
        // "والكلب" is not registered, but doesn't start with the bare
        // article; "الالكلب" strips to the registered "الكلب".
        assert_eq!(r.resolve_one("الالكلب", ResolveMode::Fuzzy), Some(15));
        assert_eq!(r.resolve_one("الالكلب", ResolveMode::Strict), None);
    }

    #[test]
    fn test_fuzzy_contraction_strip() {
        let table = test_table();
        let r = Resolver::new(&table);
        assert_eq!(r.resolve_one("l'anchor", ResolveMode::Fuzzy), None);
        // "l'hook" style: strip the contraction, hit the bare word.
        assert_eq!(r.resolve_one("l'key", ResolveMode::Fuzzy), Some(136));
    }

    #[test]
    fn test_fuzzy_suffix_strip() {
        let table = test_table();
        let r = Resolver::new(&table);
        // Swedish-style definite form of a registered word.
        assert_eq!(r.resolve_one("dogen", ResolveMode::Fuzzy), Some(15));
        assert_eq!(r.resolve_one("dogen", ResolveMode::Strict), None);
    }

    #[test]
    fn test_resolve_many_collects_errors() {
        let table = test_table();
        let r = Resolver::new(&table);
        let (indexes, errors) =
            r.resolve_many(&["dog", "???", "key"], ResolveMode::Strict);
        assert_eq!(indexes, vec![Some(15), None, Some(136)]);
        assert_eq!(errors, vec![(1, "???".to_string())]);
    }

    #[test]
    fn test_indic_never_folds() {
        let table = test_table();
        let r = Resolver::new(&table);
        // Unregistered Devanagari word stays a miss in fuzzy mode rather
        // than being mangled into a false match.
        assert_eq!(r.resolve_one("कुत्ता", ResolveMode::Fuzzy), None);
    }
}
