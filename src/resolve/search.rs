//! Prefix search for autocomplete.

use super::Resolver;
use crate::lookup::normalize;

impl Resolver<'_> {
    /// Suggests words matching a prefix.
    ///
    /// Returns up to `limit` `(word, index)` pairs in ascending word
    /// order, deduplicated by index (the first word in lexicographic
    /// order wins). Numeric prefixes enumerate the matching indexes and
    /// suggest their primary display words.
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<(String, u8)> {
        let key = normalize(prefix);
        if key.is_empty() || limit == 0 {
            return Vec::new();
        }

        if key.bytes().all(|b| b.is_ascii_digit()) {
            return self.search_numeric(&key, limit);
        }

        let sorted = self.table().sorted_keys();
        let start = sorted.partition_point(|k| k.as_str() < key.as_str());

        let mut seen = [false; 256];
        let mut results = Vec::new();
        for k in &sorted[start..] {
            if !k.starts_with(&key) {
                break;
            }
            // Index 0-255 by construction of the table.
            let idx = self.table().get(k).unwrap_or_default();
            if seen[idx as usize] {
                continue;
            }
            seen[idx as usize] = true;
            results.push((k.clone(), idx));
            if results.len() >= limit {
                break;
            }
        }

        tracing::trace!(prefix = %key, matches = results.len(), "Prefix search");
        results
    }

    fn search_numeric(&self, key: &str, limit: usize) -> Vec<(String, u8)> {
        let default_lang = self.table().default_language().to_string();
        let mut results = Vec::new();
        for idx in 0u16..=255 {
            if !idx.to_string().starts_with(key) {
                continue;
            }
            let word = self
                .table()
                .primary_word(idx as u8, &default_lang)
                .unwrap_or_default()
                .to_string();
            results.push((word, idx as u8));
            if results.len() >= limit {
                break;
            }
        }
        results
    }
}
