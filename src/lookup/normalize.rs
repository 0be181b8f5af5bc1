//! Unicode normalization and script-aware folding.
//!
//! Every lookup key and every query string passes through the same
//! pipeline: NFKC, invisible-character removal, Unicode lowercasing.
//! Diacritic folding is a separate step gated on the detected script;
//! strict-mode resolution never applies it.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Zero-width and invisible characters stripped from all input.
///
/// Covers ZWSP..RLM, soft hyphen, CGJ, ALM, BOM, the word-joiner block,
/// the Mongolian vowel separator, and variation selectors (so different
/// renderings of the same emoji resolve identically).
fn is_invisible(c: char) -> bool {
    matches!(c,
        '\u{200b}'..='\u{200f}'
        | '\u{00ad}'
        | '\u{034f}'
        | '\u{061c}'
        | '\u{feff}'
        | '\u{2060}'..='\u{2064}'
        | '\u{180e}'
        | '\u{fe00}'..='\u{fe0f}')
}

/// Normalizes a word for lookup.
///
/// NFKC (full-width → regular, ligatures → letters), invisible-character
/// removal, Unicode lowercase. This is the whole of strict-mode
/// normalization; fuzzy fallbacks build on top of it.
pub fn normalize(word: &str) -> String {
    word.trim()
        .nfkc()
        .filter(|c| !is_invisible(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Writing systems the resolver distinguishes.
///
/// Only the first five ever have diacritics folded. Combining marks in
/// Indic scripts and Thai change meaning and are always preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Arabic,
    Hebrew,
    Thai,
    Devanagari,
    Bengali,
    Gurmukhi,
    Tamil,
    Telugu,
    Cjk,
    Hangul,
    Kana,
    Other,
}

impl Script {
    /// Whether stripping combining marks is safe for this script.
    pub fn allows_diacritic_fold(self) -> bool {
        matches!(
            self,
            Script::Latin | Script::Greek | Script::Cyrillic | Script::Arabic | Script::Hebrew
        )
    }
}

/// Codepoint ranges per script. Kept as data so adding a script is a
/// table edit, not new logic.
const SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0041, 0x005A, Script::Latin),
    (0x0061, 0x007A, Script::Latin),
    (0x00C0, 0x024F, Script::Latin),
    (0x1E00, 0x1EFF, Script::Latin),
    (0x0370, 0x03FF, Script::Greek),
    (0x1F00, 0x1FFF, Script::Greek),
    (0x0400, 0x052F, Script::Cyrillic),
    (0x0590, 0x05FF, Script::Hebrew),
    (0x0600, 0x06FF, Script::Arabic),
    (0x0750, 0x077F, Script::Arabic),
    (0x0900, 0x097F, Script::Devanagari),
    (0x0980, 0x09FF, Script::Bengali),
    (0x0A00, 0x0A7F, Script::Gurmukhi),
    (0x0B80, 0x0BFF, Script::Tamil),
    (0x0C00, 0x0C7F, Script::Telugu),
    (0x0E00, 0x0E7F, Script::Thai),
    (0x3040, 0x30FF, Script::Kana),
    (0x3400, 0x4DBF, Script::Cjk),
    (0x4E00, 0x9FFF, Script::Cjk),
    (0xAC00, 0xD7AF, Script::Hangul),
    (0x1100, 0x11FF, Script::Hangul),
];

fn script_of(c: char) -> Script {
    let cp = c as u32;
    for &(lo, hi, script) in SCRIPT_RANGES {
        if (lo..=hi).contains(&cp) {
            return script;
        }
    }
    Script::Other
}

/// Detects the primary script of a word by majority vote over its
/// alphabetic characters.
pub fn detect_script(word: &str) -> Script {
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        let s = script_of(c);
        if s == Script::Other {
            continue;
        }
        match counts.iter_mut().find(|(sc, _)| *sc == s) {
            Some((_, n)) => *n += 1,
            None => counts.push((s, 1)),
        }
    }
    counts
        .into_iter()
        .max_by_key(|&(_, n)| n)
        .map(|(s, _)| s)
        .unwrap_or(Script::Other)
}

/// Latin characters that NFKD alone does not decompose.
const LATIN_FOLDS: &[(char, &str)] = &[
    ('ß', "ss"),
    ('ø', "o"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('ð', "d"),
    ('þ', "th"),
    ('ł', "l"),
    ('đ', "d"),
];

/// Removes optional diacritics from an already-normalized word.
///
/// Latin accents, Greek tonos, Arabic tashkeel, Hebrew niqqud, and the
/// Cyrillic ё→е substitution all reduce to "decompose, drop combining
/// marks, recompose" after the per-script replacements. Scripts outside
/// the safe set are returned unchanged.
pub fn fold_diacritics(word: &str, script: Script) -> String {
    if !script.allows_diacritic_fold() {
        return word.to_string();
    }

    let mut result = String::with_capacity(word.len());
    for c in word.chars() {
        match script {
            Script::Latin => {
                if let Some(&(_, repl)) = LATIN_FOLDS.iter().find(|&&(from, _)| from == c) {
                    result.push_str(repl);
                    continue;
                }
                result.push(c);
            }
            Script::Cyrillic if c == 'ё' => result.push('е'),
            _ => result.push(c),
        }
    }

    result
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .nfc()
        .collect()
}

/// Definite-article suffixes tried by fuzzy resolution, longest first.
///
/// Covers the Scandinavian (-en/-et/-a/-n/-t), Icelandic (-urinn/-inn/-ið/-in),
/// and Romanian (-ul/-ua/-le/-lui) noun endings. Applied only to
/// Latin-script words with at least three characters of stem remaining.
pub const DEFINITE_SUFFIXES: &[&str] = &[
    "urinn", "arna", "erne", "inn", "ene", "lui", "en", "et", "ið", "in", "ul", "ua", "le", "a",
    "n", "t",
];

/// Minimum stem length for a suffix strip to be attempted.
pub const MIN_STEM_CHARS: usize = 3;
