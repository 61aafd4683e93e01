//! Unit resolver: mask word/variant selections to ordered syllable units
//!
//! Word and variant tables are indexed once per verse. A reference that
//! does not resolve yields a unit with no syllables and a synthetic label,
//! so one bad reference never aborts the rest of the verse.

use std::collections::HashMap;

use crate::models::{Syllable, Variant, Verse, Word, WordVariantRef};

/// A resolved word: its label and the chosen variant's syllables in order
#[derive(Debug, Clone, PartialEq)]
pub struct SyllableUnit<'v> {
    pub word_number: Option<i64>,
    pub variant_number: Option<i64>,
    /// Word text, or a `[missing ...]` label when unresolved
    pub label: String,
    /// Sorted by `syllable_number`; empty when unresolved
    pub syllables: Vec<&'v Syllable>,
}

struct WordEntry<'v> {
    word: &'v Word,
    variants: HashMap<i64, &'v Variant>,
}

/// Word/variant lookup tables for one verse
pub struct VerseIndex<'v> {
    words: HashMap<i64, WordEntry<'v>>,
}

impl<'v> VerseIndex<'v> {
    /// Index every numbered word and variant. Later duplicates win.
    pub fn new(verse: &'v Verse) -> Self {
        let words = verse
            .words
            .iter()
            .filter_map(|word| {
                let number = word.word_number?;
                let variants = word
                    .variants
                    .iter()
                    .filter_map(|v| v.variant_number.map(|n| (n, v)))
                    .collect();
                Some((number, WordEntry { word, variants }))
            })
            .collect();

        Self { words }
    }

    /// Resolve a whole word-variant sequence, preserving its order
    pub fn resolve(&self, sequence: &[WordVariantRef]) -> Vec<SyllableUnit<'v>> {
        sequence.iter().map(|pair| self.resolve_one(*pair)).collect()
    }

    pub fn resolve_one(&self, pair: WordVariantRef) -> SyllableUnit<'v> {
        let WordVariantRef { word, variant } = pair;

        let Some(entry) = word.and_then(|n| self.words.get(&n)) else {
            log::warn!("Mask references missing word #{}", number_label(word));
            return SyllableUnit {
                word_number: word,
                variant_number: variant,
                label: format!("[missing word #{}]", number_label(word)),
                syllables: Vec::new(),
            };
        };

        let Some(chosen) = variant.and_then(|n| entry.variants.get(&n)) else {
            log::warn!(
                "Word #{} has no variant #{}",
                number_label(word),
                number_label(variant)
            );
            return SyllableUnit {
                word_number: word,
                variant_number: variant,
                label: format!(
                    "{}[missing variant #{}]",
                    entry.word.text.as_deref().unwrap_or("[word]"),
                    number_label(variant)
                ),
                syllables: Vec::new(),
            };
        };

        let mut syllables: Vec<&Syllable> = chosen.syllables.iter().collect();
        syllables.sort_by_key(|syl| syl.order_key());

        SyllableUnit {
            word_number: word,
            variant_number: variant,
            label: entry.word.text.clone().unwrap_or_default(),
            syllables,
        }
    }
}

fn number_label(n: Option<i64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string())
}
