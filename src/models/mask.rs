//! Prosodic masks
//!
//! A mask is one complete scansion of the verse: the heavy/light pattern,
//! which variant of each word it uses, and where ictus, word accent, foot
//! boundaries and hiatus fall. Positions are 1-based effective syllable
//! indices, counting voiced syllables only.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use super::quantity::mask_to_dash_u;
use super::serde_helpers::{lenient_index_set, lenient_integer, lenient_text, lenient_vec};

/// One (word, variant) selection in a mask's `word-variant` sequence
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordVariantRef {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub word: Option<i64>,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub variant: Option<i64>,
}

impl WordVariantRef {
    pub fn new(word: i64, variant: i64) -> Self {
        Self {
            word: Some(word),
            variant: Some(variant),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Mask {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub mask_number: Option<i64>,

    /// Metre label; only masks with a non-blank label are offered for display
    #[serde(default, deserialize_with = "lenient_text")]
    pub verse_type: Option<String>,

    /// Heavy/light pattern over `l`, `L`, `s`, `S`
    #[serde(default, deserialize_with = "lenient_text")]
    pub prosodic_mask: Option<String>,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub syllable_count: Option<i64>,

    #[serde(default, rename = "word-variant", deserialize_with = "lenient_vec")]
    pub word_variant: Vec<WordVariantRef>,

    #[serde(default, deserialize_with = "lenient_index_set")]
    pub icted_syllables: BTreeSet<u32>,

    #[serde(default, deserialize_with = "lenient_index_set")]
    pub accented_syllables: BTreeSet<u32>,

    /// Precomputed accent/ictus overlap, kept verbatim for display
    #[serde(default)]
    pub accent_ictus_intersection: Value,

    #[serde(default, deserialize_with = "lenient_index_set")]
    pub foot_boundary_after: BTreeSet<u32>,

    #[serde(default, deserialize_with = "lenient_index_set")]
    pub hiatus_after: BTreeSet<u32>,
}

impl Mask {
    /// Raw mask string, `""` when absent
    pub fn pattern(&self) -> &str {
        self.prosodic_mask.as_deref().unwrap_or("")
    }

    /// Mask string in `-`/`u` notation
    pub fn pattern_dash_u(&self) -> String {
        mask_to_dash_u(self.pattern())
    }

    /// Trimmed verse type, `None` when absent or blank
    pub fn verse_type_label(&self) -> Option<&str> {
        self.verse_type
            .as_deref()
            .map(str::trim)
            .filter(|vt| !vt.is_empty())
    }

    pub fn is_candidate(&self) -> bool {
        self.verse_type_label().is_some()
    }

    /// Nothing to scan: no pattern or no word selections
    pub fn is_empty(&self) -> bool {
        self.pattern().is_empty() || self.word_variant.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_reads_hyphenated_sequence() {
        let json = r#"{
            "mask_number": 3,
            "verse_type": " ia6 ",
            "prosodic_mask": "lsl",
            "word-variant": [{"word": 1, "variant": 2}, {"word": "3", "variant": 1.0}],
            "icted_syllables": [2, "4"],
            "hiatus_after": null
        }"#;
        let mask: Mask = serde_json::from_str(json).unwrap();
        assert_eq!(mask.word_variant, vec![WordVariantRef::new(1, 2), WordVariantRef::new(3, 1)]);
        assert_eq!(mask.icted_syllables.iter().copied().collect::<Vec<_>>(), vec![2]);
        assert!(mask.hiatus_after.is_empty());
        assert_eq!(mask.verse_type_label(), Some("ia6"));
        assert!(mask.is_candidate());
        assert!(!mask.is_empty());
    }

    #[test]
    fn test_blank_verse_type_is_not_candidate() {
        let blank: Mask = serde_json::from_str(r#"{"verse_type": "   "}"#).unwrap();
        let missing: Mask = serde_json::from_str(r#"{"verse_type": null}"#).unwrap();
        assert!(!blank.is_candidate());
        assert!(!missing.is_candidate());
    }

    #[test]
    fn test_empty_mask() {
        let no_pattern: Mask =
            serde_json::from_str(r#"{"word-variant": [{"word": 1, "variant": 1}]}"#).unwrap();
        let no_words: Mask = serde_json::from_str(r#"{"prosodic_mask": "ll"}"#).unwrap();
        assert!(no_pattern.is_empty());
        assert!(no_words.is_empty());
    }
}
