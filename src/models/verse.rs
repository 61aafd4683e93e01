//! Verse records: words, their scansion variants, and syllables
//!
//! A verse file carries the verse text, one entry per word with every
//! syllabification variant the analyser produced, and the candidate
//! prosodic masks (see `mask.rs`).

use serde::{Deserialize, Serialize};

use super::mask::Mask;
use super::serde_helpers::{lenient_bool, lenient_integer, lenient_or_default, lenient_text, lenient_vec};
use crate::error::ScansionError;

/// One analysed verse.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Verse {
    /// Full verse text
    #[serde(default, rename = "verse", deserialize_with = "lenient_text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub word_count: Option<i64>,

    /// Collatinus scansion string, display only
    #[serde(default, deserialize_with = "lenient_text")]
    pub collatinus_scan: Option<String>,

    /// Collatinus accentuation string, display only
    #[serde(default, deserialize_with = "lenient_text")]
    pub collatinus_accentuate: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub words: Vec<Word>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub prosodic_masks: MaskCollection,
}

impl Verse {
    /// Parse a verse document from JSON text
    pub fn from_json(json: &str) -> Result<Self, ScansionError> {
        serde_json::from_str(json).map_err(|e| ScansionError::InvalidJson(e.to_string()))
    }

    /// All masks in file order, candidates or not
    pub fn masks(&self) -> &[Mask] {
        &self.prosodic_masks.masks
    }
}

/// The `prosodic_masks` wrapper object
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MaskCollection {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub masks: Vec<Mask>,
}

/// A word of the verse with its alternative syllabifications
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Word {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub word_number: Option<i64>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub variants: Vec<Variant>,
}

/// One syllabification of a word
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Variant {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub variant_number: Option<i64>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub syllables: Vec<Syllable>,
}

/// A syllable as produced by the analyser.
///
/// `length` and `elision` are normalized to booleans when read.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Syllable {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub syllable_number: Option<i64>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,

    /// Long (heavy) when true
    #[serde(default, deserialize_with = "lenient_bool")]
    pub length: bool,

    /// Elidable before the next word
    #[serde(default, deserialize_with = "lenient_bool")]
    pub elision: bool,
}

impl Syllable {
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Sort key; syllables without a number go last
    pub(crate) fn order_key(&self) -> i64 {
        self.syllable_number.unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_flags_normalized() {
        let json = r#"{"syllable_number": "2", "text": "mi", "length": "Y", "elision": 0}"#;
        let syl: Syllable = serde_json::from_str(json).unwrap();
        assert_eq!(syl.syllable_number, Some(2));
        assert!(syl.length);
        assert!(!syl.elision);
    }

    #[test]
    fn test_normalized_syllable_reads_back_the_same() {
        let json = r#"{"text": "que", "length": "nope", "elision": "yes"}"#;
        let syl: Syllable = serde_json::from_str(json).unwrap();
        let again: Syllable = serde_json::from_str(&serde_json::to_string(&syl).unwrap()).unwrap();
        assert_eq!(syl, again);
        assert!(!again.length);
        assert!(again.elision);
    }

    #[test]
    fn test_irregular_shapes_degrade() {
        let json = r#"{
            "verse": "arma virumque",
            "word_count": "two",
            "words": [
                7,
                {"word_number": 1, "text": "arma", "variants": null},
                {"word_number": 2.0, "text": 42, "variants": [{"variant_number": 1, "syllables": "none"}]}
            ],
            "prosodic_masks": []
        }"#;
        let verse = Verse::from_json(json).unwrap();
        assert_eq!(verse.text.as_deref(), Some("arma virumque"));
        assert_eq!(verse.word_count, None);
        assert_eq!(verse.words.len(), 2);
        assert!(verse.words[0].variants.is_empty());
        assert_eq!(verse.words[1].word_number, Some(2));
        assert_eq!(verse.words[1].text.as_deref(), Some("42"));
        assert!(verse.words[1].variants[0].syllables.is_empty());
        assert!(verse.masks().is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = Verse::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ScansionError::InvalidJson(_)));
    }
}
