//! Render units produced by verse reconstruction
//!
//! The presentation layer receives an ordered list of [`RenderUnit`]s and
//! is responsible for all visual encoding. Every unit is one of: a gap
//! between words, a stand-in for a word that could not be resolved, or an
//! annotated syllable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::serde_helpers::serialize_option_as_null;

/// Quantity marker shown above a syllable
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LengthMarker {
    /// `-`
    Long,
    /// `u`
    Short,
    /// No marker (elided syllable)
    #[serde(rename = "none")]
    Blank,
}

impl LengthMarker {
    pub fn from_length(is_long: bool) -> Self {
        if is_long {
            LengthMarker::Long
        } else {
            LengthMarker::Short
        }
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            LengthMarker::Long => Some('-'),
            LengthMarker::Short => Some('u'),
            LengthMarker::Blank => None,
        }
    }
}

/// Metrical category of a syllable
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Plain,
    /// Word accent only
    Accent,
    /// Ictus only
    Ictus,
    /// Accent and ictus on the same syllable
    Both,
    Elided,
}

impl Category {
    /// Classify a voiced syllable by its effective index.
    ///
    /// `Both` wins over the separate accent/ictus categories.
    pub fn classify(effective_index: u32, accented: &BTreeSet<u32>, icted: &BTreeSet<u32>) -> Self {
        match (accented.contains(&effective_index), icted.contains(&effective_index)) {
            (true, true) => Category::Both,
            (true, false) => Category::Accent,
            (false, true) => Category::Ictus,
            (false, false) => Category::Plain,
        }
    }

    /// The accent tick stays visible when accent and ictus coincide
    pub fn shows_accent_tick(self) -> bool {
        matches!(self, Category::Accent | Category::Both)
    }

    pub fn is_ictus(self) -> bool {
        matches!(self, Category::Ictus | Category::Both)
    }
}

/// A scanned syllable, ready for display
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyllableAnnotation {
    pub display_text: String,

    pub length_marker: LengthMarker,

    pub category: Category,

    /// A foot ends right after this syllable
    pub foot_boundary_after: bool,

    /// 1-based position among voiced syllables; null when elided
    #[serde(serialize_with = "serialize_option_as_null", default)]
    pub effective_index: Option<u32>,

    /// The syllable was marked elidable but hiatus kept it voiced
    #[serde(default)]
    pub hiatus: bool,
}

impl SyllableAnnotation {
    /// An elided syllable: no marker, no category, never ends a foot
    pub fn elided(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            length_marker: LengthMarker::Blank,
            category: Category::Elided,
            foot_boundary_after: false,
            effective_index: None,
            hiatus: false,
        }
    }

    pub fn is_elided(&self) -> bool {
        self.category == Category::Elided
    }
}

/// Stand-in for a word or variant reference that did not resolve
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderUnit {
    pub label: String,

    #[serde(serialize_with = "serialize_option_as_null", default)]
    pub word_number: Option<i64>,

    #[serde(serialize_with = "serialize_option_as_null", default)]
    pub variant_number: Option<i64>,
}

/// One element of the reconstructed verse
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderUnit {
    /// Boundary between two words; carries no metrical weight
    WordGap,
    Placeholder(PlaceholderUnit),
    Syllable(SyllableAnnotation),
}

impl RenderUnit {
    pub fn as_syllable(&self) -> Option<&SyllableAnnotation> {
        match self {
            RenderUnit::Syllable(syl) => Some(syl),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_both_takes_precedence() {
        let accented = set(&[2, 5]);
        let icted = set(&[2, 4]);
        assert_eq!(Category::classify(2, &accented, &icted), Category::Both);
        assert_eq!(Category::classify(5, &accented, &icted), Category::Accent);
        assert_eq!(Category::classify(4, &accented, &icted), Category::Ictus);
        assert_eq!(Category::classify(1, &accented, &icted), Category::Plain);
    }

    #[test]
    fn test_accent_tick_kept_for_both() {
        assert!(Category::Both.shows_accent_tick());
        assert!(Category::Accent.shows_accent_tick());
        assert!(!Category::Ictus.shows_accent_tick());
        assert!(!Category::Elided.shows_accent_tick());
    }

    #[test]
    fn test_render_unit_json_shape() {
        let unit = RenderUnit::Syllable(SyllableAnnotation::elided("que"));
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["kind"], "syllable");
        assert_eq!(json["displayText"], "que");
        assert_eq!(json["lengthMarker"], "none");
        assert_eq!(json["category"], "elided");
        assert_eq!(json["footBoundaryAfter"], false);
        assert!(json["effectiveIndex"].is_null());

        let gap = serde_json::to_value(&RenderUnit::WordGap).unwrap();
        assert_eq!(gap, serde_json::json!({"kind": "wordGap"}));
    }
}
