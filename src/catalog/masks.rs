//! Mask candidates, selection and the labels shown around a reconstruction

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::error::ScansionError;
use crate::models::serde_helpers::as_text;
use crate::models::{Mask, Verse};

/// Shown wherever a value is absent
pub const PLACEHOLDER: &str = "—";

/// Masks offered for reconstruction: those with a non-blank verse type
pub fn mask_candidates(verse: &Verse) -> Vec<&Mask> {
    verse.masks().iter().filter(|m| m.is_candidate()).collect()
}

/// Outcome of picking a candidate mask
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'v> {
    Mask(&'v Mask),
    /// The verse has no candidate masks
    NothingToRender,
}

/// Pick the `index`-th candidate mask
pub fn select_candidate(verse: &Verse, index: usize) -> Result<Selection<'_>, ScansionError> {
    let candidates = mask_candidates(verse);
    if candidates.is_empty() {
        log::warn!("No prosodic masks with a non-blank verse type");
        return Ok(Selection::NothingToRender);
    }
    candidates
        .get(index)
        .copied()
        .map(Selection::Mask)
        .ok_or(ScansionError::MaskIndexOutOfRange {
            index,
            available: candidates.len(),
        })
}

fn verse_type_or_placeholder(mask: &Mask) -> &str {
    mask.verse_type_label().unwrap_or(PLACEHOLDER)
}

/// Entry in the list of all masks: `#n • type • ls / du • count`
pub fn mask_list_label(mask: &Mask) -> String {
    format!(
        "#{} • {} • {} / {} • {}",
        mask.mask_number.unwrap_or(-1),
        verse_type_or_placeholder(mask),
        mask.pattern(),
        mask.pattern_dash_u(),
        mask.syllable_count.unwrap_or(0)
    )
}

/// Label of a candidate's selection button: `type • ls / du`
pub fn candidate_label(mask: &Mask) -> String {
    format!(
        "{} • {} / {}",
        verse_type_or_placeholder(mask),
        mask.pattern(),
        mask.pattern_dash_u()
    )
}

fn join_positions(positions: &BTreeSet<u32>) -> String {
    if positions.is_empty() {
        return PLACEHOLDER.to_string();
    }
    positions
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::Array(items) if items.is_empty() => PLACEHOLDER.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| as_text(item).unwrap_or_else(|| item.to_string()))
            .collect::<Vec<_>>()
            .join(", "),
        other => as_text(other).unwrap_or_else(|| other.to_string()),
    }
}

/// The details panel for the selected mask
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaskDetails {
    pub mask_ls: String,
    pub mask_du: String,
    pub verse_type: String,
    pub ictus_positions: String,
    pub accented_positions: String,
    pub accent_ictus_intersection: String,
    pub syllable_count: String,
}

impl MaskDetails {
    pub fn from_mask(mask: &Mask) -> Self {
        Self {
            mask_ls: mask.pattern().to_string(),
            mask_du: mask.pattern_dash_u(),
            verse_type: verse_type_or_placeholder(mask).to_string(),
            ictus_positions: join_positions(&mask.icted_syllables),
            accented_positions: join_positions(&mask.accented_syllables),
            accent_ictus_intersection: display_value(&mask.accent_ictus_intersection),
            syllable_count: mask
                .syllable_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

/// Verse header: text, Collatinus metadata and counts
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerseHeader {
    pub text: String,
    pub collatinus_scan: String,
    pub collatinus_accentuate: String,
    pub word_count: i64,
    /// All masks, candidates or not
    pub mask_count: usize,
    pub mask_labels: Vec<String>,
}

impl VerseHeader {
    pub fn from_verse(verse: &Verse) -> Self {
        let or_placeholder =
            |s: &Option<String>| s.clone().unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            text: verse
                .text
                .clone()
                .unwrap_or_else(|| "(no verse text)".to_string()),
            collatinus_scan: or_placeholder(&verse.collatinus_scan),
            collatinus_accentuate: or_placeholder(&verse.collatinus_accentuate),
            word_count: verse.word_count.unwrap_or(0),
            mask_count: verse.masks().len(),
            mask_labels: verse.masks().iter().map(mask_list_label).collect(),
        }
    }
}
