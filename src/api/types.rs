//! Shared types for the WASM API
//!
//! Result shapes handed to JavaScript. They are built by plain Rust
//! functions so the host contract can be tested without a browser.

use serde::{Deserialize, Serialize};

use crate::catalog::{candidate_label, mask_candidates, select_candidate, MaskDetails, Selection};
use crate::error::ScansionError;
use crate::models::Verse;
use crate::models::serde_helpers::serialize_option_as_null;
use crate::scansion::{reconstruct, Reconstruction};

/// Result of reconstructing a verse for a selected candidate
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RenderOutcome {
    Rendered {
        reconstruction: Reconstruction,
        details: MaskDetails,
    },
    /// No mask has a verse type; there is nothing to show
    NothingToRender,
}

/// One selectable mask
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEntry {
    /// Position in the candidate list, used to select it
    pub index: usize,

    #[serde(serialize_with = "serialize_option_as_null", default)]
    pub mask_number: Option<i64>,

    pub label: String,
}

/// Reconstruct the `index`-th candidate mask of `verse`
pub fn render_outcome(verse: &Verse, index: usize) -> Result<RenderOutcome, ScansionError> {
    Ok(match select_candidate(verse, index)? {
        Selection::Mask(mask) => RenderOutcome::Rendered {
            reconstruction: reconstruct(verse, mask),
            details: MaskDetails::from_mask(mask),
        },
        Selection::NothingToRender => RenderOutcome::NothingToRender,
    })
}

pub fn candidate_entries(verse: &Verse) -> Vec<CandidateEntry> {
    mask_candidates(verse)
        .into_iter()
        .enumerate()
        .map(|(index, mask)| CandidateEntry {
            index,
            mask_number: mask.mask_number,
            label: candidate_label(mask),
        })
        .collect()
}
