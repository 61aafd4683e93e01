//! Verse reconstruction
//!
//! Turns a verse and one of its masks into an ordered list of render
//! units. Resolution (`resolver`) picks the mask's variant of each word;
//! annotation (`annotator`) assigns effective indices and classifies each
//! syllable. The whole transform is a pure function of its inputs.

pub mod annotator;
pub mod resolver;
pub mod units;

pub use annotator::{annotate, Annotation, MetricalPositions};
pub use resolver::{SyllableUnit, VerseIndex};
pub use units::{Category, LengthMarker, PlaceholderUnit, RenderUnit, SyllableAnnotation};

use serde::{Deserialize, Serialize};

use crate::models::{Mask, Verse};

/// A reconstructed verse for one mask
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reconstruction {
    pub units: Vec<RenderUnit>,

    pub voiced_syllables: u32,

    /// Mask as written (`l`/`s`)
    pub mask_ls: String,

    /// Mask in `-`/`u` notation
    pub mask_du: String,

    pub ictus_positions: Vec<u32>,

    pub accent_positions: Vec<u32>,
}

/// Reconstruct `verse` under `mask`.
///
/// An empty mask (no pattern, or no word selections) yields no units.
pub fn reconstruct(verse: &Verse, mask: &Mask) -> Reconstruction {
    let annotation = if mask.is_empty() {
        log::debug!("Mask {:?} is empty, nothing to annotate", mask.mask_number);
        Annotation {
            units: Vec::new(),
            voiced_syllables: 0,
        }
    } else {
        let index = VerseIndex::new(verse);
        let units = index.resolve(&mask.word_variant);
        annotate(&units, &MetricalPositions::from_mask(mask))
    };

    Reconstruction {
        units: annotation.units,
        voiced_syllables: annotation.voiced_syllables,
        mask_ls: mask.pattern().to_string(),
        mask_du: mask.pattern_dash_u(),
        ictus_positions: mask.icted_syllables.iter().copied().collect(),
        accent_positions: mask.accented_syllables.iter().copied().collect(),
    }
}
