//! Catalog of verses and masks
//!
//! Everything the host needs around a reconstruction: which masks can be
//! selected, the labels for lists and buttons, the details panel, and the
//! ordering of verse files by name.

pub mod files;
pub mod masks;

pub use files::{ordering_key, sort_verse_files, VerseFile, VerseListing};
pub use masks::{
    candidate_label, mask_candidates, mask_list_label, select_candidate, MaskDetails, Selection,
    VerseHeader, PLACEHOLDER,
};
