//! Error types for scansion reconstruction
//!
//! Irregular data below the verse and mask level never produces an error;
//! it degrades to placeholders and defaults. Only an unreadable document or
//! an invalid mask selection is reported.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScansionError {
    /// The verse document is not valid JSON
    #[error("Invalid verse JSON: {0}")]
    InvalidJson(String),

    /// A candidate index past the end of the candidate list
    #[error("Mask index {index} out of range ({available} candidates)")]
    MaskIndexOutOfRange { index: usize, available: usize },
}
