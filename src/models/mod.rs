//! Models module for the scansion visualizer
//!
//! This module contains the verse and mask records as they arrive from
//! the scansion files, read leniently into typed structures.

pub mod mask;
pub mod quantity;
pub mod serde_helpers;
pub mod verse;

// Re-export commonly used types
pub use mask::{Mask, WordVariantRef};
pub use quantity::{mask_to_dash_u, parse_mask, Quantity};
pub use verse::{MaskCollection, Syllable, Variant, Verse, Word};
