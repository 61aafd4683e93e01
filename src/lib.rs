//! Latin Verse Scansion WASM Module
//!
//! Reconstructs a scanned Latin verse for display. Given a verse's words,
//! their syllabification variants and a chosen prosodic mask, it computes
//! for every syllable its effective metrical position, elision/hiatus
//! status, ictus and word accent, and where feet end.

pub mod api;
pub mod catalog;
pub mod error;
pub mod html_layout;
pub mod models;
pub mod scansion;

// Re-export commonly used types
pub use error::ScansionError;
pub use models::{Mask, Syllable, Variant, Verse, Word, WordVariantRef};
pub use scansion::{reconstruct, Category, LengthMarker, Reconstruction, RenderUnit, SyllableAnnotation};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("Logger already initialized");
        }
    }

    log::info!("Scansion WASM module initialized");
}
