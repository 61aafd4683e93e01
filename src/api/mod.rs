//! Scansion Visualizer WASM API
//!
//! This module provides the JavaScript-facing API for verse reconstruction.
//! It includes shared utilities for serialization and error handling, the
//! result types handed to JavaScript, and the exported functions.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Result shapes (`RenderOutcome`, `CandidateEntry`) and their builders
//! - `core`: The `wasm_bindgen` exports

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
pub use types::{candidate_entries, render_outcome, CandidateEntry, RenderOutcome};
