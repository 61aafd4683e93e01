//! HTML Layout
//!
//! Turns reconstructed render units into an HTML fragment for hosts that
//! display markup directly instead of building their own DOM.

pub mod markup;

pub use markup::{chip_classes, html_escape, render_markup, syllable_title, MarkupConfig};
