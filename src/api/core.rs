//! WASM API for verse reconstruction
//!
//! JavaScript passes verse objects (or raw JSON text) and a candidate
//! index; results come back as plain objects. Every function here is a
//! thin wrapper around the pure Rust API.

use wasm_bindgen::prelude::*;

use super::helpers::{
    deserialize_or_default, scansion_error, serialize, verse_from_js,
};
use super::types::{candidate_entries, render_outcome, RenderOutcome};
use crate::catalog::{ordering_key, sort_verse_files, VerseHeader};
use crate::html_layout::{render_markup, MarkupConfig};
use crate::models::{mask_to_dash_u, Verse};
use crate::{wasm_info, wasm_log, wasm_warn};

fn log_outcome(outcome: &RenderOutcome) {
    match outcome {
        RenderOutcome::Rendered { reconstruction, .. } => wasm_log!(
            "  {} units, {} voiced syllables",
            reconstruction.units.len(),
            reconstruction.voiced_syllables
        ),
        RenderOutcome::NothingToRender => {
            wasm_warn!("No prosodic masks with a non-null verse_type found")
        }
    }
}

/// Reconstruct a verse for the `maskIndex`-th candidate mask
///
/// # Parameters
/// - `verse_js`: verse object as read from the scansion file
/// - `mask_index`: index into the candidate list (see `listMaskCandidates`)
///
/// # Returns
/// `{status: "rendered", reconstruction, details}` or `{status: "nothingToRender"}`
#[wasm_bindgen(js_name = reconstructVerse)]
pub fn reconstruct_verse(verse_js: JsValue, mask_index: usize) -> Result<JsValue, JsValue> {
    wasm_info!("reconstructVerse called: mask_index={}", mask_index);

    let verse = verse_from_js(verse_js)?;
    let outcome = render_outcome(&verse, mask_index).map_err(scansion_error)?;
    log_outcome(&outcome);

    serialize(&outcome, "Reconstruction serialization error")
}

/// Same as `reconstructVerse`, taking the scansion file's JSON text
#[wasm_bindgen(js_name = reconstructVerseJson)]
pub fn reconstruct_verse_json(json: &str, mask_index: usize) -> Result<JsValue, JsValue> {
    wasm_info!("reconstructVerseJson called: {} bytes, mask_index={}", json.len(), mask_index);

    let verse = Verse::from_json(json).map_err(scansion_error)?;
    let outcome = render_outcome(&verse, mask_index).map_err(scansion_error)?;
    log_outcome(&outcome);

    serialize(&outcome, "Reconstruction serialization error")
}

/// Render the reconstruction as an HTML fragment
///
/// Returns an empty string when the verse has no candidate masks.
/// `config_js` may be undefined to use the default markup classes.
#[wasm_bindgen(js_name = renderVerseHtml)]
pub fn render_verse_html(
    verse_js: JsValue,
    mask_index: usize,
    config_js: JsValue,
) -> Result<String, JsValue> {
    wasm_info!("renderVerseHtml called: mask_index={}", mask_index);

    let verse = verse_from_js(verse_js)?;
    let config: MarkupConfig = deserialize_or_default(config_js, "Markup config deserialization error")?;

    match render_outcome(&verse, mask_index).map_err(scansion_error)? {
        RenderOutcome::Rendered { reconstruction, .. } => {
            Ok(render_markup(&reconstruction.units, &config))
        }
        RenderOutcome::NothingToRender => {
            wasm_warn!("renderVerseHtml: nothing to render");
            Ok(String::new())
        }
    }
}

/// Selectable masks with their button labels
#[wasm_bindgen(js_name = listMaskCandidates)]
pub fn list_mask_candidates(verse_js: JsValue) -> Result<JsValue, JsValue> {
    let verse = verse_from_js(verse_js)?;
    let entries = candidate_entries(&verse);
    wasm_log!("listMaskCandidates: {} candidates", entries.len());
    serialize(&entries, "Candidate serialization error")
}

/// Verse text, Collatinus metadata, counts and the list of all masks
#[wasm_bindgen(js_name = verseHeader)]
pub fn verse_header(verse_js: JsValue) -> Result<JsValue, JsValue> {
    let verse = verse_from_js(verse_js)?;
    serialize(&VerseHeader::from_verse(&verse), "Header serialization error")
}

/// Convert an `l`/`s` mask to `-`/`u` notation
#[wasm_bindgen(js_name = maskToDashU)]
pub fn mask_to_dash_u_js(mask: &str) -> String {
    mask_to_dash_u(mask)
}

/// Ordering key of a verse file name, undefined if it isn't a verse file
#[wasm_bindgen(js_name = verseFileKey)]
pub fn verse_file_key(name: &str) -> Option<u32> {
    ordering_key(name).and_then(|key| u32::try_from(key).ok())
}

/// Keep verse file names and sort them by their numeric key
///
/// # Parameters
/// - `names`: array of file names; non-string entries are ignored
#[wasm_bindgen(js_name = sortVerseFiles)]
pub fn sort_verse_files_js(names: js_sys::Array) -> Result<JsValue, JsValue> {
    let names: Vec<String> = names.iter().filter_map(|v| v.as_string()).collect();
    let files = sort_verse_files(&names);
    wasm_log!("sortVerseFiles: {} of {} names are verse files", files.len(), names.len());
    serialize(&files, "File list serialization error")
}
