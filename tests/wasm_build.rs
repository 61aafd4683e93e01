//! WASM build test
//!
//! Exercises the JavaScript-facing exports in a browser.

#![cfg(target_arch = "wasm32")]

use applautus_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const VERSE_JSON: &str = include_str!("fixtures/7_word_syllable_verse-mask_metre-matching.json");

#[wasm_bindgen_test]
fn test_mask_to_dash_u() {
    assert_eq!(mask_to_dash_u_js("llsSL"), "--uu-");
}

#[wasm_bindgen_test]
fn test_reconstruct_from_json_text() {
    let result = reconstruct_verse_json(VERSE_JSON, 0);
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_bad_json_is_rejected() {
    assert!(reconstruct_verse_json("{", 0).is_err());
}

#[wasm_bindgen_test]
fn test_render_html_with_default_config() {
    let verse_js = js_sys::JSON::parse(VERSE_JSON).unwrap();
    let html = render_verse_html(verse_js, 1, JsValue::UNDEFINED).unwrap();
    assert!(html.contains("syl both accent"));
}

#[wasm_bindgen_test]
fn test_verse_file_key() {
    assert_eq!(verse_file_key("7_word_syllable_verse-mask_metre-matching.json"), Some(7));
    assert_eq!(verse_file_key("notes.txt"), None);
}
