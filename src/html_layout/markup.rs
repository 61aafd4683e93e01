//! Verse markup
//!
//! Renders reconstructed units as HTML. Each syllable is a column with its
//! quantity marker above a chip; chip classes carry the metrical category
//! (`accent`, `icted`, `both accent`, `elide`). Styling lives in the host's
//! stylesheet.

use serde::{Deserialize, Serialize};

use crate::scansion::{Category, LengthMarker, PlaceholderUnit, RenderUnit, SyllableAnnotation};

/// Class names and glyphs used when rendering markup
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Class of the wrapping element
    pub container_class: String,

    pub word_gap_class: String,

    /// Marker above long syllables
    pub long_marker: String,

    /// Marker above short syllables
    pub short_marker: String,

    /// Marker row content when there is no marker (raw HTML)
    pub blank_marker: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            container_class: "ap-verse".to_string(),
            word_gap_class: "word-gap".to_string(),
            long_marker: "-".to_string(),
            short_marker: "u".to_string(),
            blank_marker: "&nbsp;".to_string(),
        }
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Chip classes for a category
pub fn chip_classes(category: Category) -> &'static str {
    match category {
        Category::Plain => "syl",
        Category::Accent => "syl accent",
        Category::Ictus => "syl icted",
        Category::Both => "syl both accent",
        Category::Elided => "syl elide",
    }
}

/// Human-readable traits of a syllable, e.g. `long, accent, ictus`
pub fn syllable_title(syllable: &SyllableAnnotation) -> Vec<&'static str> {
    if syllable.is_elided() {
        return vec!["elision"];
    }

    let mut bits = vec![match syllable.length_marker {
        LengthMarker::Long => "long",
        _ => "short",
    }];
    if syllable.category.shows_accent_tick() {
        bits.push("accent");
    }
    if syllable.category.is_ictus() {
        bits.push("ictus");
    }
    if syllable.hiatus {
        bits.push("hiatus");
    }
    bits
}

fn marker(syllable: &SyllableAnnotation, config: &MarkupConfig) -> String {
    match syllable.length_marker {
        LengthMarker::Long => html_escape(&config.long_marker),
        LengthMarker::Short => html_escape(&config.short_marker),
        LengthMarker::Blank => config.blank_marker.clone(),
    }
}

fn render_syllable(out: &mut String, syllable: &SyllableAnnotation, config: &MarkupConfig) {
    let title = syllable_title(syllable).join(", ");

    out.push_str(&format!(
        r#"<div class="syl-col"><div class="syl-mark">{}</div><span class="{}" title="{}">{}</span></div>"#,
        marker(syllable, config),
        chip_classes(syllable.category),
        html_escape(&title),
        html_escape(&syllable.display_text),
    ));
}

fn render_placeholder(out: &mut String, unit: &PlaceholderUnit, config: &MarkupConfig) {
    let number = |n: Option<i64>| n.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
    out.push_str(&format!(
        r#"<div class="syl-col"><div class="syl-mark">{}</div><span class="syl" title="No syllables for word #{}, variant #{}">{}</span></div>"#,
        config.blank_marker,
        number(unit.word_number),
        number(unit.variant_number),
        html_escape(&unit.label),
    ));
}

/// Render units as one HTML fragment
pub fn render_markup(units: &[RenderUnit], config: &MarkupConfig) -> String {
    let mut out = format!(r#"<div class="{}">"#, html_escape(&config.container_class));

    for unit in units {
        match unit {
            RenderUnit::WordGap => out.push_str(&format!(
                r#"<span class="{}"></span>"#,
                html_escape(&config.word_gap_class)
            )),
            RenderUnit::Placeholder(placeholder) => render_placeholder(&mut out, placeholder, config),
            RenderUnit::Syllable(syllable) => render_syllable(&mut out, syllable, config),
        }
    }

    out.push_str("</div>");
    out
}
