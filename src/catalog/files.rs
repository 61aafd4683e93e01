//! Verse file naming
//!
//! Verse files are named `<n>_word_syllable_verse-mask_metre-matching.json`
//! and listed in order of `n`. Only names are handled here; reading the
//! files is the host's job.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+)_word_syllable_verse-mask_metre-matching\.json$")
        .expect("verse file pattern is a valid regex")
});

/// A verse file name with its ordering key
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerseFile {
    pub key: u64,
    pub name: String,
}

/// Ordering key of a verse file name, `None` if the name doesn't match
pub fn ordering_key(name: &str) -> Option<u64> {
    FILE_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Keep matching names and sort them by key
pub fn sort_verse_files<I, S>(names: I) -> Vec<VerseFile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut files: Vec<VerseFile> = names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match ordering_key(name) {
                Some(key) => Some(VerseFile {
                    key,
                    name: name.to_string(),
                }),
                None => {
                    log::debug!("Ignoring non-verse file {:?}", name);
                    None
                }
            }
        })
        .collect();
    files.sort_by_key(|f| f.key);
    files
}

/// A sidebar entry: ordering key and verse text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerseListing {
    pub key: u64,
    pub text: String,
}

impl VerseListing {
    pub fn label(&self) -> String {
        format!("{:03} — {}", self.key, self.text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_key() {
        assert_eq!(
            ordering_key("12_word_syllable_verse-mask_metre-matching.json"),
            Some(12)
        );
        assert_eq!(
            ordering_key("  7_Word_Syllable_Verse-Mask_Metre-Matching.JSON"),
            Some(7)
        );
        assert_eq!(ordering_key("12_word_syllable.json"), None);
        assert_eq!(
            ordering_key("x12_word_syllable_verse-mask_metre-matching.json"),
            None
        );
    }

    #[test]
    fn test_sort_by_numeric_key() {
        let files = sort_verse_files([
            "10_word_syllable_verse-mask_metre-matching.json",
            "notes.txt",
            "2_word_syllable_verse-mask_metre-matching.json",
            "1_word_syllable_verse-mask_metre-matching.json",
        ]);
        let keys: Vec<u64> = files.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec![1, 2, 10]);
    }

    #[test]
    fn test_listing_label() {
        let listing = VerseListing {
            key: 4,
            text: " Arma virumque cano ".to_string(),
        };
        assert_eq!(listing.label(), "004 — Arma virumque cano");
    }
}
