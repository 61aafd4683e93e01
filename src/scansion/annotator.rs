//! Metrical annotator
//!
//! Walks the resolved syllables left to right with a single counter, the
//! effective index. Elided syllables are skipped by the counter unless the
//! mask marks hiatus at the position they would take, in which case they
//! are voiced and counted. Each counted syllable is then classified against
//! the mask's ictus, accent and foot-boundary positions.

use std::collections::BTreeSet;

use super::resolver::SyllableUnit;
use super::units::{Category, LengthMarker, PlaceholderUnit, RenderUnit, SyllableAnnotation};
use crate::models::{Mask, Syllable};

/// The mask's position sets, all in effective (voiced) syllable indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricalPositions {
    pub icted: BTreeSet<u32>,
    pub accented: BTreeSet<u32>,
    pub foot_boundary_after: BTreeSet<u32>,
    pub hiatus_after: BTreeSet<u32>,
}

impl MetricalPositions {
    pub fn from_mask(mask: &Mask) -> Self {
        Self {
            icted: mask.icted_syllables.clone(),
            accented: mask.accented_syllables.clone(),
            foot_boundary_after: mask.foot_boundary_after.clone(),
            hiatus_after: mask.hiatus_after.clone(),
        }
    }
}

/// Annotated verse plus the final effective index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub units: Vec<RenderUnit>,
    /// Number of voiced syllables (the counter after the last unit)
    pub voiced_syllables: u32,
}

/// Annotate resolved units in order.
///
/// A word gap separates consecutive units. A unit without syllables
/// becomes a single placeholder and leaves the counter untouched.
pub fn annotate(units: &[SyllableUnit<'_>], positions: &MetricalPositions) -> Annotation {
    let mut rendered = Vec::new();
    let mut effective_index: u32 = 0;

    for (i, unit) in units.iter().enumerate() {
        if i > 0 {
            rendered.push(RenderUnit::WordGap);
        }

        if unit.syllables.is_empty() {
            rendered.push(RenderUnit::Placeholder(PlaceholderUnit {
                label: unit.label.clone(),
                word_number: unit.word_number,
                variant_number: unit.variant_number,
            }));
            continue;
        }

        for syllable in &unit.syllables {
            let annotation = annotate_syllable(syllable, &mut effective_index, positions);
            rendered.push(RenderUnit::Syllable(annotation));
        }
    }

    log::debug!(
        "Annotated {} units, {} voiced syllables",
        units.len(),
        effective_index
    );

    Annotation {
        units: rendered,
        voiced_syllables: effective_index,
    }
}

fn annotate_syllable(
    syllable: &Syllable,
    effective_index: &mut u32,
    positions: &MetricalPositions,
) -> SyllableAnnotation {
    let candidate = *effective_index + 1;

    // Hiatus beats elision
    let hiatus = syllable.elision && positions.hiatus_after.contains(&candidate);
    if syllable.elision && !hiatus {
        return SyllableAnnotation::elided(syllable.display_text());
    }

    *effective_index = candidate;

    SyllableAnnotation {
        display_text: syllable.display_text().to_string(),
        length_marker: LengthMarker::from_length(syllable.length),
        category: Category::classify(candidate, &positions.accented, &positions.icted),
        foot_boundary_after: positions.foot_boundary_after.contains(&candidate),
        effective_index: Some(candidate),
        hiatus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(text: &str, length: bool, elision: bool) -> Syllable {
        Syllable {
            syllable_number: None,
            text: Some(text.to_string()),
            length,
            elision,
        }
    }

    fn unit<'v>(label: &str, syllables: Vec<&'v Syllable>) -> SyllableUnit<'v> {
        SyllableUnit {
            word_number: Some(1),
            variant_number: Some(1),
            label: label.to_string(),
            syllables,
        }
    }

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    fn syllables(annotation: &Annotation) -> Vec<&SyllableAnnotation> {
        annotation.units.iter().filter_map(RenderUnit::as_syllable).collect()
    }

    #[test]
    fn test_single_long_plain_syllable() {
        let s = syl("o", true, false);
        let result = annotate(&[unit("o", vec![&s])], &MetricalPositions::default());

        assert_eq!(result.units.len(), 1);
        let a = syllables(&result)[0];
        assert_eq!(a.length_marker, LengthMarker::Long);
        assert_eq!(a.category, Category::Plain);
        assert!(!a.foot_boundary_after);
        assert_eq!(a.effective_index, Some(1));
        assert_eq!(result.voiced_syllables, 1);
    }

    #[test]
    fn test_hiatus_overrides_elision() {
        let (a, b, c) = (syl("ar", true, false), syl("ma", false, false), syl("e", false, true));
        let positions = MetricalPositions {
            hiatus_after: set(&[3]),
            icted: set(&[3]),
            ..Default::default()
        };
        let result = annotate(&[unit("arma", vec![&a, &b]), unit("e", vec![&c])], &positions);

        let third = syllables(&result)[2];
        assert!(third.hiatus);
        assert_eq!(third.effective_index, Some(3));
        assert_eq!(third.category, Category::Ictus);
        assert_eq!(third.length_marker, LengthMarker::Short);
        assert_eq!(result.voiced_syllables, 3);
    }

    #[test]
    fn test_elided_syllable_not_counted() {
        let voiced: Vec<Syllable> = (0..4).map(|i| syl(&format!("s{}", i), true, false)).collect();
        let elided = syl("que", true, true);
        let after = syl("at", true, false);
        let positions = MetricalPositions {
            foot_boundary_after: set(&[5]),
            icted: set(&[5]),
            ..Default::default()
        };
        let mut refs: Vec<&Syllable> = voiced.iter().collect();
        refs.push(&elided);
        refs.push(&after);

        let result = annotate(&[unit("w", refs)], &positions);
        let syls = syllables(&result);

        assert_eq!(syls[4].category, Category::Elided);
        assert_eq!(syls[4].length_marker, LengthMarker::Blank);
        assert!(!syls[4].foot_boundary_after);
        assert_eq!(syls[4].effective_index, None);

        // The next voiced syllable takes index 5
        assert_eq!(syls[5].effective_index, Some(5));
        assert!(syls[5].foot_boundary_after);
        assert_eq!(syls[5].category, Category::Ictus);
        assert_eq!(result.voiced_syllables, 5);
    }

    #[test]
    fn test_elided_position_never_ends_foot() {
        let a = syl("a", true, false);
        let b = syl("e", false, true);
        let positions = MetricalPositions {
            foot_boundary_after: set(&[1, 2]),
            ..Default::default()
        };
        let result = annotate(&[unit("ae", vec![&a, &b])], &positions);
        let syls = syllables(&result);
        assert!(syls[0].foot_boundary_after);
        assert!(!syls[1].foot_boundary_after);
    }

    #[test]
    fn test_gaps_and_placeholders() {
        let a = syl("ar", true, false);
        let b = syl("ma", false, false);
        let units = vec![
            unit("ar", vec![&a]),
            SyllableUnit {
                word_number: Some(99),
                variant_number: Some(1),
                label: "[missing word #99]".to_string(),
                syllables: Vec::new(),
            },
            unit("ma", vec![&b]),
        ];
        let result = annotate(&units, &MetricalPositions::default());

        assert_eq!(result.units.len(), 5);
        assert_eq!(result.units[1], RenderUnit::WordGap);
        assert_eq!(
            result.units[2],
            RenderUnit::Placeholder(PlaceholderUnit {
                label: "[missing word #99]".to_string(),
                word_number: Some(99),
                variant_number: Some(1),
            })
        );
        assert_eq!(result.units[3], RenderUnit::WordGap);
        // Placeholders don't advance the counter
        assert_eq!(syllables(&result)[1].effective_index, Some(2));
    }

    #[test]
    fn test_no_units_no_output() {
        let result = annotate(&[], &MetricalPositions::default());
        assert!(result.units.is_empty());
        assert_eq!(result.voiced_syllables, 0);
    }
}
