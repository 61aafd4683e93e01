//! Syllable quantity in prosodic mask strings
//!
//! Masks are written over `l`/`L` (heavy) and `s`/`S` (light). For display
//! they are converted to the traditional `-` / `u` notation.

use serde::{Deserialize, Serialize};

/// One character of a prosodic mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Heavy,
    Light,
    /// Unrecognized character, passed through as-is
    Other(char),
}

impl Quantity {
    pub fn from_char(ch: char) -> Self {
        match ch {
            'l' | 'L' => Quantity::Heavy,
            's' | 'S' => Quantity::Light,
            other => Quantity::Other(other),
        }
    }

    /// `-` for heavy, `u` for light
    pub fn symbol(self) -> char {
        match self {
            Quantity::Heavy => '-',
            Quantity::Light => 'u',
            Quantity::Other(ch) => ch,
        }
    }
}

/// Parse a mask string into quantities, one per character
pub fn parse_mask(mask: &str) -> Vec<Quantity> {
    mask.chars().map(Quantity::from_char).collect()
}

/// Convert a mask to `-`/`u` notation, character for character
pub fn mask_to_dash_u(mask: &str) -> String {
    mask.chars().map(|ch| Quantity::from_char(ch).symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_conversion() {
        assert_eq!(mask_to_dash_u("llsSL"), "--uu-");
        assert_eq!(mask_to_dash_u("LLSSL"), mask_to_dash_u("llssl"));
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(mask_to_dash_u("l|s x"), "-|u x");
        assert_eq!(mask_to_dash_u(""), "");
    }

    #[test]
    fn test_parse_mask() {
        assert_eq!(
            parse_mask("lS?"),
            vec![Quantity::Heavy, Quantity::Light, Quantity::Other('?')]
        );
    }
}
