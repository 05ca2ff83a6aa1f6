//! Tech ratings, tech base and rules level.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tech rating
// ---------------------------------------------------------------------------

/// Technology rating, 0..=5 for A..F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TechRating(pub i32);

impl TechRating {
    pub const A: TechRating = TechRating(0);
    pub const B: TechRating = TechRating(1);
    pub const C: TechRating = TechRating(2);
    pub const D: TechRating = TechRating(3);
    pub const E: TechRating = TechRating(4);
    pub const F: TechRating = TechRating(5);

    /// Letter code, or `?` for a value outside A..F.
    pub fn letter(self) -> char {
        match self.0 {
            0..=5 => (b'A' + self.0 as u8) as char,
            _ => '?',
        }
    }
}

impl fmt::Display for TechRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ---------------------------------------------------------------------------
// Tech level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TechBase {
    #[default]
    InnerSphere,
    Clan,
}

/// Rules level a design is legal under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum RulesLevel {
    Introductory,
    #[default]
    Standard,
    Advanced,
    Experimental,
    Unofficial,
}

/// Declared tech level of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TechLevel {
    pub base: TechBase,
    /// Mixed-tech design built on `base` chassis.
    pub mixed: bool,
    pub rules: RulesLevel,
    pub year: Option<i32>,
}

impl TechLevel {
    /// Parse a tech-level string such as `IS Level 2`, `Clan Advanced` or
    /// `Mixed (IS Chassis) Experimental`. Returns `None` when either the base
    /// prefix or the level suffix is unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (base, mixed, rest) = if let Some(rest) = s.strip_prefix("Mixed (IS Chassis)") {
            (TechBase::InnerSphere, true, rest)
        } else if let Some(rest) = s.strip_prefix("Mixed (Clan Chassis)") {
            (TechBase::Clan, true, rest)
        } else if let Some(rest) = s.strip_prefix("Clan") {
            (TechBase::Clan, false, rest)
        } else if let Some(rest) = s.strip_prefix("IS") {
            (TechBase::InnerSphere, false, rest)
        } else {
            return None;
        };

        let rules = match rest.trim() {
            "Level 1" | "Introductory" => RulesLevel::Introductory,
            "Level 2" | "Standard" => RulesLevel::Standard,
            "Level 3" | "Advanced" => RulesLevel::Advanced,
            "Level 4" | "Experimental" => RulesLevel::Experimental,
            "Level 5" | "Unofficial" => RulesLevel::Unofficial,
            _ => return None,
        };

        Some(Self {
            base,
            mixed,
            rules,
            year: None,
        })
    }
}

/// Effective tech summary, recomputed after structure, armor and engine
/// tech ratings are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TechAdvancement {
    pub base: TechBase,
    pub rules: RulesLevel,
    pub intro_year: Option<i32>,
    /// Highest of the structural, armor and engine tech ratings.
    pub rating: TechRating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_letters() {
        assert_eq!(TechRating::A.letter(), 'A');
        assert_eq!(TechRating::D.to_string(), "D");
        assert_eq!(TechRating(9).letter(), '?');
    }

    #[test]
    fn parse_level_numbers() {
        let tl = TechLevel::parse("IS Level 2").unwrap();
        assert_eq!(tl.base, TechBase::InnerSphere);
        assert!(!tl.mixed);
        assert_eq!(tl.rules, RulesLevel::Standard);

        let tl = TechLevel::parse("Clan Level 3").unwrap();
        assert_eq!(tl.base, TechBase::Clan);
        assert_eq!(tl.rules, RulesLevel::Advanced);
    }

    #[test]
    fn parse_named_levels() {
        let tl = TechLevel::parse("IS Experimental").unwrap();
        assert_eq!(tl.rules, RulesLevel::Experimental);
        let tl = TechLevel::parse("Clan Introductory").unwrap();
        assert_eq!(tl.rules, RulesLevel::Introductory);
    }

    #[test]
    fn parse_mixed() {
        let tl = TechLevel::parse("Mixed (Clan Chassis) Advanced").unwrap();
        assert_eq!(tl.base, TechBase::Clan);
        assert!(tl.mixed);
        assert_eq!(tl.rules, RulesLevel::Advanced);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(TechLevel::parse("Star League Level 2").is_none());
        assert!(TechLevel::parse("IS Level 9").is_none());
        assert!(TechLevel::parse("").is_none());
    }
}
