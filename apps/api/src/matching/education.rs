//! Education ladder — an explicit ordinal type for education levels.
//!
//! Profile and catalog data carry free-text levels ("Bachelor's Degree",
//! "completed high school"), so parsing is by case-insensitive substring
//! containment against the ladder, first match wins. Anything unrecognized
//! falls back to the least demanding rung rather than failing.

use serde::{Deserialize, Serialize};

/// Ordinal education levels, least to most demanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[default]
    HighSchool,
    Associate,
    Bachelors,
    Masters,
    Phd,
}

/// Ladder labels in ordinal order, used for substring parsing.
const LADDER: &[(&str, EducationLevel)] = &[
    ("high school", EducationLevel::HighSchool),
    ("associate", EducationLevel::Associate),
    ("bachelor's", EducationLevel::Bachelors),
    ("master's", EducationLevel::Masters),
    ("phd", EducationLevel::Phd),
];

impl EducationLevel {
    /// Parses a free-text level. Containment is checked in both directions
    /// so "Bachelor's Degree in CS" and "bachelor" both resolve; first
    /// ladder match wins. Unrecognized or empty input parses to the
    /// least demanding level.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        LADDER
            .iter()
            .find(|(label, _)| label.contains(&raw) || raw.contains(label))
            .map(|(_, level)| *level)
            .unwrap_or_default()
    }

    /// Position on the ladder, 0 = least demanding.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}
