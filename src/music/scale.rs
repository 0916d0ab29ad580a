// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale types and their chord vocabularies.
//!
//! Each scale type carries a fixed, hand-authored list of roman-numeral
//! chord symbols. The lists are the complete candidate vocabulary for
//! progression generation; they are never derived from interval math.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scale types supported by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// Chromatic superset: every basic chord quality on every degree
    Any,
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
}

impl ScaleType {
    /// All scale types in selection order
    pub const ALL: [ScaleType; 5] = [
        ScaleType::Any,
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
    ];

    /// Get the chord symbol vocabulary for this scale type
    pub fn chords(self) -> &'static [&'static str] {
        match self {
            ScaleType::Any => &[
                "i", "I", "ii", "ii°", "iii", "III", "III+", "iv", "IV", "v", "V", "vi", "vi°",
                "VI", "vii°", "VII",
            ],
            ScaleType::Major => &["I", "ii", "iii", "IV", "V", "vi", "vii°"],
            ScaleType::NaturalMinor => &["i", "ii°", "III", "iv", "v", "VI", "VII"],
            ScaleType::HarmonicMinor => &["i", "ii°", "III+", "iv", "V", "VI", "vii°"],
            ScaleType::MelodicMinor => &["i", "ii", "iii+", "IV", "V", "vi°", "vii°"],
        }
    }

    /// Parse scale type from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "any" => Some(ScaleType::Any),
            "major" | "ionian" => Some(ScaleType::Major),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::NaturalMinor),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            _ => None,
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Any => "Any",
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural minor",
            ScaleType::HarmonicMinor => "Harmonic minor",
            ScaleType::MelodicMinor => "Melodic minor",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
