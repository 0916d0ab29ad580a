// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Parameter value objects for generation requests.
//!
//! This module provides the data structures a caller populates before
//! invoking the generators, along with YAML preset loading. Every call
//! receives its own copy; nothing here is shared or mutated after a
//! generation request.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::music::{Key, ScaleType};

/// Minimum progression length
pub const MIN_LENGTH: u8 = 2;
/// Maximum progression length
pub const MAX_LENGTH: u8 = 16;
/// Minimum song length in minutes
pub const MIN_SONG_LENGTH: u8 = 1;
/// Maximum song length in minutes
pub const MAX_SONG_LENGTH: u8 = 16;

/// First-chord constraint: a concrete symbol, or any chord in the scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FirstChord {
    /// Pick the first chord uniformly at random from the vocabulary
    Any,
    /// Use this symbol verbatim (not validated against the scale)
    Symbol(String),
}

impl From<String> for FirstChord {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("any") {
            FirstChord::Any
        } else {
            FirstChord::Symbol(s)
        }
    }
}

impl From<FirstChord> for String {
    fn from(fc: FirstChord) -> Self {
        fc.to_string()
    }
}

impl From<&str> for FirstChord {
    fn from(s: &str) -> Self {
        FirstChord::from(s.to_string())
    }
}

impl fmt::Display for FirstChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstChord::Any => write!(f, "Any"),
            FirstChord::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// Parameters for a progression generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionParams {
    /// Scale type determining the chord vocabulary
    #[serde(default = "default_scale_type")]
    pub scale_type: ScaleType,
    /// Key the progression is rendered and encoded in
    #[serde(default = "default_key")]
    pub key: Key,
    /// Number of chords to generate (2-16)
    #[serde(default = "default_length")]
    pub length: u8,
    /// First-chord constraint
    #[serde(default = "default_first_chord")]
    pub first_chord: FirstChord,
    /// Allow the 5% suspended-pool substitution
    #[serde(default)]
    pub allow_borrowed_suspended: bool,
    /// Allow the tritone-substitute diad (only effective together
    /// with allow_borrowed_suspended)
    #[serde(default)]
    pub allow_tritone_sub: bool,
}

fn default_scale_type() -> ScaleType {
    ScaleType::Major
}
fn default_key() -> Key {
    Key::C
}
fn default_length() -> u8 {
    4
}
fn default_first_chord() -> FirstChord {
    FirstChord::Symbol("I".to_string())
}

impl Default for ProgressionParams {
    fn default() -> Self {
        Self {
            scale_type: default_scale_type(),
            key: default_key(),
            length: default_length(),
            first_chord: default_first_chord(),
            allow_borrowed_suspended: false,
            allow_tritone_sub: false,
        }
    }
}

impl ProgressionParams {
    /// Check that the parameters are within supported ranges
    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(Error::LengthOutOfRange(self.length));
        }
        Ok(())
    }

    /// Load parameters from a YAML preset file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse parameters from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save parameters to a YAML preset file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        Ok(fs::write(path.as_ref(), yaml)?)
    }
}

/// The tempo/length parameter subset consumed by the song info generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSettings {
    /// Lower tempo bound in BPM
    #[serde(default = "default_lower_tempo")]
    pub lower_tempo_limit: u16,
    /// Upper tempo bound in BPM
    #[serde(default = "default_upper_tempo")]
    pub upper_tempo_limit: u16,
    /// Song length in minutes (1-16)
    #[serde(default = "default_song_length")]
    pub song_length: u8,
    /// Time signature (free-form, "4/4" enables section counting)
    #[serde(default = "default_time_signature")]
    pub time_signature: String,
}

fn default_lower_tempo() -> u16 {
    80
}
fn default_upper_tempo() -> u16 {
    120
}
fn default_song_length() -> u8 {
    4
}
fn default_time_signature() -> String {
    "4/4".to_string()
}

impl Default for SongSettings {
    fn default() -> Self {
        Self {
            lower_tempo_limit: default_lower_tempo(),
            upper_tempo_limit: default_upper_tempo(),
            song_length: default_song_length(),
            time_signature: default_time_signature(),
        }
    }
}

impl SongSettings {
    /// Check that the settings are within supported ranges
    pub fn validate(&self) -> Result<()> {
        if self.lower_tempo_limit > self.upper_tempo_limit {
            return Err(Error::InvalidTempoRange {
                lower: self.lower_tempo_limit,
                upper: self.upper_tempo_limit,
            });
        }
        if self.song_length < MIN_SONG_LENGTH || self.song_length > MAX_SONG_LENGTH {
            return Err(Error::SongLengthOutOfRange(self.song_length));
        }
        Ok(())
    }

    /// Load settings from a YAML preset file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save settings to a YAML preset file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        Ok(fs::write(path.as_ref(), yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ProgressionParams::default();
        assert_eq!(params.scale_type, ScaleType::Major);
        assert_eq!(params.key, Key::C);
        assert_eq!(params.length, 4);
        assert_eq!(params.first_chord, FirstChord::Symbol("I".to_string()));
        assert!(!params.allow_borrowed_suspended);
        assert!(!params.allow_tritone_sub);

        let settings = SongSettings::default();
        assert_eq!(settings.lower_tempo_limit, 80);
        assert_eq!(settings.upper_tempo_limit, 120);
        assert_eq!(settings.song_length, 4);
        assert_eq!(settings.time_signature, "4/4");
    }

    #[test]
    fn test_first_chord_from_string() {
        assert_eq!(FirstChord::from("Any"), FirstChord::Any);
        assert_eq!(FirstChord::from("any"), FirstChord::Any);
        assert_eq!(
            FirstChord::from("vii°"),
            FirstChord::Symbol("vii°".to_string())
        );
    }

    #[test]
    fn test_validate_length() {
        let mut params = ProgressionParams::default();
        params.length = 1;
        assert!(matches!(
            params.validate(),
            Err(Error::LengthOutOfRange(1))
        ));
        params.length = 17;
        assert!(params.validate().is_err());
        params.length = 2;
        assert!(params.validate().is_ok());
        params.length = 16;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_tempo_range() {
        let mut settings = SongSettings::default();
        settings.lower_tempo_limit = 140;
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidTempoRange {
                lower: 140,
                upper: 120
            })
        ));
        settings.lower_tempo_limit = 120;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_song_length() {
        let mut settings = SongSettings::default();
        settings.song_length = 0;
        assert!(matches!(
            settings.validate(),
            Err(Error::SongLengthOutOfRange(0))
        ));
        settings.song_length = 17;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_params_yaml_round_trip() {
        let params = ProgressionParams {
            scale_type: ScaleType::HarmonicMinor,
            key: Key::Fs,
            length: 11,
            first_chord: FirstChord::Any,
            allow_borrowed_suspended: true,
            allow_tritone_sub: true,
        };
        let yaml = params.to_yaml().unwrap();
        let parsed = ProgressionParams::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_settings_yaml_round_trip() {
        let settings = SongSettings {
            lower_tempo_limit: 90,
            upper_tempo_limit: 150,
            song_length: 3,
            time_signature: "6/8".to_string(),
        };
        let yaml = settings.to_yaml().unwrap();
        let parsed = SongSettings::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_params_from_partial_yaml() {
        let params = ProgressionParams::from_yaml("scale_type: natural_minor\nlength: 8\n").unwrap();
        assert_eq!(params.scale_type, ScaleType::NaturalMinor);
        assert_eq!(params.length, 8);
        // Unspecified fields take defaults
        assert_eq!(params.key, Key::C);
        assert!(!params.allow_borrowed_suspended);
    }

    #[test]
    fn test_first_chord_yaml() {
        let params = ProgressionParams::from_yaml("first_chord: Any\n").unwrap();
        assert_eq!(params.first_chord, FirstChord::Any);

        let params = ProgressionParams::from_yaml("first_chord: vi\n").unwrap();
        assert_eq!(params.first_chord, FirstChord::Symbol("vi".to_string()));
    }
}
