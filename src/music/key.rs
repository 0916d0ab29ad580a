// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Musical keys and their base MIDI pitches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// The twelve pitch-class keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Key {
    /// All keys in chromatic order
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::Cs,
        Key::D,
        Key::Ds,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Gs,
        Key::A,
        Key::As,
        Key::B,
    ];

    /// Base MIDI pitch for this key, anchored at middle C (C = 60)
    pub fn base_pitch(self) -> MidiNote {
        match self {
            Key::C => 60,
            Key::Cs => 61,
            Key::D => 62,
            Key::Ds => 63,
            Key::E => 64,
            Key::F => 65,
            Key::Fs => 66,
            Key::G => 67,
            Key::Gs => 68,
            Key::A => 69,
            Key::As => 70,
            Key::B => 71,
        }
    }

    /// Parse key from string (e.g., "C", "C#", "Db", "F#")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" => Some(Key::C),
            "C#" | "CS" | "DB" => Some(Key::Cs),
            "D" => Some(Key::D),
            "D#" | "DS" | "EB" => Some(Key::Ds),
            "E" | "FB" => Some(Key::E),
            "F" | "E#" | "ES" => Some(Key::F),
            "F#" | "FS" | "GB" => Some(Key::Fs),
            "G" => Some(Key::G),
            "G#" | "GS" | "AB" => Some(Key::Gs),
            "A" => Some(Key::A),
            "A#" | "AS" | "BB" => Some(Key::As),
            "B" | "CB" => Some(Key::B),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::C => write!(f, "C"),
            Key::Cs => write!(f, "C#"),
            Key::D => write!(f, "D"),
            Key::Ds => write!(f, "D#"),
            Key::E => write!(f, "E"),
            Key::F => write!(f, "F"),
            Key::Fs => write!(f, "F#"),
            Key::G => write!(f, "G"),
            Key::Gs => write!(f, "G#"),
            Key::A => write!(f, "A"),
            Key::As => write!(f, "A#"),
            Key::B => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pitches() {
        assert_eq!(Key::C.base_pitch(), 60);
        assert_eq!(Key::Fs.base_pitch(), 66);
        assert_eq!(Key::B.base_pitch(), 71);
    }

    #[test]
    fn test_base_pitches_chromatic() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.base_pitch(), 60 + i as u8);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Key::from_str("C"), Some(Key::C));
        assert_eq!(Key::from_str("C#"), Some(Key::Cs));
        assert_eq!(Key::from_str("Db"), Some(Key::Cs));
        assert_eq!(Key::from_str("Bb"), Some(Key::As));
        assert_eq!(Key::from_str("f#"), Some(Key::Fs));
        assert_eq!(Key::from_str("H"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::C.to_string(), "C");
        assert_eq!(Key::Gs.to_string(), "G#");
    }
}
