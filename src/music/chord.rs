// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The chord-symbol semitone table.
//!
//! A fixed, hand-authored mapping from roman-numeral chord symbols to
//! semitone offsets above the tonic: the 16 basic chords, the sus2/sus4
//! variant of each basic chord except the bare minor tonic, and the
//! two-note tritone-substitute diad `subV7`.
//!
//! The melodic-minor vocabulary symbol `iii+` deliberately has no entry
//! here; it renders in text output but is skipped during MIDI encoding.

use super::key::{Key, MidiNote};

/// A chord symbol token (e.g. "I", "ii°", "Isus2", "subV7")
pub type ChordSymbol = String;

/// The tritone-substitute diad symbol
pub const SUB_V7: &str = "subV7";

/// All suspended-variant symbols, in table order
pub const SUSPENDED_SYMBOLS: [&str; 30] = [
    "Isus2", "Isus4", "iisus2", "iisus4", "ii°sus2", "ii°sus4", "iiisus2", "iiisus4", "IIIsus2",
    "IIIsus4", "III+sus2", "III+sus4", "ivsus2", "ivsus4", "IVsus2", "IVsus4", "vsus2", "vsus4",
    "Vsus2", "Vsus4", "visus2", "visus4", "vi°sus2", "vi°sus4", "VIsus2", "VIsus4", "vii°sus2",
    "vii°sus4", "VIIsus2", "VIIsus4",
];

/// Look up the semitone offsets (relative to the tonic) for a chord symbol
pub fn semitones(symbol: &str) -> Option<&'static [u8]> {
    let offsets: &'static [u8] = match symbol {
        // Basic chords
        "i" => &[0, 3, 7],
        "I" => &[0, 4, 7],
        "ii" => &[2, 5, 9],
        "ii°" => &[2, 5, 8],
        "iii" => &[4, 7, 11],
        "III" => &[3, 7, 10],
        "III+" => &[3, 7, 11],
        "iv" => &[5, 8, 12],
        "IV" => &[5, 9, 12],
        "v" => &[7, 10, 14],
        "V" => &[7, 11, 14],
        "vi" => &[9, 12, 16],
        "vi°" => &[9, 12, 15],
        "VI" => &[8, 12, 15],
        "vii°" => &[11, 14, 17],
        "VII" => &[10, 14, 17],

        // Suspended chords
        "Isus2" => &[0, 2, 7],
        "Isus4" => &[0, 5, 7],
        "iisus2" => &[2, 4, 9],
        "iisus4" => &[2, 7, 9],
        "ii°sus2" => &[2, 4, 8],
        "ii°sus4" => &[2, 7, 8],
        "iiisus2" => &[4, 6, 11],
        "iiisus4" => &[4, 9, 11],
        "IIIsus2" => &[3, 5, 10],
        "IIIsus4" => &[3, 8, 10],
        "III+sus2" => &[3, 5, 11],
        "III+sus4" => &[3, 8, 11],
        "ivsus2" => &[5, 7, 12],
        "ivsus4" => &[5, 10, 12],
        "IVsus2" => &[5, 7, 12],
        "IVsus4" => &[5, 10, 12],
        "vsus2" => &[7, 9, 14],
        "vsus4" => &[7, 12, 14],
        "Vsus2" => &[7, 9, 14],
        "Vsus4" => &[7, 12, 14],
        "visus2" => &[9, 11, 16],
        "visus4" => &[9, 14, 16],
        "vi°sus2" => &[9, 11, 15],
        "vi°sus4" => &[9, 14, 15],
        "VIsus2" => &[8, 10, 15],
        "VIsus4" => &[8, 13, 15],
        "vii°sus2" => &[11, 13, 17],
        "vii°sus4" => &[11, 16, 17],
        "VIIsus2" => &[10, 12, 17],
        "VIIsus4" => &[10, 15, 17],

        // Tritone-substitute diad
        "subV7" => &[0, 6],

        _ => return None,
    };
    Some(offsets)
}

/// Suspended-variant symbols whose name starts with a member of the
/// given scale vocabulary (prefix match, so e.g. "IIIsus2" qualifies
/// in Major because it starts with "I")
pub fn suspended_pool(vocabulary: &[&str]) -> Vec<&'static str> {
    SUSPENDED_SYMBOLS
        .iter()
        .filter(|sus| vocabulary.iter().any(|base| sus.starts_with(base)))
        .copied()
        .collect()
}

/// Map a chord symbol to absolute MIDI pitches in the given key,
/// clamped into the valid 0-127 range. Returns None for symbols
/// missing from the semitone table.
pub fn chord_pitches(symbol: &str, key: Key) -> Option<Vec<MidiNote>> {
    let base = key.base_pitch() as i16;
    let pitches = semitones(symbol)?
        .iter()
        .map(|&offset| (base + offset as i16).clamp(0, 127) as MidiNote)
        .collect();
    Some(pitches)
}
