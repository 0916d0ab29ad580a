// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text renderings of progressions and song info.
//!
//! The same payloads serve display, clipboard and `.txt` file export.
//! Chord sequences longer than eight symbols wrap to four per line.

use crate::generators::progression::ChordProgression;
use crate::generators::song_info::SongInfo;

/// Fixed footer appended to exported text
pub const FOOTER: &str = "Generated with ostinato";

/// Format a chord sequence: short sequences join on " - ", longer ones
/// wrap after every fourth chord with a trailing " -" on each non-final
/// symbol
pub fn format_chords<S: AsRef<str>>(chords: &[S]) -> String {
    if chords.len() <= 8 {
        return chords
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<_>>()
            .join(" - ");
    }

    let mut text = String::new();
    for (i, chord) in chords.iter().enumerate() {
        text.push_str(chord.as_ref());
        if i < chords.len() - 1 {
            text.push_str(" -");
            if (i + 1) % 4 == 0 {
                text.push('\n');
            } else {
                text.push(' ');
            }
        }
    }
    text
}

/// Full text rendering of a progression (also the clipboard payload)
pub fn progression_text(progression: &ChordProgression) -> String {
    format!(
        "Song: {}\nKey: {} {}\nProgression: {}\n\n{}",
        progression.song_name,
        progression.params.key,
        progression.params.scale_type,
        format_chords(&progression.chords),
        FOOTER
    )
}

/// Filename stem for a progression text export (no extension)
pub fn progression_filename(progression: &ChordProgression) -> String {
    format!(
        "chord-progression-{}-{}",
        progression.params.key,
        progression.params.scale_type.name().to_lowercase()
    )
}

/// Filename stem for a progression MIDI export (no extension)
pub fn midi_filename(progression: &ChordProgression) -> String {
    format!(
        "{}-{}-{}",
        progression.song_name,
        progression.params.key,
        progression.params.scale_type.name().to_lowercase()
    )
}

/// Text rendering of song info (also the clipboard payload)
pub fn song_info_text(info: &SongInfo) -> String {
    let minutes = if info.song_length == 1 {
        "minute"
    } else {
        "minutes"
    };
    let sections = match info.four_bar_sections {
        Some(count) => count.to_string(),
        None => "N/A".to_string(),
    };
    format!(
        "Song: {}\nSong Length: {} {}\nTime Signature: {}\nTempo: {} BPM\n4-Bar Sections: {}",
        info.song_name, info.song_length, minutes, info.time_signature, info.tempo, sections
    )
}

/// Song info text with the export footer, for `.txt` files
pub fn song_info_file_text(info: &SongInfo) -> String {
    format!("{}\n\n{}", song_info_text(info), FOOTER)
}

/// Filename stem for a song info text export (no extension)
pub fn song_info_filename(info: &SongInfo) -> String {
    format!("song-info-{}", info.song_name)
}
