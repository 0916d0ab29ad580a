// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! ostinato - randomized chord progression and song metadata generator.
//!
//! This library provides the core components for generating songwriting
//! material from user-selected constraints:
//! - Chord progression generation over fixed scale vocabularies
//! - Song info generation (tempo, length, sections, name)
//! - Text renderings for display, clipboard and file export
//! - Standard MIDI file encoding of progressions
//!
//! Everything is synchronous call/return: each request receives its own
//! parameter value and produces its own result value with no shared
//! mutable state between calls.

pub mod error;
pub mod export;
pub mod generators;
pub mod music;
pub mod params;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::midi::{encode, write_midi_file};
pub use export::text::{progression_text, song_info_text};
pub use generators::progression::{
    first_chord_options, generate_progression, reconcile_first_chord, ChordProgression,
};
pub use generators::song_info::SongInfo;
pub use music::{Key, ScaleType};
pub use params::{FirstChord, ProgressionParams, SongSettings};
