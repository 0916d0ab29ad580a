// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Export renderings for generated material.
//!
//! Text renderings (display, clipboard, .txt files) and the Standard
//! MIDI File encoder live here. Neither touches any state outside its
//! arguments; file writing is the only side effect.

pub mod midi;
pub mod text;

pub use midi::{encode, write_midi_file};
pub use text::{
    midi_filename, progression_filename, progression_text, song_info_filename,
    song_info_file_text, song_info_text,
};
