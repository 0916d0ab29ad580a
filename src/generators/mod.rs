// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generative engines for randomized songwriting material.
//!
//! This module provides the chord progression generator, the song info
//! generator, and the song name generator. Each invocation is
//! independent; randomness is drawn fresh per call.

pub mod name;
pub mod progression;
pub mod song_info;

pub use name::song_name;
pub use progression::{
    first_chord_options, generate_progression, reconcile_first_chord, ChordProgression,
};
pub use song_info::SongInfo;
