// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory tables for progression generation.
//!
//! Provides the scale-type enumeration with its chord vocabularies,
//! the twelve-key pitch mapping, and the chord-symbol semitone table.

pub mod chord;
pub mod key;
pub mod scale;

pub use chord::{chord_pitches, semitones, suspended_pool, ChordSymbol, SUB_V7};
pub use key::Key;
pub use scale::ScaleType;
