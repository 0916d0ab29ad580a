// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song info generator.
//!
//! Rolls a tempo within the caller's limits and derives section-count
//! metadata. Independent of the progression generator; consumes only
//! the tempo/length settings subset.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::SongSettings;

/// Generated song metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongInfo {
    /// Randomly generated song name
    pub song_name: String,
    /// Song length in minutes
    pub song_length: u8,
    /// Time signature string
    pub time_signature: String,
    /// Rolled tempo in BPM
    pub tempo: u16,
    /// Number of 4-bar sections; None for time signatures other
    /// than 4/4 (rendered "N/A")
    pub four_bar_sections: Option<u32>,
    /// Generation time as unix milliseconds
    pub timestamp: u64,
}

impl SongInfo {
    /// Generate song info from entropy-seeded randomness
    pub fn generate(settings: &SongSettings) -> Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::generate_with(settings, &mut rng)
    }

    /// Generate song info using the caller's RNG
    pub fn generate_with<R: Rng>(settings: &SongSettings, rng: &mut R) -> Result<Self> {
        settings.validate()?;

        let tempo = rng.gen_range(settings.lower_tempo_limit..=settings.upper_tempo_limit);
        let four_bar_sections = if settings.time_signature == "4/4" {
            // ceil(minutes * BPM / 16 beats per section)
            let beats = settings.song_length as u32 * tempo as u32;
            Some(beats.div_ceil(16))
        } else {
            None
        };

        Ok(Self {
            song_name: super::name::song_name(rng),
            song_length: settings.song_length,
            time_signature: settings.time_signature.clone(),
            tempo,
            four_bar_sections,
            timestamp: unix_millis(),
        })
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
