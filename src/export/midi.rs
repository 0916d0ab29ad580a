// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Standard MIDI file encoding for chord progressions.
//!
//! Produces a format 0 file with a single track on channel 0: one
//! program change to acoustic grand piano, then each chord as a
//! whole-note cluster of simultaneous notes at velocity 80. Chord
//! symbols without a semitone-table entry are skipped and consume no
//! time. Output is byte-deterministic for identical inputs.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::music::chord::chord_pitches;
use crate::music::key::Key;

/// Ticks per quarter note
pub const PPQN: u16 = 480;
/// Duration of one chord event
const WHOLE_NOTE_TICKS: u64 = PPQN as u64 * 4;
/// Fixed note-on velocity
const CHORD_VELOCITY: u8 = 80;
/// Acoustic grand piano
const PIANO_PROGRAM: u8 = 0;

/// MIDI event at an absolute tick
struct MidiEvent {
    tick: u64,
    data: Vec<u8>,
}

impl MidiEvent {
    fn note_on(tick: u64, note: u8, velocity: u8) -> Self {
        Self {
            tick,
            data: vec![0x90, note & 0x7F, velocity & 0x7F],
        }
    }

    fn note_off(tick: u64, note: u8) -> Self {
        Self {
            tick,
            data: vec![0x80, note & 0x7F, 0],
        }
    }

    fn program_change(tick: u64, program: u8) -> Self {
        Self {
            tick,
            data: vec![0xC0, program & 0x7F],
        }
    }
}

/// Encode a chord progression as a complete MIDI file payload
pub fn encode<S: AsRef<str>>(chords: &[S], key: Key) -> Vec<u8> {
    let mut events = Vec::new();
    events.push(MidiEvent::program_change(0, PIANO_PROGRAM));

    let mut cursor = 0u64;
    for chord in chords {
        let chord = chord.as_ref();
        let pitches = match chord_pitches(chord, key) {
            Some(pitches) => pitches,
            None => {
                // Known gap: unmapped symbols are dropped silently
                debug!(chord, "skipping chord with no semitone mapping");
                continue;
            }
        };

        for &pitch in &pitches {
            events.push(MidiEvent::note_on(cursor, pitch, CHORD_VELOCITY));
        }
        cursor += WHOLE_NOTE_TICKS;
        for &pitch in &pitches {
            events.push(MidiEvent::note_off(cursor, pitch));
        }
    }

    // Events are pushed in chronological order; note-offs at a chord
    // boundary land before the next chord's note-ons
    let mut payload = Vec::new();
    write_header(&mut payload, 1);
    write_track(&mut payload, &events);
    payload
}

/// Encode and write a `.mid` file to disk
pub fn write_midi_file<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    chords: &[S],
    key: Key,
) -> Result<()> {
    let payload = encode(chords, key);
    fs::write(path.as_ref(), &payload)?;
    info!(path = ?path.as_ref(), bytes = payload.len(), "wrote MIDI file");
    Ok(())
}

/// Write the MThd header chunk
fn write_header(buffer: &mut Vec<u8>, num_tracks: u16) {
    buffer.extend_from_slice(b"MThd");
    buffer.extend_from_slice(&[0, 0, 0, 6]);
    buffer.extend_from_slice(&0u16.to_be_bytes()); // Format 0
    buffer.extend_from_slice(&num_tracks.to_be_bytes());
    buffer.extend_from_slice(&PPQN.to_be_bytes());
}

/// Write an MTrk chunk with delta-encoded events and end-of-track
fn write_track(buffer: &mut Vec<u8>, events: &[MidiEvent]) {
    let mut track_data = Vec::new();
    let mut last_tick = 0u64;

    for event in events {
        let delta = event.tick.saturating_sub(last_tick);
        write_variable_length(&mut track_data, delta as u32);
        track_data.extend_from_slice(&event.data);
        last_tick = event.tick;
    }

    // End of track
    write_variable_length(&mut track_data, 0);
    track_data.extend_from_slice(&[0xFF, 0x2F, 0x00]);

    buffer.extend_from_slice(b"MTrk");
    buffer.extend_from_slice(&(track_data.len() as u32).to_be_bytes());
    buffer.extend_from_slice(&track_data);
}

/// Write a MIDI variable-length quantity
fn write_variable_length(buffer: &mut Vec<u8>, mut value: u32) {
    let mut bytes = Vec::new();

    bytes.push((value & 0x7F) as u8);
    value >>= 7;

    while value > 0 {
        bytes.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }

    bytes.reverse();
    buffer.extend_from_slice(&bytes);
}
