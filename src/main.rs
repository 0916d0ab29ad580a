// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! ostinato command-line front end.
//!
//! Thin collaborator around the library: collects parameters from flags
//! or a YAML preset, invokes the generators, prints the text rendering
//! and writes export files on request. No generation logic lives here.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ostinato::export::text::{
    midi_filename, progression_filename, progression_text, song_info_file_text,
    song_info_filename, song_info_text,
};
use ostinato::{
    write_midi_file, ChordProgression, Error, FirstChord, Key, ProgressionParams, ScaleType,
    SongInfo, SongSettings,
};

fn print_usage() {
    println!("ostinato - randomized chord progression generator");
    println!();
    println!("Usage: ostinato <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  generate                Generate a chord progression");
    println!("  song-info               Generate song metadata (tempo, sections, name)");
    println!();
    println!("Options for generate:");
    println!("  --scale <NAME>          Scale type: any, major, natural-minor,");
    println!("                          harmonic-minor, melodic-minor (default: major)");
    println!("  --key <KEY>             Key, e.g. C, F#, Bb (default: C)");
    println!("  --length <N>            Number of chords, 2-16 (default: 4)");
    println!("  --first-chord <SYM>     First chord symbol, or Any (default: I)");
    println!("  --borrowed              Allow borrowed/suspended chords");
    println!("  --tritone               Allow the tritone substitute (with --borrowed)");
    println!("  --midi                  Write a .mid file");
    println!();
    println!("Options for song-info:");
    println!("  --lower <BPM>           Lower tempo limit (default: 80)");
    println!("  --upper <BPM>           Upper tempo limit (default: 120)");
    println!("  --song-length <MIN>     Song length in minutes, 1-16 (default: 4)");
    println!("  --time-signature <SIG>  Time signature (default: 4/4)");
    println!();
    println!("Common options:");
    println!("  --params <FILE>         Load parameters from a YAML preset");
    println!("  --text                  Write a .txt file");
    println!("  --out-dir <DIR>         Output directory for exports (default: .)");
    println!("  --help                  Show this help message");
}

fn run_generate(args: &[String]) -> Result<()> {
    let mut params = match parse_flag::<String>(args, "--params") {
        Some(path) => ProgressionParams::load(&path)
            .with_context(|| format!("Failed to load preset: {}", path))?,
        None => ProgressionParams::default(),
    };

    if let Some(scale) = parse_flag::<String>(args, "--scale") {
        params.scale_type =
            ScaleType::from_str(&scale).ok_or(Error::UnknownScaleType(scale))?;
    }
    if let Some(key) = parse_flag::<String>(args, "--key") {
        params.key = Key::from_str(&key).ok_or(Error::UnknownKey(key))?;
    }
    if let Some(length) = parse_flag(args, "--length") {
        params.length = length;
    }
    if let Some(first) = parse_flag::<String>(args, "--first-chord") {
        params.first_chord = FirstChord::from(first);
    }
    if has_flag(args, "--borrowed") {
        params.allow_borrowed_suspended = true;
    }
    if has_flag(args, "--tritone") {
        params.allow_tritone_sub = true;
    }

    let progression = ChordProgression::generate(&params)?;
    let text = progression_text(&progression);
    println!("{}", text);

    let out_dir = out_dir(args);
    if has_flag(args, "--text") {
        let path = out_dir.join(format!("{}.txt", progression_filename(&progression)));
        fs::write(&path, &text)
            .with_context(|| format!("Failed to write text file: {}", path.display()))?;
        println!();
        println!("Wrote {}", path.display());
    }
    if has_flag(args, "--midi") {
        let path = out_dir.join(format!("{}.mid", midi_filename(&progression)));
        write_midi_file(&path, &progression.chords, progression.params.key)
            .with_context(|| format!("Failed to write MIDI file: {}", path.display()))?;
        println!();
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn run_song_info(args: &[String]) -> Result<()> {
    let mut settings = match parse_flag::<String>(args, "--params") {
        Some(path) => SongSettings::load(&path)
            .with_context(|| format!("Failed to load preset: {}", path))?,
        None => SongSettings::default(),
    };

    if let Some(lower) = parse_flag(args, "--lower") {
        settings.lower_tempo_limit = lower;
    }
    if let Some(upper) = parse_flag(args, "--upper") {
        settings.upper_tempo_limit = upper;
    }
    if let Some(length) = parse_flag(args, "--song-length") {
        settings.song_length = length;
    }
    if let Some(sig) = parse_flag::<String>(args, "--time-signature") {
        settings.time_signature = sig;
    }

    let info = SongInfo::generate(&settings)?;
    println!("{}", song_info_text(&info));

    if has_flag(args, "--text") {
        let path = out_dir(args).join(format!("{}.txt", song_info_filename(&info)));
        fs::write(&path, song_info_file_text(&info))
            .with_context(|| format!("Failed to write text file: {}", path.display()))?;
        println!();
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Parse the value following a flag, if present
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn out_dir(args: &[String]) -> PathBuf {
    parse_flag(args, "--out-dir").unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ostinato=warn".parse()?),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("generate") => run_generate(&args[1..]),
        Some("song-info") => run_song_info(&args[1..]),
        Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown command: {}", other);
        }
    }
}
