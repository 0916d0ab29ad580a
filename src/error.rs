// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for ostinato.

use thiserror::Error;

/// Errors produced by the ostinato library
#[derive(Debug, Error)]
pub enum Error {
    /// Scale type string did not match any known scale
    #[error("Unknown scale type: {0}")]
    UnknownScaleType(String),
    /// Key string did not match any pitch-class name
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    /// Progression length outside the supported range
    #[error("Progression length {0} out of range (2-16)")]
    LengthOutOfRange(u8),
    /// Lower tempo limit above the upper limit
    #[error("Invalid tempo range: lower limit {lower} exceeds upper limit {upper}")]
    InvalidTempoRange { lower: u16, upper: u16 },
    /// Song length outside the supported range
    #[error("Song length {0} out of range (1-16 minutes)")]
    SongLengthOutOfRange(u8),
    /// Preset file could not be parsed or serialized
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File export failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
