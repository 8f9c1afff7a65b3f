// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::{
    bonus::{InvalidBonusZone, UnknownBonusKind},
    position::InvalidPoint,
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The track holds more accepted points than the configured limit.
    #[error("track exceeds the limit of {limit} points")]
    TooManyPoints { limit: usize },
}

/// Reasons why a single record of a track or bonus file was rejected.
///
/// A rejected record is skipped; it never ends up as a zero-valued point or
/// zone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing field {0}")]
    MissingField(&'static str),
    #[error("field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid fix time {0:?}")]
    InvalidTime(String),
    #[error("invalid hemisphere {0:?}")]
    InvalidHemisphere(char),
    #[error("B-record has {0} characters, expected at least 35")]
    ShortFix(usize),
    #[error(transparent)]
    Point(#[from] InvalidPoint),
    #[error(transparent)]
    Kind(#[from] UnknownBonusKind),
    #[error(transparent)]
    Zone(#[from] InvalidBonusZone),
    #[error("malformed record: {0}")]
    Csv(String),
}

/// A record that was skipped while parsing, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub line: u64,
    pub reason: RecordError,
}
