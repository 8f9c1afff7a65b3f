// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Storage Modul for the cross-country scorer
//!
//! Loads flight tracks (CSV or IGC) and bonus zone definitions (CSV) from disk.
//! Files are read asynchronously; the parsers work on the in-memory content and
//! are exported on their own so they can be used without a filesystem.
//!
//! Every record is validated. Records that do not parse are skipped, reported
//! with a warning and collected in [`LoadReport::rejected`].

mod error;
mod record;
pub mod bonus_csv;
pub mod igc;
pub mod track_csv;

pub use bonus_csv::parse_bonus_csv;
pub use error::{LoadError, RecordError, RejectedRecord};
pub use igc::parse_igc;
pub use track_csv::parse_track_csv;

use common::{bonus::BonusZone, flight::FlightSummary, position::Point};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Limits applied while loading a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackLimits {
    /// Maximum number of accepted points. `None` means unbounded.
    pub max_points: Option<usize>,
}

impl TrackLimits {
    pub(crate) fn check(&self, accepted: usize) -> Result<(), LoadError> {
        match self.max_points {
            Some(limit) if accepted > limit => Err(LoadError::TooManyPoints { limit }),
            _ => Ok(()),
        }
    }
}

/// The accepted records of a file together with the skipped ones.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<T> {
    pub items: Vec<T>,
    pub rejected: Vec<RejectedRecord>,
}

impl<T> Default for LoadReport<T> {
    fn default() -> Self {
        LoadReport {
            items: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> LoadReport<T> {
    pub(crate) fn reject(&mut self, line: u64, reason: RecordError, what: &str) {
        warn!("Skipping {} on line {}: {}", what, line, reason);
        self.rejected.push(RejectedRecord { line, reason });
    }
}

/// A loaded flight track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFile {
    pub points: LoadReport<Point>,
    /// Present if the track has at least one point with a fix time.
    pub summary: Option<FlightSummary>,
}

async fn load_file(path: &Path) -> Result<String, LoadError> {
    let io_error = |source: std::io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = tokio::fs::File::open(path).await.map_err(io_error)?;
    let mut content = String::default();
    file.read_to_string(&mut content).await.map_err(io_error)?;
    Ok(content)
}

fn is_igc(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("igc"))
}

/// Loads a track file.
///
/// Files with the extension `.igc` are parsed as IGC flight logs, every other
/// file as track CSV (`time,lat,lon,alt` with a header line).
///
/// # Errors
///
/// - [`LoadError::Io`] if the file cannot be opened or read.
/// - [`LoadError::TooManyPoints`] if `limits` is exceeded.
pub async fn load_track(path: &Path, limits: &TrackLimits) -> Result<TrackFile, LoadError> {
    let content = load_file(path).await?;
    let track = if is_igc(path) {
        debug!("Parsing {} as IGC", path.to_string_lossy());
        let flight = parse_igc(&content, limits)?;
        TrackFile {
            points: flight.points,
            summary: flight.summary,
        }
    } else {
        debug!("Parsing {} as track CSV", path.to_string_lossy());
        let points = parse_track_csv(&content, limits)?;
        let summary = igc::summarize(&points.items, None, None);
        TrackFile { points, summary }
    };
    info!(
        "Loaded {} track points from {} ({} rejected)",
        track.points.items.len(),
        path.to_string_lossy(),
        track.points.rejected.len()
    );
    Ok(track)
}

/// Loads a bonus zone file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be opened or read.
pub async fn load_bonus_zones(path: &Path) -> Result<LoadReport<BonusZone>, LoadError> {
    let content = load_file(path).await?;
    let zones = parse_bonus_csv(&content);
    info!(
        "Loaded {} bonus zones from {} ({} rejected)",
        zones.items.len(),
        path.to_string_lossy(),
        zones.rejected.len()
    );
    Ok(zones)
}

/// Loads a bonus zone file, treating a missing or unreadable file as a
/// flight without bonus zones.
pub async fn load_bonus_zones_or_empty(path: &Path) -> Vec<BonusZone> {
    match load_bonus_zones(path).await {
        Ok(zones) => zones.items,
        Err(e) => {
            warn!("Scoring without bonus zones. Error: {}", e);
            Vec::new()
        }
    }
}
