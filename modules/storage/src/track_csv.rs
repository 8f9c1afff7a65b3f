// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Parser for track CSV files.
//!
//! The first line is a header. Every following record is
//! `time,latitude,longitude,altitude`, where `time` is `HHMMSS` or `HH:MM:SS`
//! and may be left empty, and `altitude` is an integer in meters. The altitude
//! column may be empty or missing altogether.

use crate::{
    LoadError, LoadReport, TrackLimits,
    error::RecordError,
    record::{line_of, line_of_error, number, optional_number, reader},
};
use chrono::NaiveTime;
use common::position::Point;
use csv::StringRecord;

/// Parses a fix time. `None` for an empty field.
pub(crate) fn parse_time(value: &str) -> Result<Option<NaiveTime>, RecordError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(value, "%H%M%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| RecordError::InvalidTime(value.to_string()))
}

fn parse_point(record: &StringRecord) -> Result<Point, RecordError> {
    let time = parse_time(record.get(0).unwrap_or_default())?;
    let latitude = number::<f64>(record, 1, "latitude")?;
    let longitude = number::<f64>(record, 2, "longitude")?;
    let altitude = optional_number::<i32>(record, 3, "altitude")?;
    let mut point = Point::checked(latitude, longitude)?;
    point.altitude = altitude;
    point.time = time;
    Ok(point)
}

/// Parses the content of a track CSV file.
///
/// # Errors
///
/// [`LoadError::TooManyPoints`] if more points than `limits` allows are accepted.
pub fn parse_track_csv(
    content: &str,
    limits: &TrackLimits,
) -> Result<LoadReport<Point>, LoadError> {
    let mut report = LoadReport::default();
    for result in reader(content, true).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report.reject(line_of_error(&e), RecordError::Csv(e.to_string()), "track point");
                continue;
            }
        };
        match parse_point(&record) {
            Ok(point) => {
                report.items.push(point);
                limits.check(report.items.len())?;
            }
            Err(reason) => report.reject(line_of(&record), reason, "track point"),
        }
    }
    Ok(report)
}
