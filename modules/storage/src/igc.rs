// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Parser for IGC flight recorder files.
//!
//! Only the records needed for scoring are read:
//!
//! - `B` records (fixes): `B HHMMSS DDMMmmm N DDDMMmmm E V PPPPP GGGGG`,
//!   where `V` is the fix validity, `PPPPP` the pressure altitude and `GGGGG`
//!   the GPS altitude in meters.
//! - `HFDTE` header: flight date as `DDMMYY`, years below 70 are 20xx.
//! - `HFGTY` header: glider type after the first `:`. Other `H` records whose
//!   text contains `GLIDERTYPE` are accepted too; non-header records are never
//!   searched for a glider type.
//!
//! All other records are ignored.

use crate::{LoadError, LoadReport, TrackLimits, error::RecordError};
use chrono::{NaiveDate, NaiveTime};
use common::{flight::FlightSummary, position::Point};
use tracing::debug;

const B_RECORD_LEN: usize = 35;
const YEAR_PIVOT: i32 = 70;

/// The content of an IGC file.
#[derive(Debug, Clone, PartialEq)]
pub struct IgcFlight {
    pub points: LoadReport<Point>,
    /// `None` if the file contains no valid fix.
    pub summary: Option<FlightSummary>,
}

fn digits<T: std::str::FromStr>(
    line: &str,
    range: std::ops::Range<usize>,
    field: &'static str,
) -> Result<T, RecordError> {
    let value = &line[range];
    value.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Converts `DD(D)MMmmm` plus hemisphere into signed decimal degrees.
fn coordinate(
    line: &str,
    degrees: std::ops::Range<usize>,
    hemisphere: usize,
    negative: char,
    positive: char,
    field: &'static str,
) -> Result<f64, RecordError> {
    let minutes_start = degrees.end;
    let deg = digits::<u32>(line, degrees, field)?;
    let minutes = digits::<u32>(line, minutes_start..minutes_start + 2, field)?;
    let thousandths = digits::<u32>(line, minutes_start + 2..minutes_start + 5, field)?;
    if minutes >= 60 {
        return Err(RecordError::InvalidNumber {
            field,
            value: line[minutes_start..minutes_start + 5].to_string(),
        });
    }
    let value = f64::from(deg) + (f64::from(minutes) + f64::from(thousandths) / 1000.0) / 60.0;
    match line[hemisphere..].chars().next() {
        Some(c) if c == positive => Ok(value),
        Some(c) if c == negative => Ok(-value),
        Some(c) => Err(RecordError::InvalidHemisphere(c)),
        None => Err(RecordError::MissingField(field)),
    }
}

fn parse_fix(line: &str) -> Result<Point, RecordError> {
    if line.len() < B_RECORD_LEN || !line.is_ascii() {
        return Err(RecordError::ShortFix(line.chars().count()));
    }
    let time = NaiveTime::parse_from_str(&line[1..7], "%H%M%S")
        .map_err(|_| RecordError::InvalidTime(line[1..7].to_string()))?;
    let latitude = coordinate(line, 7..9, 14, 'S', 'N', "latitude")?;
    let longitude = coordinate(line, 15..18, 23, 'W', 'E', "longitude")?;
    let altitude = digits::<i32>(line, 30..35, "gps altitude")?;
    Ok(Point::checked(latitude, longitude)?
        .with_altitude(altitude)
        .with_time(time))
}

fn parse_date(line: &str) -> Option<NaiveDate> {
    let rest = line.strip_prefix("HFDTE")?;
    let rest = rest.strip_prefix("DATE").unwrap_or(rest);
    let rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
    let ddmmyy = rest.get(0..6)?;
    let day = ddmmyy.get(0..2)?.parse().ok()?;
    let month = ddmmyy.get(2..4)?.parse().ok()?;
    let yy: i32 = ddmmyy.get(4..6)?.parse().ok()?;
    let year = if yy < YEAR_PIVOT { 2000 + yy } else { 1900 + yy };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_glider_type(line: &str) -> Option<String> {
    let is_glider_type =
        line.starts_with("HFGTY") || line.to_ascii_uppercase().contains("GLIDERTYPE");
    if !is_glider_type {
        return None;
    }
    let (_, value) = line.split_once(':')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Builds a [`FlightSummary`] from the accepted fixes.
///
/// Returns `None` if no point carries a fix time.
pub(crate) fn summarize(
    points: &[Point],
    date: Option<NaiveDate>,
    glider_type: Option<String>,
) -> Option<FlightSummary> {
    let mut times = points.iter().filter_map(|p| p.time);
    let takeoff_time = times.next()?;
    let landing_time = times.last().unwrap_or(takeoff_time);
    let max_altitude = points
        .iter()
        .filter_map(|p| p.altitude)
        .max()
        .unwrap_or_default();
    Some(FlightSummary {
        date,
        glider_type,
        max_altitude,
        takeoff_time,
        landing_time,
        fixes: points.len(),
    })
}

/// Parses the content of an IGC file.
///
/// # Errors
///
/// [`LoadError::TooManyPoints`] if more fixes than `limits` allows are accepted.
pub fn parse_igc(content: &str, limits: &TrackLimits) -> Result<IgcFlight, LoadError> {
    let mut points = LoadReport::default();
    let mut date = None;
    let mut glider_type = None;
    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.starts_with('B') {
            match parse_fix(line) {
                Ok(point) => {
                    points.items.push(point);
                    limits.check(points.items.len())?;
                }
                Err(reason) => points.reject(index as u64 + 1, reason, "fix"),
            }
        } else if line.starts_with("HFDTE") {
            date = parse_date(line);
            debug!("Flight date {:?}", date);
        } else if glider_type.is_none() && line.starts_with('H') {
            glider_type = parse_glider_type(line);
        }
    }
    let summary = summarize(&points.items, date, glider_type);
    Ok(IgcFlight { points, summary })
}
