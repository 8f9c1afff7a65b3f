// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons why a coordinate pair cannot be turned into a [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidPoint {
    #[error("latitude {0} is outside of [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside of [-180, 180]")]
    Longitude(f64),
}

/// A single recorded fix of a flight track.
///
/// Latitude and longitude are stored in decimal degrees. Latitude values range
/// from -90.0 to 90.0 (positive for north), longitude values range from -180.0
/// to 180.0 (positive for east). The altitude is the GPS altitude in meters if
/// the recorder provided one, the time is the UTC time of the fix.
///
/// Points are immutable once they are part of a track. The scoring algorithms
/// only ever read them.
///
/// # Example
///
/// ```rust
/// use common::position::Point;
///
/// let launch = Point::new(46.5686, 8.0127).with_altitude(1950);
/// assert_eq!(launch.altitude, Some(1950));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
}

impl Point {
    /// Creates a new [`Point`] without altitude and time.
    ///
    /// The coordinates are taken as they are. Use [`Point::checked`] when the
    /// values come from untrusted input.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point {
            latitude,
            longitude,
            altitude: None,
            time: None,
        }
    }

    /// Creates a new [`Point`] after verifying that both coordinates are finite
    /// and inside their valid degree ranges.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPoint`] naming the offending coordinate.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, InvalidPoint> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidPoint::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidPoint::Longitude(longitude));
        }
        Ok(Point::new(latitude, longitude))
    }

    pub fn with_altitude(mut self, altitude: i32) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
