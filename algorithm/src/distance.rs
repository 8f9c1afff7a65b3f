// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::position::Point;

/// Mean earth radius in kilometers used for all distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance in kilometers between two points.
///
/// Uses the haversine formula on a sphere with radius [`EARTH_RADIUS_KM`].
/// The haversine term is clamped to `[0, 1]` before the square root and the
/// inverse sine, so coincident or antipodal points never produce `NaN`.
///
/// The result is symmetric and `distance(p, p)` is exactly `0.0`.
///
/// # Example
///
/// ```rust
/// use algorithm::distance;
/// use common::position::Point;
///
/// let d = distance(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;

    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}
