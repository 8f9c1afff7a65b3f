// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Fixtures for the "ridge run" sample flight in `assets/flights`.
//!
//! The farthest pair of the track is `(0, 3)`. The first two bonus zones are
//! entered by the track, the third one is far away.

use crate::{
    bonus::{BonusKind, BonusZone},
    position::Point,
};
use chrono::NaiveTime;

pub fn get_track_as_csv<'a>() -> &'a str {
    include_str!("../../../assets/flights/ridge_run.csv")
}

pub fn get_bonus_as_csv<'a>() -> &'a str {
    include_str!("../../../assets/flights/ridge_run_bonus.csv")
}

pub fn get_track_as_igc<'a>() -> &'a str {
    include_str!("../../../assets/flights/ridge_run.igc")
}

fn fix(hms: (u32, u32, u32), latitude: f64, longitude: f64, altitude: i32) -> Point {
    let time = NaiveTime::from_hms_opt(hms.0, hms.1, hms.2)
        .unwrap_or_else(|| panic!("Invalid fixture time {hms:?}"));
    Point::new(latitude, longitude)
        .with_altitude(altitude)
        .with_time(time)
}

pub fn get_track() -> Vec<Point> {
    vec![
        fix((12, 0, 0), 46.0, 8.0, 1500),
        fix((12, 0, 10), 46.01, 8.01, 1520),
        fix((12, 0, 20), 46.1, 8.1, 1700),
        fix((12, 0, 30), 46.2, 8.3, 1900),
        fix((12, 0, 40), 46.15, 8.2, 1800),
        fix((12, 0, 50), 46.05, 8.05, 1400),
    ]
}

pub fn get_bonus_zones() -> Vec<BonusZone> {
    vec![
        zone(BonusKind::PointsBonus, 20.0, 46.1, 8.1, 1.0),
        zone(BonusKind::MultiplierBonus, 0.5, 46.2, 8.3, 0.5),
        zone(BonusKind::PointsBonus, 50.0, 47.0, 9.0, 5.0),
    ]
}

pub fn zone(
    kind: BonusKind,
    amount: f64,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> BonusZone {
    BonusZone::new(kind, amount, Point::new(latitude, longitude), radius_km)
        .unwrap_or_else(|e| panic!("Invalid fixture zone. Reason: {e}"))
}
