// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::serde::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Descriptive data of a recorded flight that is not used for scoring.
///
/// # Fields
///
/// - `date` – Flight date from the `HFDTE` header, if present.
/// - `glider_type` – Glider type from the `HFGTY` header, if present.
/// - `max_altitude` – Highest GPS altitude of all fixes in meters.
/// - `takeoff_time` – Time of the first fix.
/// - `landing_time` – Time of the last fix.
/// - `fixes` – Number of accepted fixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    #[serde(default, with = "date")]
    pub date: Option<NaiveDate>,
    pub glider_type: Option<String>,
    pub max_altitude: i32,
    #[serde(with = "time")]
    pub takeoff_time: NaiveTime,
    #[serde(with = "time")]
    pub landing_time: NaiveTime,
    pub fixes: usize,
}

impl FlightSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
