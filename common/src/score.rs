// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::serde::three_decimals;
use serde::{Deserialize, Serialize};

/// The outcome of scoring a flight.
///
/// `start_index` and `end_index` are positions in the input track, with
/// `start_index < end_index` unless the track has fewer than two points, in
/// which case both are `0` and the distance is `0.0`.
///
/// Serialized, the result keeps the established output shape:
///
/// ```json
/// {"score_km": 100.000, "points": 180.000, "start_index": 0, "end_index": 7}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(rename = "score_km", with = "three_decimals")]
    pub raw_distance_km: f64,
    #[serde(rename = "points", with = "three_decimals")]
    pub total_score: f64,
    pub start_index: usize,
    pub end_index: usize,
}

impl ScoreResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
