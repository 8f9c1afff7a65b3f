// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Scoring algorithms for cross-country flights.
//!
//! The score of a flight is the great-circle distance between the two track
//! points that lie farthest apart, plus the bonus points of all entered
//! bonus zones, times the summed multiplier of all entered multiplier zones:
//!
//! ```text
//! total = (max_distance_km + bonus_total) * multiplier
//! ```
//!
//! All functions in this crate are pure. They only read the track and the
//! zones and never fail; degenerate input yields a defined result.

pub mod bonus;
pub mod distance;
pub mod farthest_pair;
pub mod score;

pub use bonus::{BonusOutcome, evaluate_bonuses};
pub use distance::{EARTH_RADIUS_KM, distance};
pub use farthest_pair::{FarthestPair, farthest_pair, farthest_pair_auto, farthest_pair_parallel};
pub use score::{ScoringOptions, aggregate, score_flight, score_flight_with};

#[cfg(test)]
mod tests;
