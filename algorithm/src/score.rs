// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{bonus::evaluate_bonuses, farthest_pair::farthest_pair_auto};
use common::{bonus::BonusZone, position::Point, score::ScoreResult};
use tracing::debug;

/// Tuning knobs of [`score_flight_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Tracks with at least this many points are searched in parallel.
    pub parallel_threshold: usize,
}

impl ScoringOptions {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;
}

impl Default for ScoringOptions {
    fn default() -> Self {
        ScoringOptions {
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Combines the leg distance with the bonus results.
///
/// `(max_distance_km + bonus_total) * multiplier`
pub fn aggregate(max_distance_km: f64, bonus_total: f64, multiplier: f64) -> f64 {
    (max_distance_km + bonus_total) * multiplier
}

/// Scores a flight with the default [`ScoringOptions`].
pub fn score_flight(points: &[Point], zones: &[BonusZone]) -> ScoreResult {
    score_flight_with(points, zones, ScoringOptions::default())
}

/// Scores a flight.
///
/// Searches the farthest pair of `points`, evaluates `zones` against the same
/// points and aggregates both into a [`ScoreResult`].
pub fn score_flight_with(
    points: &[Point],
    zones: &[BonusZone],
    options: ScoringOptions,
) -> ScoreResult {
    let pair = farthest_pair_auto(points, options.parallel_threshold);
    let bonus = evaluate_bonuses(points, zones);
    let total_score = aggregate(pair.distance_km, bonus.bonus_total, bonus.multiplier);
    debug!(
        "Scored flight: {:.3} km, bonus {:.3}, multiplier {:.3}, total {:.3}",
        pair.distance_km, bonus.bonus_total, bonus.multiplier, total_score
    );
    ScoreResult {
        raw_distance_km: pair.distance_km,
        total_score,
        start_index: pair.start_index,
        end_index: pair.end_index,
    }
}
