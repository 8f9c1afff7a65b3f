// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::distance::distance;
use common::{
    bonus::{BonusKind, BonusZone},
    position::Point,
};
use tracing::{debug, trace};

/// Accumulated rewards of all bonus zones entered by a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusOutcome {
    /// Sum of the amounts of all entered [`BonusKind::PointsBonus`] zones.
    pub bonus_total: f64,
    /// `1.0` plus the amounts of all entered [`BonusKind::MultiplierBonus`] zones.
    pub multiplier: f64,
}

impl Default for BonusOutcome {
    fn default() -> Self {
        BonusOutcome {
            bonus_total: 0.0,
            multiplier: 1.0,
        }
    }
}

/// Returns the index of the first point that lies inside `zone`.
///
/// A point on the border (distance equal to the radius) counts as inside.
fn first_entry(points: &[Point], zone: &BonusZone) -> Option<usize> {
    points
        .iter()
        .position(|point| distance(point, &zone.center) <= zone.radius_km)
}

/// Evaluates every bonus zone against the track.
///
/// Each zone is checked on its own. The first track point inside the zone
/// triggers its reward exactly once, no matter how many points follow inside
/// it. Zones the track never enters contribute nothing, and an empty zone
/// list yields [`BonusOutcome::default`].
pub fn evaluate_bonuses(points: &[Point], zones: &[BonusZone]) -> BonusOutcome {
    let mut outcome = BonusOutcome::default();
    for (zone_index, zone) in zones.iter().enumerate() {
        let Some(point_index) = first_entry(points, zone) else {
            trace!("Bonus zone {} was not entered", zone_index);
            continue;
        };
        debug!(
            "Bonus zone {} ({} {}) triggered by point {}",
            zone_index, zone.kind, zone.amount, point_index
        );
        match zone.kind {
            BonusKind::PointsBonus => outcome.bonus_total += zone.amount,
            BonusKind::MultiplierBonus => outcome.multiplier += zone.amount,
        }
    }
    outcome
}
