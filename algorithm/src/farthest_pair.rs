// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Search for the two track points that lie farthest apart.
//!
//! Both variants examine every pair `(i, j)` with `i < j`, which is
//! `O(n²)` distance evaluations. The selected pair is always the first pair in
//! ascending `(i, j)` order that reaches the maximum distance; a later pair with
//! an equal distance never replaces it. Callers may rely on this to get the
//! same indices for equidistant legs on every run and with either variant.

use crate::distance::distance;
use common::position::Point;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// The leg with the maximum great-circle distance of a track.
///
/// For tracks with fewer than two points this is the default value:
/// a distance of `0.0` and both indices `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FarthestPair {
    pub distance_km: f64,
    pub start_index: usize,
    pub end_index: usize,
}

impl FarthestPair {
    /// Picks the better of two candidates.
    ///
    /// The larger distance wins. On an exact tie the candidate that comes first
    /// in ascending `(start_index, end_index)` order wins, which is the pair a
    /// sequential scan would have kept.
    fn merge(self, other: FarthestPair) -> FarthestPair {
        match other.distance_km.partial_cmp(&self.distance_km) {
            Some(Ordering::Greater) => other,
            Some(Ordering::Equal)
                if (other.start_index, other.end_index) < (self.start_index, self.end_index) =>
            {
                other
            }
            _ => self,
        }
    }
}

/// Finds the best partner of `points[i]` among all points after it.
///
/// `current` is the best pair found so far; only a strictly larger distance
/// replaces it.
fn scan_row(points: &[Point], i: usize, current: FarthestPair) -> FarthestPair {
    let mut best = current;
    for (j, other) in points.iter().enumerate().skip(i + 1) {
        let d = distance(&points[i], other);
        if d > best.distance_km {
            best = FarthestPair {
                distance_km: d,
                start_index: i,
                end_index: j,
            };
        }
    }
    best
}

/// Sequential farthest-pair scan.
///
/// This is the reference implementation: pairs are visited in ascending `i`,
/// then ascending `j`, and the recorded pair is only replaced on a strict
/// improvement.
///
/// # Example
///
/// ```rust
/// use algorithm::farthest_pair;
/// use common::position::Point;
///
/// let track = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 0.5)];
/// let pair = farthest_pair(&track);
/// assert_eq!((pair.start_index, pair.end_index), (0, 1));
/// ```
pub fn farthest_pair(points: &[Point]) -> FarthestPair {
    let mut best = FarthestPair::default();
    for i in 0..points.len().saturating_sub(1) {
        best = scan_row(points, i, best);
    }
    debug!(
        "Farthest pair of {} points: {:.3} km between {} and {}",
        points.len(),
        best.distance_km,
        best.start_index,
        best.end_index
    );
    best
}

/// Parallel farthest-pair scan.
///
/// The outer index is split across the rayon thread pool. Each row is scanned
/// sequentially and the row results are merged with [`FarthestPair::merge`],
/// so the returned pair is identical to the one of [`farthest_pair`]
/// regardless of the order in which the workers finish.
pub fn farthest_pair_parallel(points: &[Point]) -> FarthestPair {
    let best = (0..points.len().saturating_sub(1))
        .into_par_iter()
        .map(|i| scan_row(points, i, FarthestPair::default()))
        .reduce(FarthestPair::default, FarthestPair::merge);
    debug!(
        "Farthest pair of {} points (parallel): {:.3} km between {} and {}",
        points.len(),
        best.distance_km,
        best.start_index,
        best.end_index
    );
    best
}

/// Uses [`farthest_pair_parallel`] for tracks with at least `parallel_threshold`
/// points and [`farthest_pair`] otherwise.
pub fn farthest_pair_auto(points: &[Point], parallel_threshold: usize) -> FarthestPair {
    if points.len() >= parallel_threshold {
        farthest_pair_parallel(points)
    } else {
        farthest_pair(points)
    }
}
