// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::Point;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The effect a [`BonusZone`] has on the score once the track enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// Adds the zone amount to the distance before the multiplier is applied.
    PointsBonus,

    /// Adds the zone amount to the multiplier, which starts at `1.0`.
    MultiplierBonus,
}

/// A zone kind code other than `P` or `M` was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bonus kind code {0:?}, expected 'P' or 'M'")]
pub struct UnknownBonusKind(pub String);

impl BonusKind {
    /// The single character code used in bonus files.
    pub fn code(&self) -> char {
        match self {
            BonusKind::PointsBonus => 'P',
            BonusKind::MultiplierBonus => 'M',
        }
    }
}

impl TryFrom<char> for BonusKind {
    type Error = UnknownBonusKind;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'P' => Ok(BonusKind::PointsBonus),
            'M' => Ok(BonusKind::MultiplierBonus),
            other => Err(UnknownBonusKind(other.to_string())),
        }
    }
}

impl FromStr for BonusKind {
    type Err = UnknownBonusKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => BonusKind::try_from(code),
            _ => Err(UnknownBonusKind(s.to_string())),
        }
    }
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Reasons why a [`BonusZone`] cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidBonusZone {
    #[error("radius {0} km must be a finite value greater than zero")]
    Radius(f64),
    #[error("amount {0} must be finite")]
    Amount(f64),
}

/// A circular geofence that rewards a flight passing through it.
///
/// A zone is triggered at most once: the first track point whose great-circle
/// distance to `center` is less than or equal to `radius_km` applies the
/// reward, further points inside the zone have no effect.
///
/// # Example
///
/// ```rust
/// use common::{bonus::{BonusKind, BonusZone}, position::Point};
///
/// let zone = BonusZone::new(BonusKind::PointsBonus, 20.0, Point::new(46.0, 8.0), 2.5).unwrap();
/// assert_eq!(zone.kind, BonusKind::PointsBonus);
///
/// assert!(BonusZone::new(BonusKind::PointsBonus, 20.0, Point::new(46.0, 8.0), 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusZone {
    pub kind: BonusKind,
    pub amount: f64,
    pub center: Point,
    pub radius_km: f64,
}

impl BonusZone {
    /// Creates a new [`BonusZone`].
    ///
    /// # Errors
    ///
    /// - [`InvalidBonusZone::Radius`] if `radius_km` is not finite or not greater than zero.
    /// - [`InvalidBonusZone::Amount`] if `amount` is not finite.
    pub fn new(
        kind: BonusKind,
        amount: f64,
        center: Point,
        radius_km: f64,
    ) -> Result<Self, InvalidBonusZone> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(InvalidBonusZone::Radius(radius_km));
        }
        if !amount.is_finite() {
            return Err(InvalidBonusZone::Amount(amount));
        }
        Ok(BonusZone {
            kind,
            amount,
            center,
            radius_km,
        })
    }
}
