use crate::bonus::{BonusKind, BonusZone, InvalidBonusZone, UnknownBonusKind};
use crate::position::Point;
use std::str::FromStr;

#[test]
fn parse_known_kind_codes() {
    assert_eq!(BonusKind::try_from('P'), Ok(BonusKind::PointsBonus));
    assert_eq!(BonusKind::try_from('M'), Ok(BonusKind::MultiplierBonus));
    assert_eq!(BonusKind::from_str("M"), Ok(BonusKind::MultiplierBonus));
}

#[test]
fn reject_unknown_kind_codes() {
    assert_eq!(
        BonusKind::try_from('X'),
        Err(UnknownBonusKind("X".to_string()))
    );
    assert_eq!(
        BonusKind::from_str("p"),
        Err(UnknownBonusKind("p".to_string()))
    );
    assert_eq!(
        BonusKind::from_str("PM"),
        Err(UnknownBonusKind("PM".to_string()))
    );
    assert!(BonusKind::from_str("").is_err());
}

#[test]
fn kind_code_matches_display() {
    assert_eq!(BonusKind::PointsBonus.to_string(), "P");
    assert_eq!(BonusKind::MultiplierBonus.code(), 'M');
}

#[test]
fn zone_requires_positive_radius() {
    let center = Point::new(46.0, 8.0);
    assert_eq!(
        BonusZone::new(BonusKind::PointsBonus, 10.0, center, 0.0),
        Err(InvalidBonusZone::Radius(0.0))
    );
    assert_eq!(
        BonusZone::new(BonusKind::PointsBonus, 10.0, center, -1.0),
        Err(InvalidBonusZone::Radius(-1.0))
    );
    assert!(BonusZone::new(BonusKind::PointsBonus, 10.0, center, f64::NAN).is_err());
}

#[test]
fn zone_requires_finite_amount() {
    let center = Point::new(46.0, 8.0);
    assert_eq!(
        BonusZone::new(BonusKind::MultiplierBonus, f64::INFINITY, center, 1.0),
        Err(InvalidBonusZone::Amount(f64::INFINITY))
    );
}

#[test]
fn zone_keeps_its_values() {
    let center = Point::new(46.0, 8.0);
    let zone = BonusZone::new(BonusKind::MultiplierBonus, 0.5, center, 2.0)
        .unwrap_or_else(|e| panic!("Failed to create zone. Reason: {e}"));
    assert_eq!(zone.kind, BonusKind::MultiplierBonus);
    assert_eq!(zone.amount, 0.5);
    assert_eq!(zone.center, center);
    assert_eq!(zone.radius_km, 2.0);
}
