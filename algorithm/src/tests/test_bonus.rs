use crate::bonus::{BonusOutcome, evaluate_bonuses};
use common::bonus::BonusKind;
use common::position::Point;
use common::test_helper::flight::{get_bonus_zones, get_track, zone};

#[test]
fn no_zones_yield_neutral_outcome() {
    let outcome = evaluate_bonuses(&get_track(), &[]);
    assert_eq!(outcome, BonusOutcome::default());
    assert_eq!(outcome.bonus_total, 0.0);
    assert_eq!(outcome.multiplier, 1.0);
}

#[test_log::test]
fn entered_points_zone_adds_its_amount() {
    let zones = vec![zone(BonusKind::PointsBonus, 20.0, 46.1, 8.1, 1.0)];
    let outcome = evaluate_bonuses(&get_track(), &zones);
    assert_eq!(outcome.bonus_total, 20.0);
    assert_eq!(outcome.multiplier, 1.0);
}

#[test_log::test]
fn entered_multiplier_zone_raises_the_multiplier() {
    let zones = vec![
        zone(BonusKind::PointsBonus, 20.0, 46.1, 8.1, 1.0),
        zone(BonusKind::MultiplierBonus, 0.5, 46.2, 8.3, 0.5),
    ];
    let outcome = evaluate_bonuses(&get_track(), &zones);
    assert_eq!(outcome.bonus_total, 20.0);
    assert_eq!(outcome.multiplier, 1.5);
}

#[test]
fn zone_never_entered_contributes_nothing() {
    let zones = vec![
        zone(BonusKind::PointsBonus, 50.0, 47.0, 9.0, 5.0),
        zone(BonusKind::MultiplierBonus, 2.0, -10.0, 120.0, 100.0),
    ];
    assert_eq!(
        evaluate_bonuses(&get_track(), &zones),
        BonusOutcome::default()
    );
}

#[test]
fn zone_triggers_only_once() {
    // Every point of this track lies inside the zone.
    let track = vec![Point::new(46.0, 8.0); 10];
    let zones = vec![zone(BonusKind::PointsBonus, 5.0, 46.0, 8.0, 1.0)];
    assert_eq!(evaluate_bonuses(&track, &zones).bonus_total, 5.0);
}

#[test]
fn point_on_the_border_counts_as_inside() {
    let center = Point::new(0.0, 0.0);
    let point = Point::new(0.0, 1.0);
    let radius = crate::distance(&center, &point);
    let zones = vec![zone(BonusKind::MultiplierBonus, 0.25, 0.0, 0.0, radius)];
    assert_eq!(evaluate_bonuses(&[point], &zones).multiplier, 1.25);
}

#[test]
fn zones_are_independent_of_their_order() {
    let mut zones = get_bonus_zones();
    let forward = evaluate_bonuses(&get_track(), &zones);
    zones.reverse();
    let backward = evaluate_bonuses(&get_track(), &zones);
    assert_eq!(forward, backward);
    assert_eq!(forward.bonus_total, 20.0);
    assert_eq!(forward.multiplier, 1.5);
}

#[test]
fn same_zone_twice_counts_twice() {
    let entered = zone(BonusKind::PointsBonus, 20.0, 46.1, 8.1, 1.0);
    let outcome = evaluate_bonuses(&get_track(), &[entered, entered]);
    assert_eq!(outcome.bonus_total, 40.0);
}

#[test]
fn empty_track_enters_no_zone() {
    assert_eq!(
        evaluate_bonuses(&[], &get_bonus_zones()),
        BonusOutcome::default()
    );
}
