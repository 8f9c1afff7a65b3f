use crate::distance::{EARTH_RADIUS_KM, distance};
use common::position::Point;
use std::f64::consts::PI;

#[test]
fn one_degree_of_longitude_on_the_equator() {
    let d = distance(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
    assert!((d - 111.19).abs() < 0.5, "distance was {d}");
}

#[test]
fn distance_to_itself_is_zero() {
    for point in [
        Point::new(0.0, 0.0),
        Point::new(46.568611, 8.012777),
        Point::new(-33.9, 151.2),
        Point::new(90.0, 0.0),
        Point::new(-90.0, 180.0),
    ] {
        assert_eq!(distance(&point, &point), 0.0);
    }
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(46.0, 8.0);
    let b = Point::new(47.25, 9.75);
    assert_eq!(distance(&a, &b), distance(&b, &a));

    let c = Point::new(-12.5, -77.0);
    assert_eq!(distance(&a, &c), distance(&c, &a));
}

#[test]
fn antipodal_points_are_half_the_circumference_apart() {
    let exp = PI * EARTH_RADIUS_KM;
    let pairs = [
        (Point::new(0.0, 0.0), Point::new(0.0, 180.0)),
        (Point::new(90.0, 0.0), Point::new(-90.0, 0.0)),
        (Point::new(45.0, 10.0), Point::new(-45.0, -170.0)),
    ];
    for (a, b) in pairs {
        let d = distance(&a, &b);
        assert!(!d.is_nan());
        assert!((d - exp).abs() < 1e-6, "distance was {d}");
    }
}

#[test]
fn longitude_wraps_around_the_date_line() {
    let d = distance(&Point::new(0.0, 179.5), &Point::new(0.0, -179.5));
    let one_degree = distance(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
    assert!((d - one_degree).abs() < 1e-6, "distance was {d}");
}
