//! End-to-end scenarios: a walk out and back, rendered and described.

use approx::assert_abs_diff_eq;
use getback_gps::format::{Locale, format_angle, format_dist, format_speed};
use getback_gps::{
    CardinalDirection, Coordinate, Coordinates, Error, GeoCoordinate, GeoValue, InvalidArgumentError, Latitude,
    Longitude,
};
use std::cell::Cell;
use std::rc::Rc;

fn scale_by(factor: f64) -> impl Fn(&Coordinate) -> Coordinate {
    move |c: &Coordinate| Coordinate::from_polar(c.polar_radius() * factor, c.polar_angle()).unwrap()
}

#[test]
fn triangle_closed_and_open() {
    let mut path: Coordinates = [(0, 0), (10, 0), (10, 10)]
        .into_iter()
        .map(|(x, y)| Coordinate::from_cartesian(x, y))
        .collect();

    insta::assert_debug_snapshot!(path.to_lines_array(), @r"
    [
        0.0,
        0.0,
        10.0,
        0.0,
        10.0,
        0.0,
        10.0,
        10.0,
        10.0,
        10.0,
        0.0,
        0.0,
    ]
    ");

    path.set_close_line(false);
    let lines = path.to_lines_array();
    assert_eq!(lines.len(), 2 * Coordinates::NUM_COORD_LINE);
    assert_eq!(lines[Coordinates::NUM_COORD_LINE + Coordinates::POS_END_Y], 10.0);
}

#[test]
fn single_point_draws_nothing() {
    let mut path = Coordinates::new();
    path.add_cartesian(5, 5);
    assert!(path.to_lines_array().is_empty());
    path.set_close_line(false);
    assert!(path.lines().is_empty());
}

#[test]
fn converter_applies_on_each_render_without_touching_points() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let double = scale_by(2.0);

    let mut path = Coordinates::new();
    path.add_cartesian(3, 4);
    path.add_cartesian(-6, 8);
    path.set_coordinate_converter(move |c: &Coordinate| {
        counter.set(counter.get() + 1);
        double(c)
    });

    let first = path.to_lines_array();
    let second = path.to_lines_array();
    assert_eq!(first, second);
    assert_eq!(first, vec![6.0, 8.0, -12.0, 16.0, -12.0, 16.0, 6.0, 8.0]);
    assert_eq!(calls.get(), 4);

    // stored points stay unconverted
    assert_eq!(path.to_array()[0].cartesian_coordinate().to_array(), [3, 4]);
    assert_abs_diff_eq!(path.to_array()[1].polar_radius(), 10.0, epsilon = 1e-9);
}

#[test]
fn missing_inputs_are_reported() {
    let mut path = Coordinates::new();
    let err = path.try_add_coordinate(None).unwrap_err();
    assert_eq!(err, InvalidArgumentError::MissingCoordinate);
    assert!(path.is_empty());

    let err: Error = path.try_set_coordinate_converter(None).unwrap_err().into();
    assert!(matches!(err, Error::InvalidArgument(InvalidArgumentError::MissingConverter)));
    assert!(!path.has_converter());
}

#[test]
fn heading_home() {
    // bearing from the current position back to the start, as a compass
    // heading (0 = north, clockwise)
    let home = Coordinate::from_cartesian(-300, -400);
    let math_angle = home.polar_angle();
    let heading = CardinalDirection::from_bearing(90.0 - math_angle).unwrap();

    insta::assert_snapshot!(format_dist(home.polar_radius(), &Locale::EN_US), @"500m");
    insta::assert_snapshot!(format_angle(heading.value(), &Locale::EN_US), @"216.87°");
    insta::assert_snapshot!(heading.segment(), @"SW");
}

#[test]
fn positions_and_dynamic_values() {
    let lat = Latitude::new(-33.86).unwrap();
    let lon = Longitude::new(151.21).unwrap();
    insta::assert_snapshot!(format!("{lat}, {lon}"), @"33.86° S, 151.21° E");

    let mut values = [GeoValue::from(lat), GeoValue::from(lon), GeoValue::from(CardinalDirection::default())];
    for value in &mut values {
        let low = value.low_limit();
        assert!(value.set_value(low - 1.0).is_err());
    }
    let labels: Vec<&str> = values.iter().map(|v| v.segment_label()).collect();
    assert_eq!(labels, ["S", "E", "NE"]);
}

#[test]
fn range_errors_convert_to_crate_error() {
    let err: Error = Latitude::new(100.0).unwrap_err().into();
    insta::assert_snapshot!(err, @"latitude value 100 is not in range -90.0 .. 90.0");
}

#[test]
fn trip_summary_per_locale() {
    let summary = |locale: &Locale| {
        format!(
            "{} at {} heading {}",
            format_dist(12_345_000.0, locale),
            format_speed(2.0, locale),
            format_angle(-45.678, locale)
        )
    };
    insta::assert_snapshot!(summary(&Locale::EN_US), @"12,345km at 7.2km/h heading 314.32°");
    insta::assert_snapshot!(summary(&Locale::NL_BE), @"12.345km at 7,2km/h heading 314,32°");
    insta::assert_snapshot!(summary(&Locale::from_tag("de-DE").unwrap()), @"12.345km at 7,2km/h heading 314,32°");
}
