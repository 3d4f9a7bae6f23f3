mod common;

use cambio_core::timeseries::fill::{Field, interpolate_value};
use cambio_core::{DailyPoint, fill_missing_days};
use common::{approx, day, flat};

#[test]
fn interpolates_linearly_by_elapsed_time() {
    let filled = fill_missing_days(vec![flat(day(0), 100.0), flat(day(10), 200.0)]);
    assert_eq!(filled.len(), 11);
    assert!(approx(filled[4].rate_value, 140.0));
    assert!(approx(filled[4].index_value, 140.0));
    assert!(approx(filled[4].derived_value, 140.0));
    assert_eq!(filled[0], flat(day(0), 100.0));
    assert_eq!(filled[10], flat(day(10), 200.0));
}

#[test]
fn zero_anchor_is_skipped_not_interpolated() {
    let prev = DailyPoint::new(day(0), 0.0, 10.0, 0.0);
    let next = DailyPoint::new(day(2), 50.0, 10.0, 50.0);
    assert_eq!(interpolate_value(day(1), Some(&prev), Some(&next), Field::Rate), 50.0);
    assert_eq!(interpolate_value(day(1), Some(&next), Some(&prev), Field::Rate), 50.0);

    let both_zero = DailyPoint::new(day(3), 0.0, 1.0, 0.0);
    assert_eq!(
        interpolate_value(day(1), Some(&prev), Some(&both_zero), Field::Derived),
        0.0
    );
}

#[test]
fn one_sided_neighbours_are_copied_not_extrapolated() {
    let p = flat(day(0), 7.0);
    assert_eq!(interpolate_value(day(5), Some(&p), None, Field::Index), 7.0);
    assert_eq!(interpolate_value(day(5), None, Some(&p), Field::Index), 7.0);
    assert_eq!(interpolate_value(day(5), None, None, Field::Index), 0.0);
}

#[test]
fn fewer_than_two_points_are_returned_unchanged() {
    assert!(fill_missing_days(Vec::new()).is_empty());
    // A lone partial point is not sanitized away.
    let lone = vec![DailyPoint::new(day(0), 800.0, 0.0, 0.0)];
    assert_eq!(fill_missing_days(lone.clone()), lone);
}

#[test]
fn blank_points_are_not_anchors() {
    let input = vec![
        flat(day(0), 10.0),
        DailyPoint::new(day(1), 0.0, 0.0, 0.0),
        flat(day(4), 40.0),
        DailyPoint::new(day(9), 0.0, 0.0, 0.0),
    ];
    let filled = fill_missing_days(input);
    // Range ends at the last non-blank day.
    assert_eq!(filled.len(), 5);
    assert!(approx(filled[1].rate_value, 17.5));
}

#[test]
fn all_blank_input_yields_empty_series() {
    let input = vec![
        DailyPoint::new(day(0), 0.0, 0.0, 0.0),
        DailyPoint::new(day(1), 0.0, 0.0, 0.0),
    ];
    assert!(fill_missing_days(input).is_empty());
}

#[test]
fn unsorted_input_is_sorted_first() {
    let filled = fill_missing_days(vec![flat(day(3), 30.0), flat(day(0), 0.5), flat(day(1), 10.0)]);
    let days: Vec<_> = filled.iter().map(|p| p.date).collect();
    assert_eq!(days, vec![day(0), day(1), day(2), day(3)]);
    assert!(approx(filled[2].rate_value, 20.0));
}

#[test]
fn partial_anchor_feeds_neighbours_but_is_sanitized_away() {
    // Day 2 has a rate but no index reading.
    let input = vec![
        DailyPoint::new(day(0), 100.0, 10.0, 100.0),
        DailyPoint::new(day(2), 120.0, 0.0, 0.0),
        DailyPoint::new(day(4), 140.0, 14.0, 140.0),
    ];
    let filled = fill_missing_days(input);
    let days: Vec<_> = filled.iter().map(|p| p.date).collect();
    assert_eq!(days, vec![day(0), day(1), day(3), day(4)]);

    // Day 1 sits between day 0 and the partial day 2: its rate uses day 2,
    // its index skips the zero and copies day 0.
    assert!(approx(filled[1].rate_value, 110.0));
    assert!(approx(filled[1].index_value, 10.0));
    assert!(approx(filled[1].derived_value, 100.0));
    // Day 3: rate between 120 and 140, index copies day 4.
    assert!(approx(filled[2].rate_value, 130.0));
    assert!(approx(filled[2].index_value, 14.0));
}

#[test]
fn first_point_wins_for_a_repeated_day() {
    let filled = fill_missing_days(vec![
        flat(day(0), 1.0),
        flat(day(1), 5.0),
        flat(day(1), 9.0),
        flat(day(2), 3.0),
    ]);
    assert_eq!(filled.len(), 3);
    assert_eq!(filled[1].rate_value, 5.0);
}
