#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::DEFAULT_INNER_RING_RATIO;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn dial_at(left: f64, top: f64) -> Rect {
    Rect::new(left, top, 220.0, 220.0)
}

fn hour_for(rect: Rect, point: Point) -> Option<u8> {
    pick_time(Mode::Hour, Time::MIDNIGHT, rect, point, DEFAULT_INNER_RING_RATIO).map(Time::hour)
}

fn minute_for(rect: Rect, point: Point) -> Option<u8> {
    pick_time(Mode::Minute, Time::MIDNIGHT, rect, point, DEFAULT_INNER_RING_RATIO).map(Time::minute)
}

// =============================================================
// Rect / Point
// =============================================================

#[test]
fn rect_center_is_box_midpoint() {
    assert_eq!(dial_at(10.0, 10.0).center(), pt(120.0, 120.0));
    assert_eq!(dial_at(20.0, 20.0).center(), pt(130.0, 130.0));
}

#[test]
fn rect_radius_uses_smaller_side() {
    assert_eq!(Rect::new(0.0, 0.0, 220.0, 180.0).radius(), 90.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(pt(0.0, 0.0).distance_to(pt(3.0, 4.0)), 5.0));
}

// =============================================================
// Angles
// =============================================================

#[test]
fn normalize_degrees_360_wraps_values() {
    assert_eq!(normalize_degrees_360(0.0), 0.0);
    assert_eq!(normalize_degrees_360(370.0), 10.0);
    assert_eq!(normalize_degrees_360(-10.0), 350.0);
}

#[test]
fn angle_is_clockwise_from_twelve() {
    let c = pt(100.0, 100.0);
    assert!(approx_eq(angle_from_center(c, pt(100.0, 0.0)).unwrap(), 0.0));
    assert!(approx_eq(angle_from_center(c, pt(200.0, 100.0)).unwrap(), 90.0));
    assert!(approx_eq(angle_from_center(c, pt(100.0, 200.0)).unwrap(), 180.0));
    assert!(approx_eq(angle_from_center(c, pt(0.0, 100.0)).unwrap(), 270.0));
}

#[test]
fn angle_just_left_of_twelve_is_near_360() {
    let angle = angle_from_center(pt(110.0, 110.0), pt(109.0, 0.0)).unwrap();
    assert!(angle > 359.0 && angle < 360.0);
}

#[test]
fn angle_at_center_is_none() {
    assert_eq!(angle_from_center(pt(5.0, 5.0), pt(5.0, 5.0)), None);
}

// =============================================================
// Snapping
// =============================================================

#[test]
fn hour_rings_map_sector_zero_differently() {
    assert_eq!(hour_at(0.0, Ring::Inner), 12);
    assert_eq!(hour_at(0.0, Ring::Outer), 0);
    assert_eq!(hour_at(90.0, Ring::Inner), 3);
    assert_eq!(hour_at(90.0, Ring::Outer), 15);
    assert_eq!(hour_at(270.0, Ring::Outer), 21);
}

#[test]
fn hour_snaps_to_nearest_sector() {
    assert_eq!(hour_at(44.0, Ring::Inner), 1);
    assert_eq!(hour_at(46.0, Ring::Inner), 2);
    assert_eq!(hour_at(350.0, Ring::Inner), 12);
    assert_eq!(hour_at(344.0, Ring::Outer), 23);
}

#[test]
fn minute_snaps_to_nearest_sector() {
    assert_eq!(minute_at(0.0), 0);
    assert_eq!(minute_at(6.0), 1);
    assert_eq!(minute_at(8.9), 1);
    assert_eq!(minute_at(9.1), 2);
    assert_eq!(minute_at(180.0), 30);
    assert_eq!(minute_at(358.0), 0);
}

#[test]
fn ring_of_hour_matches_pick_rings() {
    for hour in 1..=12 {
        assert_eq!(Ring::of_hour(hour), Ring::Inner, "hour {hour}");
    }
    for hour in (13..24).chain([0]) {
        assert_eq!(Ring::of_hour(hour), Ring::Outer, "hour {hour}");
    }
}

#[test]
fn ring_threshold_is_fraction_of_radius() {
    assert_eq!(Ring::at_distance(50.0, 100.0, 0.5), Ring::Outer);
    assert_eq!(Ring::at_distance(49.9, 100.0, 0.5), Ring::Inner);
}

#[test]
fn hand_angles_use_snapped_unit() {
    assert_eq!(hour_angle(10), 300);
    assert_eq!(hour_angle(21), 270);
    assert_eq!(hour_angle(0), 0);
    assert_eq!(hour_angle(12), 0);
    assert_eq!(minute_angle(30), 180);
    assert_eq!(minute_angle(1), 6);
}

// =============================================================
// pick_time
// =============================================================

#[test]
fn pick_hour_table_on_origin_dial() {
    let rect = dial_at(0.0, 0.0);
    assert_eq!(hour_for(rect, pt(109.0, 0.0)), Some(0));
    assert_eq!(hour_for(rect, pt(180.0, 110.0)), Some(3));
    assert_eq!(hour_for(rect, pt(110.0, 60.0)), Some(12));
    assert_eq!(hour_for(rect, pt(220.0, 110.0)), Some(15));
    assert_eq!(hour_for(rect, pt(110.0, 0.0)), Some(0));
}

#[test]
fn pick_hour_on_offset_dial() {
    let rect = dial_at(10.0, 10.0);
    assert_eq!(hour_for(rect, pt(120.0, 10.0)), Some(0));
    assert_eq!(hour_for(rect, pt(175.0, 120.0)), Some(3));
    assert_eq!(hour_for(rect, pt(230.0, 120.0)), Some(15));
    assert_eq!(hour_for(rect, pt(10.0, 120.0)), Some(21));
}

#[test]
fn pick_minute_table() {
    assert_eq!(minute_for(dial_at(0.0, 0.0), pt(109.0, 0.0)), Some(0));
    assert_eq!(minute_for(dial_at(0.0, 0.0), pt(220.0, 110.0)), Some(15));
    assert_eq!(minute_for(dial_at(20.0, 20.0), pt(130.0, 200.0)), Some(30));
}

#[test]
fn pick_keeps_other_fields() {
    let current = Time::new(21, 42, 9).unwrap();
    let rect = dial_at(0.0, 0.0);
    let hour = pick_time(Mode::Hour, current, rect, pt(220.0, 110.0), DEFAULT_INNER_RING_RATIO).unwrap();
    assert_eq!(hour.to_string(), "15:42:09");
    let minute = pick_time(Mode::Minute, current, rect, pt(220.0, 110.0), DEFAULT_INNER_RING_RATIO).unwrap();
    assert_eq!(minute.to_string(), "21:15:09");
}

#[test]
fn pick_at_center_is_skipped() {
    assert_eq!(hour_for(dial_at(0.0, 0.0), pt(110.0, 110.0)), None);
}

#[test]
fn pick_beyond_rim_still_snaps() {
    assert_eq!(hour_for(dial_at(0.0, 0.0), pt(900.0, 110.0)), Some(15));
    assert_eq!(minute_for(dial_at(0.0, 0.0), pt(110.0, 900.0)), Some(30));
}
