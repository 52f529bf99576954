//! Dial geometry: pointer position → angle → snapped hour or minute.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, in `[0, 360)`.
//! All coordinates are page-space CSS pixels.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{DEG_PER_HOUR, DEG_PER_MINUTE, HOUR_SECTORS, MINUTE_SECTORS};
use crate::mode::Mode;
use crate::time::Time;

/// A point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned bounding box in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + (self.width * 0.5), self.top + (self.height * 0.5))
    }

    /// Radius of the largest circle centered in the box.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) * 0.5
    }
}

/// Which of the two concentric hour rings a value or pointer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    /// Near the center: hours 1–12.
    Inner,
    /// Near the rim: hours 13–23 and 0.
    Outer,
}

impl Ring {
    /// The ring that displays `hour`. 12 sits inside and 0 outside, so the
    /// hand is small at noon and large at midnight.
    #[must_use]
    pub fn of_hour(hour: u8) -> Self {
        if (1..=HOUR_SECTORS).contains(&hour) {
            Self::Inner
        } else {
            Self::Outer
        }
    }

    /// The ring under a pointer `distance` pixels from the center of a dial
    /// with the given `radius`.
    #[must_use]
    pub fn at_distance(distance: f64, radius: f64, inner_ratio: f64) -> Self {
        if distance < radius * inner_ratio {
            Self::Inner
        } else {
            Self::Outer
        }
    }
}

pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Clockwise angle from 12 o'clock of `point` around `center`.
///
/// Returns `None` when the point sits on the center, where no direction exists.
#[must_use]
pub fn angle_from_center(center: Point, point: Point) -> Option<f64> {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return None;
    }
    Some(normalize_degrees_360(dx.atan2(-dy).to_degrees()))
}

/// Nearest of `sectors` equal sectors to `angle`, with sector 0 at 12 o'clock.
fn nearest_sector(angle: f64, step_deg: f64, sectors: u8) -> u8 {
    let index = (normalize_degrees_360(angle) / step_deg).round();
    // `index` lies in [0, sectors] because the angle is normalized first.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = index as u8;
    index % sectors
}

/// Hour under `angle` on the given ring.
#[must_use]
pub fn hour_at(angle: f64, ring: Ring) -> u8 {
    let sector = nearest_sector(angle, DEG_PER_HOUR, HOUR_SECTORS);
    match (ring, sector) {
        (Ring::Inner, 0) => HOUR_SECTORS,
        (Ring::Inner, k) => k,
        (Ring::Outer, 0) => 0,
        (Ring::Outer, k) => k + HOUR_SECTORS,
    }
}

/// Minute under `angle`.
#[must_use]
pub fn minute_at(angle: f64) -> u8 {
    nearest_sector(angle, DEG_PER_MINUTE, MINUTE_SECTORS)
}

/// Hand angle for a snapped hour: `(hour mod 12) * 30`.
#[must_use]
pub fn hour_angle(hour: u8) -> u16 {
    u16::from(hour % HOUR_SECTORS) * (360 / u16::from(HOUR_SECTORS))
}

/// Hand angle for a snapped minute: `minute * 6`.
#[must_use]
pub fn minute_angle(minute: u8) -> u16 {
    u16::from(minute % MINUTE_SECTORS) * (360 / u16::from(MINUTE_SECTORS))
}

/// Derive the time picked by a pointer at `point` over the dial `rect`.
///
/// Only the field for `mode` changes; the rest of `current` is kept. Returns
/// `None` when the pointer is exactly on the dial center.
#[must_use]
pub fn pick_time(mode: Mode, current: Time, rect: Rect, point: Point, inner_ratio: f64) -> Option<Time> {
    let center = rect.center();
    let angle = angle_from_center(center, point)?;
    let picked = match mode {
        Mode::Hour => {
            let ring = Ring::at_distance(center.distance_to(point), rect.radius(), inner_ratio);
            current.with_hour(hour_at(angle, ring))
        }
        Mode::Minute => current.with_minute(minute_at(angle)),
    };
    Some(picked)
}
