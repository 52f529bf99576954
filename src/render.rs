//! Rendering: maps `(mode, time)` to what the dial should show.
//!
//! This module is pure. It produces a [`ClockView`] describing label text,
//! hand angle, hand size and mark annotation; [`crate::clock`] applies the
//! view to the DOM. It also describes the fixed set of tick marks each dial
//! carries so the lifecycle manager can build them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{HOUR_SECTORS, MINUTE_MARK_STEP, MINUTE_SECTORS};
use crate::geometry::{Ring, hour_angle, minute_angle};
use crate::mode::Mode;
use crate::time::Time;

/// Visual state of the shared selection hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Rotation in whole degrees, clockwise from 12 o'clock.
    pub angle_deg: u16,
    /// Short hand pointing at the inner hour ring.
    pub small: bool,
    /// Label of the mark the hand rests on, if it rests on one.
    pub mark: Option<String>,
}

impl HandView {
    /// Value for the hand's `--angle` CSS custom property.
    #[must_use]
    pub fn angle_css(&self) -> String {
        format!("{}deg", self.angle_deg)
    }
}

/// Everything the clock displays for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    pub mode: Mode,
    /// Two-digit hour.
    pub hour_label: String,
    /// Two-digit minute.
    pub minute_label: String,
    pub hand: HandView,
}

/// Compute the view for `mode` and `time`.
#[must_use]
pub fn view(mode: Mode, time: Time) -> ClockView {
    let hand = match mode {
        Mode::Hour => HandView {
            angle_deg: hour_angle(time.hour()),
            small: Ring::of_hour(time.hour()) == Ring::Inner,
            mark: Some(mark_label(Mode::Hour, time.hour())),
        },
        Mode::Minute => {
            let minute = time.minute();
            HandView {
                angle_deg: minute_angle(minute),
                small: false,
                mark: (minute % MINUTE_MARK_STEP == 0).then(|| mark_label(Mode::Minute, minute)),
            }
        }
    };
    ClockView {
        mode,
        hour_label: format!("{:02}", time.hour()),
        minute_label: format!("{:02}", time.minute()),
        hand,
    }
}

/// Text printed on the mark for `value`.
///
/// Inner-ring hours print bare (`1`..`12`); outer-ring hours and minutes are
/// zero padded (`00`, `13`, `05`).
#[must_use]
pub fn mark_label(mode: Mode, value: u8) -> String {
    match mode {
        Mode::Hour if Ring::of_hour(value) == Ring::Inner => value.to_string(),
        _ => format!("{value:02}"),
    }
}

/// One tick mark on a dial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSpec {
    /// Hour or minute the mark stands for.
    pub value: u8,
    pub angle_deg: u16,
    pub label: String,
    /// Sits on the inner hour ring.
    pub inner: bool,
}

/// The fixed marks carried by the dial for `mode`.
///
/// The hour dial has two rings of twelve (`12, 1..11` inside, `00, 13..23`
/// outside); the minute dial has twelve marks at five-minute steps.
#[must_use]
pub fn dial_marks(mode: Mode) -> Vec<MarkSpec> {
    match mode {
        Mode::Hour => (0..HOUR_SECTORS)
            .flat_map(|k| {
                let inner = if k == 0 { HOUR_SECTORS } else { k };
                let outer = if k == 0 { 0 } else { k + HOUR_SECTORS };
                [hour_mark(outer), hour_mark(inner)]
            })
            .collect(),
        Mode::Minute => (0..MINUTE_SECTORS)
            .step_by(usize::from(MINUTE_MARK_STEP))
            .map(|minute| MarkSpec {
                value: minute,
                angle_deg: minute_angle(minute),
                label: mark_label(Mode::Minute, minute),
                inner: false,
            })
            .collect(),
    }
}

fn hour_mark(hour: u8) -> MarkSpec {
    MarkSpec {
        value: hour,
        angle_deg: hour_angle(hour),
        label: mark_label(Mode::Hour, hour),
        inner: Ring::of_hour(hour) == Ring::Inner,
    }
}
