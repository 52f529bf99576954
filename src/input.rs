//! Input model: pointer samples, DOM event names, and the pick state machine.
//!
//! `PickState` is the gesture tracked between a press on the active dial and
//! the matching release anywhere in the document. `Handler` names the six
//! reactions the clock wires to DOM events; the wiring tables below say which
//! event on which target triggers which handler.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::mode::Mode;

/// A pointer or touch event reduced to what the clock reads from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Page coordinates of the mouse, or of the first touch. `None` when the
    /// event carries no position (e.g. `touchend` with no remaining touches).
    pub page: Option<Point>,
}

impl PointerSample {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { page: Some(Point::new(x, y)) }
    }

    /// A sample with no position.
    #[must_use]
    pub fn none() -> Self {
        Self { page: None }
    }

    /// Build from mouse coordinates and the page coordinates of the event's
    /// touch list. The first touch wins over mouse coordinates.
    #[must_use]
    pub fn from_parts(mouse: Option<Point>, touches: &[Point]) -> Self {
        Self { page: touches.first().copied().or(mouse) }
    }
}

/// Pick gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickState {
    /// No gesture in progress; moves and releases are ignored.
    #[default]
    Idle,
    /// A press on `dial` opened a capture session that is still running.
    Picking {
        /// The dial the session tracks; always the clock's current mode.
        dial: Mode,
    },
}

impl PickState {
    #[must_use]
    pub fn is_picking(self) -> bool {
        matches!(self, Self::Picking { .. })
    }
}

/// The reactions the clock wires to DOM events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Prevent presses inside the clock from stealing input focus.
    KeepFocus,
    /// Hour label clicked.
    SwitchToHour,
    /// Minute label clicked.
    SwitchToMinute,
    /// Press on a dial.
    StartPick(Mode),
    /// Move during a session.
    Pick,
    /// Release during a session.
    EndPick,
}

/// Element a mount-time listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Root,
    HourLabel,
    MinuteLabel,
    HourDial,
    MinuteDial,
}

pub const MOUSEDOWN: &str = "mousedown";
pub const MOUSEMOVE: &str = "mousemove";
pub const MOUSEUP: &str = "mouseup";
pub const TOUCHSTART: &str = "touchstart";
pub const TOUCHMOVE: &str = "touchmove";
pub const TOUCHEND: &str = "touchend";
pub const TOUCHCANCEL: &str = "touchcancel";
pub const CLICK: &str = "click";

/// Listeners attached for the whole time the clock is mounted.
pub const MOUNT_BINDINGS: &[(Target, &str, Handler)] = &[
    (Target::Root, MOUSEDOWN, Handler::KeepFocus),
    (Target::HourLabel, CLICK, Handler::SwitchToHour),
    (Target::MinuteLabel, CLICK, Handler::SwitchToMinute),
    (Target::HourDial, MOUSEDOWN, Handler::StartPick(Mode::Hour)),
    (Target::HourDial, TOUCHSTART, Handler::StartPick(Mode::Hour)),
    (Target::MinuteDial, MOUSEDOWN, Handler::StartPick(Mode::Minute)),
    (Target::MinuteDial, TOUCHSTART, Handler::StartPick(Mode::Minute)),
];

/// Document listeners attached only while a capture session is open.
pub const SESSION_BINDINGS: &[(&str, Handler)] = &[
    (MOUSEMOVE, Handler::Pick),
    (TOUCHMOVE, Handler::Pick),
    (MOUSEUP, Handler::EndPick),
    (TOUCHEND, Handler::EndPick),
    (TOUCHCANCEL, Handler::EndPick),
];
