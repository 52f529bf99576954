//! Clock state machine: mode, time, and the pick handlers.
//!
//! [`ClockCore`] holds everything that doesn't depend on a DOM. Each handler
//! mutates the state and returns the [`Action`]s the host must carry out
//! (render, toggle the picking class, open or close the capture session,
//! dispatch `picked`). [`crate::clock::Clock`] owns one core per mounted
//! widget and applies the actions.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::ClockConfig;
use crate::error::InvalidModeError;
use crate::geometry::{Point, Rect, pick_time};
use crate::input::{PickState, PointerSample};
use crate::mode::Mode;
use crate::render::{ClockView, view};
use crate::time::Time;

/// Actions returned from handlers for the host to process, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cancel the browser's default handling of the triggering event.
    PreventDefault,
    /// Apply this view to the DOM.
    Render(ClockView),
    /// Toggle the picking class on the root.
    SetPicking(bool),
    /// Attach the document-level move/release listeners.
    BeginCapture,
    /// Detach the document-level move/release listeners.
    EndCapture,
    /// Dispatch the bubbling completion event; carries the picked time.
    Picked(Time),
}

/// Page-space bounding boxes of the two dials.
pub trait DialBounds {
    fn dial_rect(&self, dial: Mode) -> Rect;
}

/// Mode/time state and pick handlers for one clock.
#[derive(Debug, Clone)]
pub struct ClockCore {
    time: Time,
    mode: Mode,
    pick: PickState,
    inner_ring_ratio: f64,
}

impl Default for ClockCore {
    fn default() -> Self {
        Self::new(&ClockConfig::default())
    }
}

impl ClockCore {
    #[must_use]
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            time: Time::MIDNIGHT,
            mode: Mode::Hour,
            pick: PickState::Idle,
            inner_ring_ratio: config.inner_ring_ratio,
        }
    }

    // --- State ---

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Set the pick mode. Always renders.
    ///
    /// A running capture session follows the new mode.
    pub fn set_mode(&mut self, mode: Mode) -> Action {
        self.mode = mode;
        if let PickState::Picking { dial } = &mut self.pick {
            *dial = mode;
        }
        Action::Render(self.view())
    }

    /// Parse and set the pick mode.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidModeError`] for anything but `hour` or `minute`; the
    /// mode is left unchanged.
    pub fn set_mode_str(&mut self, raw: &str) -> Result<Action, InvalidModeError> {
        let mode = raw.parse()?;
        Ok(self.set_mode(mode))
    }

    #[must_use]
    pub fn time(&self) -> Time {
        self.time
    }

    /// Set the displayed time. Always renders, even when unchanged.
    pub fn set_time(&mut self, time: Time) -> Action {
        self.time = time;
        Action::Render(self.view())
    }

    #[must_use]
    pub fn pick_state(&self) -> PickState {
        self.pick
    }

    #[must_use]
    pub fn is_picking(&self) -> bool {
        self.pick.is_picking()
    }

    /// The view for the current mode and time.
    #[must_use]
    pub fn view(&self) -> ClockView {
        view(self.mode, self.time)
    }

    // --- Geometry ---

    /// Center of the dial for the current mode.
    #[must_use]
    pub fn active_dial_center(&self, bounds: &impl DialBounds) -> Point {
        bounds.dial_rect(self.mode).center()
    }

    // --- Handlers ---

    /// Press anywhere in the clock.
    #[must_use]
    pub fn keep_focus(&self) -> Vec<Action> {
        vec![Action::PreventDefault]
    }

    /// Hour label clicked. Ignored mid-drag.
    pub fn switch_to_hour(&mut self) -> Vec<Action> {
        self.switch_to(Mode::Hour)
    }

    /// Minute label clicked. Ignored mid-drag.
    pub fn switch_to_minute(&mut self) -> Vec<Action> {
        self.switch_to(Mode::Minute)
    }

    fn switch_to(&mut self, mode: Mode) -> Vec<Action> {
        if self.is_picking() {
            return Vec::new();
        }
        log::debug!("clock: switch to {mode} mode");
        vec![self.set_mode(mode)]
    }

    /// Press on `dial`. Opens a session when `dial` is the active dial.
    pub fn start_pick(&mut self, dial: Mode) -> Vec<Action> {
        if dial != self.mode {
            return Vec::new();
        }
        if self.is_picking() {
            return vec![Action::PreventDefault];
        }
        self.pick = PickState::Picking { dial };
        vec![Action::PreventDefault, Action::SetPicking(true), Action::BeginCapture]
    }

    /// Move during a session: re-pick from the pointer position.
    ///
    /// Inert while idle; the dial geometry is not read.
    pub fn pick(&mut self, sample: &PointerSample, bounds: &impl DialBounds) -> Vec<Action> {
        let PickState::Picking { dial } = self.pick else {
            return Vec::new();
        };
        let Some(point) = sample.page else {
            return vec![Action::PreventDefault];
        };
        let rect = bounds.dial_rect(dial);
        match pick_time(dial, self.time, rect, point, self.inner_ring_ratio) {
            Some(time) => vec![Action::PreventDefault, self.set_time(time)],
            None => vec![Action::PreventDefault],
        }
    }

    /// Release during a session.
    ///
    /// Hour picks advance to minute mode silently; minute picks return to hour
    /// mode and report completion.
    pub fn end_pick(&mut self) -> Vec<Action> {
        if !self.is_picking() {
            return Vec::new();
        }
        self.pick = PickState::Idle;
        let finished = self.mode;
        let mut actions = vec![Action::SetPicking(false), Action::EndCapture, self.set_mode(finished.next())];
        if finished == Mode::Minute {
            log::debug!("clock: picked {}", self.time);
            actions.push(Action::Picked(self.time));
        }
        actions
    }

    /// Drop any running session without completing it. Used on teardown.
    pub fn abandon_pick(&mut self) -> bool {
        let was_picking = self.is_picking();
        self.pick = PickState::Idle;
        was_picking
    }
}
