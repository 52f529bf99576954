//! Structural class names and attributes of the clock DOM.
//!
//! These are the only names outside code is expected to query or toggle.
//! All of them derive from one prefix (default `mh`) so several widget
//! families can share a page.

#[cfg(test)]
#[path = "css_test.rs"]
mod css_test;

/// CSS custom property carrying an element's rotation.
pub const ANGLE_PROPERTY: &str = "--angle";

/// Class names and attribute names for one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Root container.
    pub clock: String,
    /// Root while a pick drag is in progress.
    pub clock_picking: String,
    /// Container of the hour and minute labels.
    pub time: String,
    pub hour: String,
    pub minute: String,
    /// Container of both dials and the hand.
    pub dials: String,
    /// Every dial.
    pub dial: String,
    pub dial_hour: String,
    pub dial_minute: String,
    /// Every tick mark.
    pub mark: String,
    /// Tick marks of the inner hour ring.
    pub mark_inner: String,
    pub hand: String,
    pub hand_small: String,
    /// Data attribute on the hand holding the mark it rests on.
    pub mark_attr: String,
    /// Data attribute on the root holding the current mode.
    pub mode_attr: String,
}

impl ClassNames {
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        let block = format!("{prefix}-clock");
        Self {
            clock_picking: format!("{block}--picking"),
            time: format!("{block}__time"),
            hour: format!("{block}__hour"),
            minute: format!("{block}__minute"),
            dials: format!("{block}__dials"),
            dial: format!("{block}__dial"),
            dial_hour: format!("{block}__dial--hour"),
            dial_minute: format!("{block}__dial--minute"),
            mark: format!("{block}__mark"),
            mark_inner: format!("{block}__mark--inner"),
            hand: format!("{block}__hand"),
            hand_small: format!("{block}__hand--small"),
            mark_attr: format!("data-{prefix}-mark"),
            mode_attr: format!("data-{prefix}-mode"),
            clock: block,
        }
    }
}
