//! Shared numeric constants for the clock crate.

// ── Dial ────────────────────────────────────────────────────────

/// Number of hour sectors on one ring of the hour dial.
pub const HOUR_SECTORS: u8 = 12;

/// Number of minute sectors on the minute dial.
pub const MINUTE_SECTORS: u8 = 60;

/// Angular width of one hour sector, in degrees.
pub const DEG_PER_HOUR: f64 = 30.0;

/// Angular width of one minute sector, in degrees.
pub const DEG_PER_MINUTE: f64 = 6.0;

/// Minutes between two labelled marks on the minute dial.
pub const MINUTE_MARK_STEP: u8 = 5;

/// Default inner-ring radius as a fraction of the dial radius.
///
/// Pointers closer to the center than this pick the inner ring (1–12).
pub const DEFAULT_INNER_RING_RATIO: f64 = 0.75;

// ── Time ────────────────────────────────────────────────────────

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const SECONDS_PER_MINUTE: u8 = 60;
