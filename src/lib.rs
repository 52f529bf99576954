//! Analog clock picker for a date/time widget.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! dial half of a time picker: the user presses on a circular dial, drags, and
//! releases to choose an hour and then a minute. Pointer positions are mapped
//! to snapped time units and the result is rendered back onto the dial.
//!
//! All behavior is written against the [`dom::Dom`] collaborator trait so the
//! state machine, geometry and lifecycle are testable without a browser.
//! [`web::WebDom`] is the `web-sys` implementation used in production.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`clock`] | Mounted component: DOM lifecycle, listener wiring, capture sessions |
//! | [`engine`] | Testable [`engine::ClockCore`]: mode/time state and pick handlers |
//! | [`geometry`] | Pointer → angle → snapped hour/minute |
//! | [`render`] | Pure `(mode, time)` → [`render::ClockView`] mapping and mark labels |
//! | [`input`] | Pick state machine, pointer samples, event names |
//! | [`dom`] | DOM collaborator trait |
//! | [`web`] | `web-sys` DOM and the JavaScript-facing widget |
//! | [`registry`] | Container → mounted instance registry |
//! | [`time`] | `Time` value object |
//! | [`mode`] | Hour/minute pick mode |
//! | [`css`] | Structural class names |
//! | [`config`] | Widget configuration |
//! | [`error`] | Crate error types |
//! | [`consts`] | Shared numeric constants |

pub mod clock;
pub mod config;
pub mod consts;
pub mod css;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mode;
pub mod registry;
pub mod render;
pub mod time;
pub mod web;

pub use clock::{Clock, ClockId, Host};
pub use config::ClockConfig;
pub use error::{ClockError, ConfigError, DomError, InvalidModeError, TimeError};
pub use mode::Mode;
pub use time::Time;
