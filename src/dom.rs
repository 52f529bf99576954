//! DOM collaborator used by the clock.
//!
//! The clock never talks to `web-sys` directly. Everything it needs from a
//! document (building elements, mutating them, measuring them, listening and
//! dispatching) goes through [`Dom`]. [`crate::web::WebDom`] implements it for
//! the browser; tests implement it in memory.

use std::rc::Rc;

use crate::error::DomError;
use crate::geometry::Rect;
use crate::input::PointerSample;

/// Listener callback. Returns `true` when the event's default action should
/// be prevented.
pub type Callback = Rc<dyn Fn(&PointerSample) -> bool>;

/// Where a listener is registered.
#[derive(Debug)]
pub enum ListenTarget<'a, N> {
    Node(&'a N),
    Document,
}

pub trait Dom {
    /// Element handle. Equality is element identity.
    type Node: Clone + PartialEq;
    /// A live listener registration. Dropping it without [`Dom::unlisten`]
    /// may leave the listener attached.
    type Listener;

    /// Create a detached element carrying `classes`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the document refuses to create the element.
    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<Self::Node, DomError>;

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the insertion is rejected.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Detach `node` from its parent. No-op when already detached.
    fn remove(&self, node: &Self::Node);

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Set an attribute such as `data-mh-mark`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] for an invalid attribute name.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Set an inline style property such as `--angle`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the style declaration rejects the property.
    fn set_style_property(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Add (`on`) or remove a class.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] for an invalid class token.
    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool) -> Result<(), DomError>;

    /// Bounding box of `node` in page coordinates.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Register `callback` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the registration is rejected.
    fn listen(
        &self,
        target: ListenTarget<'_, Self::Node>,
        event: &'static str,
        callback: Callback,
    ) -> Result<Self::Listener, DomError>;

    /// Remove a registration made by [`Dom::listen`].
    fn unlisten(&self, listener: Self::Listener);

    /// Dispatch a bubbling custom event named `event` from `node`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the event cannot be created or dispatched.
    fn dispatch(&self, node: &Self::Node, event: &str) -> Result<(), DomError>;
}
