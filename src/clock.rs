//! Mounted clock component.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`Clock`] is constructed on a container element and builds its subtree
//! there on [`Clock::init`]. Mount-time listeners cover focus keeping, label
//! clicks and dial presses; move/release listeners live on the document only
//! for the length of one capture session. The state machine itself is a
//! [`ClockCore`]; this module turns DOM events into core handler calls and
//! core [`Action`]s back into DOM mutations.
//!
//! DESIGN
//! ======
//! `Clock` is a cheap `Rc` handle. Listener callbacks hold weak references, so
//! a clock whose last handle is dropped stops reacting and tears itself down.
//! No borrow of the clock is held while the completion event is dispatched,
//! so listeners for it may call back into the clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use uuid::Uuid;

use crate::config::ClockConfig;
use crate::css::{ANGLE_PROPERTY, ClassNames};
use crate::dom::{Callback, Dom, ListenTarget};
use crate::engine::{Action, ClockCore, DialBounds};
use crate::error::{ClockError, ConfigError, DomError};
use crate::geometry::{Point, Rect};
use crate::input::{Handler, MOUNT_BINDINGS, PointerSample, SESSION_BINDINGS, Target};
use crate::mode::Mode;
use crate::registry::MountRegistry;
use crate::render::{ClockView, dial_marks};
use crate::time::Time;

/// Unique identifier for a clock instance.
pub type ClockId = Uuid;

type Shared<D> = Rc<RefCell<Inner<D>>>;

/// A document together with the registry of clocks mounted in it.
pub struct Host<D: Dom> {
    dom: D,
    mounts: RefCell<MountRegistry<D::Node, Weak<RefCell<Inner<D>>>>>,
}

impl<D: Dom> Host<D> {
    #[must_use]
    pub fn new(dom: D) -> Rc<Self> {
        Rc::new(Self { dom, mounts: RefCell::new(MountRegistry::new()) })
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Number of containers currently hosting a live clock.
    #[must_use]
    pub fn mounted_count(&self) -> usize {
        let mut mounts = self.mounts.borrow_mut();
        mounts.prune(|clock| clock.strong_count() > 0);
        mounts.len()
    }
}

/// Elements of one mounted clock.
struct ClockNodes<N> {
    root: N,
    hour: N,
    minute: N,
    hour_dial: N,
    minute_dial: N,
    hand: N,
}

impl<N> ClockNodes<N> {
    fn target(&self, target: Target) -> &N {
        match target {
            Target::Root => &self.root,
            Target::HourLabel => &self.hour,
            Target::MinuteLabel => &self.minute,
            Target::HourDial => &self.hour_dial,
            Target::MinuteDial => &self.minute_dial,
        }
    }

    fn dial(&self, dial: Mode) -> &N {
        match dial {
            Mode::Hour => &self.hour_dial,
            Mode::Minute => &self.minute_dial,
        }
    }
}

struct NodeBounds<'a, D: Dom> {
    dom: &'a D,
    nodes: &'a ClockNodes<D::Node>,
}

impl<D: Dom> DialBounds for NodeBounds<'_, D> {
    fn dial_rect(&self, dial: Mode) -> Rect {
        self.dom.bounding_rect(self.nodes.dial(dial))
    }
}

/// DOM handle and listener registrations of a mounted clock.
struct Mounted<D: Dom> {
    nodes: ClockNodes<D::Node>,
    listeners: Vec<D::Listener>,
    /// Document listeners of the open capture session; empty when idle.
    session: Vec<D::Listener>,
}

struct Inner<D: Dom> {
    id: ClockId,
    host: Rc<Host<D>>,
    parent: D::Node,
    config: ClockConfig,
    css: ClassNames,
    core: ClockCore,
    mounted: Option<Mounted<D>>,
    render_passes: u64,
}

/// What the DOM layer must still do after the clock borrow is released.
#[derive(Default)]
struct Outcome {
    prevent_default: bool,
    /// Time to announce with the completion event.
    picked: Option<Time>,
}

/// The analog clock component.
pub struct Clock<D: Dom + 'static> {
    inner: Shared<D>,
}

impl<D: Dom + 'static> Clone for Clock<D> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<D: Dom + 'static> Clock<D> {
    /// Create an unmounted clock for `parent` with the default config.
    #[must_use]
    pub fn new(host: &Rc<Host<D>>, parent: D::Node) -> Self {
        Self::build(host, parent, ClockConfig::default())
    }

    /// Create an unmounted clock with a custom config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the config fails validation.
    pub fn with_config(host: &Rc<Host<D>>, parent: D::Node, config: ClockConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(host, parent, config))
    }

    fn build(host: &Rc<Host<D>>, parent: D::Node, config: ClockConfig) -> Self {
        let inner = Inner {
            id: Uuid::new_v4(),
            host: Rc::clone(host),
            parent,
            css: config.class_names(),
            core: ClockCore::new(&config),
            config,
            mounted: None,
            render_passes: 0,
        };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    /// The live clock registered for `parent`, if any.
    #[must_use]
    pub fn find(host: &Rc<Host<D>>, parent: &D::Node) -> Option<Self> {
        let mut mounts = host.mounts.borrow_mut();
        mounts.prune(|clock| clock.strong_count() > 0);
        mounts.get(parent).and_then(Weak::upgrade).map(|inner| Self { inner })
    }

    // --- Accessors ---

    #[must_use]
    pub fn id(&self) -> ClockId {
        self.inner.borrow().id
    }

    /// The container the clock mounts into.
    #[must_use]
    pub fn parent(&self) -> D::Node {
        self.inner.borrow().parent.clone()
    }

    /// Root element of the clock while mounted.
    #[must_use]
    pub fn root(&self) -> Option<D::Node> {
        self.inner.borrow().mounted.as_ref().map(|m| m.nodes.root.clone())
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted.is_some()
    }

    #[must_use]
    pub fn class_names(&self) -> ClassNames {
        self.inner.borrow().css.clone()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.inner.borrow().core.mode()
    }

    /// Set the pick mode and re-render.
    pub fn set_mode(&self, mode: Mode) {
        let mut inner = self.inner.borrow_mut();
        let action = inner.core.set_mode(mode);
        inner.apply(&self.inner, vec![action]);
    }

    /// Parse and set the pick mode.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidMode`] for anything but `hour` or
    /// `minute`; the mode is unchanged and nothing is rendered.
    pub fn set_mode_str(&self, raw: &str) -> Result<(), ClockError> {
        let mode = raw.parse::<Mode>()?;
        self.set_mode(mode);
        Ok(())
    }

    #[must_use]
    pub fn time(&self) -> Time {
        self.inner.borrow().core.time()
    }

    /// Set the displayed time and re-render, even if unchanged.
    pub fn set_time(&self, time: Time) {
        let mut inner = self.inner.borrow_mut();
        let action = inner.core.set_time(time);
        inner.apply(&self.inner, vec![action]);
    }

    #[must_use]
    pub fn is_picking(&self) -> bool {
        self.inner.borrow().core.is_picking()
    }

    /// The view currently shown.
    #[must_use]
    pub fn view(&self) -> ClockView {
        self.inner.borrow().core.view()
    }

    /// Center of the active dial, while mounted.
    #[must_use]
    pub fn active_dial_center(&self) -> Option<Point> {
        let inner = self.inner.borrow();
        let mounted = inner.mounted.as_ref()?;
        let bounds = NodeBounds { dom: &inner.host.dom, nodes: &mounted.nodes };
        Some(inner.core.active_dial_center(&bounds))
    }

    /// Number of render passes applied to the DOM so far.
    #[must_use]
    pub fn render_passes(&self) -> u64 {
        self.inner.borrow().render_passes
    }

    // --- Lifecycle ---

    /// Build the clock subtree in the parent and wire its listeners.
    ///
    /// A clock that is already mounted is torn down first.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Dom`] if the document rejects an element or a
    /// listener; nothing is left attached in that case.
    pub fn init(&self) -> Result<(), ClockError> {
        let mut inner = self.inner.borrow_mut();
        inner.teardown();
        let mounted = inner.mount(&self.inner)?;
        inner.mounted = Some(mounted);
        let (parent, id) = (inner.parent.clone(), inner.id);
        inner.host.mounts.borrow_mut().register(parent, id, Rc::downgrade(&self.inner));
        let view = inner.core.view();
        inner.apply(&self.inner, vec![Action::Render(view)]);
        log::debug!("clock {id}: mounted");
        Ok(())
    }

    /// Remove the subtree and every listener. Safe to call at any time.
    pub fn destroy(&self) {
        self.inner.borrow_mut().teardown();
    }
}

impl<D: Dom + 'static> Inner<D> {
    fn mount(&self, shared: &Shared<D>) -> Result<Mounted<D>, DomError> {
        let nodes = self.build_nodes()?;
        let mut listeners = Vec::with_capacity(MOUNT_BINDINGS.len());
        for &(target, event, handler) in MOUNT_BINDINGS {
            let node = nodes.target(target);
            match self.host.dom.listen(ListenTarget::Node(node), event, callback(shared, handler)) {
                Ok(listener) => listeners.push(listener),
                Err(err) => {
                    for listener in listeners {
                        self.host.dom.unlisten(listener);
                    }
                    return Err(err);
                }
            }
        }
        if let Err(err) = self.host.dom.append_child(&self.parent, &nodes.root) {
            for listener in listeners {
                self.host.dom.unlisten(listener);
            }
            return Err(err);
        }
        Ok(Mounted { nodes, listeners, session: Vec::new() })
    }

    /// Create the detached subtree: root → (time → hour, minute), (dials →
    /// hour dial, minute dial, hand).
    fn build_nodes(&self) -> Result<ClockNodes<D::Node>, DomError> {
        let dom = &self.host.dom;
        let css = &self.css;

        let root = dom.create_element("div", &[&css.clock])?;
        let time = dom.create_element("div", &[&css.time])?;
        let hour = dom.create_element("span", &[&css.hour])?;
        let minute = dom.create_element("span", &[&css.minute])?;
        dom.append_child(&time, &hour)?;
        dom.append_child(&time, &minute)?;
        dom.append_child(&root, &time)?;

        let dials = dom.create_element("div", &[&css.dials])?;
        let hour_dial = self.build_dial(Mode::Hour, &css.dial_hour)?;
        let minute_dial = self.build_dial(Mode::Minute, &css.dial_minute)?;
        let hand = dom.create_element("div", &[&css.hand])?;
        dom.append_child(&dials, &hour_dial)?;
        dom.append_child(&dials, &minute_dial)?;
        dom.append_child(&dials, &hand)?;
        dom.append_child(&root, &dials)?;

        Ok(ClockNodes { root, hour, minute, hour_dial, minute_dial, hand })
    }

    fn build_dial(&self, mode: Mode, modifier: &str) -> Result<D::Node, DomError> {
        let dom = &self.host.dom;
        let css = &self.css;
        let dial = dom.create_element("div", &[&css.dial, modifier])?;
        for entry in dial_marks(mode) {
            let mark = if entry.inner {
                dom.create_element("div", &[&css.mark, &css.mark_inner])?
            } else {
                dom.create_element("div", &[&css.mark])?
            };
            dom.set_text(&mark, &entry.label);
            dom.set_attribute(&mark, &css.mark_attr, &entry.label)?;
            dom.set_style_property(&mark, ANGLE_PROPERTY, &format!("{}deg", entry.angle_deg))?;
            dom.append_child(&dial, &mark)?;
        }
        Ok(dial)
    }

    fn run(&mut self, handler: Handler, sample: &PointerSample) -> Vec<Action> {
        match handler {
            Handler::KeepFocus => self.core.keep_focus(),
            Handler::SwitchToHour => self.core.switch_to_hour(),
            Handler::SwitchToMinute => self.core.switch_to_minute(),
            Handler::StartPick(dial) => self.core.start_pick(dial),
            Handler::Pick => match &self.mounted {
                Some(mounted) => {
                    let bounds = NodeBounds { dom: &self.host.dom, nodes: &mounted.nodes };
                    self.core.pick(sample, &bounds)
                }
                None => Vec::new(),
            },
            Handler::EndPick => self.core.end_pick(),
        }
    }

    fn apply(&mut self, shared: &Shared<D>, actions: Vec<Action>) -> Outcome {
        let mut outcome = Outcome::default();
        for action in actions {
            match action {
                Action::PreventDefault => outcome.prevent_default = true,
                Action::Render(view) => self.render(&view),
                Action::SetPicking(on) => self.set_picking_class(on),
                Action::BeginCapture => self.begin_capture(shared),
                Action::EndCapture => self.end_capture(),
                Action::Picked(time) => outcome.picked = Some(time),
            }
        }
        outcome
    }

    fn render(&mut self, view: &ClockView) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        if let Err(err) = apply_view(&self.host.dom, &mounted.nodes, &self.css, view) {
            log::warn!("clock {}: render failed: {err}", self.id);
        }
        self.render_passes += 1;
    }

    fn set_picking_class(&self, on: bool) {
        let Some(mounted) = &self.mounted else {
            return;
        };
        if let Err(err) = self.host.dom.toggle_class(&mounted.nodes.root, &self.css.clock_picking, on) {
            log::warn!("clock {}: picking class toggle failed: {err}", self.id);
        }
    }

    fn begin_capture(&mut self, shared: &Shared<D>) {
        let Some(mounted) = &mut self.mounted else {
            return;
        };
        if !mounted.session.is_empty() {
            return;
        }
        for &(event, handler) in SESSION_BINDINGS {
            match self.host.dom.listen(ListenTarget::Document, event, callback(shared, handler)) {
                Ok(listener) => mounted.session.push(listener),
                Err(err) => log::warn!("clock {}: capture listener for {event} failed: {err}", self.id),
            }
        }
    }

    fn end_capture(&mut self) {
        let Some(mounted) = &mut self.mounted else {
            return;
        };
        for listener in mounted.session.drain(..) {
            self.host.dom.unlisten(listener);
        }
    }
}

impl<D: Dom> Inner<D> {
    fn teardown(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        self.core.abandon_pick();
        for listener in mounted.session.into_iter().chain(mounted.listeners) {
            self.host.dom.unlisten(listener);
        }
        self.host.dom.remove(&mounted.nodes.root);
        match self.host.mounts.try_borrow_mut() {
            Ok(mut mounts) => {
                if !mounts.unregister(&self.parent, self.id) {
                    if let Some(owner) = mounts.owner(&self.parent) {
                        log::debug!("clock {}: parent already taken over by {owner}", self.id);
                    }
                }
            }
            Err(_) => log::warn!("clock {}: registry busy during teardown", self.id),
        }
        log::debug!("clock {}: destroyed", self.id);
    }
}

impl<D: Dom> Drop for Inner<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn apply_view<D: Dom>(dom: &D, nodes: &ClockNodes<D::Node>, css: &ClassNames, view: &ClockView) -> Result<(), DomError> {
    dom.set_text(&nodes.hour, &view.hour_label);
    dom.set_text(&nodes.minute, &view.minute_label);
    dom.set_attribute(&nodes.root, &css.mode_attr, view.mode.as_str())?;
    dom.set_style_property(&nodes.hand, ANGLE_PROPERTY, &view.hand.angle_css())?;
    dom.toggle_class(&nodes.hand, &css.hand_small, view.hand.small)?;
    dom.set_attribute(&nodes.hand, &css.mark_attr, view.hand.mark.as_deref().unwrap_or(""))
}

/// Listener callback routing `handler` to the clock behind `shared`.
fn callback<D: Dom + 'static>(shared: &Shared<D>, handler: Handler) -> Callback {
    let weak = Rc::downgrade(shared);
    Rc::new(move |sample: &PointerSample| match weak.upgrade() {
        Some(shared) => handle(&shared, handler, sample),
        None => false,
    })
}

/// A completion event to dispatch once the clock borrow is released.
struct Completion<D: Dom> {
    id: ClockId,
    host: Rc<Host<D>>,
    root: D::Node,
    event: String,
    time: Time,
}

/// Run `handler` and carry out its actions. Returns whether to prevent the
/// event's default action.
fn handle<D: Dom + 'static>(shared: &Shared<D>, handler: Handler, sample: &PointerSample) -> bool {
    let (outcome, picked) = {
        let Ok(mut inner) = shared.try_borrow_mut() else {
            log::warn!("clock: re-entrant {handler:?} ignored");
            return false;
        };
        let actions = inner.run(handler, sample);
        let outcome = inner.apply(shared, actions);
        let picked = match (&inner.mounted, outcome.picked) {
            (Some(mounted), Some(time)) => Some(Completion {
                id: inner.id,
                host: Rc::clone(&inner.host),
                root: mounted.nodes.root.clone(),
                event: inner.config.picked_event.clone(),
                time,
            }),
            _ => None,
        };
        (outcome, picked)
    };
    if let Some(done) = picked {
        log::debug!("clock {}: dispatching {} for {}", done.id, done.event, done.time);
        if let Err(err) = done.host.dom.dispatch(&done.root, &done.event) {
            log::warn!("clock {}: {} dispatch failed: {err}", done.id, done.event);
        }
    }
    outcome.prevent_default
}
