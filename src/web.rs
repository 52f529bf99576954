//! Browser bindings: the `web-sys` [`Dom`] and the JavaScript-facing widget.
//!
//! Every clock created from JavaScript shares one [`Host`] per thread, so
//! [`ClockWidget::find`] sees clocks mounted by any other widget handle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CustomEvent, CustomEventInit, Document, Event, EventTarget, HtmlElement, MouseEvent,
    TouchEvent, Window,
};

use crate::clock::{Clock, Host};
use crate::config::ClockConfig;
use crate::dom::{Callback, Dom, ListenTarget};
use crate::error::DomError;
use crate::geometry::{Point, Rect};
use crate::input::PointerSample;
use crate::time::Time;

fn js_error(context: &str, err: &JsValue) -> DomError {
    DomError(format!("{context}: {err:?}"))
}

/// A listener registered through [`WebDom::listen`].
pub struct WebListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// [`Dom`] over the page's `window.document`.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the current window.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] outside a browser window context.
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or_else(|| DomError("no window".into()))?;
        let document = window.document().ok_or_else(|| DomError("no document".into()))?;
        Ok(Self { window, document })
    }

    /// Page scroll offset, zero when the window refuses to report it.
    fn scroll(&self) -> Point {
        Point::new(self.window.scroll_x().unwrap_or(0.0), self.window.scroll_y().unwrap_or(0.0))
    }
}

/// Reduce a DOM event to its page position. Touch events use the first
/// active touch.
fn sample_of(event: &Event) -> PointerSample {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touches = touch_event.touches();
        let first = touches.get(0).map(|t| Point::new(f64::from(t.page_x()), f64::from(t.page_y())));
        return PointerSample::from_parts(None, first.as_slice());
    }
    let mouse = event.dyn_ref::<MouseEvent>().map(|m| Point::new(f64::from(m.page_x()), f64::from(m.page_y())));
    PointerSample::from_parts(mouse, &[])
}

impl Dom for WebDom {
    type Node = HtmlElement;
    type Listener = WebListener;

    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<HtmlElement, DomError> {
        let element = self.document.create_element(tag).map_err(|err| js_error(tag, &err))?;
        let element = element.dyn_into::<HtmlElement>().map_err(|_| DomError(format!("{tag} is not an HtmlElement")))?;
        for class in classes {
            element.class_list().add_1(class).map_err(|err| js_error(class, &err))?;
        }
        Ok(element)
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<(), DomError> {
        parent.append_child(child).map_err(|err| js_error("appendChild", &err))?;
        Ok(())
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
    }

    fn set_text(&self, node: &HtmlElement, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_attribute(&self, node: &HtmlElement, name: &str, value: &str) -> Result<(), DomError> {
        node.set_attribute(name, value).map_err(|err| js_error(name, &err))
    }

    fn set_style_property(&self, node: &HtmlElement, name: &str, value: &str) -> Result<(), DomError> {
        node.style().set_property(name, value).map_err(|err| js_error(name, &err))
    }

    fn toggle_class(&self, node: &HtmlElement, class: &str, on: bool) -> Result<(), DomError> {
        node.class_list().toggle_with_force(class, on).map_err(|err| js_error(class, &err))?;
        Ok(())
    }

    fn bounding_rect(&self, node: &HtmlElement) -> Rect {
        let rect = node.get_bounding_client_rect();
        let scroll = self.scroll();
        Rect::new(rect.left() + scroll.x, rect.top() + scroll.y, rect.width(), rect.height())
    }

    fn listen(
        &self,
        target: ListenTarget<'_, HtmlElement>,
        event: &'static str,
        callback: Callback,
    ) -> Result<WebListener, DomError> {
        let target: EventTarget = match target {
            ListenTarget::Node(node) => node.clone().into(),
            ListenTarget::Document => self.document.clone().into(),
        };
        let closure = Closure::wrap(Box::new(move |ev: Event| {
            if callback(&sample_of(&ev)) {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        // Touch moves must stay cancelable to stop the page from scrolling.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| js_error(event, &err))?;
        Ok(WebListener { target, event, closure })
    }

    fn unlisten(&self, listener: WebListener) {
        let WebListener { target, event, closure } = listener;
        if let Err(err) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("removeEventListener({event}) failed: {err:?}");
        }
    }

    fn dispatch(&self, node: &HtmlElement, event: &str) -> Result<(), DomError> {
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        let custom = CustomEvent::new_with_event_init_dict(event, &init).map_err(|err| js_error(event, &err))?;
        node.dispatch_event(&custom).map_err(|err| js_error(event, &err))?;
        Ok(())
    }
}

thread_local! {
    static HOST: RefCell<Option<Rc<Host<WebDom>>>> = const { RefCell::new(None) };
}

/// The thread's shared browser host, created on first use.
fn shared_host() -> Result<Rc<Host<WebDom>>, DomError> {
    HOST.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(host) = slot.as_ref() {
            return Ok(Rc::clone(host));
        }
        let host = Host::new(WebDom::new()?);
        *slot = Some(Rc::clone(&host));
        Ok(host)
    })
}

/// The clock as seen from JavaScript.
///
/// ```js
/// const clock = new ClockWidget(container, '{"class_prefix": "mh"}');
/// clock.init();
/// container.addEventListener("picked", () => console.log(clock.time()));
/// ```
#[wasm_bindgen]
pub struct ClockWidget {
    clock: Clock<WebDom>,
}

#[wasm_bindgen]
impl ClockWidget {
    /// Create an unmounted clock on `container`. `config` is an optional JSON
    /// object.
    ///
    /// # Errors
    ///
    /// Throws for malformed or invalid config, or outside a browser window.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config: Option<String>) -> Result<ClockWidget, JsError> {
        let host = shared_host()?;
        let clock = match config {
            Some(raw) => Clock::with_config(&host, container, ClockConfig::from_json(&raw)?)?,
            None => Clock::new(&host, container),
        };
        Ok(Self { clock })
    }

    /// The clock mounted on `container`, if any.
    ///
    /// # Errors
    ///
    /// Throws outside a browser window.
    pub fn find(container: &HtmlElement) -> Result<Option<ClockWidget>, JsError> {
        let host = shared_host()?;
        Ok(Clock::find(&host, container).map(|clock| Self { clock }))
    }

    /// # Errors
    ///
    /// Throws if the document rejects the clock's elements or listeners.
    pub fn init(&self) -> Result<(), JsError> {
        self.clock.init()?;
        Ok(())
    }

    pub fn destroy(&self) {
        self.clock.destroy();
    }

    /// `"hour"` or `"minute"`.
    pub fn mode(&self) -> String {
        self.clock.mode().to_string()
    }

    /// # Errors
    ///
    /// Throws `Mode must be 'hour' or 'minute'.` for any other value.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) -> Result<(), JsError> {
        self.clock.set_mode_str(mode)?;
        Ok(())
    }

    /// `HH:MM:SS`.
    pub fn time(&self) -> String {
        self.clock.time().to_string()
    }

    /// Accepts `HH:MM` or `HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Throws for malformed or out-of-range times.
    #[wasm_bindgen(js_name = setTime)]
    pub fn set_time(&self, time: &str) -> Result<(), JsError> {
        self.clock.set_time(time.parse::<Time>()?);
        Ok(())
    }

    #[wasm_bindgen(js_name = isPicking)]
    pub fn is_picking(&self) -> bool {
        self.clock.is_picking()
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.clock.id().to_string()
    }
}

/// Route `log` output to the browser console and install the panic hook.
///
/// # Errors
///
/// Throws for an unknown level name or when a logger is already installed.
#[cfg(feature = "console")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let level = crate::config::log_level(level)?;
    console_log::init_with_level(level).map_err(|err| JsError::new(&err.to_string()))?;
    Ok(())
}
