//! Browser driver: wires the sans-DOM core to a live document.
//!
//! Everything DOM-shaped lives here: listener and observer wiring, timer
//! management, button creation, and the postMessage hand-off to the parent
//! window. The core never sees a `JsValue`; this module feeds it
//! [`EmbedEvent`]s and executes the [`EmbedAction`]s it returns.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MutationObserver, MutationObserverInit, Window};

use crate::embed::{EmbedAction, EmbedConfig, EmbedEvent, HostEnv, IframeEmbed};
use crate::fullscreen::ButtonAppearance;
use crate::height::HeightMessage;

/// Errors surfaced while mounting into the page.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No global window, i.e. not running in a browsing context.
    #[error("no window object available")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no body to observe for mutations.
    #[error("document has no body to observe")]
    NoBody,

    /// A DOM call failed while wiring the component up.
    #[error("JS interop failure: {0}")]
    Interop(String),
}

impl From<JsValue> for MountError {
    fn from(err: JsValue) -> Self {
        Self::Interop(format!("{:?}", err))
    }
}

/// Cached handles to the host page.
///
/// `window`/`document` lookups cross the JS boundary on every call; fetching
/// the handles once at mount and passing them around avoids that per-event
/// cost.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Build from the global window, failing outside a browsing context.
    pub fn from_global() -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl HostEnv for WebHost {
    fn content_height(&self) -> u32 {
        self.document
            .document_element()
            .map(|root| root.scroll_height().max(0) as u32)
            .unwrap_or(0)
    }

    fn fullscreen_active(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }
}

/// Shared driver state reachable from every listener closure.
struct Inner {
    embed: RefCell<IframeEmbed>,
    host: WebHost,
    config: EmbedConfig,
    /// Heading found by the injection timer, consumed by `InjectButton`.
    pending_heading: RefCell<Option<Element>>,
    button: RefCell<Option<HtmlElement>>,
    click_closure: RefCell<Option<Closure<dyn FnMut()>>>,
    injection_timer: Cell<Option<i32>>,
    injection_closure: RefCell<Option<Closure<dyn FnMut()>>>,
    flush_timer: Cell<Option<i32>>,
    flush_closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Feed one event through the core and execute the resulting actions.
fn dispatch(inner: &Rc<Inner>, event: EmbedEvent) {
    let actions = inner.embed.borrow_mut().handle(event, &inner.host);
    for action in actions {
        if let Err(err) = apply(inner, &action) {
            log::warn!("failed to apply {:?}: {:?}", action, err);
        }
    }
}

fn apply(inner: &Rc<Inner>, action: &EmbedAction) -> Result<(), JsValue> {
    match action {
        EmbedAction::PostHeight(msg) => post_to_parent(inner, msg),
        EmbedAction::ScheduleInjection { delay_ms } => arm_injection_timer(inner, *delay_ms),
        EmbedAction::ScheduleReportFlush { delay_ms } => arm_flush_timer(inner, *delay_ms),
        EmbedAction::InjectButton(appearance) => inject_button(inner, *appearance),
        EmbedAction::RequestFullscreenEnter => {
            if let Some(root) = inner.host.document().document_element() {
                if let Err(err) = root.request_fullscreen() {
                    // Host denied the request; appearance stays as-is and the
                    // fullscreenchange listener never fires.
                    log::warn!("fullscreen request rejected: {:?}", err);
                }
            }
            Ok(())
        }
        EmbedAction::RequestFullscreenExit => {
            inner.host.document().exit_fullscreen();
            Ok(())
        }
        EmbedAction::RestyleButton(appearance) => {
            if let Some(button) = inner.button.borrow().as_ref() {
                button.set_text_content(Some(appearance.glyph));
                button.set_title(appearance.tooltip);
            }
            Ok(())
        }
    }
}

fn post_to_parent(inner: &Inner, msg: &HeightMessage) -> Result<(), JsValue> {
    // Without an embedding parent there is nobody to inform; not an error.
    let parent = match inner.host.window().parent()? {
        Some(parent) => parent,
        None => return Ok(()),
    };
    let json = serde_json::to_string(msg)
        .map_err(|err| JsValue::from_str(&format!("payload encoding failed: {}", err)))?;
    let payload = js_sys::JSON::parse(&json)?;
    parent.post_message(&payload, &inner.config.target_origin)?;
    Ok(())
}

fn arm_injection_timer(inner: &Rc<Inner>, delay_ms: u32) -> Result<(), JsValue> {
    let handle = Rc::clone(inner);
    let on_fire = Closure::wrap(Box::new(move || {
        handle.injection_timer.set(None);
        let heading = handle
            .host
            .document()
            .query_selector(&handle.config.heading_selector)
            .ok()
            .flatten();
        let heading_present = heading.is_some();
        *handle.pending_heading.borrow_mut() = heading;
        dispatch(&handle, EmbedEvent::InjectionDue { heading_present });
    }) as Box<dyn FnMut()>);

    let id = inner
        .host
        .window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_fire.as_ref().unchecked_ref(),
            delay_ms as i32,
        )?;
    inner.injection_timer.set(Some(id));
    *inner.injection_closure.borrow_mut() = Some(on_fire);
    Ok(())
}

fn arm_flush_timer(inner: &Rc<Inner>, delay_ms: u32) -> Result<(), JsValue> {
    let handle = Rc::clone(inner);
    let on_fire = Closure::wrap(Box::new(move || {
        handle.flush_timer.set(None);
        dispatch(&handle, EmbedEvent::ReportFlushDue);
    }) as Box<dyn FnMut()>);

    let id = inner
        .host
        .window()
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            on_fire.as_ref().unchecked_ref(),
            delay_ms as i32,
        )?;
    inner.flush_timer.set(Some(id));
    *inner.flush_closure.borrow_mut() = Some(on_fire);
    Ok(())
}

/// Wrap the located heading in a positioning container and overlay the
/// toggle button at its right edge, vertically centered.
fn inject_button(inner: &Rc<Inner>, appearance: ButtonAppearance) -> Result<(), JsValue> {
    let heading = match inner.pending_heading.borrow_mut().take() {
        Some(heading) => heading,
        None => return Ok(()),
    };
    let document = inner.host.document();

    let button: HtmlElement = document.create_element("button")?.dyn_into()?;
    button.set_text_content(Some(appearance.glyph));
    button.set_title(appearance.tooltip);
    let style = button.style();
    style.set_property("position", "absolute")?;
    style.set_property("right", "10px")?;
    style.set_property("top", "50%")?;
    style.set_property("transform", "translateY(-50%)")?;
    style.set_property("font-size", "1.5rem")?;
    style.set_property("background", "transparent")?;
    style.set_property("outline", "none")?;
    style.set_property("border", "none")?;
    style.set_property("cursor", "pointer")?;
    style.set_property("color", "#333")?;

    let handle = Rc::clone(inner);
    let on_click =
        Closure::wrap(Box::new(move || dispatch(&handle, EmbedEvent::ButtonClicked))
            as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    let wrapper: HtmlElement = document.create_element("div")?.dyn_into()?;
    let wrapper_style = wrapper.style();
    wrapper_style.set_property("position", "relative")?;
    wrapper_style.set_property("display", "inline-block")?;
    wrapper_style.set_property("width", "100%")?;

    // The heading keeps its slot: the wrapper replaces it, then re-adopts it.
    if let Some(parent) = heading.parent_node() {
        parent.replace_child(&wrapper, &heading)?;
    }
    wrapper.append_child(&heading)?;
    wrapper.append_child(&button)?;

    *inner.click_closure.borrow_mut() = Some(on_click);
    *inner.button.borrow_mut() = Some(button);
    log::debug!("fullscreen button injected");
    Ok(())
}

/// A live, mounted component. Dropping it (or calling [`unmount`]) detaches
/// every listener, observer and timer.
///
/// [`unmount`]: MountedSizer::unmount
pub struct MountedSizer {
    inner: Rc<Inner>,
    observer: MutationObserver,
    on_resize: Closure<dyn FnMut()>,
    on_fullscreen_change: Closure<dyn FnMut(web_sys::Event)>,
    // Kept alive for the observer; never invoked from Rust.
    _on_mutation: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
    torn_down: bool,
}

/// Mount the component into the current document.
///
/// Posts the initial height report, starts resize and mutation observation,
/// arms the heading-injection timer and subscribes to fullscreen state
/// changes.
pub fn mount(config: EmbedConfig) -> Result<MountedSizer, MountError> {
    let host = WebHost::from_global()?;
    let body = host.document().body().ok_or(MountError::NoBody)?;

    let inner = Rc::new(Inner {
        embed: RefCell::new(IframeEmbed::new(config.clone())),
        host,
        config,
        pending_heading: RefCell::new(None),
        button: RefCell::new(None),
        click_closure: RefCell::new(None),
        injection_timer: Cell::new(None),
        injection_closure: RefCell::new(None),
        flush_timer: Cell::new(None),
        flush_closure: RefCell::new(None),
    });

    let handle = Rc::clone(&inner);
    let on_resize = Closure::wrap(
        Box::new(move || dispatch(&handle, EmbedEvent::ViewportResized)) as Box<dyn FnMut()>,
    );
    inner
        .host
        .window()
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let handle = Rc::clone(&inner);
    let on_fullscreen_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let active = handle.host.fullscreen_active();
        dispatch(&handle, EmbedEvent::FullscreenChanged { active });
    }) as Box<dyn FnMut(web_sys::Event)>);
    inner.host.document().add_event_listener_with_callback(
        "fullscreenchange",
        on_fullscreen_change.as_ref().unchecked_ref(),
    )?;

    // Coarse on purpose: any child-list, subtree or attribute change under
    // the body can move the rendered height.
    let handle = Rc::clone(&inner);
    let on_mutation = Closure::wrap(Box::new(
        move |_records: js_sys::Array, _observer: MutationObserver| {
            dispatch(&handle, EmbedEvent::MutationBatch);
        },
    )
        as Box<dyn FnMut(js_sys::Array, MutationObserver)>);
    let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    init.set_attributes(true);
    observer.observe_with_options(&body, &init)?;

    dispatch(&inner, EmbedEvent::Mounted);

    Ok(MountedSizer {
        inner,
        observer,
        on_resize,
        on_fullscreen_change,
        _on_mutation: on_mutation,
        torn_down: false,
    })
}

impl MountedSizer {
    /// Detach every listener, observer and timer, remove the injected button
    /// and feed the unmount event through the core.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        let inner = &self.inner;
        let _ = inner
            .host
            .window()
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        let _ = inner.host.document().remove_event_listener_with_callback(
            "fullscreenchange",
            self.on_fullscreen_change.as_ref().unchecked_ref(),
        );
        self.observer.disconnect();

        if let Some(id) = inner.injection_timer.take() {
            inner.host.window().clear_timeout_with_handle(id);
        }
        if let Some(id) = inner.flush_timer.take() {
            inner.host.window().clear_timeout_with_handle(id);
        }

        if let Some(button) = inner.button.borrow_mut().take() {
            if let Some(on_click) = inner.click_closure.borrow_mut().take() {
                let _ = button.remove_event_listener_with_callback(
                    "click",
                    on_click.as_ref().unchecked_ref(),
                );
            }
            button.remove();
        }
        inner.pending_heading.borrow_mut().take();
        inner.injection_closure.borrow_mut().take();
        inner.flush_closure.borrow_mut().take();

        dispatch(&self.inner, EmbedEvent::Unmounted);
    }
}

impl Drop for MountedSizer {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// JS-facing lifecycle wrapper, for host pages that drive the component from
/// a framework effect: mount on setup, unmount on cleanup.
#[wasm_bindgen]
pub struct IframeSizer {
    mounted: Option<MountedSizer>,
}

#[wasm_bindgen]
impl IframeSizer {
    /// Create an unmounted sizer with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        init_console_logging();
        Self { mounted: None }
    }

    /// Mount into the current document. Mounting twice is a no-op.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            return Ok(());
        }
        let mounted =
            mount(EmbedConfig::default()).map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.mounted = Some(mounted);
        Ok(())
    }

    /// Detach from the document. Safe to call when not mounted.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.unmount();
        }
    }
}

impl Default for IframeSizer {
    fn default() -> Self {
        Self::new()
    }
}

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            log::Level::Error | log::Level::Warn => {
                web_sys::console::warn_1(&JsValue::from_str(&line))
            }
            _ => web_sys::console::log_1(&JsValue::from_str(&line)),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` records to the browser console. Safe to call repeatedly; only
/// the first call installs the logger.
pub fn init_console_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}
