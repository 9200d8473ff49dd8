use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

use portfolio_fx_core::{Capabilities, FrameGate, ParallaxConfig, ParallaxParams};

pub(crate) struct ParallaxView {
    window: Window,
    header: HtmlElement,
    container_selector: String,
    params: ParallaxParams,
    gate: Cell<FrameGate>,
    frame: RefCell<Option<AnimationFrame>>,
    _scroll_listener: RefCell<Option<EventListener>>,
}

impl ParallaxView {
    fn on_scroll(self: &Rc<Self>) {
        let mut gate = self.gate.get();
        if !gate.request() {
            return;
        }
        self.gate.set(gate);
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame.borrow_mut().take();
            view.apply_frame();
            let mut gate = view.gate.get();
            gate.complete();
            view.gate.set(gate);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    /// Returns whether a style was written this frame.
    fn apply_frame(&self) -> bool {
        let offset = self.window.page_y_offset().unwrap_or(0.0);
        let height = f64::from(self.header.offset_height());
        let Some(style) = self.params.update(offset, height) else {
            return false;
        };
        let Some(container) = self
            .header
            .query_selector(&self.container_selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        let css = container.style();
        let _ = css.set_property("opacity", &style.opacity_value());
        let _ = css.set_property("transform", &style.transform_value());
        true
    }
}

/// Inert (returns `None`) without a header element or when reduced motion
/// is preferred.
pub(crate) fn install(
    window: &Window,
    document: &Document,
    config: &ParallaxConfig,
    capabilities: Capabilities,
) -> Option<Rc<ParallaxView>> {
    let Some(header) = document
        .get_element_by_id(&config.header_id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        gloo::console::log!("parallax: no header", config.header_id.clone());
        return None;
    };
    if !capabilities.allows_parallax() {
        gloo::console::log!("parallax: disabled");
        return None;
    }
    let view = Rc::new(ParallaxView {
        window: window.clone(),
        header,
        container_selector: config.container_selector.clone(),
        params: ParallaxParams::from(config),
        gate: Cell::new(FrameGate::new()),
        frame: RefCell::new(None),
        _scroll_listener: RefCell::new(None),
    });
    let handle = Rc::clone(&view);
    let listener = EventListener::new_with_options(
        window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_event: &Event| {
            handle.on_scroll();
        },
    );
    *view._scroll_listener.borrow_mut() = Some(listener);
    Some(view)
}
