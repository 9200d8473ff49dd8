use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

use portfolio_fx_core::{
    DragMachine, GestureEnd, KeyValueStore, Point, WidgetConfig, WidgetPosition,
    WidgetPositionStore,
};

use crate::input::{pointer_position, rect_origin, rect_size, viewport_size, PointerKind};

pub(crate) struct WidgetView<S> {
    window: Window,
    widget: HtmlElement,
    machine: RefCell<DragMachine>,
    store: WidgetPositionStore<S>,
    dragging_class: String,
    _listeners: RefCell<Vec<EventListener>>,
}

impl<S: KeyValueStore + 'static> WidgetView<S> {
    fn restore(&self) {
        match self.store.load() {
            Ok(Some(position)) => self.anchor_top_left(Point::from(position)),
            Ok(None) => {}
            Err(err) => {
                gloo::console::log!("widget: ignoring saved position", err.to_string());
            }
        }
    }

    /// Drops any right/bottom anchoring so the widget is placed by left/top.
    fn anchor_top_left(&self, origin: Point) {
        let css = self.widget.style();
        let _ = css.set_property("right", "auto");
        let _ = css.set_property("bottom", "auto");
        self.place(origin);
    }

    fn place(&self, origin: Point) {
        let position = WidgetPosition::from(origin);
        let css = self.widget.style();
        let _ = css.set_property("left", &position.left_px());
        let _ = css.set_property("top", &position.top_px());
    }

    fn begin(&self, pointer: Point) {
        let origin = rect_origin(&self.widget.get_bounding_client_rect());
        self.machine.borrow_mut().begin(pointer, origin);
        let _ = self.widget.class_list().add_1(&self.dragging_class);
        self.anchor_top_left(origin);
    }

    /// Returns `false` when no gesture is active.
    fn drag_to(&self, pointer: Point) -> bool {
        let size = rect_size(&self.widget.get_bounding_client_rect());
        let viewport = viewport_size(&self.window);
        let next = self.machine.borrow_mut().update(pointer, size, viewport);
        let Some(next) = next else {
            return false;
        };
        self.place(next);
        true
    }

    fn finish(&self) -> Option<GestureEnd> {
        let end = self.machine.borrow_mut().end()?;
        let _ = self.widget.class_list().remove_1(&self.dragging_class);
        let origin = rect_origin(&self.widget.get_bounding_client_rect());
        if let Err(err) = self.store.save(WidgetPosition::from(origin)) {
            gloo::console::warn!("widget: failed to save position", err.to_string());
        }
        Some(end)
    }

    fn take_click_suppression(&self) -> bool {
        self.machine.borrow_mut().take_click_suppression()
    }

    /// Drops the listeners, which also releases their handles on the view.
    #[cfg(test)]
    fn detach(&self) {
        self._listeners.borrow_mut().clear();
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::new();
        for kind in [PointerKind::Mouse, PointerKind::Touch] {
            let touch = kind == PointerKind::Touch;
            let view = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &self.widget,
                kind.down_event(),
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    let Some(pointer) = pointer_position(event, kind) else {
                        return;
                    };
                    view.begin(pointer);
                    if touch {
                        event.prevent_default();
                    }
                },
            ));

            let view = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                document,
                kind.move_event(),
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    if !view.machine.borrow().is_dragging() {
                        return;
                    }
                    let Some(pointer) = pointer_position(event, kind) else {
                        return;
                    };
                    view.drag_to(pointer);
                    if touch {
                        event.prevent_default();
                    }
                },
            ));

            let view = Rc::clone(self);
            listeners.push(EventListener::new(
                document,
                kind.up_event(),
                move |event: &Event| {
                    let Some(end) = view.finish() else {
                        return;
                    };
                    if end.moved {
                        event.prevent_default();
                        event.stop_propagation();
                    }
                },
            ));
        }

        let view = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.widget,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                if view.take_click_suppression() {
                    event.prevent_default();
                }
            },
        ));
        *self._listeners.borrow_mut() = listeners;
    }
}

/// Restores the saved position and makes the widget draggable. Inert when the
/// page has no widget.
pub(crate) fn install<S: KeyValueStore + 'static>(
    window: &Window,
    document: &Document,
    config: &WidgetConfig,
    store: S,
) -> Option<Rc<WidgetView<S>>> {
    let Some(widget) = document
        .query_selector(&config.selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        gloo::console::log!("widget: not on page");
        return None;
    };
    let view = Rc::new(WidgetView {
        window: window.clone(),
        widget,
        machine: RefCell::new(DragMachine::new(config.drag_threshold_px)),
        store: WidgetPositionStore::new(store, config.storage_key.clone()),
        dragging_class: config.dragging_class.clone(),
        _listeners: RefCell::new(Vec::new()),
    });
    view.restore();
    view.install_listeners(document);
    Some(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_fx_core::MemoryStore;
    use wasm_bindgen_test::*;
    use web_sys::{EventTarget, MouseEvent, MouseEventInit};

    const KEY: &str = "fx-test-widget-position";

    fn window() -> Window {
        web_sys::window().expect("window")
    }

    fn widget_fixture(document: &Document, class: &str) -> HtmlElement {
        let widget = document
            .create_element("a")
            .expect("a")
            .dyn_into::<HtmlElement>()
            .expect("html");
        widget.set_class_name(class);
        let css = widget.style();
        css.set_property("position", "fixed").expect("position");
        css.set_property("display", "block").expect("display");
        css.set_property("width", "100px").expect("width");
        css.set_property("height", "50px").expect("height");
        css.set_property("right", "20px").expect("right");
        css.set_property("bottom", "20px").expect("bottom");
        document
            .body()
            .expect("body")
            .append_child(&widget)
            .expect("append");
        widget
    }

    fn config(class: &str) -> WidgetConfig {
        WidgetConfig {
            selector: format!(".{class}"),
            storage_key: KEY.to_string(),
            ..WidgetConfig::default()
        }
    }

    fn style(widget: &HtmlElement, name: &str) -> String {
        widget.style().get_property_value(name).expect("style")
    }

    #[wasm_bindgen_test]
    fn restores_saved_position() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-restore");
        let store = Rc::new(MemoryStore::new());
        store.set(KEY, r#"{"x":42,"y":17}"#).expect("seed");

        let view = install(&window, &document, &config("fx-widget-restore"), store)
            .expect("installed");
        assert_eq!(style(&widget, "left"), "42px");
        assert_eq!(style(&widget, "top"), "17px");
        assert_eq!(style(&widget, "right"), "auto");
        assert_eq!(style(&widget, "bottom"), "auto");
        view.detach();
        widget.remove();
    }

    #[wasm_bindgen_test]
    fn malformed_position_keeps_css_default() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-malformed");
        let store = Rc::new(MemoryStore::new());
        store.set(KEY, "{oops").expect("seed");

        let view = install(&window, &document, &config("fx-widget-malformed"), store)
            .expect("installed");
        assert_eq!(style(&widget, "left"), "");
        assert_eq!(style(&widget, "right"), "20px");
        view.detach();
        widget.remove();
    }

    #[wasm_bindgen_test]
    fn drag_stays_in_viewport_and_persists() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-drag");
        let store = Rc::new(MemoryStore::new());
        let view = install(
            &window,
            &document,
            &config("fx-widget-drag"),
            Rc::clone(&store),
        )
        .expect("installed");

        view.begin(Point::new(10.0, 10.0));
        assert!(widget.class_list().contains("is-dragging"));
        assert_eq!(style(&widget, "right"), "auto");
        assert!(view.drag_to(Point::new(100_000.0, 100_000.0)));

        let viewport = viewport_size(&window);
        let rect = widget.get_bounding_client_rect();
        assert!(rect.left() >= 0.0 && rect.right() <= viewport.width);
        assert!(rect.top() >= 0.0 && rect.bottom() <= viewport.height);

        let end = view.finish().expect("gesture");
        assert!(end.moved);
        assert!(!widget.class_list().contains("is-dragging"));
        assert!(view.take_click_suppression());

        let saved = WidgetPosition::parse(&store.get(KEY).expect("saved")).expect("parse");
        assert_eq!(saved.x, rect.left());
        assert_eq!(saved.y, rect.top());
        view.detach();
        widget.remove();
    }

    #[wasm_bindgen_test]
    fn tap_saves_but_keeps_click() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-tap");
        let store = Rc::new(MemoryStore::new());
        let view = install(
            &window,
            &document,
            &config("fx-widget-tap"),
            Rc::clone(&store),
        )
        .expect("installed");

        view.begin(Point::new(30.0, 30.0));
        view.drag_to(Point::new(33.0, 28.0));
        let end = view.finish().expect("gesture");
        assert!(!end.moved);
        assert!(!view.take_click_suppression());
        assert!(store.get(KEY).is_some());
        assert!(view.finish().is_none());
        view.detach();
        widget.remove();
    }

    /// Dispatches a cancelable, bubbling mouse event and returns `true` when
    /// a listener cancelled it.
    fn mouse(target: &EventTarget, kind: &str, x: i32, y: i32) -> bool {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(x);
        init.set_client_y(y);
        let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("event");
        !target.dispatch_event(&event).expect("dispatch")
    }

    fn gesture(document: &Document, widget: &HtmlElement, to: (i32, i32)) -> bool {
        mouse(widget, "mousedown", 10, 10);
        mouse(document, "mousemove", to.0, to.1);
        mouse(document, "mouseup", to.0, to.1);
        mouse(widget, "click", to.0, to.1)
    }

    #[wasm_bindgen_test]
    fn dragging_with_mouse_cancels_click() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-mouse-drag");
        let store = Rc::new(MemoryStore::new());
        let view = install(
            &window,
            &document,
            &config("fx-widget-mouse-drag"),
            Rc::clone(&store),
        )
        .expect("installed");

        mouse(&widget, "mousedown", 10, 10);
        assert!(widget.class_list().contains("is-dragging"));
        assert_eq!(style(&widget, "right"), "auto");
        mouse(&document, "mousemove", 40, 10);
        mouse(&document, "mouseup", 40, 10);
        assert!(!widget.class_list().contains("is-dragging"));
        assert!(store.get(KEY).is_some());
        assert!(mouse(&widget, "click", 40, 10));

        // The suppression belongs to one click only.
        assert!(!mouse(&widget, "click", 40, 10));
        view.detach();
        widget.remove();
    }

    #[wasm_bindgen_test]
    fn small_mouse_gesture_keeps_click() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-mouse-tap");
        let store = Rc::new(MemoryStore::new());
        let view = install(
            &window,
            &document,
            &config("fx-widget-mouse-tap"),
            Rc::clone(&store),
        )
        .expect("installed");

        assert!(!gesture(&document, &widget, (15, 13)));
        assert!(store.get(KEY).is_some());
        assert!(gesture(&document, &widget, (10, 16)));
        view.detach();
        widget.remove();
    }

    #[wasm_bindgen_test]
    fn moves_without_gesture_are_ignored() {
        let window = window();
        let document = window.document().expect("document");
        let widget = widget_fixture(&document, "fx-widget-mouse-idle");
        let store = Rc::new(MemoryStore::new());
        let view = install(
            &window,
            &document,
            &config("fx-widget-mouse-idle"),
            Rc::clone(&store),
        )
        .expect("installed");

        mouse(&document, "mousemove", 300, 300);
        mouse(&document, "mouseup", 300, 300);
        assert_eq!(style(&widget, "left"), "");
        assert!(store.get(KEY).is_none());
        assert!(!mouse(&widget, "click", 300, 300));
        view.detach();
        widget.remove();
    }
}
