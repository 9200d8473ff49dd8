use wasm_bindgen::JsCast;
use web_sys::{DomRect, Event, MouseEvent, TouchEvent, Window};

use portfolio_fx_core::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    pub(crate) fn down_event(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mousedown",
            PointerKind::Touch => "touchstart",
        }
    }

    pub(crate) fn move_event(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mousemove",
            PointerKind::Touch => "touchmove",
        }
    }

    pub(crate) fn up_event(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mouseup",
            PointerKind::Touch => "touchend",
        }
    }
}

/// Viewport coordinates of the pointer driving `event`. Touch events use the
/// first active touch.
pub(crate) fn pointer_position(event: &Event, kind: PointerKind) -> Option<Point> {
    match kind {
        PointerKind::Mouse => {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(Point::new(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ))
        }
        PointerKind::Touch => {
            let event = event.dyn_ref::<TouchEvent>()?;
            let touch = event.touches().get(0)?;
            Some(Point::new(
                f64::from(touch.client_x()),
                f64::from(touch.client_y()),
            ))
        }
    }
}

pub(crate) fn rect_origin(rect: &DomRect) -> Point {
    Point::new(rect.left(), rect.top())
}

pub(crate) fn rect_size(rect: &DomRect) -> Size {
    Size::new(rect.width(), rect.height())
}

pub(crate) fn viewport_size(window: &Window) -> Size {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Size::new(width, height)
}
