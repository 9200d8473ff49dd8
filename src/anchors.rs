use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use portfolio_fx_core::{decide, AnchorAction};

use crate::error::{js_err, FxError};

pub(crate) struct AnchorView {
    listeners: Vec<EventListener>,
}

impl AnchorView {
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

pub(crate) fn install(document: &Document, selector: &str) -> Result<AnchorView, FxError> {
    let nodes = document.query_selector_all(selector).map_err(js_err)?;
    let mut listeners = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(anchor) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let document = document.clone();
        let link = anchor.clone();
        let listener = EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                on_click(&document, &href, event);
            },
        );
        listeners.push(listener);
    }
    Ok(AnchorView { listeners })
}

fn on_click(document: &Document, href: &str, event: &Event) {
    let mut target = None;
    let action = decide(href, |selector| {
        // An href like "#1st" is not a valid selector; treat it as missing.
        target = document.query_selector(selector).ok().flatten();
        target.is_some()
    });
    if action != AnchorAction::SmoothScroll {
        return;
    }
    let Some(target) = target else {
        return;
    };
    event.prevent_default();
    scroll_to_top(&target);
}

fn scroll_to_top(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
