use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use portfolio_fx_core::{
    Capabilities, IntersectionSample, RevealConfig, RevealTargetId, RevealTracker,
};

use crate::error::{js_err, FxError};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub(crate) struct RevealView {
    tracker: RefCell<RevealTracker>,
    targets: Vec<Element>,
    visible_class: String,
    observer: RefCell<Option<IntersectionObserver>>,
    _callback: RefCell<Option<ObserverCallback>>,
}

impl RevealView {
    fn on_entries(&self, entries: &js_sys::Array) {
        let samples: Vec<IntersectionSample> = entries
            .iter()
            .filter_map(|value| {
                let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
                let target = entry.target();
                let index = self.targets.iter().position(|element| *element == target)?;
                Some(IntersectionSample {
                    target: RevealTargetId(index),
                    is_intersecting: entry.is_intersecting(),
                })
            })
            .collect();
        let revealed = self.tracker.borrow_mut().on_intersections(samples);
        let observer = self.observer.borrow();
        for id in revealed {
            let Some(element) = self.targets.get(id.0) else {
                continue;
            };
            let _ = element.class_list().add_1(&self.visible_class);
            if let Some(observer) = observer.as_ref() {
                observer.unobserve(element);
            }
        }
    }

    #[cfg(test)]
    fn target_count(&self) -> usize {
        self.targets.len()
    }
}

/// Marks every reveal target and starts observing it. Returns `Ok(None)` when
/// reduced motion is preferred or observation is unavailable; in that case
/// no element is touched. On error every target is left untagged.
pub(crate) fn install(
    document: &Document,
    config: &RevealConfig,
    capabilities: Capabilities,
) -> Result<Option<Rc<RevealView>>, FxError> {
    let Some(mut tracker) = RevealTracker::new(capabilities) else {
        gloo::console::log!("reveal: disabled");
        return Ok(None);
    };
    let nodes = document
        .query_selector_all(&config.selectors)
        .map_err(js_err)?;
    let mut targets = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        tracker.register();
        targets.push(element);
    }

    let view = Rc::new(RevealView {
        tracker: RefCell::new(tracker),
        targets,
        visible_class: config.visible_class.clone(),
        observer: RefCell::new(None),
        _callback: RefCell::new(None),
    });

    let handle = Rc::clone(&view);
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            handle.on_entries(&entries);
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;

    for (tagged, target) in view.targets.iter().enumerate() {
        if let Err(err) = target.class_list().add_1(&config.animate_class) {
            observer.disconnect();
            for element in &view.targets[..tagged] {
                let _ = element.class_list().remove_1(&config.animate_class);
            }
            return Err(js_err(err));
        }
        observer.observe(target);
    }
    *view.observer.borrow_mut() = Some(observer);
    *view._callback.borrow_mut() = Some(callback);
    gloo::console::log!("reveal: observing", view.targets.len() as u32);
    Ok(Some(view))
}
