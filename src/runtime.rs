use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Window};

use portfolio_fx_core::{Capabilities, FxConfig};

use crate::anchors::{self, AnchorView};
use crate::config;
use crate::env;
use crate::error::FxError;
use crate::parallax::{self, ParallaxView};
use crate::reveal::{self, RevealView};
use crate::storage::LocalStore;
use crate::theme;
use crate::widget::{self, WidgetView};

/// Handles that keep each component's listeners and observers attached for
/// the lifetime of the page.
#[derive(Default)]
struct Installed {
    _reveal: Option<Rc<RevealView>>,
    _anchors: Option<AnchorView>,
    _parallax: Option<Rc<ParallaxView>>,
    _widget: Option<Rc<WidgetView<LocalStore>>>,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = RefCell::new(None);
    static READY_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

pub(crate) fn start() -> Result<(), FxError> {
    let window = web_sys::window().ok_or(FxError::NoWindow)?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    let config = config::load(&window);
    let capabilities = env::detect(&window);
    let themed = theme::apply(&document, &config.dark_class, capabilities);

    if document.ready_state() != "loading" {
        install_all(&window, &document, &config, capabilities, themed);
        return Ok(());
    }
    let ready_document = document.clone();
    let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
        install_all(&window, &ready_document, &config, capabilities, themed);
    });
    READY_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
    Ok(())
}

fn install_all(
    window: &Window,
    document: &Document,
    config: &FxConfig,
    capabilities: Capabilities,
    themed: bool,
) {
    if !themed {
        theme::apply(document, &config.dark_class, capabilities);
    }
    let mut installed = Installed::default();

    match reveal::install(document, &config.reveal, capabilities) {
        Ok(view) => installed._reveal = view,
        Err(err) => {
            gloo::console::warn!("reveal: install failed", err.to_string());
        }
    }
    match anchors::install(document, &config.anchor_selector) {
        Ok(view) => {
            gloo::console::log!("anchors: intercepting", view.len() as u32);
            installed._anchors = Some(view);
        }
        Err(err) => {
            gloo::console::warn!("anchors: install failed", err.to_string());
        }
    }
    installed._parallax = parallax::install(window, document, &config.parallax, capabilities);
    installed._widget = widget::install(window, document, &config.widget, LocalStore::open(window));

    INSTALLED.with(|slot| {
        *slot.borrow_mut() = Some(installed);
    });
}
