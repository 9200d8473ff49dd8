use web_sys::Document;

use portfolio_fx_core::Capabilities;

/// Tags `<body>` for a dark color scheme. Returns `false` only when the body
/// does not exist yet, so the caller can retry once the document is parsed.
pub(crate) fn apply(document: &Document, dark_class: &str, capabilities: Capabilities) -> bool {
    if !capabilities.prefers_dark {
        return true;
    }
    let Some(body) = document.body() else {
        return false;
    };
    if body.class_list().add_1(dark_class).is_err() {
        gloo::console::warn!("theme: failed to add class", dark_class);
    }
    true
}
