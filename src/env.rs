use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

use portfolio_fx_core::Capabilities;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub(crate) fn detect(window: &Window) -> Capabilities {
    Capabilities {
        reduced_motion: media_matches(window, REDUCED_MOTION_QUERY),
        prefers_dark: media_matches(window, DARK_SCHEME_QUERY),
        intersection_observer: has_global(window, "IntersectionObserver"),
    }
}

fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

fn has_global(window: &Window, name: &str) -> bool {
    Reflect::get(window, &JsValue::from_str(name))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}
