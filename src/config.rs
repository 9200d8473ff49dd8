use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

use portfolio_fx_core::FxConfig;

use crate::error::js_message;

/// Optional page-level override, e.g.
/// `window.__PORTFOLIO_FX = { widget: { storage_key: "my-key" } }`.
const CONFIG_GLOBAL: &str = "__PORTFOLIO_FX";

pub(crate) fn load(window: &Window) -> FxConfig {
    let Ok(value) = Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return FxConfig::default();
    };
    if value.is_null() || value.is_undefined() {
        return FxConfig::default();
    }
    let raw = match js_sys::JSON::stringify(&value) {
        Ok(raw) => raw.as_string(),
        Err(err) => {
            gloo::console::warn!("config: override not serializable", js_message(&err));
            return FxConfig::default();
        }
    };
    let Some(raw) = raw else {
        return FxConfig::default();
    };
    match FxConfig::from_json(&raw) {
        Ok(config) => {
            gloo::console::log!("config: using page override");
            config
        }
        Err(err) => {
            gloo::console::warn!("config: invalid override", err.to_string());
            FxConfig::default()
        }
    }
}
