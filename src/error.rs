use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub(crate) enum FxError {
    #[error("missing window")]
    NoWindow,
    #[error("missing document")]
    NoDocument,
    #[error("js error: {0}")]
    Js(String),
}

pub(crate) fn js_message(error: &JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        if let Some(value) = error.message().as_string() {
            return value;
        }
    }
    if let Ok(json) = js_sys::JSON::stringify(error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

pub(crate) fn js_err(error: JsValue) -> FxError {
    FxError::Js(js_message(&error))
}
