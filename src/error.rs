//! UI Errors
//!
//! Failures raised while wiring the page or talking to the server.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    /// Template does not contain an element the region needs
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(message)
    }
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => UiError::Decode(e.to_string()),
            other => UiError::Transport(other.to_string()),
        }
    }
}

pub type UiResult<T> = Result<T, UiError>;
