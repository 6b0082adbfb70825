//! Service Worker Registration

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::error::{UiError, UiResult};

/// When to register, given `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterTiming {
    /// `load` already fired; a listener would never run
    Now,
    OnLoad,
}

impl RegisterTiming {
    pub fn for_ready_state(ready_state: &str) -> Self {
        if ready_state == "complete" {
            RegisterTiming::Now
        } else {
            RegisterTiming::OnLoad
        }
    }
}

/// Register `path` once the window has loaded, if the browser supports it
pub fn register_on_load(path: String) -> UiResult<bool> {
    let window = web_sys::window().ok_or(UiError::MissingElement("window"))?;
    let navigator = window.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        log::debug!("service workers not supported");
        return Ok(false);
    }
    match RegisterTiming::for_ready_state(&dom::document()?.ready_state()) {
        RegisterTiming::Now => spawn_register(path),
        RegisterTiming::OnLoad => {
            dom::listen_once(window.as_ref(), "load", move || spawn_register(path))?;
        }
    }
    Ok(true)
}

fn spawn_register(path: String) {
    wasm_bindgen_futures::spawn_local(async move {
        match register(&path).await {
            Ok(scope) => log::info!("ServiceWorker registration successful, scope {}", scope),
            Err(e) => log::warn!("ServiceWorker registration failed: {}", e),
        }
    });
}

async fn register(path: &str) -> UiResult<String> {
    let window = web_sys::window().ok_or(UiError::MissingElement("window"))?;
    let promise = window.navigator().service_worker().register(path);
    let registration: web_sys::ServiceWorkerRegistration = JsFuture::from(promise).await?.unchecked_into();
    Ok(registration.scope())
}
