//! DOM Helpers
//!
//! Thin wrappers over web-sys for the server-rendered page.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::{UiError, UiResult};

pub fn document() -> UiResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(UiError::MissingElement("document"))
}

pub fn by_id<T: JsCast>(id: &'static str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

/// All matches of `selector` below `root`, in document order
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector))
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document() {
        Ok(doc) => collect(doc.query_selector_all(selector)),
        Err(_) => Vec::new(),
    }
}

fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else { return Vec::new() };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property; non-HTML elements are ignored
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Attach a listener for the page's lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> UiResult<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a listener the browser removes after its first call
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> UiResult<()>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Run `f` after `millis`
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, f).forget();
}
