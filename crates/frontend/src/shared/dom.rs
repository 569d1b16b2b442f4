//! Thin helpers over `web_sys` used by every behaviour.
//!
//! DOM writes here are best-effort: a missing window, an invalid selector or a
//! non-HTML element is logged or skipped, never turned into a panic.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector`, in document order.
pub fn select_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => {
            log::warn!("stew: invalid selector `{}`", selector);
            Vec::new()
        }
    }
}

/// Elements matching `selector` inside `root`.
pub fn select_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(element, property, value);
    }
}

/// Resolved style value as the browser lays the element out.
pub fn computed_style(element: &Element, property: &str) -> Option<String> {
    web_sys::window()?
        .get_computed_style(element)
        .ok()??
        .get_property_value(property)
        .ok()
}

/// Style on the `<html>` element.
pub fn set_root_style(property: &str, value: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        set_style(&root, property, value);
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Attach `handler` to each of `events` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, events: &[&str], handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    for event in events {
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    // Listeners stay attached until the page unloads.
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = document() else {
        log::warn!("stew: no document available, skipping initialization");
        return;
    };

    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(f);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    } else {
        f();
    }
}
