//! Thin `web-sys` glue for selector queries and event listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::context::log_dom_error;

pub type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Attach `handler` to `target`. The listener stays registered while the
/// returned closure is alive.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Option<Listener>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Listener::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log_dom_error(&format!("add {event} listener"), &err);
        return None;
    }
    Some(closure)
}

/// Attach `handler` for the lifetime of the page.
pub fn listen_forever<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    if let Some(closure) = listen(target, event, handler) {
        closure.forget();
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log_dom_error(&format!("query {selector}"), &err);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<web_sys::Element>())
        .collect()
}
