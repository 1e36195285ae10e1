//! JavaScript surface for page scripts.
//!
//! `boot()` returns a `SigmaUi` handle whose camelCase methods take the same
//! arguments page scripts already pass around: option objects with
//! `onSuccess`, `onError`, `showToast`, `successMessage` and `errorMessage`,
//! and Promise results for the request helpers.

use std::future::Future;
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::components::toast::Severity;
use crate::context::UiContext;
use crate::net::request::{self, Method, RequestOptions};
use crate::net::types::{ApiResponse, RequestError};
use crate::util::{loading, timing};

#[wasm_bindgen]
pub struct SigmaUi {
    ctx: Rc<UiContext>,
}

/// Build the page's UI context and wire modal dismissal.
///
/// # Errors
///
/// Rejects with a JS `Error` when the document or embedded config is unusable.
#[wasm_bindgen]
pub fn boot() -> Result<SigmaUi, JsValue> {
    UiContext::boot()
        .map(|ctx| SigmaUi { ctx })
        .map_err(|err| js_sys::Error::new(&err.to_string()).into())
}

#[wasm_bindgen]
impl SigmaUi {
    #[wasm_bindgen(js_name = showModal)]
    pub fn show_modal(&self, id: &str) -> bool {
        self.ctx.show_modal(id)
    }

    #[wasm_bindgen(js_name = hideModal)]
    pub fn hide_modal(&self, id: &str) -> bool {
        self.ctx.hide_modal(id)
    }

    #[wasm_bindgen(js_name = toggleModal)]
    pub fn toggle_modal(&self, id: &str) -> bool {
        self.ctx.toggle_modal(id)
    }

    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: &str, kind: Option<String>, duration: Option<u32>) -> String {
        let severity = kind.as_deref().map_or(Severity::Info, Severity::from_name);
        self.ctx.show_toast(message, severity, self.ctx.toast_duration(duration))
    }

    #[wasm_bindgen(js_name = showSuccessToast)]
    pub fn show_success_toast(&self, message: &str, duration: Option<u32>) -> String {
        self.ctx.show_success_toast(message, duration)
    }

    #[wasm_bindgen(js_name = showErrorToast)]
    pub fn show_error_toast(&self, message: &str, duration: Option<u32>) -> String {
        self.ctx.show_error_toast(message, duration)
    }

    #[wasm_bindgen(js_name = showWarningToast)]
    pub fn show_warning_toast(&self, message: &str, duration: Option<u32>) -> String {
        self.ctx.show_warning_toast(message, duration)
    }

    #[wasm_bindgen(js_name = showInfoToast)]
    pub fn show_info_toast(&self, message: &str, duration: Option<u32>) -> String {
        self.ctx.show_info_toast(message, duration)
    }

    #[wasm_bindgen(js_name = hideToast)]
    pub fn hide_toast(&self, id: &str) {
        self.ctx.hide_toast(id);
    }

    #[wasm_bindgen(js_name = ajaxGet)]
    pub fn ajax_get(&self, url: String, options: JsValue) -> Promise {
        let ctx = Rc::clone(&self.ctx);
        let options = js_options(Method::Get, &options);
        into_promise(async move { request::get(&ctx, &url, options).await })
    }

    #[wasm_bindgen(js_name = ajaxPost)]
    pub fn ajax_post(&self, url: String, data: JsValue, options: JsValue) -> Promise {
        let ctx = Rc::clone(&self.ctx);
        let options = js_options(Method::Post, &options);
        let body = encode_body(&data);
        into_promise(async move {
            match body {
                Ok(body) => request::post_raw(&ctx, &url, body, options).await,
                Err(err) => request::settle_with_toasts(&ctx, Err(err), options),
            }
        })
    }

    #[wasm_bindgen(js_name = ajaxDelete)]
    pub fn ajax_delete(&self, url: String, options: JsValue) -> Promise {
        let ctx = Rc::clone(&self.ctx);
        let options = js_options(Method::Delete, &options);
        into_promise(async move { request::delete(&ctx, &url, options).await })
    }

    #[wasm_bindgen(js_name = showLoading)]
    pub fn show_loading(&self, element: web_sys::HtmlElement, loading_text: Option<String>) {
        loading::show_loading(&element, loading_text.as_deref());
    }

    #[wasm_bindgen(js_name = hideLoading)]
    pub fn hide_loading(&self, element: web_sys::HtmlElement) {
        loading::hide_loading(&element);
    }
}

/// Wrap `func` so it runs `wait` ms after the last call in a burst.
/// The wrapper forwards its first argument.
#[wasm_bindgen]
pub fn debounce(func: Function, wait: u32) -> Function {
    let debouncer = timing::Debouncer::new(wait);
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| {
        let func = func.clone();
        debouncer.call(move || call_js(&func, &arg));
    });
    handler.into_js_value().unchecked_into()
}

/// Wrap `func` so it runs at most once per `limit` ms.
/// The wrapper forwards its first argument.
#[wasm_bindgen]
pub fn throttle(func: Function, limit: u32) -> Function {
    let throttle = timing::Throttle::new(limit);
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| {
        if !throttle.call(|| call_js(&func, &arg)) {
            log::trace!("throttled call dropped");
        }
    });
    handler.into_js_value().unchecked_into()
}

fn into_promise<F>(fut: F) -> Promise
where
    F: Future<Output = Result<ApiResponse, RequestError>> + 'static,
{
    future_to_promise(async move {
        match fut.await {
            Ok(response) => Ok(json_to_js(&response.body)),
            Err(err) => Err(error_to_js(&err)),
        }
    })
}

/// Read a JS option object over the verb's defaults.
fn js_options(method: Method, raw: &JsValue) -> RequestOptions {
    let mut options = RequestOptions::for_method(method);
    if !raw.is_object() {
        return options;
    }
    if let Some(show) = field(raw, "showToast").as_bool() {
        options = options.with_toast(show);
    }
    if let Some(text) = field(raw, "successMessage").as_string() {
        options = options.with_success_message(text);
    }
    if let Some(text) = field(raw, "errorMessage").as_string() {
        options = options.with_error_message(text);
    }
    if let Ok(callback) = field(raw, "onSuccess").dyn_into::<Function>() {
        options = options.try_on_success(move |response| {
            callback
                .call1(&JsValue::NULL, &json_to_js(&response.body))
                .map(|_| ())
                .map_err(|err| RequestError::Callback(format!("{err:?}")))
        });
    }
    if let Ok(callback) = field(raw, "onError").dyn_into::<Function>() {
        options = options.on_error(move |err| call_js(&callback, &error_to_js(err)));
    }
    options
}

fn field(raw: &JsValue, name: &str) -> JsValue {
    Reflect::get(raw, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// JSON text for a POST payload; a missing payload sends `{}`.
fn encode_body(data: &JsValue) -> Result<String, RequestError> {
    if data.is_undefined() || data.is_null() {
        return Ok("{}".to_owned());
    }
    js_sys::JSON::stringify(data)
        .map(String::from)
        .map_err(|err| RequestError::Encode(format!("{err:?}")))
}

fn json_to_js(value: &serde_json::Value) -> JsValue {
    match js_sys::JSON::parse(&value.to_string()) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("response body not convertible to JS: {err:?}");
            JsValue::NULL
        }
    }
}

fn error_to_js(err: &RequestError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn call_js(func: &Function, arg: &JsValue) {
    if let Err(err) = func.call1(&JsValue::NULL, arg) {
        log::warn!("page callback threw: {err:?}");
    }
}
