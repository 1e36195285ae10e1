//! JSON request helpers for GET/POST/DELETE.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the CSRF
//! cookie echoed in a header on state-changing verbs.
//! Native builds: every request resolves to [`RequestError::Unavailable`]
//! and still goes through the same settlement path.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses and unparseable bodies are logged,
//! optionally announced with an error toast, handed to the error callback
//! and returned as `Err` so callers can react as well.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::types::{ApiResponse, RequestError};
use crate::components::toast::Severity;
use crate::context::UiContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// State-changing verbs carry the CSRF header.
    pub fn sends_csrf(self) -> bool {
        !matches!(self, Self::Get)
    }
}

type SuccessCallback = Box<dyn FnOnce(&ApiResponse) -> Result<(), RequestError>>;
type ErrorCallback = Box<dyn FnOnce(&RequestError)>;

/// Per-request notification behavior and callbacks.
pub struct RequestOptions {
    /// Show toasts for this request at all.
    pub show_toast: bool,
    /// Fallback text for the success toast; `None` never shows one.
    pub success_message: Option<String>,
    pub error_message: String,
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
}

impl RequestOptions {
    /// Defaults for `method`: reads stay quiet, writes announce both outcomes.
    pub fn for_method(method: Method) -> Self {
        let (show_toast, success_message, error_message) = match method {
            Method::Get => (false, None, "Failed to fetch data"),
            Method::Post => (true, Some("Operation successful"), "An error occurred"),
            Method::Delete => (true, Some("Deleted successfully"), "Failed to delete"),
        };
        Self {
            show_toast,
            success_message: success_message.map(str::to_owned),
            error_message: error_message.to_owned(),
            on_success: None,
            on_error: None,
        }
    }

    #[must_use]
    pub fn on_success(self, callback: impl FnOnce(&ApiResponse) + 'static) -> Self {
        self.try_on_success(move |response| {
            callback(response);
            Ok(())
        })
    }

    /// Success callback that can fail. A failure is handled like a failed
    /// request: error toast, error callback, then `Err`.
    #[must_use]
    pub fn try_on_success(
        mut self,
        callback: impl FnOnce(&ApiResponse) -> Result<(), RequestError> + 'static,
    ) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_error(mut self, callback: impl FnOnce(&RequestError) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn with_toast(mut self, show: bool) -> Self {
        self.show_toast = show;
        self
    }

    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("show_toast", &self.show_toast)
            .field("success_message", &self.success_message)
            .field("error_message", &self.error_message)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// `GET url`.
///
/// # Errors
///
/// Returns [`RequestError`] on network failure, non-2xx status or a non-JSON body.
pub async fn get(ctx: &Rc<UiContext>, url: &str, options: RequestOptions) -> Result<ApiResponse, RequestError> {
    send(ctx, Method::Get, url, None, options).await
}

/// `POST url` with `payload` serialized as JSON.
///
/// # Errors
///
/// Returns [`RequestError`] when the payload cannot be encoded, on network
/// failure, non-2xx status or a non-JSON body.
pub async fn post<T: Serialize + ?Sized>(
    ctx: &Rc<UiContext>,
    url: &str,
    payload: &T,
    options: RequestOptions,
) -> Result<ApiResponse, RequestError> {
    match serde_json::to_string(payload) {
        Ok(body) => post_raw(ctx, url, body, options).await,
        Err(err) => settle_with_toasts(ctx, Err(RequestError::Encode(err.to_string())), options),
    }
}

/// `POST url` with an already encoded JSON body.
///
/// # Errors
///
/// Same as [`post`], minus encoding.
pub async fn post_raw(
    ctx: &Rc<UiContext>,
    url: &str,
    body: String,
    options: RequestOptions,
) -> Result<ApiResponse, RequestError> {
    send(ctx, Method::Post, url, Some(body), options).await
}

/// `DELETE url`.
///
/// # Errors
///
/// Returns [`RequestError`] on network failure, non-2xx status or a non-JSON body.
pub async fn delete(ctx: &Rc<UiContext>, url: &str, options: RequestOptions) -> Result<ApiResponse, RequestError> {
    send(ctx, Method::Delete, url, None, options).await
}

async fn send(
    ctx: &Rc<UiContext>,
    method: Method,
    url: &str,
    body: Option<String>,
    options: RequestOptions,
) -> Result<ApiResponse, RequestError> {
    log::debug!("{} {url}", method.as_str());
    let result = perform(ctx, method, url, body).await;
    settle_with_toasts(ctx, result, options)
}

pub(crate) fn settle_with_toasts(
    ctx: &Rc<UiContext>,
    result: Result<ApiResponse, RequestError>,
    options: RequestOptions,
) -> Result<ApiResponse, RequestError> {
    let duration_ms = ctx.config().toast.duration_ms;
    settle(result, options, |severity, message| {
        ctx.show_toast(&message, severity, duration_ms);
    })
}

/// Announce and dispatch a finished request, then hand the result back.
///
/// A success toast needs toasts enabled, a truthy `success` in the body and
/// a success message for the verb; the body's own `message` wins over the
/// default text. A failing success callback turns the outcome into an error.
pub(crate) fn settle<N>(
    result: Result<ApiResponse, RequestError>,
    options: RequestOptions,
    mut notify: N,
) -> Result<ApiResponse, RequestError>
where
    N: FnMut(Severity, String),
{
    let RequestOptions {
        show_toast,
        success_message,
        error_message,
        on_success,
        on_error,
    } = options;
    let result = result.and_then(|response| {
        if show_toast && response.success() {
            if let Some(fallback) = success_message {
                let text = response.message().map_or(fallback, str::to_owned);
                notify(Severity::Success, text);
            }
        }
        match on_success {
            Some(callback) => callback(&response).map(|()| response),
            None => Ok(response),
        }
    });
    if let Err(err) = &result {
        log::error!("request failed: {err}");
        if show_toast {
            notify(Severity::Error, error_message);
        }
        if let Some(callback) = on_error {
            callback(err);
        }
    }
    result
}

#[cfg(feature = "hydrate")]
async fn perform(
    ctx: &UiContext,
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<ApiResponse, RequestError> {
    use gloo_net::http::Request;

    use super::types::is_success_status;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Delete => Request::delete(url),
    };
    let mut builder = builder.header("Content-Type", "application/json");
    if method.sends_csrf() {
        let config = ctx.config();
        match super::csrf::read_cookie(&ctx.document, &config.csrf_cookie) {
            Some(token) => builder = builder.header(&config.csrf_header, &token),
            None => log::warn!(
                "no {} cookie; {} {url} sent without {}",
                config.csrf_cookie,
                method.as_str(),
                config.csrf_header
            ),
        }
    }
    let request = match body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| RequestError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    let status = response.status();
    if !is_success_status(status) {
        return Err(RequestError::Status { status });
    }
    let text = response
        .text()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    ApiResponse::from_text(status, &text)
}

#[cfg(not(feature = "hydrate"))]
async fn perform(
    ctx: &UiContext,
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<ApiResponse, RequestError> {
    log::trace!(
        "{} {url} unavailable outside the browser (csrf cookie {}, body {} bytes)",
        method.as_str(),
        ctx.config().csrf_cookie,
        body.map_or(0, |b| b.len())
    );
    Err(RequestError::Unavailable)
}
