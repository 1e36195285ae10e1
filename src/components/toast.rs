//! Toast notifications: a singleton container in the page corner holding
//! short-lived, severity-tagged messages.
//!
//! LIFECYCLE
//! =========
//! A toast is appended without the `show` class, gains it after the enter
//! delay (so CSS transitions run), loses it on hide, and is removed from the
//! DOM once the exit transition has had time to finish. A duration of `0`
//! keeps the toast until its close button is clicked.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::ToastConfig;
use crate::context::UiContext;

pub const TOAST_OPEN_CLASS: &str = "show";
pub const TOAST_CLOSE_SELECTOR: &str = ".toast-close";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a severity name; unknown names render as info.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn class_name(self) -> String {
        format!("toast toast-{}", self.as_str())
    }

    fn icon_path(self) -> &'static str {
        match self {
            Self::Success => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
            }
            Self::Error => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z"
            }
            Self::Warning => {
                "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z"
            }
            Self::Info => {
                "M18 5v8a2 2 0 01-2 2h-5l-5 4v-4H4a2 2 0 01-2-2V5a2 2 0 012-2h12a2 2 0 012 2zm-11-1a1 1 0 11-2 0 1 1 0 012 0zm3 0a1 1 0 11-2 0 1 1 0 012 0zm3 0a1 1 0 11-2 0 1 1 0 012 0z"
            }
        }
    }

    pub fn icon_svg(self) -> String {
        format!(
            r#"<svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="{}" clip-rule="evenodd"></path></svg>"#,
            self.icon_path()
        )
    }
}

const CLOSE_ICON_SVG: &str = r#"<svg class="w-4 h-4" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd"></path></svg>"#;

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Unique element id for a new toast.
pub fn next_toast_id() -> String {
    format!("toast-{}", uuid::Uuid::new_v4().simple())
}

/// One toast to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastSpec {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub duration_ms: u32,
}

impl ToastSpec {
    pub fn new(message: &str, severity: Severity, duration_ms: u32) -> Self {
        Self {
            id: next_toast_id(),
            severity,
            message: message.to_owned(),
            duration_ms,
        }
    }

    /// Inner HTML of the toast element. The message is escaped; icons are static.
    pub fn markup(&self) -> String {
        format!(
            concat!(
                r#"<div class="toast-icon">{icon}</div>"#,
                r#"<div class="toast-message">{message}</div>"#,
                r#"<button type="button" class="toast-close" aria-label="Close toast">{close}</button>"#,
            ),
            icon = self.severity.icon_svg(),
            message = escape_html(&self.message),
            close = CLOSE_ICON_SVG,
        )
    }

    pub fn timeline(&self, config: &ToastConfig) -> ToastTimeline {
        ToastTimeline {
            enter_at_ms: config.enter_delay_ms,
            hide_at_ms: (self.duration_ms > 0).then_some(self.duration_ms),
            remove_after_hide_ms: config.exit_ms,
        }
    }
}

/// Timer offsets for one toast, measured from when it is mounted
/// (`remove_after_hide_ms` is measured from the hide).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimeline {
    pub enter_at_ms: u32,
    pub hide_at_ms: Option<u32>,
    pub remove_after_hide_ms: u32,
}

/// Inline styles for a freshly created container.
pub fn container_style(config: &ToastConfig) -> Vec<(&'static str, String)> {
    vec![
        ("position", "fixed".to_owned()),
        ("bottom", format!("{}px", config.offset_px)),
        ("right", format!("{}px", config.offset_px)),
        ("z-index", config.z_index.to_string()),
        ("pointer-events", "none".to_owned()),
    ]
}

impl UiContext {
    /// Show a toast and return its element id.
    pub fn show_toast(self: &Rc<Self>, message: &str, severity: Severity, duration_ms: u32) -> String {
        let spec = ToastSpec::new(message, severity, duration_ms);
        self.mount_toast(&spec);
        spec.id
    }

    /// `duration_ms` or the configured default; `Some(0)` keeps the toast
    /// until it is closed.
    pub fn toast_duration(&self, duration_ms: Option<u32>) -> u32 {
        duration_ms.unwrap_or(self.config().toast.duration_ms)
    }

    pub fn show_success_toast(self: &Rc<Self>, message: &str, duration_ms: Option<u32>) -> String {
        self.show_toast(message, Severity::Success, self.toast_duration(duration_ms))
    }

    pub fn show_error_toast(self: &Rc<Self>, message: &str, duration_ms: Option<u32>) -> String {
        self.show_toast(message, Severity::Error, self.toast_duration(duration_ms))
    }

    pub fn show_warning_toast(self: &Rc<Self>, message: &str, duration_ms: Option<u32>) -> String {
        self.show_toast(message, Severity::Warning, self.toast_duration(duration_ms))
    }

    pub fn show_info_toast(self: &Rc<Self>, message: &str, duration_ms: Option<u32>) -> String {
        self.show_toast(message, Severity::Info, self.toast_duration(duration_ms))
    }

    #[cfg(not(feature = "hydrate"))]
    fn mount_toast(self: &Rc<Self>, spec: &ToastSpec) {
        log::trace!("toast {} ({}) outside the browser: {}", spec.id, spec.severity.as_str(), spec.message);
    }

    /// Start the exit transition and remove the toast when it ends.
    /// Unknown ids are ignored.
    #[cfg(not(feature = "hydrate"))]
    pub fn hide_toast(self: &Rc<Self>, id: &str) {
        log::trace!("hide toast outside the browser: {id}");
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;

    use super::{TOAST_CLOSE_SELECTOR, TOAST_OPEN_CLASS, ToastSpec, container_style};
    use crate::context::{UiContext, UiError, dom_error, log_dom_error};
    use crate::util::dom::listen;

    fn set_pointer_events(container: &web_sys::HtmlElement, value: &str) {
        if let Err(err) = container.style().set_property("pointer-events", value) {
            log_dom_error("set toast container pointer-events", &err);
        }
    }

    impl UiContext {
        pub(super) fn mount_toast(self: &Rc<Self>, spec: &ToastSpec) {
            if let Err(err) = self.try_mount_toast(spec) {
                log::warn!("toast {} not shown: {err}", spec.id);
            }
        }

        fn try_mount_toast(self: &Rc<Self>, spec: &ToastSpec) -> Result<(), UiError> {
            let container = self.ensure_toast_container()?;
            let toast = self.document.create_element("div").map_err(dom_error)?;
            toast.set_id(&spec.id);
            toast.set_class_name(&spec.severity.class_name());
            toast.set_inner_html(&spec.markup());
            container.append_child(&toast).map_err(dom_error)?;
            set_pointer_events(&container, "auto");

            let timeline = spec.timeline(&self.config().toast);
            let entering = toast.clone();
            Timeout::new(timeline.enter_at_ms, move || {
                if let Err(err) = entering.class_list().add_1(TOAST_OPEN_CLASS) {
                    log_dom_error("show toast", &err);
                }
            })
            .forget();

            if let Some(close) = toast.query_selector(TOAST_CLOSE_SELECTOR).map_err(dom_error)? {
                let weak = Rc::downgrade(self);
                let id = spec.id.clone();
                let listener = listen(&close, "click", move |_| {
                    if let Some(ctx) = weak.upgrade() {
                        ctx.hide_toast(&id);
                    }
                });
                if let Some(listener) = listener {
                    self.toast_listeners.borrow_mut().insert(spec.id.clone(), listener);
                }
            }

            if let Some(hide_at) = timeline.hide_at_ms {
                let ctx = Rc::clone(self);
                let id = spec.id.clone();
                Timeout::new(hide_at, move || ctx.hide_toast(&id)).forget();
            }
            log::debug!("toast {} shown ({})", spec.id, spec.severity.as_str());
            Ok(())
        }

        /// Start the exit transition and remove the toast when it ends.
        /// Unknown ids are ignored.
        pub fn hide_toast(self: &Rc<Self>, id: &str) {
            let Some(toast) = self.document.get_element_by_id(id) else {
                return;
            };
            if let Err(err) = toast.class_list().remove_1(TOAST_OPEN_CLASS) {
                log_dom_error("hide toast", &err);
            }
            let ctx = Rc::clone(self);
            let id = id.to_owned();
            Timeout::new(self.config().toast.exit_ms, move || ctx.remove_toast(&id, &toast)).forget();
        }

        fn remove_toast(&self, id: &str, toast: &web_sys::Element) {
            toast.remove();
            self.toast_listeners.borrow_mut().remove(id);
            if let Some(container) = self.toast_container.borrow().as_ref() {
                if container.child_element_count() == 0 {
                    set_pointer_events(container, "none");
                }
            }
        }

        /// Locate the toast container, creating and styling it on first use.
        fn ensure_toast_container(&self) -> Result<web_sys::HtmlElement, UiError> {
            if let Some(cached) = self.toast_container.borrow().as_ref() {
                if cached.is_connected() {
                    return Ok(cached.clone());
                }
            }
            let config = &self.config().toast;
            let container = match self.document.get_element_by_id(&config.container_id) {
                Some(existing) => existing
                    .dyn_into::<web_sys::HtmlElement>()
                    .map_err(|_| UiError::Dom("toast container is not an HTML element".to_owned()))?,
                None => {
                    let created = self
                        .document
                        .create_element("div")
                        .map_err(dom_error)?
                        .dyn_into::<web_sys::HtmlElement>()
                        .map_err(|_| UiError::Dom("created toast container is not an HTML element".to_owned()))?;
                    created.set_id(&config.container_id);
                    let style = created.style();
                    for (property, value) in container_style(config) {
                        style.set_property(property, &value).map_err(dom_error)?;
                    }
                    let body = self.document.body().ok_or(UiError::NoBody)?;
                    body.append_child(&created).map_err(dom_error)?;
                    created
                }
            };
            *self.toast_container.borrow_mut() = Some(container.clone());
            Ok(container)
        }
    }
}
