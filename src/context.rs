//! Explicit UI context shared by the modal, toast and request helpers.
//!
//! DESIGN
//! ======
//! The document handle, cached toast container, open-modal stack and scroll
//! lock live here instead of in globals. Callers hold an `Rc<UiContext>`;
//! timers clone it, long-lived event listeners keep only a `Weak`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ConfigError, UiConfig};
use crate::state::modal_stack::ModalStack;
use crate::state::scroll_lock::{ScrollChange, ScrollLock};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct UiContext {
    config: UiConfig,
    pub(crate) modals: RefCell<ModalStack>,
    pub(crate) scroll: RefCell<ScrollLock>,
    #[cfg(feature = "hydrate")]
    pub(crate) document: web_sys::Document,
    #[cfg(feature = "hydrate")]
    pub(crate) toast_container: RefCell<Option<web_sys::HtmlElement>>,
    /// Close-button listeners, dropped when their toast is removed.
    #[cfg(feature = "hydrate")]
    pub(crate) toast_listeners: RefCell<std::collections::HashMap<String, crate::util::dom::Listener>>,
}

impl std::fmt::Debug for UiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiContext")
            .field("config", &self.config)
            .field("modals", &self.modals)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

impl UiContext {
    /// Build a context bound to the current document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] when the config is invalid or, in the browser,
    /// when there is no window or document.
    pub fn new(config: UiConfig) -> Result<Rc<Self>, UiError> {
        config.validate()?;
        #[cfg(feature = "hydrate")]
        let document = web_sys::window()
            .ok_or(UiError::NoWindow)?
            .document()
            .ok_or(UiError::NoDocument)?;
        Ok(Rc::new(Self {
            config,
            modals: RefCell::new(ModalStack::default()),
            scroll: RefCell::new(ScrollLock::default()),
            #[cfg(feature = "hydrate")]
            document,
            #[cfg(feature = "hydrate")]
            toast_container: RefCell::new(None),
            #[cfg(feature = "hydrate")]
            toast_listeners: RefCell::new(std::collections::HashMap::new()),
        }))
    }

    /// Page entry point: read embedded config, install logging, build the
    /// context and wire modal dismissal.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] when the document or its config is unusable.
    #[cfg(feature = "hydrate")]
    pub fn boot() -> Result<Rc<Self>, UiError> {
        let document = web_sys::window()
            .ok_or(UiError::NoWindow)?
            .document()
            .ok_or(UiError::NoDocument)?;
        let config = UiConfig::from_document(&document)?;
        crate::logging::init(config.level()?);
        let ctx = Self::new(config)?;
        crate::components::modal::init_modals(&ctx);
        log::debug!("sigma-ui booted");
        Ok(ctx)
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll.borrow().is_locked()
    }

    /// Most recently opened modal still open.
    pub fn top_modal(&self) -> Option<String> {
        self.modals.borrow().top().map(str::to_owned)
    }

    /// Bring the body scroll lock in line with the modal stack.
    pub(crate) fn sync_scroll(&self) {
        let any_open = !self.modals.borrow().is_empty();
        let current = self.body_overflow();
        let change = self.scroll.borrow_mut().sync(any_open, &current);
        self.apply_scroll_change(&change);
    }

    #[cfg(feature = "hydrate")]
    fn body_overflow(&self) -> String {
        let Some(body) = self.document.body() else {
            return String::new();
        };
        match body.style().get_property_value("overflow") {
            Ok(value) => value,
            Err(err) => {
                log_dom_error("read body overflow", &err);
                String::new()
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_self)]
    fn body_overflow(&self) -> String {
        String::new()
    }

    #[cfg(feature = "hydrate")]
    fn apply_scroll_change(&self, change: &ScrollChange) {
        use crate::state::scroll_lock::LOCKED_OVERFLOW;

        let Some(body) = self.document.body() else {
            log::warn!("scroll lock skipped: {}", UiError::NoBody);
            return;
        };
        let style = body.style();
        let result = match change {
            ScrollChange::None => return,
            ScrollChange::Freeze => style.set_property("overflow", LOCKED_OVERFLOW),
            ScrollChange::Restore(previous) if previous.is_empty() => style.remove_property("overflow").map(drop),
            ScrollChange::Restore(previous) => style.set_property("overflow", previous),
        };
        if let Err(err) = result {
            log_dom_error("update body overflow", &err);
        }
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_self)]
    fn apply_scroll_change(&self, change: &ScrollChange) {
        log::trace!("scroll change outside the browser: {change:?}");
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn dom_error(err: wasm_bindgen::JsValue) -> UiError {
    UiError::Dom(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
pub(crate) fn log_dom_error(action: &str, err: &wasm_bindgen::JsValue) {
    log::warn!("{action} failed: {err:?}");
}
