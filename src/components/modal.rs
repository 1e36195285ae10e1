//! Modal dialogs: elements found by id and shown by toggling the configured
//! open class (default `show`).
//!
//! While any modal is open the page body stops scrolling; the body's own
//! overflow value comes back once the last one closes. Ids with no matching
//! element are ignored.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use crate::context::UiContext;
use crate::state::modal_stack::escape_target;

impl UiContext {
    /// Open the modal with `id`. Returns `false` when no such element exists.
    pub fn show_modal(&self, id: &str) -> bool {
        if !self.set_modal_open_class(id, true) {
            return false;
        }
        self.modals.borrow_mut().open(id);
        self.sync_scroll();
        log::debug!("modal opened: {id}");
        true
    }

    /// Close the modal with `id`. Returns `false` when no such element exists.
    pub fn hide_modal(&self, id: &str) -> bool {
        if !self.set_modal_open_class(id, false) {
            return false;
        }
        self.modals.borrow_mut().close(id);
        self.sync_scroll();
        log::debug!("modal closed: {id}");
        true
    }

    /// Flip the modal's visibility. Returns whether it is open afterwards.
    pub fn toggle_modal(&self, id: &str) -> bool {
        if self.is_modal_open(id) {
            self.hide_modal(id);
            false
        } else {
            self.show_modal(id)
        }
    }

    /// Escape handling: forget tracked modals missing from `dom_open`, then
    /// close the most recently opened one still showing. Returns the id closed.
    pub fn dismiss_top_modal(&self, dom_open: &[String]) -> Option<String> {
        let stale = self.modals.borrow_mut().retain_open(dom_open);
        if stale > 0 {
            log::debug!("dropped {stale} modal(s) closed outside the helpers");
            self.sync_scroll();
        }
        let target = escape_target(&self.modals.borrow(), dom_open)?;
        self.hide_modal(&target).then_some(target)
    }

    #[cfg(feature = "hydrate")]
    pub fn is_modal_open(&self, id: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .is_some_and(|modal| modal.class_list().contains(&self.config().modal.open_class))
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn is_modal_open(&self, id: &str) -> bool {
        self.modals.borrow().is_open(id)
    }

    #[cfg(feature = "hydrate")]
    fn set_modal_open_class(&self, id: &str, open: bool) -> bool {
        let Some(modal) = self.document.get_element_by_id(id) else {
            log::debug!("modal not found: {id}");
            return false;
        };
        let class = &self.config().modal.open_class;
        let classes = modal.class_list();
        let result = if open { classes.add_1(class) } else { classes.remove_1(class) };
        if let Err(err) = result {
            crate::context::log_dom_error("toggle modal class", &err);
        }
        true
    }

    /// Outside the browser every non-empty id counts as an existing element.
    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_self)]
    fn set_modal_open_class(&self, id: &str, open: bool) -> bool {
        log::trace!("modal {id} open={open} outside the browser");
        !id.is_empty()
    }
}

/// Wire dismissal for every modal on the page: close buttons, clicks on the
/// backdrop itself, and Escape for the most recently opened modal.
#[cfg(feature = "hydrate")]
pub fn init_modals(ctx: &Rc<UiContext>) {
    use wasm_bindgen::JsCast;

    use crate::util::dom::{listen_forever, query_all};

    let config = ctx.config().modal.clone();

    for button in query_all(&ctx.document, &config.close_selector) {
        let weak = Rc::downgrade(ctx);
        let modal_selector = config.modal_selector.clone();
        let target = button.clone();
        listen_forever(&button, "click", move |ev| {
            ev.prevent_default();
            if let Some(ctx) = weak.upgrade() {
                close_enclosing(&ctx, &target, &modal_selector);
            }
        });
    }

    for backdrop in query_all(&ctx.document, &config.backdrop_selector) {
        let weak = Rc::downgrade(ctx);
        let modal_selector = config.modal_selector.clone();
        let target = backdrop.clone();
        listen_forever(&backdrop, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .is_some_and(|clicked| js_sys::Object::is(clicked.as_ref(), target.as_ref()));
            if !on_backdrop {
                return;
            }
            if let Some(ctx) = weak.upgrade() {
                close_enclosing(&ctx, &target, &modal_selector);
            }
        });
    }

    let weak = Rc::downgrade(ctx);
    listen_forever(&ctx.document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if key.key() != "Escape" {
            return;
        }
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        let dom_open: Vec<String> = query_all(&ctx.document, &ctx.config().open_modal_selector())
            .iter()
            .map(web_sys::Element::id)
            .collect();
        if let Some(id) = ctx.dismiss_top_modal(&dom_open) {
            log::debug!("escape closed {id}");
        }
    });
    log::debug!("modal dismissal wired");
}

#[cfg(feature = "hydrate")]
fn close_enclosing(ctx: &UiContext, element: &web_sys::Element, modal_selector: &str) {
    match element.closest(modal_selector) {
        Ok(Some(modal)) => {
            ctx.hide_modal(&modal.id());
        }
        Ok(None) => log::debug!("dismiss control outside any modal"),
        Err(err) => crate::context::log_dom_error("find enclosing modal", &err),
    }
}
