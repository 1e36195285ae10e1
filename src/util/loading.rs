//! Busy state for buttons and other controls while a request is in flight.
//!
//! The control is disabled, dimmed, and its label swapped for loading text;
//! the original label is stashed in `data-original-text` for the restore.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_RESTORED_LABEL: &str = "Submit";
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub const LOADING_CLASSES: [&str; 2] = ["opacity-50", "cursor-not-allowed"];

/// Label to put back on a control, given what was stashed.
pub fn restored_label(stashed: Option<String>) -> String {
    stashed
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| DEFAULT_RESTORED_LABEL.to_owned())
}

/// Label to stash when entering the loading state. A control that is
/// already loading keeps its first stash.
pub fn label_to_stash(already_stashed: Option<String>, current_text: Option<String>) -> String {
    already_stashed.unwrap_or_else(|| current_text.unwrap_or_default())
}

#[cfg(feature = "hydrate")]
fn set_disabled(element: &web_sys::HtmlElement, disabled: bool) {
    use wasm_bindgen::JsCast;

    if let Some(button) = element.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(disabled);
        return;
    }
    let result = if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    };
    if let Err(err) = result {
        crate::context::log_dom_error("toggle disabled", &err);
    }
}

/// Put `element` into its loading state.
#[cfg(feature = "hydrate")]
pub fn show_loading(element: &web_sys::HtmlElement, loading_text: Option<&str>) {
    use crate::context::log_dom_error;

    set_disabled(element, true);
    let stash = label_to_stash(element.get_attribute(ORIGINAL_TEXT_ATTR), element.text_content());
    if let Err(err) = element.set_attribute(ORIGINAL_TEXT_ATTR, &stash) {
        log_dom_error("stash original label", &err);
    }
    element.set_text_content(Some(loading_text.unwrap_or(DEFAULT_LOADING_TEXT)));
    for class in LOADING_CLASSES {
        if let Err(err) = element.class_list().add_1(class) {
            log_dom_error("add loading class", &err);
        }
    }
}

/// Undo [`show_loading`].
#[cfg(feature = "hydrate")]
pub fn hide_loading(element: &web_sys::HtmlElement) {
    use crate::context::log_dom_error;

    set_disabled(element, false);
    let label = restored_label(element.get_attribute(ORIGINAL_TEXT_ATTR));
    element.set_text_content(Some(&label));
    if let Err(err) = element.remove_attribute(ORIGINAL_TEXT_ATTR) {
        log_dom_error("clear original label", &err);
    }
    for class in LOADING_CLASSES {
        if let Err(err) = element.class_list().remove_1(class) {
            log_dom_error("remove loading class", &err);
        }
    }
}
