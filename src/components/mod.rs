//! DOM-facing helpers for modal dialogs and toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both extend [`crate::context::UiContext`] so every show/hide call goes
//! through the same document handle, modal stack and scroll lock.

pub mod modal;
pub mod toast;
