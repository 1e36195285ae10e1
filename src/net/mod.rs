//! Networking helpers for JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` wraps GET/POST/DELETE and reports outcomes through toasts and
//! callbacks, `csrf` reads the anti-forgery cookie, and `types` defines the
//! response wrapper and error type.

pub mod csrf;
pub mod request;
pub mod types;
