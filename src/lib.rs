//! # sigma-ui
//!
//! Browser-side UI helpers compiled to WASM: JSON request wrappers that
//! attach a CSRF token and report outcomes as toasts, plus modal dialog and
//! toast notification management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every browser call sits behind the `hydrate` feature. Native builds keep
//! the pure pieces (cookie lookup, markup, modal stack, scroll lock, request
//! settlement, timing gates) so they can be tested without a DOM.

pub mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod bindings;

pub use components::toast::Severity;
pub use config::UiConfig;
pub use context::{UiContext, UiError};
pub use net::request::{Method, RequestOptions};
pub use net::types::{ApiResponse, RequestError};
