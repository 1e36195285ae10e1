//! UI configuration with defaults and page-supplied overrides.
//!
//! Pages may embed a JSON object in
//! `<script id="sigma-ui-config" type="application/json">`; any field it
//! omits keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "sigma-ui-config";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_TOAST_CONTAINER_ID: &str = "toast-container";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u32 = 10;
pub const DEFAULT_TOAST_EXIT_MS: u32 = 300;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(String),
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("invalid CSRF header name: {0}")]
    InvalidHeader(String),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub log_level: String,
    pub toast: ToastConfig,
    pub modal: ModalConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            toast: ToastConfig::default(),
            modal: ModalConfig::default(),
        }
    }
}

/// Toast container placement and lifecycle timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub container_id: String,
    /// Default lifetime for the severity shortcuts; `0` keeps toasts until closed.
    pub duration_ms: u32,
    pub enter_delay_ms: u32,
    pub exit_ms: u32,
    pub offset_px: u32,
    pub z_index: i32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_TOAST_CONTAINER_ID.to_owned(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            enter_delay_ms: DEFAULT_TOAST_ENTER_DELAY_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
            offset_px: 16,
            z_index: 50,
        }
    }
}

/// Selectors and class names used to find and toggle modals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal_selector: String,
    pub close_selector: String,
    pub backdrop_selector: String,
    pub open_class: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_selector: ".modal".to_owned(),
            close_selector: ".modal-close".to_owned(),
            backdrop_selector: ".modal-backdrop".to_owned(),
            open_class: "show".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a field fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the embedded config element, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the element exists but holds invalid config.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Result<Self, ConfigError> {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Ok(Self::default());
        };
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }

    /// Check field invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("csrf_cookie", &self.csrf_cookie)?;
        require_non_empty("csrf_header", &self.csrf_header)?;
        require_non_empty("toast.container_id", &self.toast.container_id)?;
        require_non_empty("modal.modal_selector", &self.modal.modal_selector)?;
        require_non_empty("modal.open_class", &self.modal.open_class)?;
        if !is_header_token(&self.csrf_header) {
            return Err(ConfigError::InvalidHeader(self.csrf_header.clone()));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for unknown level names.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Selector matching open modals, e.g. `.modal.show`.
    pub fn open_modal_selector(&self) -> String {
        format!("{}.{}", self.modal.modal_selector, self.modal.open_class)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}

/// RFC 7230 `token` characters.
fn is_header_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}
