//! Utility helpers shared across the request and component modules.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod loading;
pub mod timing;
