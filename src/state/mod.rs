//! In-memory UI bookkeeping that mirrors what the DOM shows.
//!
//! DESIGN
//! ======
//! Both structures are plain data so open/close ordering and scroll
//! restoration are testable without a browser.

pub mod modal_stack;
pub mod scroll_lock;
