//! Page scroll freeze state.
//!
//! The body's inline `overflow` value is captured when the lock engages and
//! handed back on release so pages that set their own overflow keep it.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

pub const LOCKED_OVERFLOW: &str = "hidden";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    saved_overflow: Option<String>,
}

impl ScrollLock {
    pub fn is_locked(&self) -> bool {
        self.saved_overflow.is_some()
    }

    /// Freeze scrolling, remembering `current_overflow`.
    ///
    /// Returns `true` when the caller must apply [`LOCKED_OVERFLOW`]; a lock
    /// that is already engaged keeps its original saved value.
    pub fn engage(&mut self, current_overflow: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        self.saved_overflow = Some(current_overflow.to_owned());
        true
    }

    /// Release the lock. Returns the overflow value to restore, where an
    /// empty string means the inline property should be removed.
    pub fn release(&mut self) -> Option<String> {
        self.saved_overflow.take()
    }

    /// Engage or release so the lock matches whether any modal is open.
    pub fn sync(&mut self, any_open: bool, current_overflow: &str) -> ScrollChange {
        if any_open {
            if self.engage(current_overflow) {
                return ScrollChange::Freeze;
            }
        } else if let Some(previous) = self.release() {
            return ScrollChange::Restore(previous);
        }
        ScrollChange::None
    }
}

/// Body style update the caller should apply after [`ScrollLock::sync`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollChange {
    None,
    Freeze,
    Restore(String),
}
