//! Ordered record of open modals, most recently opened last.

#[cfg(test)]
#[path = "modal_stack_test.rs"]
mod modal_stack_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalStack {
    open: Vec<String>,
}

impl ModalStack {
    /// Record `id` as the most recently opened modal.
    ///
    /// Reopening an already open modal moves it to the top.
    pub fn open(&mut self, id: &str) {
        self.open.retain(|open| open != id);
        self.open.push(id.to_owned());
    }

    /// Forget `id`. Returns whether it was open.
    pub fn close(&mut self, id: &str) -> bool {
        let before = self.open.len();
        self.open.retain(|open| open != id);
        self.open.len() != before
    }

    pub fn top(&self) -> Option<&str> {
        self.open.last().map(String::as_str)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Drop tracked modals that are no longer open in the document.
    /// Returns how many were dropped.
    pub fn retain_open(&mut self, dom_open: &[String]) -> usize {
        let before = self.open.len();
        self.open.retain(|id| dom_open.contains(id));
        before - self.open.len()
    }
}

/// Pick the modal Escape should dismiss.
///
/// Takes the most recently opened tracked modal that `dom_open` still shows;
/// falls back to the last element in `dom_open` (modals rendered open by
/// markup never pass through the stack).
pub fn escape_target(stack: &ModalStack, dom_open: &[String]) -> Option<String> {
    stack
        .open
        .iter()
        .rev()
        .find(|id| dom_open.contains(id))
        .or_else(|| dom_open.iter().rev().find(|id| !id.is_empty()))
        .cloned()
}
