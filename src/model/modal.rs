//! Modal stack for managing overlays

/// A modal overlay drawn on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut overview
    Help,
    /// All fields of one entry, by position in the current order
    EntryDetail { index: usize },
}

/// A stack of modal overlays
///
/// Only the top modal is drawn and receives input.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.push(Modal::EntryDetail { index: 4 });
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(&Modal::EntryDetail { index: 4 }));
        assert_eq!(stack.pop(), Some(Modal::EntryDetail { index: 4 }));
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }
}
