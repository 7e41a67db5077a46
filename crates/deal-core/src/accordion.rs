//! Single-open disclosure state for FAQ lists.

/// Which accordion item, if any, is expanded. Opening one closes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `index`, or collapse it if it is already expanded.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open() {
        let mut accordion = AccordionState::new();
        accordion.toggle(1);
        accordion.toggle(3);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(3));
        assert_eq!(accordion.open_index(), Some(3));
    }

    #[test]
    fn test_toggle_same_item_collapses() {
        let mut accordion = AccordionState::new();
        accordion.toggle(0);
        accordion.toggle(0);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_collapse() {
        let mut accordion = AccordionState::new();
        accordion.toggle(2);
        accordion.collapse();
        assert!(!accordion.is_open(2));
    }
}
