//! The open/close primitive shared by top-level triggers and menu levels.
use crate::core::FocusStrategy;

/// Whether something is open, plus how focus should enter it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    is_open: bool,
    focus_strategy: Option<FocusStrategy>,
}

impl ToggleState {
    /// Creates a closed [`ToggleState`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether it is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the focus strategy requested by the last opening.
    pub fn focus_strategy(&self) -> Option<FocusStrategy> {
        self.focus_strategy
    }

    /// Opens it. Returns whether anything changed.
    pub fn open(&mut self, focus_strategy: Option<FocusStrategy>) -> bool {
        if self.is_open {
            return false;
        }

        self.is_open = true;
        self.focus_strategy = focus_strategy;
        true
    }

    /// Closes it. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open;

        self.is_open = false;
        self.focus_strategy = None;
        was_open
    }

    /// Flips it. Returns the new open state.
    pub fn toggle(&mut self, focus_strategy: Option<FocusStrategy>) -> bool {
        if self.is_open {
            let _ = self.close();
        } else {
            let _ = self.open(focus_strategy);
        }

        self.is_open
    }
}
