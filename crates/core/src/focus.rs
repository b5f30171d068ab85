//! The focus primitive the menu logic talks to.
use crate::Id;

/// Where focus lands when a menu level mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusStrategy {
    /// Focus the first enabled item.
    First,
    /// Focus the last enabled item.
    Last,
}

/// Access to the host's focus.
///
/// Implemented by whatever owns the real focus (a DOM document, a widget tree
/// operation, a test double).
pub trait Focus {
    /// Returns the currently focused element, if any.
    fn focused(&self) -> Option<Id>;

    /// Moves focus to the given element.
    fn focus(&mut self, id: Id);
}

/// A [`Focus`] that only remembers what it was told.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTracker {
    current: Option<Id>,
    moves: usize,
}

impl FocusTracker {
    /// Creates a [`FocusTracker`] with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times focus was moved programmatically.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Drops focus, as if it went to the document body.
    pub fn blur(&mut self) {
        self.current = None;
    }
}

impl Focus for FocusTracker {
    fn focused(&self) -> Option<Id> {
        self.current
    }

    fn focus(&mut self, id: Id) {
        self.current = Some(id);
        self.moves += 1;
    }
}
