//! Focus restoration for closing submenus.
//!
//! When a submenu closes, focus may still sit on an element that is about to
//! be removed. Left alone, it would fall back to the document body. A
//! [`FocusScope`] describes where focus is considered safe: the parent menu
//! container and its items.
use crate::core::{Focus, Id};

/// The elements of one menu level focus may rest on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusScope {
    /// The menu container.
    pub container: Id,
    /// The items of the menu, in display order.
    pub items: Vec<Id>,
}

impl FocusScope {
    /// Creates a new [`FocusScope`].
    pub fn new(container: Id, items: Vec<Id>) -> Self {
        Self { container, items }
    }

    /// Returns whether the given element is inside the scope.
    pub fn contains(&self, id: Id) -> bool {
        self.container == id || self.items.contains(&id)
    }
}

/// The outcome of [`restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restoration {
    /// Focus had already moved into the scope; nothing was done.
    Kept,
    /// Focus was returned to the trigger.
    Returned,
}

/// Returns focus to `trigger` unless it already lies within `scope`.
///
/// Must run before the closing submenu is detached.
pub fn restore(scope: &FocusScope, trigger: Id, focus: &mut dyn Focus) -> Restoration {
    match focus.focused() {
        Some(focused) if scope.contains(focused) => Restoration::Kept,
        focused => {
            log::trace!("Returning focus from {focused:?} to trigger {trigger}");
            focus.focus(trigger);

            Restoration::Returned
        }
    }
}
