//! Which submenu is expanded at one menu level.
//!
//! Every level owns exactly one [`ExpansionState`]. Submenu triggers and
//! descendants only get an [`ExpansionHandle`]: they can read it and send
//! requests, but they never mutate the level directly.
use super::toggle::ToggleState;
use crate::core::{Error, FocusStrategy, Key};

use rustc_hash::FxHashSet;

use std::cell::RefCell;
use std::rc::Rc;

/// Reference-counted wrapper for state shared between an owner and its borrowers.
pub(crate) struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Shared<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub(crate) fn with_data<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub(crate) fn with_data_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

/// The effect of a mutation on a level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// The key that stopped being expanded, if any.
    pub closed: Option<Key>,
    /// The key that became expanded, if any.
    pub opened: Option<Key>,
}

impl Transition {
    /// Returns whether the mutation changed nothing.
    pub fn is_empty(&self) -> bool {
        self.closed.is_none() && self.opened.is_none()
    }
}

struct Level {
    keys: FxHashSet<Key>,
    expanded: Option<Key>,
    toggle: ToggleState,
}

impl Level {
    fn expand(
        &mut self,
        key: &Key,
        focus_strategy: Option<FocusStrategy>,
    ) -> Result<Transition, Error> {
        if !self.keys.contains(key) {
            return Err(Error::UnknownKey(key.clone()));
        }

        if self.expanded.as_ref() == Some(key) {
            return Ok(Transition::default());
        }

        let closed = self.expanded.replace(key.clone());
        let _ = self.toggle.close();
        let _ = self.toggle.open(focus_strategy);

        Ok(Transition {
            closed,
            opened: Some(key.clone()),
        })
    }

    fn collapse(&mut self) -> Transition {
        let _ = self.toggle.close();

        Transition {
            closed: self.expanded.take(),
            opened: None,
        }
    }

    fn toggle(
        &mut self,
        key: &Key,
        focus_strategy: Option<FocusStrategy>,
    ) -> Result<Transition, Error> {
        if !self.keys.contains(key) {
            return Err(Error::UnknownKey(key.clone()));
        }

        if self.expanded.as_ref() == Some(key) {
            Ok(self.collapse())
        } else {
            self.expand(key, focus_strategy)
        }
    }
}

/// The expansion state of one menu level.
///
/// At most one key is expanded at any time; expanding a key implicitly
/// collapses the previously expanded sibling.
pub struct ExpansionState {
    level: Shared<Level>,
}

impl ExpansionState {
    /// Creates an [`ExpansionState`] for a level holding the given keys.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            level: Shared::new(Level {
                keys: keys.into_iter().collect(),
                expanded: None,
                toggle: ToggleState::new(),
            }),
        }
    }

    /// Returns a read/request handle for triggers and descendants.
    pub fn handle(&self) -> ExpansionHandle {
        ExpansionHandle {
            level: self.level.clone(),
        }
    }

    /// Returns the expanded key, if any.
    pub fn expanded_key(&self) -> Option<Key> {
        self.level.with_data(|level| level.expanded.clone())
    }

    /// Returns whether the given key is expanded.
    pub fn is_expanded(&self, key: &Key) -> bool {
        self.level
            .with_data(|level| level.expanded.as_ref() == Some(key))
    }

    /// Returns the focus strategy requested when the current key was expanded.
    pub fn focus_strategy(&self) -> Option<FocusStrategy> {
        self.level.with_data(|level| level.toggle.focus_strategy())
    }

    /// Collapses `key` if it is expanded, expands it otherwise.
    ///
    /// Unknown keys are ignored.
    pub fn toggle(&mut self, key: &Key) -> Transition {
        self.try_toggle(key).unwrap_or_else(|error| {
            log::debug!("Ignoring toggle: {error}");
            Transition::default()
        })
    }

    /// Like [`toggle`](Self::toggle), but reports unknown keys.
    pub fn try_toggle(&mut self, key: &Key) -> Result<Transition, Error> {
        self.level.with_data_mut(|level| level.toggle(key, None))
    }

    /// Expands `key`, keeping it expanded if it already is.
    ///
    /// Unknown keys are ignored.
    pub fn expand(&mut self, key: &Key, focus_strategy: Option<FocusStrategy>) -> Transition {
        expand(&self.level, key, focus_strategy)
    }

    /// Collapses whatever is expanded. Idempotent.
    pub fn close(&mut self) -> Transition {
        self.level.with_data_mut(Level::collapse)
    }

    /// Replaces the keys of the level, collapsing the expanded key if it is gone.
    pub fn set_keys(&mut self, keys: impl IntoIterator<Item = Key>) -> Transition {
        self.level.with_data_mut(|level| {
            level.keys = keys.into_iter().collect();

            let is_stale = level
                .expanded
                .as_ref()
                .is_some_and(|key| !level.keys.contains(key));

            if is_stale {
                level.collapse()
            } else {
                Transition::default()
            }
        })
    }
}

/// A borrower's view of an [`ExpansionState`].
///
/// It can read the level and send requests, nothing else.
#[derive(Clone)]
pub struct ExpansionHandle {
    level: Shared<Level>,
}

impl ExpansionHandle {
    /// Returns the expanded key, if any.
    pub fn expanded_key(&self) -> Option<Key> {
        self.level.with_data(|level| level.expanded.clone())
    }

    /// Returns whether the given key is expanded.
    pub fn is_expanded(&self, key: &Key) -> bool {
        self.level
            .with_data(|level| level.expanded.as_ref() == Some(key))
    }

    /// Returns the focus strategy requested when the current key was expanded.
    pub fn focus_strategy(&self) -> Option<FocusStrategy> {
        self.level.with_data(|level| level.toggle.focus_strategy())
    }

    /// Requests `key` to be expanded. A no-op if it already is.
    pub fn request_open(&self, key: &Key, focus_strategy: Option<FocusStrategy>) -> Transition {
        expand(&self.level, key, focus_strategy)
    }

    /// Requests `key` to be collapsed.
    ///
    /// Only honored while `key` is the expanded one, so a late close can never
    /// undo a newer sibling opening.
    pub fn request_close(&self, key: &Key) -> Transition {
        self.level.with_data_mut(|level| {
            if level.expanded.as_ref() == Some(key) {
                level.collapse()
            } else {
                log::trace!("Ignoring stale close request for `{key}`");
                Transition::default()
            }
        })
    }
}

fn expand(level: &Shared<Level>, key: &Key, focus_strategy: Option<FocusStrategy>) -> Transition {
    level
        .with_data_mut(|level| level.expand(key, focus_strategy))
        .unwrap_or_else(|error| {
            log::debug!("Ignoring expansion: {error}");
            Transition::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> ExpansionState {
        ExpansionState::new(["a", "b", "c"].map(Key::from))
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = level();

        let transition = state.toggle(&"a".into());
        assert_eq!(transition.opened, Some("a".into()));
        assert_eq!(transition.closed, None);
        assert!(state.is_expanded(&"a".into()));

        let transition = state.toggle(&"a".into());
        assert_eq!(transition.closed, Some("a".into()));
        assert_eq!(state.expanded_key(), None);
    }

    #[test]
    fn expanding_a_sibling_closes_the_previous_one_once() {
        let mut state = level();

        let _ = state.toggle(&"a".into());
        let transition = state.toggle(&"b".into());

        assert_eq!(
            transition,
            Transition {
                closed: Some("a".into()),
                opened: Some("b".into()),
            }
        );
        assert!(!state.is_expanded(&"a".into()));
        assert!(state.is_expanded(&"b".into()));
    }

    #[test]
    fn at_most_one_key_is_ever_expanded() {
        let mut state = level();
        let keys = ["a", "b", "c"].map(Key::from);
        let script = ["a", "b", "b", "c", "a", "x", "c", "c"];

        for (step, key) in script.iter().enumerate() {
            if step % 3 == 2 {
                let _ = state.close();
            } else {
                let _ = state.toggle(&Key::from(*key));
            }

            let expanded = keys.iter().filter(|key| state.is_expanded(key)).count();
            assert!(expanded <= 1, "step {step} left {expanded} keys expanded");
        }
    }

    #[test]
    fn unknown_keys_are_rejected_without_side_effects() {
        let mut state = level();
        let _ = state.toggle(&"a".into());

        assert_eq!(
            state.try_toggle(&"nope".into()),
            Err(Error::UnknownKey("nope".into()))
        );
        assert!(state.toggle(&"nope".into()).is_empty());
        assert!(state.is_expanded(&"a".into()));
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = level();
        let _ = state.toggle(&"c".into());

        assert_eq!(state.close().closed, Some("c".into()));
        assert!(state.close().is_empty());
    }

    #[test]
    fn stale_close_requests_are_ignored() {
        let mut state = level();
        let handle = state.handle();

        let _ = handle.request_open(&"a".into(), None);
        let _ = handle.request_open(&"b".into(), Some(FocusStrategy::First));

        assert!(handle.request_close(&"a".into()).is_empty());
        assert!(state.is_expanded(&"b".into()));
        assert_eq!(state.focus_strategy(), Some(FocusStrategy::First));

        assert_eq!(handle.request_close(&"b".into()).closed, Some("b".into()));
        assert_eq!(state.close(), Transition::default());
    }

    #[test]
    fn request_open_is_a_no_op_when_already_open() {
        let state = level();
        let handle = state.handle();

        assert!(!handle.request_open(&"a".into(), None).is_empty());
        assert!(handle.request_open(&"a".into(), None).is_empty());
        assert!(handle.is_expanded(&"a".into()));
    }

    #[test]
    fn removed_keys_collapse() {
        let mut state = level();
        let _ = state.expand(&"b".into(), None);

        assert!(state.set_keys(["a", "b"].map(Key::from)).is_empty());
        assert_eq!(
            state.set_keys(["a"].map(Key::from)).closed,
            Some("b".into())
        );
        assert_eq!(state.expanded_key(), None);
    }
}
