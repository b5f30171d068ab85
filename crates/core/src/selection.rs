//! Track which items of a collection are selected.
use crate::Key;

use rustc_hash::FxHashSet;

/// How many items can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Items cannot be selected.
    #[default]
    None,
    /// At most one item can be selected.
    Single,
    /// Any amount of items can be selected.
    Multiple,
}

/// The payload of a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The newly selected key of a single selection.
    Single(Key),
    /// The full set of selected keys of a multiple selection.
    Multiple(FxHashSet<Key>),
}

impl Selection {
    /// Returns whether the given key is part of the [`Selection`].
    pub fn contains(&self, key: &Key) -> bool {
        match self {
            Selection::Single(selected) => selected == key,
            Selection::Multiple(selected) => selected.contains(key),
        }
    }
}

/// The selection state of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: SelectionMode,
    selected: FxHashSet<Key>,
}

impl SelectionState {
    /// Creates an empty [`SelectionState`] with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: FxHashSet::default(),
        }
    }

    /// Sets the initially selected keys.
    ///
    /// A single selection keeps only the first key; a disabled selection keeps none.
    pub fn with_selected(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.set_selected_keys(keys);
        self
    }

    /// Returns the [`SelectionMode`].
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns whether the given key is selected.
    pub fn is_selected(&self, key: &Key) -> bool {
        self.selected.contains(key)
    }

    /// Returns the selected keys.
    pub fn selected_keys(&self) -> &FxHashSet<Key> {
        &self.selected
    }

    /// Returns the selected key of a single selection.
    pub fn selected_key(&self) -> Option<&Key> {
        match self.mode {
            SelectionMode::Single => self.selected.iter().next(),
            SelectionMode::None | SelectionMode::Multiple => None,
        }
    }

    /// Computes the [`Selection`] that selecting `key` would produce, if any.
    ///
    /// A single selection replaces the selected key; a multiple selection
    /// toggles it. Returns `None` when nothing would change.
    pub fn select(&self, key: &Key) -> Option<Selection> {
        match self.mode {
            SelectionMode::None => None,
            SelectionMode::Single => {
                (!self.is_selected(key)).then(|| Selection::Single(key.clone()))
            }
            SelectionMode::Multiple => {
                let mut selected = self.selected.clone();

                if !selected.remove(key) {
                    let _ = selected.insert(key.clone());
                }

                Some(Selection::Multiple(selected))
            }
        }
    }

    /// Applies a [`Selection`] produced for this state.
    pub fn apply(&mut self, selection: Selection) {
        match selection {
            Selection::Single(key) => self.set_selected_keys([key]),
            Selection::Multiple(keys) => self.set_selected_keys(keys),
        }
    }

    /// Replaces the selected keys, honoring the [`SelectionMode`].
    pub fn set_selected_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.selected.clear();

        match self.mode {
            SelectionMode::None => {}
            SelectionMode::Single => self.selected.extend(keys.into_iter().take(1)),
            SelectionMode::Multiple => self.selected.extend(keys),
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_selection_replaces() {
        let mut state = SelectionState::new(SelectionMode::Single).with_selected([Key::from("1")]);

        let change = state.select(&"2".into()).expect("selection changes");
        assert_eq!(change, Selection::Single("2".into()));

        state.apply(change);
        assert_eq!(state.selected_key(), Some(&Key::from("2")));
        assert!(!state.is_selected(&"1".into()));
        assert_eq!(state.select(&"2".into()), None);
    }

    #[test]
    fn multiple_selection_toggles() {
        let mut state = SelectionState::new(SelectionMode::Multiple);

        let change = state.select(&"a".into()).expect("selection changes");
        state.apply(change);
        let change = state.select(&"b".into()).expect("selection changes");
        state.apply(change);

        assert!(state.is_selected(&"a".into()));
        assert!(state.is_selected(&"b".into()));

        let change = state.select(&"a".into()).expect("selection changes");
        assert!(!change.contains(&"a".into()));
        assert!(change.contains(&"b".into()));
    }

    #[test]
    fn disabled_selection_ignores_everything() {
        let state = SelectionState::default().with_selected([Key::from("a")]);

        assert_eq!(state.mode(), SelectionMode::None);
        assert!(state.selected_keys().is_empty());
        assert_eq!(state.select(&"a".into()), None);
    }
}
