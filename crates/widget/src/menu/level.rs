//! One mounted level of a menu tree.
use super::Event;
use super::expansion::{ExpansionHandle, ExpansionState};
use super::trigger::{Presentation, SubmenuTrigger};
use crate::core::{Collection, Focus, FocusStrategy, Id, Key, Settings};
use crate::focus::FocusScope;

use rustc_hash::FxHashMap;

/// What a level needs to know about the menu it belongs to.
pub(crate) struct Context<'a> {
    pub(crate) collection: &'a dyn Collection,
    pub(crate) settings: &'a Settings,
    pub(crate) presentation: Presentation,
}

/// An item as laid out in a [`MenuLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// The key of the item.
    pub key: Key,
    /// The element of the item.
    pub id: Id,
    /// Whether the item opens a submenu.
    pub has_child_items: bool,
    /// Whether the item is disabled.
    pub is_disabled: bool,
}

impl MenuItem {
    /// Returns whether the item can be the target of a [`SubmenuTrigger`].
    pub fn is_submenu_trigger(&self) -> bool {
        self.has_child_items && !self.is_disabled
    }
}

/// Lays out the children of `parent` as menu items, allocating their elements.
pub fn items(collection: &dyn Collection, parent: Option<&Key>) -> Vec<MenuItem> {
    collection
        .children(parent)
        .iter()
        .filter_map(|key| collection.node(key))
        .map(|node| MenuItem {
            key: node.key.clone(),
            id: Id::unique(),
            has_child_items: node.has_child_items(),
            is_disabled: collection.is_disabled(&node.key),
        })
        .collect()
}

/// A mounted menu level: its items, its [`ExpansionState`] and a
/// [`SubmenuTrigger`] for every item with children.
pub struct MenuLevel {
    parent: Option<Key>,
    depth: usize,
    scope: FocusScope,
    items: Vec<MenuItem>,
    expansion: ExpansionState,
    triggers: FxHashMap<Key, SubmenuTrigger>,
}

impl MenuLevel {
    pub(crate) fn mount(parent: Option<&Key>, depth: usize, cx: &Context<'_>) -> Self {
        let items = items(cx.collection, parent);
        let scope = FocusScope::new(Id::unique(), items.iter().map(|item| item.id).collect());

        let expansion = ExpansionState::new(
            items
                .iter()
                .filter(|item| item.is_submenu_trigger())
                .map(|item| item.key.clone()),
        );

        let placement = cx.settings.placement();
        let triggers = items
            .iter()
            .filter(|item| item.is_submenu_trigger())
            .map(|item| {
                let trigger = SubmenuTrigger::new(
                    item.key.clone(),
                    item.id,
                    depth,
                    expansion.handle(),
                    scope.clone(),
                    placement,
                );

                (item.key.clone(), trigger)
            })
            .collect();

        log::trace!(
            "Mounted menu level {depth} under {parent:?} with {} items",
            items.len()
        );

        Self {
            parent: parent.cloned(),
            depth,
            scope,
            items,
            expansion,
            triggers,
        }
    }

    /// Returns the key of the item this level is the submenu of.
    ///
    /// `None` for the root level.
    pub fn parent(&self) -> Option<&Key> {
        self.parent.as_ref()
    }

    /// Returns the depth of the level. The root level is `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the container element of the level.
    pub fn container(&self) -> Id {
        self.scope.container
    }

    /// Returns the [`FocusScope`] of the level.
    pub fn scope(&self) -> &FocusScope {
        &self.scope
    }

    /// Returns the items of the level, in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the item with the given key.
    pub fn item(&self, key: &Key) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    /// Returns the expanded key of the level, if any.
    pub fn expanded_key(&self) -> Option<Key> {
        self.expansion.expanded_key()
    }

    /// Returns a read/request handle on the expansion state of the level.
    pub fn expansion(&self) -> ExpansionHandle {
        self.expansion.handle()
    }

    /// Returns the [`SubmenuTrigger`] of the given item.
    pub fn trigger(&self, key: &Key) -> Option<&SubmenuTrigger> {
        self.triggers.get(key)
    }

    /// Returns the element initial focus lands on for the given strategy.
    pub fn initial_focus(&self, strategy: FocusStrategy) -> Option<Id> {
        let mut enabled = self.items.iter().filter(|item| !item.is_disabled);

        match strategy {
            FocusStrategy::First => enabled.next(),
            FocusStrategy::Last => enabled.next_back(),
        }
        .map(|item| item.id)
    }

    /// Returns the mounted submenu of the expanded item, if any.
    pub fn open_submenu(&self) -> Option<&MenuLevel> {
        let key = self.expansion.expanded_key()?;

        self.triggers.get(&key)?.submenu()
    }

    /// Returns the keys expanded from this level downward.
    pub fn expanded_path(&self) -> Vec<Key> {
        let mut path = Vec::new();
        let mut level = Some(self);

        while let Some(current) = level {
            match current.expansion.expanded_key() {
                Some(key) => path.push(key),
                None => break,
            }

            level = current.open_submenu();
        }

        path
    }

    /// Returns the level whose items are the children of `parent`, if mounted.
    pub fn find(&self, parent: Option<&Key>) -> Option<&MenuLevel> {
        if self.parent.as_ref() == parent {
            return Some(self);
        }

        self.triggers
            .values()
            .filter_map(SubmenuTrigger::submenu)
            .find_map(|level| level.find(parent))
    }

    /// Returns the deepest level that has an item expanded.
    pub fn deepest_expanded(&self) -> Option<&MenuLevel> {
        let _ = self.expansion.expanded_key()?;

        self.open_submenu()
            .and_then(MenuLevel::deepest_expanded)
            .or(Some(self))
    }

    pub(crate) fn find_mut(&mut self, parent: Option<&Key>) -> Option<&mut MenuLevel> {
        if self.parent.as_ref() == parent {
            return Some(self);
        }

        self.triggers
            .values_mut()
            .filter_map(SubmenuTrigger::submenu_mut)
            .find_map(|level| level.find_mut(parent))
    }

    /// Brings every trigger in line with the expansion state, closing
    /// branches before opening new ones.
    pub(crate) fn sync(
        &mut self,
        cx: &Context<'_>,
        focus: &mut dyn Focus,
        events: &mut Vec<Event>,
    ) {
        for item in &self.items {
            let Some(trigger) = self.triggers.get_mut(&item.key) else {
                continue;
            };

            if trigger.is_mounted() && !trigger.is_open() {
                trigger.sync(cx, focus, events);
            }
        }

        for item in &self.items {
            if let Some(trigger) = self.triggers.get_mut(&item.key) {
                trigger.sync(cx, focus, events);
            }
        }
    }

    /// Collapses the level and every branch below it.
    pub(crate) fn close(
        &mut self,
        cx: &Context<'_>,
        focus: &mut dyn Focus,
        events: &mut Vec<Event>,
    ) {
        let _ = self.expansion.close();
        self.sync(cx, focus, events);
    }

    /// Brings the items of the level in line with the collection.
    ///
    /// Branches whose item disappeared or became disabled are closed.
    pub(crate) fn refresh(
        &mut self,
        cx: &Context<'_>,
        focus: &mut dyn Focus,
        events: &mut Vec<Event>,
    ) {
        let fresh = items(cx.collection, self.parent.as_ref());

        let _ = self.expansion.set_keys(
            fresh
                .iter()
                .filter(|item| item.is_submenu_trigger())
                .map(|item| item.key.clone()),
        );
        self.sync(cx, focus, events);

        let ids: FxHashMap<Key, Id> = self
            .items
            .iter()
            .map(|item| (item.key.clone(), item.id))
            .collect();

        self.items = fresh
            .into_iter()
            .map(|item| MenuItem {
                id: ids.get(&item.key).copied().unwrap_or(item.id),
                ..item
            })
            .collect();
        self.scope.items = self.items.iter().map(|item| item.id).collect();

        self.triggers.retain(|key, _| {
            self.items
                .iter()
                .any(|item| &item.key == key && item.is_submenu_trigger())
        });

        let placement = cx.settings.placement();
        for item in self.items.iter().filter(|item| item.is_submenu_trigger()) {
            let _ = self.triggers.entry(item.key.clone()).or_insert_with(|| {
                SubmenuTrigger::new(
                    item.key.clone(),
                    item.id,
                    self.depth,
                    self.expansion.handle(),
                    self.scope.clone(),
                    placement,
                )
            });
        }

        for trigger in self.triggers.values_mut() {
            trigger.set_scope(self.scope.clone());

            if let Some(submenu) = trigger.submenu_mut() {
                submenu.refresh(cx, focus, events);
            }
        }
    }
}
