//! The root of a menu tree.
use super::Event;
use super::dismiss::{self, Dismissal, HoverDebounce, Interaction};
use super::level::{Context, MenuItem, MenuLevel};
use super::toggle::ToggleState;
use super::trigger::{Presentation, SubmenuTrigger};
use crate::core::selection::SelectionMode;
use crate::core::time::Instant;
use crate::core::{
    Collection, Focus, FocusStrategy, Id, Key, Selection, SelectionState, Settings, Shell,
};

/// The state of an item as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    /// The element of the item.
    pub id: Id,
    /// Whether the item opens a submenu.
    pub has_child_items: bool,
    /// Whether the item is disabled.
    pub is_disabled: bool,
    /// Whether the item is selected.
    pub is_selected: bool,
    /// Whether the submenu of the item is open.
    pub is_expanded: bool,
}

/// A hierarchical menu over a [`Collection`].
///
/// Every operation takes the host's [`Focus`] and a [`Shell`] to publish
/// messages and redraw requests into. What happened to the tree is also
/// journaled as [`Event`]s, see [`take_events`](Self::take_events).
pub struct Menu<'a, C, Message> {
    collection: C,
    settings: Settings,
    presentation: Presentation,
    trigger: Option<Id>,
    state: ToggleState,
    root: Option<MenuLevel>,
    hover: HoverDebounce,
    selection: SelectionState,
    events: Vec<Event>,
    on_action: Option<Box<dyn Fn(Key) -> Message + 'a>>,
    on_selection_change: Option<Box<dyn Fn(Selection) -> Message + 'a>>,
    on_close: Option<Message>,
}

impl<'a, C, Message> Menu<'a, C, Message>
where
    C: Collection,
    Message: Clone,
{
    /// Creates a closed [`Menu`] over the given collection.
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            settings: Settings::default(),
            presentation: Presentation::default(),
            trigger: None,
            state: ToggleState::new(),
            root: None,
            hover: HoverDebounce::new(),
            selection: SelectionState::new(SelectionMode::None),
            events: Vec::new(),
            on_action: None,
            on_selection_change: None,
            on_close: None,
        }
    }

    /// Sets the [`Settings`] of the [`Menu`].
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Presents submenus as trays instead of popovers.
    pub fn mobile(mut self, is_mobile: bool) -> Self {
        self.presentation = Presentation::detect(is_mobile);
        self
    }

    /// Sets the element that opens the [`Menu`]. Focus returns to it on close.
    pub fn trigger(mut self, trigger: Id) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Sets the [`SelectionState`] of the [`Menu`].
    pub fn selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the message produced when a leaf item is activated.
    pub fn on_action(mut self, on_action: impl Fn(Key) -> Message + 'a) -> Self {
        self.on_action = Some(Box::new(on_action));
        self
    }

    /// Sets the message produced when the selection changes.
    pub fn on_selection_change(mut self, on_change: impl Fn(Selection) -> Message + 'a) -> Self {
        self.on_selection_change = Some(Box::new(on_change));
        self
    }

    /// Sets the message produced when the whole [`Menu`] closes.
    pub fn on_close(mut self, on_close: Message) -> Self {
        self.on_close = Some(on_close);
        self
    }

    /// Returns the collection of the [`Menu`].
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Returns the current [`SelectionState`].
    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns whether the [`Menu`] is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns the root level, while open.
    pub fn root(&self) -> Option<&MenuLevel> {
        self.root.as_ref()
    }

    /// Returns the mounted level holding the children of `parent`.
    pub fn level(&self, parent: Option<&Key>) -> Option<&MenuLevel> {
        self.root.as_ref()?.find(parent)
    }

    /// Returns the keys expanded from the root downward.
    pub fn expanded_path(&self) -> Vec<Key> {
        self.root
            .as_ref()
            .map(MenuLevel::expanded_path)
            .unwrap_or_default()
    }

    /// Returns whether the submenu of `key` is open.
    pub fn is_expanded(&self, key: &Key) -> bool {
        self.submenu_trigger(key)
            .is_some_and(SubmenuTrigger::is_open)
    }

    /// Returns the [`SubmenuTrigger`] of `key`, if its level is mounted.
    pub fn submenu_trigger(&self, key: &Key) -> Option<&SubmenuTrigger> {
        let parent = self.collection.node(key)?.parent.as_ref();

        self.level(parent)?.trigger(key)
    }

    /// Returns the [`ItemState`] of `key`, if its level is mounted.
    pub fn item_state(&self, key: &Key) -> Option<ItemState> {
        let item = self.mounted_item(key)?;

        Some(ItemState {
            id: item.id,
            has_child_items: item.has_child_items,
            is_disabled: item.is_disabled,
            is_selected: !item.has_child_items && self.selection.is_selected(key),
            is_expanded: self.is_expanded(key),
        })
    }

    /// Returns when the next pending hover close is due.
    pub fn next_hover_deadline(&self) -> Option<Instant> {
        self.hover.next_deadline()
    }

    /// Drains the [`Event`]s journaled since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Opens the [`Menu`], focusing an item according to the strategy.
    pub fn open(
        &mut self,
        focus_strategy: Option<FocusStrategy>,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) {
        if !self.state.open(focus_strategy) {
            return;
        }

        let cx = Context {
            collection: &self.collection,
            settings: &self.settings,
            presentation: self.presentation,
        };
        let root = MenuLevel::mount(None, 0, &cx);

        if let Some(id) = focus_strategy.and_then(|strategy| root.initial_focus(strategy)) {
            focus.focus(id);
        }

        self.root = Some(root);
        self.events.push(Event::TreeOpened);

        log::debug!("Opened menu");
        shell.request_redraw();
    }

    /// Closes the [`Menu`] and every open submenu. Idempotent.
    pub fn close(&mut self, focus: &mut dyn Focus, shell: &mut Shell<'_, Message>) {
        if !self.state.close() {
            return;
        }

        self.hover.clear();

        let cx = Context {
            collection: &self.collection,
            settings: &self.settings,
            presentation: self.presentation,
        };

        if let Some(mut root) = self.root.take() {
            root.close(&cx, focus, &mut self.events);

            if let Some(trigger) = self.trigger {
                let is_inside = focus
                    .focused()
                    .is_none_or(|focused| root.scope().contains(focused));

                if is_inside {
                    focus.focus(trigger);
                }
            }
        }

        self.events.push(Event::TreeClosed);

        if let Some(on_close) = &self.on_close {
            shell.publish(on_close.clone());
        }

        log::debug!("Closed menu");
        shell.request_redraw();
    }

    /// Opens the [`Menu`] if it is closed, closes it otherwise.
    pub fn toggle(
        &mut self,
        focus_strategy: Option<FocusStrategy>,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) {
        if self.state.is_open() {
            self.close(focus, shell);
        } else {
            self.open(focus_strategy, focus, shell);
        }
    }

    /// Opens the submenu of `key`, closing any open sibling first.
    ///
    /// Returns whether anything changed.
    pub fn open_submenu(
        &mut self,
        key: &Key,
        focus_strategy: Option<FocusStrategy>,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let Some(trigger) = self.submenu_trigger(key) else {
            log::debug!("No mounted submenu trigger for `{key}`");
            return false;
        };

        let transition = trigger.open(focus_strategy);
        self.settle(transition.is_empty(), focus, shell)
    }

    /// Closes the submenu of `key`, unless a sibling has taken its place.
    ///
    /// Returns whether anything changed.
    pub fn request_close(
        &mut self,
        key: &Key,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let Some(trigger) = self.submenu_trigger(key) else {
            return false;
        };

        let transition = trigger.request_close();
        self.settle(transition.is_empty(), focus, shell)
    }

    /// Opens the submenu of `key` if it is closed, closes it otherwise.
    pub fn toggle_submenu(
        &mut self,
        key: &Key,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        if self.is_expanded(key) {
            self.request_close(key, focus, shell)
        } else {
            self.open_submenu(key, None, focus, shell)
        }
    }

    /// Activates `key` by keyboard or press.
    ///
    /// Items with children open their submenu. Leaves produce the action and
    /// selection messages, then close the tree if configured to.
    /// Disabled items are ignored.
    pub fn activate(
        &mut self,
        key: &Key,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> Dismissal {
        let Some(item) = self.mounted_item(key) else {
            log::debug!("Ignoring activation of unmounted item `{key}`");
            return Dismissal::Keep;
        };

        if item.is_disabled {
            return Dismissal::Keep;
        }

        let dismissal = dismiss::classify(
            &Interaction::Select(key.clone()),
            &self.settings,
            item.has_child_items,
        );

        if dismissal == Dismissal::OpenBranch {
            let _ = self.open_submenu(key, Some(FocusStrategy::First), focus, shell);
        } else {
            self.events.push(Event::Activated(key.clone()));

            if let Some(selection) = self.selection.select(key) {
                self.selection.apply(selection.clone());

                if let Some(on_selection_change) = &self.on_selection_change {
                    shell.publish(on_selection_change(selection));
                }
            }

            if let Some(on_action) = &self.on_action {
                shell.publish(on_action(key.clone()));
            }

            if dismissal == Dismissal::CloseTree {
                self.close(focus, shell);
            }
        }

        shell.capture_event();
        dismissal
    }

    /// Applies a dismissing [`Interaction`] to the tree.
    ///
    /// Returns what was done.
    pub fn dismiss(
        &mut self,
        interaction: Interaction,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> Dismissal {
        let dismissal = match &interaction {
            Interaction::Select(key) => return self.activate(key, focus, shell),
            Interaction::HoverOut(key) => return self.hover_leave(key, Instant::now(), shell),
            Interaction::Escape | Interaction::PointerOutside | Interaction::Back => {
                dismiss::classify(&interaction, &self.settings, false)
            }
        };

        let outcome = match dismissal {
            Dismissal::CloseBranch => {
                let is_back = interaction == Interaction::Back;

                if self.close_branch(is_back, focus, shell) {
                    Dismissal::CloseBranch
                } else if interaction == Interaction::Escape && self.state.is_open() {
                    self.close(focus, shell);
                    Dismissal::CloseTree
                } else {
                    Dismissal::Keep
                }
            }
            Dismissal::CloseAll => {
                if self.close_all(focus, shell) {
                    Dismissal::CloseAll
                } else {
                    Dismissal::Keep
                }
            }
            _ => Dismissal::Keep,
        };

        if outcome != Dismissal::Keep {
            shell.capture_event();
        }

        outcome
    }

    /// Notifies the [`Menu`] that the pointer entered `key`.
    ///
    /// Cancels pending closes along the path to `key` and opens its submenu.
    pub fn hover_enter(
        &mut self,
        key: &Key,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        if self.mounted_item(key).is_none() {
            return false;
        }

        let _ = self.hover.cancel(key);
        for ancestor in self.collection.ancestors(key) {
            let _ = self.hover.cancel(&ancestor);
        }

        self.submenu_trigger(key).is_some() && self.open_submenu(key, None, focus, shell)
    }

    /// Notifies the [`Menu`] that the pointer left `key` and its submenu.
    ///
    /// The submenu closes after the configured delay, once [`tick`](Self::tick)
    /// reaches it.
    pub fn hover_leave(
        &mut self,
        key: &Key,
        now: Instant,
        shell: &mut Shell<'_, Message>,
    ) -> Dismissal {
        if !self.is_expanded(key) {
            return Dismissal::Keep;
        }

        let dismissal =
            dismiss::classify(&Interaction::HoverOut(key.clone()), &self.settings, true);

        if let Dismissal::CloseBranchAfter(delay) = dismissal {
            let deadline = self.hover.schedule(key.clone(), now, delay);

            log::trace!("Closing `{key}` at {deadline:?} unless hovered again");
            shell.request_redraw_at(deadline);
        }

        dismissal
    }

    /// Closes the hovered-out submenus whose delay has elapsed.
    pub fn tick(&mut self, now: Instant, focus: &mut dyn Focus, shell: &mut Shell<'_, Message>) {
        for key in self.hover.due(now) {
            let _ = self.request_close(&key, focus, shell);
        }

        if let Some(deadline) = self.hover.next_deadline() {
            shell.request_redraw_at(deadline);
        }
    }

    /// Replaces the collection, closing branches whose items went away.
    pub fn set_collection(
        &mut self,
        collection: C,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) {
        self.collection = collection;

        let cx = Context {
            collection: &self.collection,
            settings: &self.settings,
            presentation: self.presentation,
        };

        let before = self.events.len();

        if let Some(root) = &mut self.root {
            root.refresh(&cx, focus, &mut self.events);
            shell.request_redraw();
        }

        self.forget_hover(before);
    }

    fn mounted_item(&self, key: &Key) -> Option<&MenuItem> {
        let parent = self.collection.node(key)?.parent.as_ref();

        self.level(parent)?.item(key)
    }

    fn close_branch(
        &mut self,
        move_focus: bool,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        let Some(level) = self.root.as_ref().and_then(MenuLevel::deepest_expanded) else {
            return false;
        };
        let Some(key) = level.expanded_key() else {
            return false;
        };

        if move_focus {
            if let Some(item) = level.item(&key) {
                focus.focus(item.id);
            }
        }

        let transition = level
            .trigger(&key)
            .map(SubmenuTrigger::request_close)
            .unwrap_or_default();

        let _ = self.hover.cancel(&key);
        self.settle(transition.is_empty(), focus, shell)
    }

    fn close_all(&mut self, focus: &mut dyn Focus, shell: &mut Shell<'_, Message>) -> bool {
        let cx = Context {
            collection: &self.collection,
            settings: &self.settings,
            presentation: self.presentation,
        };
        let before = self.events.len();

        if let Some(root) = &mut self.root {
            root.close(&cx, focus, &mut self.events);
        }

        self.hover.clear();

        let is_changed = self.events.len() != before;
        if is_changed {
            shell.request_redraw();
        }

        is_changed
    }

    fn settle(
        &mut self,
        is_unchanged: bool,
        focus: &mut dyn Focus,
        shell: &mut Shell<'_, Message>,
    ) -> bool {
        if is_unchanged {
            return false;
        }

        let cx = Context {
            collection: &self.collection,
            settings: &self.settings,
            presentation: self.presentation,
        };

        let before = self.events.len();

        if let Some(root) = &mut self.root {
            root.sync(&cx, focus, &mut self.events);
        }

        self.forget_hover(before);
        shell.request_redraw();
        true
    }

    /// Drops the pending hover closes of every submenu mounted or unmounted
    /// since the journal held `from` events.
    fn forget_hover(&mut self, from: usize) {
        for event in &self.events[from..] {
            if let Event::Opened { key, .. } | Event::Closed { key, .. } = event {
                let _ = self.hover.cancel(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collection::{Item, Tree};
    use crate::core::focus::FocusTracker;
    use crate::core::shell::RedrawRequest;
    use crate::core::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Action(Key),
        Selected(Selection),
        Closed,
    }

    fn tree() -> Tree {
        Tree::new(vec![
            Item::new("file", "File").with_children(vec![
                Item::new("new", "New"),
                Item::new("recent", "Open Recent")
                    .with_children(vec![Item::new("one", "One"), Item::new("two", "Two")]),
            ]),
            Item::new("edit", "Edit").with_children(vec![Item::new("undo", "Undo")]),
            Item::new("locked", "Locked")
                .disabled()
                .with_children(vec![Item::new("secret", "Secret")]),
            Item::new("quit", "Quit"),
        ])
        .expect("valid tree")
    }

    fn menu<'a>() -> Menu<'a, Tree, Message> {
        Menu::new(tree())
            .on_action(Message::Action)
            .on_close(Message::Closed)
    }

    #[test]
    fn opening_focuses_the_first_item() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);

        menu.open(Some(FocusStrategy::First), &mut focus, &mut shell);

        let root = menu.root().expect("open menu");
        assert_eq!(focus.focused(), Some(root.items()[0].id));
        assert_eq!(shell.redraw_request(), RedrawRequest::NextFrame);
        assert_eq!(menu.take_events(), vec![Event::TreeOpened]);
    }

    #[test]
    fn activating_a_leaf_publishes_and_closes() {
        let mut menu = menu().trigger(Id::unique());
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            menu.open(Some(FocusStrategy::First), &mut focus, &mut shell);
            let _ = menu.open_submenu(&"file".into(), Some(FocusStrategy::First), &mut focus, &mut shell);

            assert_eq!(
                menu.activate(&"new".into(), &mut focus, &mut shell),
                Dismissal::CloseTree
            );
            assert!(shell.is_event_captured());
        }

        assert_eq!(
            messages,
            vec![Message::Action("new".into()), Message::Closed]
        );
        assert!(!menu.is_open());
        assert!(menu.root().is_none());
    }

    #[test]
    fn activating_a_submenu_trigger_opens_it_instead() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);

        menu.open(None, &mut focus, &mut shell);

        assert_eq!(
            menu.activate(&"edit".into(), &mut focus, &mut shell),
            Dismissal::OpenBranch
        );
        assert!(menu.is_open());
        assert!(menu.is_expanded(&"edit".into()));

        let undo = menu.item_state(&"undo".into()).expect("mounted");
        assert_eq!(focus.focused(), Some(undo.id));
    }

    #[test]
    fn disabled_items_never_open_or_activate() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            menu.open(None, &mut focus, &mut shell);

            assert!(!menu.open_submenu(&"locked".into(), None, &mut focus, &mut shell));
            assert!(!menu.hover_enter(&"locked".into(), &mut focus, &mut shell));
            assert_eq!(
                menu.activate(&"locked".into(), &mut focus, &mut shell),
                Dismissal::Keep
            );
        }

        assert!(messages.is_empty());
        assert!(menu.expanded_path().is_empty());
    }

    #[test]
    fn keeping_the_tree_open_on_select() {
        let settings = Settings {
            close_on_select: false,
            ..Settings::default()
        };
        let mut menu = menu()
            .settings(settings)
            .selection(SelectionState::new(SelectionMode::Single))
            .on_selection_change(Message::Selected);
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            menu.open(None, &mut focus, &mut shell);

            assert_eq!(
                menu.activate(&"quit".into(), &mut focus, &mut shell),
                Dismissal::Keep
            );
        }

        assert!(menu.is_open());
        assert_eq!(
            messages,
            vec![
                Message::Selected(Selection::Single("quit".into())),
                Message::Action("quit".into()),
            ]
        );
        assert!(menu.item_state(&"quit".into()).is_some_and(|item| item.is_selected));
    }

    #[test]
    fn escape_without_open_submenus_closes_the_menu() {
        let trigger = Id::unique();
        let mut menu = menu().trigger(trigger);
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();

        {
            let mut shell = Shell::new(&mut messages);
            menu.open(Some(FocusStrategy::Last), &mut focus, &mut shell);

            assert_eq!(
                menu.dismiss(Interaction::Escape, &mut focus, &mut shell),
                Dismissal::CloseTree
            );
        }

        assert_eq!(focus.focused(), Some(trigger));
        assert_eq!(messages, vec![Message::Closed]);
    }

    #[test]
    fn hover_leave_closes_after_the_delay() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        let now = Instant::now();

        menu.open(None, &mut focus, &mut shell);
        assert!(menu.hover_enter(&"file".into(), &mut focus, &mut shell));

        let mut shell = Shell::new(&mut messages);
        let _ = menu.hover_leave(&"file".into(), now, &mut shell);
        assert_eq!(
            shell.redraw_request(),
            RedrawRequest::At(now + Duration::from_millis(200))
        );

        menu.tick(now + Duration::from_millis(100), &mut focus, &mut shell);
        assert!(menu.is_expanded(&"file".into()));

        menu.tick(now + Duration::from_millis(200), &mut focus, &mut shell);
        assert!(!menu.is_expanded(&"file".into()));
        assert_eq!(menu.next_hover_deadline(), None);
    }

    #[test]
    fn hovering_back_cancels_the_close() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        let now = Instant::now();

        menu.open(None, &mut focus, &mut shell);
        let _ = menu.hover_enter(&"file".into(), &mut focus, &mut shell);
        let _ = menu.hover_enter(&"recent".into(), &mut focus, &mut shell);

        let _ = menu.hover_leave(&"file".into(), now, &mut shell);
        let _ = menu.hover_enter(&"one".into(), &mut focus, &mut shell);

        menu.tick(now + Duration::from_secs(1), &mut focus, &mut shell);
        assert_eq!(
            menu.expanded_path(),
            vec![Key::from("file"), Key::from("recent")]
        );
    }

    #[test]
    fn a_reopened_submenu_ignores_the_previous_hover_close() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        let now = Instant::now();
        let file = Key::from("file");

        menu.open(None, &mut focus, &mut shell);
        let _ = menu.hover_enter(&file, &mut focus, &mut shell);
        let _ = menu.hover_leave(&file, now, &mut shell);

        let _ = menu.open_submenu(&"edit".into(), None, &mut focus, &mut shell);
        assert_eq!(menu.next_hover_deadline(), None);

        let _ = menu.activate(&file, &mut focus, &mut shell);
        menu.tick(now + Duration::from_millis(250), &mut focus, &mut shell);

        assert!(menu.is_expanded(&file));
        assert_eq!(menu.next_hover_deadline(), None);
    }

    #[test]
    fn closing_a_branch_drops_the_hover_closes_beneath_it() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        let now = Instant::now();
        let recent = Key::from("recent");

        menu.open(None, &mut focus, &mut shell);
        let _ = menu.hover_enter(&"file".into(), &mut focus, &mut shell);
        let _ = menu.hover_enter(&recent, &mut focus, &mut shell);
        let _ = menu.hover_leave(&recent, now, &mut shell);

        let _ = menu.open_submenu(&"edit".into(), None, &mut focus, &mut shell);
        let _ = menu.open_submenu(&"file".into(), None, &mut focus, &mut shell);
        let _ = menu.open_submenu(&recent, None, &mut focus, &mut shell);
        menu.tick(now + Duration::from_secs(1), &mut focus, &mut shell);

        assert_eq!(menu.expanded_path(), vec![Key::from("file"), recent]);
    }

    #[test]
    fn removed_items_collapse_their_branch() {
        let mut menu = menu();
        let mut focus = FocusTracker::new();
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);

        menu.open(None, &mut focus, &mut shell);
        let _ = menu.open_submenu(&"edit".into(), None, &mut focus, &mut shell);
        let _ = menu.take_events();

        let pruned = Tree::new(vec![Item::new("quit", "Quit")]).expect("valid tree");
        menu.set_collection(pruned, &mut focus, &mut shell);

        assert!(menu.expanded_path().is_empty());
        assert_eq!(menu.root().map(|root| root.items().len()), Some(1));
        assert!(menu.take_events().contains(&Event::Closed {
            key: "edit".into(),
            depth: 0
        }));
    }
}
