//! Mirror a selection into a native select element.
//!
//! A [`HiddenSelect`] renders the selection of a custom select widget as a
//! hidden native `<select>`, so browser autofill and form submission keep
//! working. Rendering is one way; native changes come back through
//! [`HiddenSelect::on_native_change`] as messages, never by mutating the state.
//!
//! Large collections without a form `name` only get an empty placeholder,
//! since rendering thousands of native options buys nothing there.
use crate::core::native::Element;
use crate::core::selection::SelectionMode;
use crate::core::{Collection, Error, Key, Node, Selection, SelectionState, Settings, Shell};

use rustc_hash::FxHashSet;

/// How much of the selection a [`HiddenSelect`] mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    /// Every option is rendered natively.
    Full,
    /// An empty placeholder, ignored by accessibility tree expansion.
    AccessibilityOnly,
}

impl MirrorMode {
    /// Computes the [`MirrorMode`] for a collection.
    ///
    /// A `name` always forces [`MirrorMode::Full`], whatever the size.
    pub fn compute(item_count: usize, has_name: bool, threshold: usize) -> Self {
        if item_count > threshold && !has_name {
            MirrorMode::AccessibilityOnly
        } else {
            MirrorMode::Full
        }
    }
}

/// A change of the native control the widget did not cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeChange {
    /// The value of a single select.
    Value(String),
    /// The selected values of a multiple select.
    Values(Vec<String>),
}

/// A hidden native mirror of a selection.
pub struct HiddenSelect<'a, C: ?Sized, Message> {
    collection: &'a C,
    state: &'a SelectionState,
    name: Option<String>,
    label: Option<String>,
    autocomplete: Option<String>,
    is_disabled: bool,
    threshold: usize,
    on_selection_change: Option<Box<dyn Fn(Selection) -> Message + 'a>>,
}

impl<'a, C, Message> HiddenSelect<'a, C, Message>
where
    C: Collection + ?Sized,
{
    /// Creates a [`HiddenSelect`] mirroring `state` over `collection`.
    pub fn new(collection: &'a C, state: &'a SelectionState) -> Self {
        Self {
            collection,
            state,
            name: None,
            label: None,
            autocomplete: None,
            is_disabled: false,
            threshold: Settings::MIRROR_THRESHOLD,
            on_selection_change: None,
        }
    }

    /// Sets the form name. Named mirrors always render every option.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the label of the native control.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the autocomplete hint of the native control.
    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    /// Disables the native control.
    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Takes the mirror threshold from the given [`Settings`].
    pub fn settings(mut self, settings: &Settings) -> Self {
        self.threshold = settings.mirror_threshold;
        self
    }

    /// Sets the message produced when a native change selects something else.
    pub fn on_selection_change(mut self, on_change: impl Fn(Selection) -> Message + 'a) -> Self {
        self.on_selection_change = Some(Box::new(on_change));
        self
    }

    /// Returns the options of the collection, in display order.
    pub fn options(&self) -> Vec<&'a Node> {
        let collection = self.collection;
        let mut options = Vec::new();
        let mut stack: Vec<&Key> = collection.children(None).iter().rev().collect();

        while let Some(key) = stack.pop() {
            let Some(node) = collection.node(key) else {
                continue;
            };

            if node.has_child_items() {
                stack.extend(node.children.iter().rev());
            } else {
                options.push(node);
            }
        }

        options
    }

    /// Returns the current [`MirrorMode`].
    pub fn mode(&self) -> MirrorMode {
        MirrorMode::compute(self.options().len(), self.name.is_some(), self.threshold)
    }

    /// Renders the native mirror.
    pub fn view(&self) -> Element {
        let options = self.options();
        let mode = MirrorMode::compute(options.len(), self.name.is_some(), self.threshold);
        let is_multiple = self.state.mode() == SelectionMode::Multiple;

        let select = Element::new("select")
            .a11y_ignore()
            .attribute("tabindex", "-1")
            .attribute("size", options.len().to_string())
            .attribute_maybe("name", self.name.clone())
            .attribute_maybe("autocomplete", self.autocomplete.clone())
            .flag("disabled", self.is_disabled)
            .flag("multiple", is_multiple);

        let select = match mode {
            MirrorMode::AccessibilityOnly => select,
            MirrorMode::Full => {
                let value = self
                    .state
                    .selected_key()
                    .map(Key::as_str)
                    .unwrap_or_default();

                let select = if is_multiple {
                    select
                } else {
                    select.attribute("value", value).push(Element::new("option"))
                };

                select.extend(options.into_iter().map(|node| {
                    Element::new("option")
                        .attribute("value", node.key.as_str())
                        .flag("selected", self.state.is_selected(&node.key))
                        .flag("disabled", self.collection.is_disabled(&node.key))
                        .text(node.text.clone())
                }))
            }
        };

        let label = match &self.label {
            Some(label) => Element::new("label").text(label.clone()),
            None => Element::new("label"),
        };

        Element::new("div")
            .attribute("aria-hidden", "true")
            .a11y_ignore()
            .push(label.push(select))
    }

    /// Translates a native value back into the [`Key`] of an option.
    pub fn resolve(&self, value: &str) -> Result<Key, Error> {
        let key = Key::new(value);

        match self.collection.node(&key) {
            Some(node) if !node.has_child_items() && !self.collection.is_disabled(&key) => Ok(key),
            _ => Err(Error::UnresolvedValue(value.to_owned())),
        }
    }

    /// Forwards a native change into an `on_selection_change` message.
    ///
    /// Publishes at most once, with the translated keys. Changes carrying a
    /// value that is not a known option, or selecting what is already
    /// selected, are ignored. Returns whether a message was published.
    pub fn on_native_change(&self, change: NativeChange, shell: &mut Shell<'_, Message>) -> bool {
        if self.is_disabled {
            return false;
        }

        let selection = match self.translate(change) {
            Ok(Some(selection)) => selection,
            Ok(None) => return false,
            Err(error) => {
                log::debug!("Ignoring native change: {error}");
                return false;
            }
        };

        let is_unchanged = match &selection {
            Selection::Single(key) => self.state.is_selected(key),
            Selection::Multiple(keys) => keys == self.state.selected_keys(),
        };

        if is_unchanged {
            return false;
        }

        match &self.on_selection_change {
            Some(on_selection_change) => {
                shell.publish(on_selection_change(selection));
                true
            }
            None => false,
        }
    }

    fn translate(&self, change: NativeChange) -> Result<Option<Selection>, Error> {
        let values = match change {
            NativeChange::Value(value) => vec![value],
            NativeChange::Values(values) => values,
        };

        let keys = values
            .iter()
            .map(|value| self.resolve(value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match self.state.mode() {
            SelectionMode::None => None,
            SelectionMode::Single => match <[Key; 1]>::try_from(keys) {
                Ok([key]) => Some(Selection::Single(key)),
                Err(_) => None,
            },
            SelectionMode::Multiple => Some(Selection::Multiple(
                keys.into_iter().collect::<FxHashSet<_>>(),
            )),
        })
    }
}
