//! A minimal model of native elements, as rendered into a host document.
//!
//! Widgets that mirror their state into native controls describe the result
//! with an [`Element`] tree; the host turns it into real nodes.
use crate::accessibility;

use smol_str::SmolStr;

/// A native element with attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: SmolStr,
    attributes: Vec<(SmolStr, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty [`Element`] with the given tag.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: SmolStr::new(tag),
            ..Self::default()
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attribute(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        let name = name.as_ref();
        let value = value.into();

        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((SmolStr::new(name), value)),
        }

        self
    }

    /// Sets a boolean attribute when `enabled` is true.
    pub fn flag(self, name: impl AsRef<str>, enabled: bool) -> Self {
        if enabled {
            self.attribute(name, "")
        } else {
            self
        }
    }

    /// Sets an attribute only when a value is present.
    pub fn attribute_maybe(self, name: impl AsRef<str>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attribute(name, value),
            None => self,
        }
    }

    /// Marks the element as ignored by accessibility tree expansion.
    pub fn a11y_ignore(self) -> Self {
        self.attribute(accessibility::IGNORE_ATTRIBUTE, accessibility::IGNORE_VALUE)
    }

    /// Sets the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child.
    pub fn push(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends many children.
    pub fn extend(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the value of the given attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns whether the given attribute is present.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the text content.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns whether the element carries a truthy accessibility-exclusion marker.
    pub fn is_a11y_ignored(&self) -> bool {
        self.get(accessibility::IGNORE_ATTRIBUTE)
            .is_some_and(accessibility::is_truthy)
    }

    /// Iterates over the element and its descendants, depth first.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> + '_ {
        let mut stack = vec![self];

        std::iter::from_fn(move || {
            let element = stack.pop()?;
            stack.extend(element.children.iter().rev());

            Some(element)
        })
    }

    /// Finds every descendant with the given tag, including the element itself.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |element| element.tag() == tag)
    }
}
