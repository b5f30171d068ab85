//! icy_menu provides the interaction behavior of hierarchical menus with nested
//! submenus, and of hidden native selects mirroring a custom select widget.
//!
//! Rendering, gestures and overlay positioning stay with the host. The library
//! receives normalized intents (open, close, activate, hover) and answers with
//! state, focus moves and messages published into a [`Shell`].
//!
//! # Menus
//! A [`Menu`] owns one expansion state per open level. Opening a submenu closes
//! its open sibling first; closing a branch returns focus to the item that
//! opened it whenever focus was about to be lost.
//!
//! ```
//! use icy_menu::core::collection::{Item, Tree};
//! use icy_menu::core::focus::FocusTracker;
//! use icy_menu::{FocusStrategy, Key, Menu, Shell};
//!
//! # fn main() -> Result<(), icy_menu::Error> {
//! let tree = Tree::new(vec![
//!     Item::new("view", "View").with_children(vec![Item::new("zoom", "Zoom")]),
//!     Item::new("help", "Help"),
//! ])?;
//!
//! let mut menu = Menu::new(tree).on_action(|key: Key| key);
//! let mut focus = FocusTracker::new();
//! let mut messages = Vec::new();
//! let mut shell = Shell::new(&mut messages);
//!
//! menu.open(Some(FocusStrategy::First), &mut focus, &mut shell);
//! let _ = menu.activate(&"help".into(), &mut focus, &mut shell);
//!
//! assert!(!menu.is_open());
//! assert_eq!(messages, vec![Key::from("help")]);
//! # Ok(())
//! # }
//! ```
//!
//! # Selection mirrors
//! A [`HiddenSelect`] renders a selection as a native element tree and turns
//! native changes, like browser autofill, back into selection messages.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;
pub use icy_menu_widget as widget;

pub use icy_menu_core::{
    Collection, Error, Focus, FocusStrategy, Id, Key, Selection, SelectionMode, SelectionState,
    Settings, Shell,
};
pub use icy_menu_widget::menu::{self, Interaction};
pub use icy_menu_widget::{HiddenSelect, Menu, MirrorMode, NativeChange, focus, hidden_select};
