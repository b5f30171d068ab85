//! Hierarchical menus with nested submenus.
//!
//! A [`Menu`] mounts one [`MenuLevel`] per open level. Each level owns an
//! [`ExpansionState`] deciding which of its items has its submenu open, and a
//! [`SubmenuTrigger`] per item with children that mounts and unmounts that
//! submenu to match.
//!
//! # Example
//!
//! ```
//! use icy_menu_widget::core::collection::{Item, Tree};
//! use icy_menu_widget::core::focus::FocusTracker;
//! use icy_menu_widget::core::{FocusStrategy, Key, Shell};
//! use icy_menu_widget::menu::{Interaction, Menu};
//!
//! let tree = Tree::new(vec![
//!     Item::new("file", "File").with_children(vec![
//!         Item::new("new", "New"),
//!         Item::new("recent", "Open Recent").with_children(vec![Item::new("a", "a.txt")]),
//!     ]),
//!     Item::new("quit", "Quit"),
//! ])?;
//!
//! let mut menu = Menu::new(tree).on_action(|key: Key| key);
//! let mut focus = FocusTracker::new();
//! let mut messages = Vec::new();
//! let mut shell = Shell::new(&mut messages);
//!
//! menu.open(Some(FocusStrategy::First), &mut focus, &mut shell);
//! let _ = menu.open_submenu(&"file".into(), None, &mut focus, &mut shell);
//! let _ = menu.open_submenu(&"recent".into(), None, &mut focus, &mut shell);
//!
//! let _ = menu.dismiss(Interaction::Escape, &mut focus, &mut shell);
//! assert_eq!(menu.expanded_path(), vec![Key::from("file")]);
//! # Ok::<(), icy_menu_widget::core::Error>(())
//! ```
pub mod dismiss;
pub mod expansion;
pub mod level;
pub mod toggle;
pub mod tree;
pub mod trigger;

pub use dismiss::{Dismissal, HoverDebounce, Interaction};
pub use expansion::{ExpansionHandle, ExpansionState, Transition};
pub use level::{MenuItem, MenuLevel};
pub use toggle::ToggleState;
pub use tree::{ItemState, Menu};
pub use trigger::{Overlay, Presentation, SubmenuTrigger};

use crate::core::Key;

/// Something that happened to a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The root level was mounted.
    TreeOpened,
    /// The submenu of `key` was mounted.
    Opened {
        /// The item owning the submenu.
        key: Key,
        /// The depth of the level holding the item.
        depth: usize,
    },
    /// Focus was returned to the item owning a closing submenu.
    FocusReturned {
        /// The item focus was returned to.
        key: Key,
    },
    /// The submenu of `key` was unmounted.
    Closed {
        /// The item owning the submenu.
        key: Key,
        /// The depth of the level holding the item.
        depth: usize,
    },
    /// A leaf item was activated.
    Activated(Key),
    /// The root level was unmounted.
    TreeClosed,
}
