//! The widgets of [icy_menu]: hierarchical menus and native selection mirrors.
//!
//! [icy_menu]: https://github.com/iced-rs/iced
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_menu_core as core;

pub mod focus;
pub mod hidden_select;
pub mod menu;

pub use hidden_select::{HiddenSelect, MirrorMode, NativeChange};
pub use menu::Menu;
