//! The core library of [icy_menu].
//!
//! This library holds the basic types shared by the menu and selection-mirror
//! widgets: keys and element identities, the read-only [`Collection`] contract,
//! the selection model, placement descriptors, the [`Focus`] primitive and the
//! [`Shell`] widgets publish into.
//!
//! [icy_menu]: https://github.com/iced-rs/iced
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod accessibility;
pub mod collection;
pub mod focus;
pub mod native;
pub mod placement;
pub mod selection;
pub mod settings;
pub mod shell;
pub mod time;

mod error;
mod id;
mod key;
mod layout_direction;

pub use collection::{Collection, Node};
pub use error::Error;
pub use focus::{Focus, FocusStrategy};
pub use id::Id;
pub use key::Key;
pub use layout_direction::{LayoutDirection, layout_direction, set_layout_direction};
pub use placement::Placement;
pub use selection::{Selection, SelectionMode, SelectionState};
pub use settings::Settings;
pub use shell::Shell;
