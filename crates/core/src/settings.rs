//! Tune the behavior of menus and selection mirrors.
//!
//! With the `serde` feature, [`Settings`] can be loaded from RON:
//!
//! ```ignore
//! use icy_menu_core::Settings;
//!
//! let settings = Settings::from_ron("(hover_close_delay_ms: 350, close_on_select: false)")?;
//! ```
use crate::placement::{Align, Direction, Placement};
use crate::time::Duration;

#[cfg(feature = "serde")]
use crate::Error;

use std::path::Path;

bitflags::bitflags! {
    /// The interactions allowed to dismiss an open branch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CloseOn: u8 {
        /// Pressing Escape closes the current branch.
        const ESCAPE = 1;
        /// Pointer interaction outside the menu tree closes every branch.
        const POINTER_OUTSIDE = 1 << 1;
        /// Hovering away from a branch closes it after a delay.
        const HOVER_OUT = 1 << 2;
    }
}

impl Default for CloseOn {
    fn default() -> Self {
        Self::all()
    }
}

/// The tuning parameters shared by menus and selection mirrors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// How long a hovered-out branch stays open, in milliseconds.
    pub hover_close_delay_ms: u64,
    /// The item count above which an unnamed mirror stops rendering options.
    pub mirror_threshold: usize,
    /// Whether activating a leaf item closes the whole menu tree.
    pub close_on_select: bool,
    /// The side submenus open toward.
    pub direction: Direction,
    /// How submenus line up with their trigger.
    pub align: Align,
    /// Whether the positioning collaborator may flip a submenu that does not fit.
    pub should_flip: bool,
    /// The main-axis offset between a trigger and its submenu.
    pub offset: f32,
    /// The interactions allowed to dismiss an open branch.
    pub close_on: CloseOn,
}

impl Settings {
    /// The default item count above which an unnamed mirror stops rendering options.
    pub const MIRROR_THRESHOLD: usize = 300;

    /// Returns the hover dismissal delay.
    pub fn hover_close_delay(&self) -> Duration {
        Duration::from_millis(self.hover_close_delay_ms)
    }

    /// Returns the submenu [`Placement`] these settings request.
    pub fn placement(&self) -> Placement {
        Placement::compute(self.direction, self.align)
    }

    /// Parses [`Settings`] from a RON string; missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self, Error> {
        ron::from_str(content).map_err(|error| Error::Parse(error.to_string()))
    }

    /// Loads [`Settings`] from a RON file.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|error| Error::Io(format!("{}: {error}", path.display())))?;

        let settings = Self::from_ron(&content)?;
        log::debug!("Loaded menu settings from {}", path.display());

        Ok(settings)
    }

    /// Loads [`Settings`] from the given file if it exists, falling back to defaults.
    #[cfg(feature = "serde")]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|error| {
            log::warn!("Ignoring menu settings: {error}");
            Self::default()
        })
    }

    /// Loads [`Settings`] from the given file if it exists, falling back to defaults.
    #[cfg(not(feature = "serde"))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        log::debug!(
            "Loading {} requires the `serde` feature; using defaults",
            path.as_ref().display()
        );

        Self::default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hover_close_delay_ms: 200,
            mirror_threshold: Self::MIRROR_THRESHOLD,
            close_on_select: true,
            direction: Direction::End,
            align: Align::Start,
            should_flip: true,
            offset: -10.0,
            close_on: CloseOn::default(),
        }
    }
}
