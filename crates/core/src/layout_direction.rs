//! Reading direction used to resolve logical placements.
//!
//! Submenus open toward the trailing edge of their trigger. Whether that edge
//! is on the left or on the right depends on the [`LayoutDirection`]:
//!
//! ```
//! use icy_menu_core::{LayoutDirection, set_layout_direction, layout_direction};
//!
//! set_layout_direction(LayoutDirection::Rtl);
//! assert!(layout_direction().is_rtl());
//! # set_layout_direction(LayoutDirection::Ltr);
//! ```
use std::sync::atomic::{AtomicBool, Ordering};

static IS_RTL: AtomicBool = AtomicBool::new(false);

/// Returns the process-wide [`LayoutDirection`].
///
/// Placements resolve against it unless given a direction of their own.
pub fn layout_direction() -> LayoutDirection {
    if IS_RTL.load(Ordering::Relaxed) {
        LayoutDirection::Rtl
    } else {
        LayoutDirection::Ltr
    }
}

/// Changes the process-wide [`LayoutDirection`], usually from the system locale.
pub fn set_layout_direction(direction: LayoutDirection) {
    IS_RTL.store(direction.is_rtl(), Ordering::Relaxed);
}

/// Which way text and menus flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl LayoutDirection {
    /// Returns whether the flow runs right-to-left.
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }

    /// Orders a leading/trailing pair as it appears on screen, left side first.
    pub fn physical<T>(self, leading: T, trailing: T) -> (T, T) {
        if self.is_rtl() {
            (trailing, leading)
        } else {
            (leading, trailing)
        }
    }
}
