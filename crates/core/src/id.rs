use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The identity of a rendered element, such as a menu item or a menu container.
///
/// The host maps each [`Id`] to whatever it actually renders; the menu logic
/// only compares them to decide where focus lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// Creates a new unique element [`Id`].
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Returns the raw value of the [`Id`].
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
