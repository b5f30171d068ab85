use smol_str::SmolStr;

use std::borrow::Borrow;
use std::fmt;

/// The identity of a node in a [`Collection`](crate::Collection).
///
/// Keys are opaque and unique within their tree. Their string form is also
/// the value a native form control reports back, so numeric keys created with
/// `Key::from(5)` round-trip through the native value `"5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(SmolStr);

impl Key {
    /// Creates a new [`Key`] from the given string.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(SmolStr::new(key))
    }

    /// Returns the string form of the [`Key`].
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(SmolStr::from(key))
    }
}

impl From<u64> for Key {
    fn from(key: u64) -> Self {
        Self::new(key.to_string())
    }
}

impl From<usize> for Key {
    fn from(key: usize) -> Self {
        Self::new(key.to_string())
    }
}

impl From<i32> for Key {
    fn from(key: i32) -> Self {
        Self::new(key.to_string())
    }
}
