use crate::Key;

/// An error raised by a fallible inner operation.
///
/// Interaction-level operations never return these; they log them and carry
/// on as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The same key was declared twice in one collection.
    #[error("duplicate key `{0}` in collection")]
    DuplicateKey(Key),

    /// The key is not part of the menu level it was addressed to.
    #[error("key `{0}` is not part of this menu level")]
    UnknownKey(Key),

    /// A native control reported a value that matches no option.
    #[error("native value `{0}` does not match any option")]
    UnresolvedValue(String),

    /// A settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(String),

    /// A settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(String),
}
