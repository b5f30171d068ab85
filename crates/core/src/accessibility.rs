//! Attributes shared with assistive-technology tooling.

/// The marker attribute telling assistive-technology tooling to skip an
/// element's contents when expanding the accessibility tree.
///
/// The literal name is part of the public contract and never changes.
pub const IGNORE_ATTRIBUTE: &str = "data-rsp-a11y-ignore";

/// The value written to [`IGNORE_ATTRIBUTE`].
pub const IGNORE_VALUE: &str = "true";

/// Returns whether an attribute value of [`IGNORE_ATTRIBUTE`] is truthy.
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "false"
}
