//! Error types for abstraction mode selection.

use thiserror::Error;

/// Errors converting user input into an [`AbstractionMode`](crate::AbstractionMode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseModeError {
    /// Name does not match any mode.
    #[error("unknown abstraction mode '{0}' (expected smooth, ellipse, cylinder or sphere)")]
    UnknownName(String),

    /// Control-panel index outside `0..=3`.
    #[error("abstraction mode index {0} out of range (expected 0-3)")]
    IndexOutOfRange(u32),
}
