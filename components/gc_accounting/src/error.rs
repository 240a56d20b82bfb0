//! Errors raised when decoding raw collection tags.

use thiserror::Error;

/// A raw integer that does not name a collection tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagError {
    /// The value is not a valid [`GcType`](crate::GcType) discriminant
    #[error("unknown gc type tag: {0}")]
    UnknownGcType(u8),
    /// The value is not a valid [`GcReason`](crate::GcReason) discriminant
    #[error("unknown gc reason tag: {0}")]
    UnknownGcReason(u8),
}
