//! Errors returned by fallible [`Tree`][crate::linked::Tree] operations.

use thiserror::Error;

/// Convenience alias for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Everything that can go wrong when mutating or slicing a tree. Plain lookups never fail;
/// they return `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// `remove` was asked for an item the tree does not hold.
    #[error("Key not found in tree")]
    KeyNotFound,

    /// A `range_find` bound does not appear in the tree's in-order sequence.
    #[error("Range bound not found in tree")]
    BoundNotFound,

    /// The low bound of a `range_find` sorts after the high bound.
    #[error("Range low bound sorts after high bound")]
    InvertedRange,
}
