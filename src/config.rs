//! Knobs chosen when a [`Tree`][crate::linked::Tree] is built.

/// How a tree treats an inserted item that compares equal to one it already holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Duplicates {
    /// Equal items are stored again, to the right of the existing one. Lookups resolve to
    /// whichever equal node the descent from the root meets first.
    Allow,
    /// Equal items are turned away and the tree is left as it was.
    Reject,
}

impl Default for Duplicates {
    fn default() -> Self {
        Self::Allow
    }
}
