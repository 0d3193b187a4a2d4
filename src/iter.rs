//! Borrowing iterators over a [`Tree`][crate::linked::Tree].

use crate::linked::Node;

/// A lazy pre-order walk of a tree: each node is yielded before its left subtree, and the left
/// subtree before the right one.
///
/// The iterator borrows the tree, so the tree cannot be mutated while it is alive.
///
/// # Examples
///
/// ```
/// use linked_bst::linked::Tree;
///
/// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
///
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&2, &1, &3]);
/// ```
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining = self.remaining.saturating_sub(1);

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}
