//! A linked BST. Every node owns its two children through a `Box` and nothing points back up the
//! tree; operations that need to know where a node hangs carry that around themselves while they
//! walk down from the root.
//!
//! The tree never rebalances on its own. Inserting already sorted items yields a degenerate,
//! list-shaped tree with linear-time lookups; [`Tree::rebalance`] rebuilds it to minimum height
//! on demand.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//! for x in 1..=5 {
//!     tree.insert(x);
//! }
//!
//! // Sorted input makes a stick.
//! assert_eq!(tree.height(), 4);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // Removing something that isn't there is an error and changes nothing.
//! assert!(tree.remove(&42).is_err());
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert_eq!(tree.in_order(), vec![&1, &2, &4, &5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::{debug, trace};

use crate::config::Duplicates;
use crate::error::{Result, TreeError};
use crate::iter::Iter;

type Link<T> = Option<Box<Node<T>>>;

/// An ordered collection of items stored in a plain (not self-balancing) Binary Search Tree.
///
/// Items less than a node live in its left subtree; items greater than or equal to it live in
/// its right subtree.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
    duplicates: Duplicates,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Which child link of a node a descent continues through.
#[derive(Copy, Clone, Debug)]
enum Side {
    Left,
    Right,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` that stores duplicate items.
    pub fn new() -> Self {
        Self::with_duplicates(Duplicates::default())
    }

    /// Generates a new, empty `Tree` with the given policy for items that are already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::config::Duplicates;
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::with_duplicates(Duplicates::Reject);
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_duplicates(duplicates: Duplicates) -> Self {
        Self {
            root: None,
            len: 0,
            duplicates,
        }
    }

    /// The duplicate policy this tree was built with.
    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// How many items the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every item. The duplicate policy is kept.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} items", self.len);
        dismantle(self.root.take());
        self.len = 0;
    }

    /// Lazily walks the tree in pre-order: a node, then its left subtree, then its right
    /// subtree.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Collects every item in sorted (in-order) order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cursor = self.root.as_deref();

        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    items.push(&node.value);
                    cursor = node.right.as_deref();
                }
                None => return items,
            }
        }
    }

    /// The number of edges on the longest path from the root down to a leaf. A single node has
    /// height 0 and an empty tree has height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Whether the tree is as short as any tree with this many items can be, that is, whether
    /// its height is `ceil(log2(len + 1)) - 1`.
    pub fn is_balanced(&self) -> bool {
        self.height() == min_height(self.len)
    }

    /// Rebuilds the tree to minimum height. The items, and their in-order sequence, are
    /// unchanged.
    ///
    /// The middle item of the sorted sequence becomes the root and each half is rebuilt the same
    /// way beneath it, so the result always satisfies [`Tree::is_balanced`].
    pub fn rebalance(&mut self) {
        let items = drain_in_order(self.root.take(), self.len);
        let len = items.len();
        self.root = build_balanced(len, &mut items.into_iter());
        self.len = len;

        debug!("rebalanced {} items to height {}", len, self.height());
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Adds `item` as a new leaf. Returns `false` only when the tree rejects duplicates and an
    /// equal item is already present.
    ///
    /// Items equal to an existing one are placed in its right subtree.
    pub fn insert(&mut self, item: T) -> bool {
        let reject = self.duplicates == Duplicates::Reject;
        let mut link = &mut self.root;

        while let Some(node) = link {
            link = match item.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal if reject => return false,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(item));
        self.len += 1;
        true
    }

    /// Potentially finds the stored item equal to `item`. With duplicates, this is the first
    /// equal item met on the way down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec!["b", "a", "c"].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&"a"), Some(&"a"));
    /// assert_eq!(tree.find(&"z"), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            cursor = match item.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Whether an item equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Removes the first item equal to `item` met on the way down from the root and returns it.
    ///
    /// A node with two children takes over the largest item of its left subtree, and that
    /// item's node is spliced out instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if no equal item is stored. The tree is left untouched.
    pub fn remove(&mut self, item: &T) -> Result<T> {
        let slot = self.slot_mut(item).ok_or(TreeError::KeyNotFound)?;
        let mut node = slot.take().ok_or(TreeError::KeyNotFound)?;

        let removed = match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                trace!("removing a node with two children");
                let (predecessor, rest) = left.split_max();
                node.left = rest;
                node.right = Some(right);
                let removed = mem::replace(&mut node.value, predecessor);
                *slot = Some(node);
                removed
            }
            (left, right) => {
                trace!("splicing out a node with at most one child");
                *slot = left.or(right);
                node.value
            }
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Overwrites the first item equal to `item` with `new_item` in place and returns the old
    /// one, or `None` if there is no such item.
    ///
    /// The node is not moved. Keeping `new_item` in order relative to the rest of the tree is the
    /// caller's job; if it isn't, later lookups may miss items.
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let node = self.slot_mut(item)?.as_mut()?;
        Some(mem::replace(&mut node.value, new_item))
    }

    /// The smallest stored item strictly greater than `item`, which need not be stored itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&30), Some(&40));
    /// assert_eq!(tree.successor(&80), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            if *item < node.value {
                candidate = Some(&node.value);
                cursor = node.left.as_deref();
            } else {
                cursor = node.right.as_deref();
            }
        }

        candidate.filter(|value| *value > item)
    }

    /// The largest stored item strictly less than `item`, which need not be stored itself.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut candidate = None;
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            if *item > node.value {
                candidate = Some(&node.value);
                cursor = node.right.as_deref();
            } else {
                cursor = node.left.as_deref();
            }
        }

        candidate.filter(|value| *value < item)
    }

    /// Slices the in-order sequence from the first occurrence of `low` (inclusive) up to the
    /// first occurrence of `high` (exclusive). `low == high` gives an empty slice.
    ///
    /// # Errors
    ///
    /// - [`TreeError::BoundNotFound`] if either bound is not stored in the tree.
    /// - [`TreeError::InvertedRange`] if `low` comes after `high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::error::TreeError;
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&30, &70), Ok(vec![&30, &40, &50, &60]));
    /// assert_eq!(tree.range_find(&35, &70), Err(TreeError::BoundNotFound));
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Result<Vec<&T>> {
        let mut items = self.in_order();
        let start = items
            .iter()
            .position(|item| *item == low)
            .ok_or(TreeError::BoundNotFound)?;
        let end = items
            .iter()
            .position(|item| *item == high)
            .ok_or(TreeError::BoundNotFound)?;
        if start > end {
            return Err(TreeError::InvertedRange);
        }

        items.truncate(end);
        items.drain(..start);
        Ok(items)
    }

    /// Returns the link owning the first node equal to `item` met on the way down, if any.
    fn slot_mut(&mut self, item: &T) -> Option<&mut Link<T>> {
        let mut link = &mut self.root;

        loop {
            let side = match link.as_deref() {
                None => return None,
                Some(node) => match item.cmp(&node.value) {
                    Ordering::Less => Side::Left,
                    Ordering::Equal => return Some(link),
                    Ordering::Greater => Side::Right,
                },
            };
            link = match link {
                Some(node) => node.child_mut(side),
                None => return None,
            };
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Removes the largest value from the subtree rooted at this node. Returns that value and
    /// whatever is left of the subtree.
    ///
    /// The largest node has no right child, so its left child takes its place.
    fn split_max(mut self: Box<Self>) -> (T, Link<T>) {
        let mut link = &mut self.right;
        while link.as_ref().map_or(false, |node| node.right.is_some()) {
            link = match link {
                Some(node) => &mut node.right,
                None => break,
            };
        }

        match link.take() {
            Some(max) => {
                let Node { value, left, .. } = *max;
                *link = left;
                (value, Some(self))
            }
            None => {
                let Node { value, left, .. } = *self;
                (value, left)
            }
        }
    }
}

/// `ceil(log2(len + 1)) - 1`, the least height a tree with `len` nodes can have. That ceiling is
/// exactly the number of bits needed to write `len`.
fn min_height(len: usize) -> isize {
    (usize::BITS - len.leading_zeros()) as isize - 1
}

/// Moves every value out of the subtree in sorted order.
fn drain_in_order<T>(root: Link<T>, len: usize) -> Vec<T> {
    let mut items = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut cursor = root;

    loop {
        while let Some(mut node) = cursor {
            cursor = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(node) => {
                let Node { value, right, .. } = *node;
                items.push(value);
                cursor = right;
            }
            None => return items,
        }
    }
}

/// Builds a minimum-height subtree out of the next `len` sorted values of `items`. The middle
/// value becomes the root, so recursion only goes `log2(len)` deep.
fn build_balanced<T, I>(len: usize, items: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let left_len = len / 2;
    let left = build_balanced(left_len, items);
    let value = items.next()?;
    let right = build_balanced(len - left_len - 1, items);

    Some(Box::new(Node { value, left, right }))
}

/// Drops a subtree one node at a time so a degenerate tree can't overflow the stack.
fn dismantle<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("items", &self.in_order())
            .finish()
    }
}

/// Draws the tree rotated 90 degrees counter-clockwise: the root sits at the left margin, right
/// subtrees above it, left subtrees below, with one `"| "` per level of depth.
///
/// ```
/// use linked_bst::linked::Tree;
///
/// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
///
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut cursor = self.root.as_deref().map(|n| (n, 0));

        loop {
            while let Some((node, level)) = cursor {
                stack.push((node, level));
                cursor = node.right.as_deref().map(|n| (n, level + 1));
            }
            match stack.pop() {
                Some((node, level)) => {
                    writeln!(f, "{}{}", "| ".repeat(level), node.value)?;
                    cursor = node.left.as_deref().map(|n| (n, level + 1));
                }
                None => return Ok(()),
            }
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
