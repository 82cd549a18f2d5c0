use core::mem;

use super::handle::Handle;

/// One key/value pair plus the structural metadata the balancing engine maintains.
///
/// Children are owned exclusively: a handle appears in at most one link of the tree.
/// There is no parent link; callers carry the path on the call stack.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    // Leaf height is 0. A tree addressable by `Handle` never gets close to `u8::MAX`.
    height: u8,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub(crate) const fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub(crate) const fn set_height(&mut self, height: u8) {
        self.height = height;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    #[inline]
    pub(crate) const fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Returns the only child of a node with fewer than two children.
    ///
    /// Returns `None` for a leaf. Must not be called on a node with two children.
    pub(crate) fn sole_child(&self) -> Option<Handle> {
        debug_assert!(self.left.is_none() || self.right.is_none(), "node has two children");
        self.left.or(self.right)
    }

    /// Swaps in a new entry, returning the old one. Links and height are untouched.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (mem::replace(&mut self.key, key), mem::replace(&mut self.value, value))
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
