use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

use crate::AVLTreeError;
use crate::raw::{Path, RawAVLTreeMap};

mod capacity;
mod render;

/// An ordered map based on an [AVL tree].
///
/// Given a key type with a [total order], the map stores its entries in key order. Every
/// node keeps the heights of its two subtrees within one of each other, so the tree is
/// never taller than about 1.44·log<sub>2</sub>(n) and lookups, insertions, removals and
/// range queries all take O(log n) comparisons in the worst case.
///
/// Unlike `BTreeMap`, [`insert`](AVLTreeMap::insert) never overwrites: inserting a key that
/// is already present returns `false` and leaves the stored value alone. Use
/// [`get_mut`](AVLTreeMap::get_mut), [`try_index_mut`](AVLTreeMap::try_index_mut) or
/// `map[&key] = value` to change an existing value.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `AVLTreeMap` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use avl_tree::AVLTreeMap;
///
/// let mut grades = AVLTreeMap::new();
///
/// assert!(grades.insert("Kim", 92));
/// assert!(grades.insert("Ana", 85));
/// assert!(grades.insert("Lee", 77));
///
/// // Keys are unique and the first value wins.
/// assert!(!grades.insert("Ana", 0));
/// assert_eq!(grades.get("Ana"), Some(&85));
///
/// // Values can be changed in place.
/// grades["Lee"] += 5;
/// assert_eq!(grades["Lee"], 82);
///
/// // Everything comes back in key order.
/// let names: Vec<_> = grades.keys().copied().collect();
/// assert_eq!(names, ["Ana", "Kim", "Lee"]);
///
/// // Inclusive range queries return the values in key order.
/// assert_eq!(grades.find_range("B", "L"), [&92]);
///
/// assert!(grades.remove("Kim"));
/// assert!(!grades.contains_key("Kim"));
/// assert_eq!(grades.len(), 2);
/// ```
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct AVLTreeMap<K, V> {
    raw: RawAVLTreeMap<K, V>,
}

/// An iterator over the entries of an `AVLTreeMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`AVLTreeMap`].
///
/// [`iter`]: AVLTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawAVLTreeMap<K, V>,
    // Nodes whose left subtree has been entered but which have not been yielded yet.
    path: Path,
    remaining: usize,
}

/// An iterator over the keys of an `AVLTreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`AVLTreeMap`].
///
/// [`keys`]: AVLTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `AVLTreeMap`.
///
/// This `struct` is created by the [`values`] method on [`AVLTreeMap`].
///
/// [`values`]: AVLTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the entries of an `AVLTreeMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`AVLTreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> AVLTreeMap<K, V> {
    /// Makes a new, empty `AVLTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> AVLTreeMap<K, V> {
        AVLTreeMap {
            raw: RawAVLTreeMap::new(),
        }
    }

    /// Clears the map, releasing every entry.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut a = AVLTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(String::from("one"), 1);
    /// assert_eq!(map.get_key_value("one"), Some((&String::from("one"), &1)));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns the value for `key`, or [`AVLTreeError::KeyNotFound`] if it is absent.
    ///
    /// The fallible counterpart of `map[&key]`.
    ///
    /// # Errors
    ///
    /// Returns [`AVLTreeError::KeyNotFound`] if the map does not contain `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AVLTreeError, AVLTreeMap};
    ///
    /// let map = AVLTreeMap::from([("a", 1)]);
    /// assert_eq!(map.try_index("a"), Ok(&1));
    /// assert_eq!(map.try_index("z"), Err(AVLTreeError::KeyNotFound));
    /// ```
    pub fn try_index<Q>(&self, key: &Q) -> Result<&V, AVLTreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).ok_or(AVLTreeError::KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, or
    /// [`AVLTreeError::KeyNotFound`] if it is absent.
    ///
    /// The fallible counterpart of `map[&key] = value`.
    ///
    /// # Errors
    ///
    /// Returns [`AVLTreeError::KeyNotFound`] if the map does not contain `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::{AVLTreeError, AVLTreeMap};
    ///
    /// let mut map = AVLTreeMap::from([("D", 3)]);
    /// *map.try_index_mut("D")? = 1337;
    /// assert_eq!(map["D"], 1337);
    /// assert_eq!(map.try_index_mut("X"), Err(AVLTreeError::KeyNotFound));
    /// # Ok::<(), AVLTreeError>(())
    /// ```
    pub fn try_index_mut<Q>(&mut self, key: &Q) -> Result<&mut V, AVLTreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key).ok_or(AVLTreeError::KeyNotFound)
    }

    /// Returns the first key-value pair in the map, the one with the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the last key-value pair in the map, the one with the maximum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Inserts a key-value pair into the map if the key is not already present.
    ///
    /// Returns `true` if the pair was inserted. Returns `false`, dropping `key` and
    /// `value` and leaving the map untouched, if the key is already present or the map
    /// already holds [`MAX_LEN`](AVLTreeMap::MAX_LEN) entries.
    ///
    /// # Complexity
    ///
    /// O(log n), with at most two rotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.is_empty());
    ///
    /// assert!(!map.insert(37, "c"));
    /// assert_eq!(map[&37], "a");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning `true` if it was present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "a");
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).is_some()
    }

    /// Removes a key from the map, returning the stored key and value if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Returns the values of every key in the inclusive range `low..=high`, in
    /// ascending key order.
    ///
    /// Subtrees that cannot hold a key in the range are never visited. An inverted range
    /// (`low > high`) is empty.
    ///
    /// # Complexity
    ///
    /// O(log n + m) for m matching entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map: AVLTreeMap<char, u32> = ('A'..='J').zip(0..).collect();
    /// assert_eq!(map.find_range(&'E', &'H'), [&4, &5, &6, &7]);
    /// assert!(map.find_range(&'H', &'E').is_empty());
    /// ```
    #[must_use]
    pub fn find_range<Q>(&self, low: &Q, high: &Q) -> Vec<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.find_range(low, high)
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map = AVLTreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.raw)
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map = AVLTreeMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map = AVLTreeMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut a = AVLTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut a = AVLTreeMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the height of the tree: the number of links on the longest path from
    /// the root to a leaf.
    ///
    /// A single entry has height 0, and so does an empty map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let mut map = AVLTreeMap::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// // Ascending insertions are rotated into a perfect tree.
    /// for key in 0..7 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}

impl<K: Clone, V: Clone> Clone for AVLTreeMap<K, V> {
    /// Returns a deep copy. The two maps share no nodes afterwards.
    fn clone(&self) -> Self {
        AVLTreeMap {
            raw: self.raw.clone(),
        }
    }
}

impl<K: Hash, V: Hash> Hash for AVLTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AVLTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for AVLTreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AVLTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for AVLTreeMap<K, V> {
    fn default() -> Self {
        AVLTreeMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AVLTreeMap<K, V> {
    /// Builds a map from the pairs in order. A repeated key keeps its first value.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = AVLTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for AVLTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for AVLTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AVLTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for AVLTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map = AVLTreeMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for AVLTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. See
    /// [`try_index`](AVLTreeMap::try_index) for the non-panicking form.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, Q, V> IndexMut<&Q> for AVLTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    /// Returns a mutable reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. See
    /// [`try_index_mut`](AVLTreeMap::try_index_mut) for the non-panicking form.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        self.get_mut(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for AVLTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(tree: &'a RawAVLTreeMap<K, V>) -> Self {
        let mut path = Path::new();
        tree.descend_left(&mut path, tree.root());
        Iter {
            tree,
            path,
            remaining: tree.len(),
        }
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.path.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        tree.descend_left(&mut self.path, node.right());
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize {
        self.remaining
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            path: self.path.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
