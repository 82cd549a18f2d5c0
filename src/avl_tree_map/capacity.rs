use super::AVLTreeMap;
use crate::raw::{MAX_LEN, RawAVLTreeMap};

impl<K, V> AVLTreeMap<K, V> {
    /// The most entries a map can hold.
    ///
    /// Once a map is this full, [`insert`](AVLTreeMap::insert) refuses new keys and
    /// returns `false` until something is removed.
    pub const MAX_LEN: usize = MAX_LEN;

    /// Creates an empty map with capacity for at least `capacity` elements.
    ///
    /// At most [`MAX_LEN`](AVLTreeMap::MAX_LEN) slots are reserved, whatever is requested.
    /// That limit is still billions of entries, so an oversized request can exhaust memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map: AVLTreeMap<i32, i32> = AVLTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AVLTreeMap {
            raw: RawAVLTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AVLTreeMap;
    ///
    /// let map: AVLTreeMap<i32, i32> = AVLTreeMap::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn reserved_capacity_survives_churn() {
        let mut map = AVLTreeMap::with_capacity(16);
        let reserved = map.capacity();
        assert!(reserved >= 16);

        for round in 0..4 {
            for key in 0..16 {
                assert!(map.insert(key, round));
            }
            for key in 0..16 {
                assert!(map.remove(&key));
            }
        }
        assert_eq!(map.capacity(), reserved);
    }

    #[test]
    fn reservation_stops_at_max_len() {
        let map: AVLTreeMap<u8, ()> = AVLTreeMap::with_capacity(usize::MAX);
        assert!(map.capacity() >= AVLTreeMap::<u8, ()>::MAX_LEN);
    }
}
