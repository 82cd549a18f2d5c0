use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// Height of an absent subtree in balance arithmetic.
const ABSENT_HEIGHT: i32 = -1;

/// The most entries a tree can hold; one node per entry, one handle per node.
pub(crate) const MAX_LEN: usize = Handle::MAX;

/// Inline capacity of a traversal path. An AVL tree with `u32::MAX` nodes is at most
/// ~46 levels tall, so walks never spill to the heap.
pub(crate) const MAX_DEPTH: usize = 48;

/// Stack of handles from the root down to the node being visited.
pub(crate) type Path = SmallVec<[Handle; MAX_DEPTH]>;

/// The AVL engine backing `AVLTreeMap`.
///
/// Structural rewrites never touch a parent pointer: every recursive step receives the
/// handle stored in a link and returns the handle that link must hold afterwards.
pub(crate) struct RawAVLTreeMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Link to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

/// The rotation shape applied by `rebalance`, named by where the excess height sits.
#[derive(Clone, Copy, Debug)]
enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl<K, V> RawAVLTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` entries before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Height of the root, with an empty tree reported as 0.
    pub(crate) fn height(&self) -> usize {
        self.root.map_or(0, |root| usize::from(self.nodes.get(root).height()))
    }

    /// Releases every node.
    pub(crate) fn clear(&mut self) {
        debug!(released = self.len, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns a reference to a node by handle.
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Pushes `link` and every left descendant of it onto `path`.
    ///
    /// Popping the path afterwards visits those nodes in ascending key order.
    pub(crate) fn descend_left(&self, path: &mut Path, mut link: Option<Handle>) {
        while let Some(handle) = link {
            path.push(handle);
            link = self.nodes.get(handle).left();
        }
    }

    /// Returns the entry with the smallest key.
    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut handle = self.root?;
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        let node = self.nodes.get(handle);
        Some((node.key(), node.value()))
    }

    /// Returns the entry with the largest key.
    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut handle = self.root?;
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        let node = self.nodes.get(handle);
        Some((node.key(), node.value()))
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len);
        let mut path = Path::new();
        self.descend_left(&mut path, self.root);
        while let Some(handle) = path.pop() {
            order.push(handle);
            self.descend_left(&mut path, self.nodes.get(handle).right());
        }

        let entries = order.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();

        self.nodes.clear();
        self.root = None;
        self.len = 0;

        entries
    }

    fn link_height(&self, link: Option<Handle>) -> i32 {
        link.map_or(ABSENT_HEIGHT, |handle| i32::from(self.nodes.get(handle).height()))
    }

    /// `height(left) - height(right)`, with an absent side counting as -1.
    fn balance_factor(&self, handle: Handle) -> i32 {
        let node = self.nodes.get(handle);
        self.link_height(node.left()) - self.link_height(node.right())
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let tallest = self.link_height(node.left()).max(self.link_height(node.right()));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = (tallest + 1) as u8;
        self.nodes.get_mut(handle).set_height(height);
    }

    /// Rotates `pivot` down to the left. Returns the handle now heading the subtree.
    fn rotate_left(&mut self, pivot: Handle) -> Handle {
        let hook = self.nodes.get(pivot).right().expect("`RawAVLTreeMap::rotate_left()` - pivot has no right child!");
        let inner = self.nodes.get(hook).left();
        self.nodes.get_mut(pivot).set_right(inner);
        self.nodes.get_mut(hook).set_left(Some(pivot));
        self.update_height(pivot);
        self.update_height(hook);
        hook
    }

    /// Rotates `pivot` down to the right. Returns the handle now heading the subtree.
    fn rotate_right(&mut self, pivot: Handle) -> Handle {
        let hook = self.nodes.get(pivot).left().expect("`RawAVLTreeMap::rotate_right()` - pivot has no left child!");
        let inner = self.nodes.get(hook).right();
        self.nodes.get_mut(pivot).set_left(inner);
        self.nodes.get_mut(hook).set_right(Some(pivot));
        self.update_height(pivot);
        self.update_height(hook);
        hook
    }

    /// Recomputes the height of `handle` after one of its subtrees changed and restores
    /// the balance invariant there. Returns the handle the parent link must now hold.
    ///
    /// Both subtrees must already be balanced with correct heights.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.update_height(handle);
        let balance = self.balance_factor(handle);

        if balance < -1 {
            let right = self.nodes.get(handle).right().expect("`RawAVLTreeMap::rebalance()` - right-heavy node has no right child!");
            let case = if self.balance_factor(right) > 0 {
                let right = self.rotate_right(right);
                self.nodes.get_mut(handle).set_right(Some(right));
                Imbalance::RightLeft
            } else {
                Imbalance::RightRight
            };
            trace!(?case, balance, "rotating subtree");
            self.rotate_left(handle)
        } else if balance > 1 {
            let left = self.nodes.get(handle).left().expect("`RawAVLTreeMap::rebalance()` - left-heavy node has no left child!");
            let case = if self.balance_factor(left) < 0 {
                let left = self.rotate_left(left);
                self.nodes.get_mut(handle).set_left(Some(left));
                Imbalance::LeftRight
            } else {
                Imbalance::LeftLeft
            };
            trace!(?case, balance, "rotating subtree");
            self.rotate_right(handle)
        } else {
            handle
        }
    }

    /// Unlinks the leftmost node of the subtree at `handle`.
    ///
    /// Returns the new subtree link and the detached node. Every node on the left spine
    /// is rebalanced on the way back up.
    fn detach_min(&mut self, handle: Handle) -> (Option<Handle>, Node<K, V>) {
        match self.nodes.get(handle).left() {
            Some(left) => {
                let (rest, min) = self.detach_min(left);
                self.nodes.get_mut(handle).set_left(rest);
                (Some(self.rebalance(handle)), min)
            }
            None => {
                let min = self.nodes.take(handle);
                (min.right(), min)
            }
        }
    }
}

impl<K: Ord, V> RawAVLTreeMap<K, V> {
    /// Finds the node holding `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = self.root;
        while let Some(handle) = link {
            let node = self.nodes.get(handle);
            link = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get(handle).value())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((node.key(), node.value()))
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair unless the key is already present or the tree is full.
    ///
    /// Returns true if the pair was inserted. A refused pair is dropped and the tree is
    /// left untouched.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        if self.len >= MAX_LEN {
            warn!(len = self.len, max = MAX_LEN, "tree is full, refusing insertion");
            return false;
        }

        let (root, inserted) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        debug_assert_eq!(self.nodes.len(), self.len);
        inserted
    }

    fn insert_at(&mut self, link: Option<Handle>, key: K, value: V) -> (Handle, bool) {
        let Some(handle) = link else {
            return (self.nodes.alloc(Node::new(key, value)), true);
        };

        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        match key.cmp(node.key()) {
            // Nothing below changed, so nothing on the way up needs fixing either.
            Ordering::Equal => (handle, false),
            Ordering::Less => {
                let (child, inserted) = self.insert_at(left, key, value);
                if !inserted {
                    return (handle, false);
                }
                self.nodes.get_mut(handle).set_left(Some(child));
                (self.rebalance(handle), true)
            }
            Ordering::Greater => {
                let (child, inserted) = self.insert_at(right, key, value);
                if !inserted {
                    return (handle, false);
                }
                self.nodes.get_mut(handle).set_right(Some(child));
                (self.rebalance(handle), true)
            }
        }
    }

    /// Removes a key from the tree, returning the stored key and value.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (root, removed) = self.remove_at(self.root?, key);
        if removed.is_some() {
            self.root = root;
            self.len -= 1;
        }
        debug_assert_eq!(self.nodes.len(), self.len);
        removed
    }

    fn remove_at<Q>(&mut self, handle: Handle, key: &Q) -> (Option<Handle>, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        match key.cmp(node.key().borrow()) {
            Ordering::Less => {
                let Some(left) = left else {
                    return (Some(handle), None);
                };
                let (child, removed) = self.remove_at(left, key);
                if removed.is_none() {
                    return (Some(handle), None);
                }
                self.nodes.get_mut(handle).set_left(child);
                (Some(self.rebalance(handle)), removed)
            }
            Ordering::Greater => {
                let Some(right) = right else {
                    return (Some(handle), None);
                };
                let (child, removed) = self.remove_at(right, key);
                if removed.is_none() {
                    return (Some(handle), None);
                }
                self.nodes.get_mut(handle).set_right(child);
                (Some(self.rebalance(handle)), removed)
            }
            Ordering::Equal => {
                if let (Some(_), Some(right)) = (left, right) {
                    // Two children: the in-order successor's entry moves into this node
                    // and the successor's own node is what leaves the tree.
                    let (rest, successor) = self.detach_min(right);
                    let (successor_key, successor_value) = successor.into_entry();
                    let target = self.nodes.get_mut(handle);
                    target.set_right(rest);
                    let removed = target.replace_entry(successor_key, successor_value);
                    (Some(self.rebalance(handle)), Some(removed))
                } else {
                    let target = self.nodes.take(handle);
                    (target.sole_child(), Some(target.into_entry()))
                }
            }
        }
    }

    /// Collects the values of every key in `low..=high`, ascending by key.
    pub(crate) fn find_range<Q>(&self, low: &Q, high: &Q) -> Vec<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut values = Vec::new();
        self.collect_range(self.root, low, high, &mut values);
        values
    }

    fn collect_range<'a, Q>(&'a self, link: Option<Handle>, low: &Q, high: &Q, values: &mut Vec<&'a V>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = link else {
            return;
        };
        let node = self.nodes.get(handle);
        let key: &Q = node.key().borrow();

        if key > low {
            self.collect_range(node.left(), low, high, values);
        }
        if low <= key && key <= high {
            values.push(node.value());
        }
        if key < high {
            self.collect_range(node.right(), low, high, values);
        }
    }
}

impl<K: Clone, V: Clone> Clone for RawAVLTreeMap<K, V> {
    /// Deep-copies every node into a fresh, compact arena.
    fn clone(&self) -> Self {
        fn clone_subtree<K: Clone, V: Clone>(
            source: &Arena<Node<K, V>>,
            target: &mut Arena<Node<K, V>>,
            handle: Handle,
        ) -> Handle {
            let node = source.get(handle);
            let left = node.left().map(|left| clone_subtree(source, target, left));
            let right = node.right().map(|right| clone_subtree(source, target, right));

            let mut copy = Node::new(node.key().clone(), node.value().clone());
            copy.set_height(node.height());
            copy.set_left(left);
            copy.set_right(right);
            target.alloc(copy)
        }

        let mut nodes = Arena::with_capacity(self.len);
        let root = self.root.map(|root| clone_subtree(&self.nodes, &mut nodes, root));

        Self {
            nodes,
            root,
            len: self.len,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::fmt::Debug;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    impl<K: Ord + Debug, V> RawAVLTreeMap<K, V> {
        /// Validates every AVL invariant. Panics with a descriptive message if any is violated.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();
            let mut reachable = 0usize;

            let height = self.validate_subtree(self.root, None, None, &mut reachable, &mut errors);

            if reachable != self.len {
                errors.push(format!("len mismatch: self.len={}, reachable={}", self.len, reachable));
            }
            if self.nodes.len() != self.len {
                errors.push(format!("arena mismatch: self.len={}, live slots={}", self.len, self.nodes.len()));
            }
            if self.height() as i32 != height.max(0) {
                errors.push(format!("height() = {}, computed {}", self.height(), height));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns the computed height of the subtree at `link`.
        fn validate_subtree<'a>(
            &'a self,
            link: Option<Handle>,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
            reachable: &mut usize,
            errors: &mut Vec<String>,
        ) -> i32 {
            let Some(handle) = link else {
                return ABSENT_HEIGHT;
            };
            *reachable += 1;
            let node = self.nodes.get(handle);

            if let Some(lower) = lower
                && node.key() <= lower
            {
                errors.push(format!("key {:?} at {:?} is not above {:?}", node.key(), handle, lower));
            }
            if let Some(upper) = upper
                && node.key() >= upper
            {
                errors.push(format!("key {:?} at {:?} is not below {:?}", node.key(), handle, upper));
            }

            let left = self.validate_subtree(node.left(), lower, Some(node.key()), reachable, errors);
            let right = self.validate_subtree(node.right(), Some(node.key()), upper, reachable, errors);

            let height = 1 + left.max(right);
            if i32::from(node.height()) != height {
                errors.push(format!("stale height at key {:?}: stored={}, computed={}", node.key(), node.height(), height));
            }
            if (left - right).abs() > 1 {
                errors.push(format!("key {:?} out of balance: left={}, right={}", node.key(), left, right));
            }

            height
        }

        /// Pre-order `(key, height)` listing, to compare shapes before and after an operation.
        fn shape(&self) -> Vec<(K, u8)>
        where
            K: Clone,
        {
            let mut shape = Vec::new();
            let mut stack: Vec<Handle> = self.root.into_iter().collect();
            while let Some(handle) = stack.pop() {
                let node = self.nodes.get(handle);
                shape.push((node.key().clone(), node.height()));
                stack.extend(node.right());
                stack.extend(node.left());
            }
            shape
        }

        fn root_key(&self) -> Option<&K> {
            self.root.map(|root| self.nodes.get(root).key())
        }

        fn child_keys(&self, key: &K) -> (Option<&K>, Option<&K>) {
            let node = self.nodes.get(self.search(key).expect("key should exist"));
            let left = node.left().map(|left| self.nodes.get(left).key());
            let right = node.right().map(|right| self.nodes.get(right).key());
            (left, right)
        }
    }

    fn tree_of(keys: &[i32]) -> RawAVLTreeMap<i32, i32> {
        let mut tree = RawAVLTreeMap::new();
        for &key in keys {
            assert!(tree.insert(key, key * 10));
            tree.validate_invariants();
        }
        tree
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..1000).prop_map(Op::Insert),
            2 => (0i32..1000).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..500)) {
            let mut tree: RawAVLTreeMap<i32, i32> = RawAVLTreeMap::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        let inserted = tree.insert(key, key * 2);
                        prop_assert_eq!(inserted, !model.contains_key(&key));
                        model.entry(key).or_insert(key * 2);
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(tree.remove_entry(&key), model.remove_entry(&key));
                    }
                }
                tree.validate_invariants();
            }

            let mut entries = Vec::new();
            let mut path = Path::new();
            tree.descend_left(&mut path, tree.root());
            while let Some(handle) = path.pop() {
                let node = tree.node(handle);
                entries.push((*node.key(), *node.value()));
                tree.descend_left(&mut path, node.right());
            }
            prop_assert_eq!(entries, model.into_iter().collect::<Vec<_>>());
        }

        #[test]
        fn shuffled_insertions_stay_balanced(keys in Just((0u32..30).collect::<Vec<_>>()).prop_shuffle()) {
            let mut tree = RawAVLTreeMap::new();
            for key in keys {
                prop_assert!(tree.insert(key, ()));
                tree.validate_invariants();
            }
            prop_assert_eq!(tree.len(), 30);
            // The sparsest AVL tree of height 6 already has 33 nodes.
            prop_assert!(tree.height() <= 5);
        }

        #[test]
        fn find_range_matches_model(
            keys in prop::collection::vec(-500i32..500, 0..200),
            low in -600i32..600,
            high in -600i32..600,
        ) {
            let mut tree = RawAVLTreeMap::new();
            let mut model = BTreeMap::new();
            for key in keys {
                tree.insert(key, key);
                model.insert(key, key);
            }

            let expected: Vec<&i32> = if low <= high {
                model.range(low..=high).map(|(_, value)| value).collect()
            } else {
                Vec::new()
            };
            prop_assert_eq!(tree.find_range(&low, &high), expected);
        }
    }

    #[test]
    fn balanced_insertion_order_needs_no_rotation() {
        let tree = tree_of(&[5, 1, 7, 0, 3, 6, 8, 2, 4, 9]);
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.root_key(), Some(&5));
        assert_eq!(tree.child_keys(&1), (Some(&0), Some(&3)));
        assert_eq!(tree.child_keys(&8), (None, Some(&9)));
    }

    #[test]
    fn each_rotation_case_restores_balance() {
        // right-right, left-left, right-left, left-right
        for keys in [[1, 2, 3], [3, 2, 1], [1, 3, 2], [3, 1, 2]] {
            let tree = tree_of(&keys);
            assert_eq!(tree.root_key(), Some(&2), "inserting {:?}", keys);
            assert_eq!(tree.child_keys(&2), (Some(&1), Some(&3)), "inserting {:?}", keys);
            assert_eq!(tree.height(), 1);
        }
    }

    #[test]
    fn ascending_run_stays_logarithmic() {
        let keys: Vec<i32> = (0..1023).collect();
        let tree = tree_of(&keys);
        // A perfectly balanced tree results from inserting 2^k - 1 ascending keys.
        assert_eq!(tree.height(), 9);
        assert_eq!(tree.root_key(), Some(&511));
    }

    #[test]
    fn duplicate_insert_keeps_first_value_and_shape() {
        let mut tree = tree_of(&[5, 1, 7, 0, 3]);
        let before = tree.shape();

        assert!(!tree.insert(3, -1));
        assert_eq!(tree.get(&3), Some(&30));
        assert_eq!(tree.shape(), before);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn removing_absent_key_changes_nothing() {
        let mut tree = tree_of(&[5, 1, 7, 0, 3, 6, 8, 2, 4, 9]);
        let before = tree.shape();

        assert_eq!(tree.remove_entry(&42), None);
        assert_eq!(tree.remove_entry(&-1), None);
        assert_eq!(tree.shape(), before);
        assert_eq!(tree.len(), 10);

        let mut empty: RawAVLTreeMap<i32, i32> = RawAVLTreeMap::new();
        assert_eq!(empty.remove_entry(&1), None);
        empty.validate_invariants();
    }

    #[test]
    fn two_child_removal_moves_successor_into_place() {
        let mut tree = tree_of(&[5, 1, 7, 0, 3, 6, 8, 2, 4, 9]);
        let root = tree.root().expect("tree is not empty");

        assert_eq!(tree.remove_entry(&5), Some((5, 50)));
        tree.validate_invariants();

        // The root node survives and now carries the successor's entry.
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.root_key(), Some(&6));
        assert_eq!(tree.get(&6), Some(&60));
        assert!(!tree.contains_key(&5));
        // Detaching 6 left 7 right-heavy, so 8 was rotated up.
        assert_eq!(tree.child_keys(&6), (Some(&1), Some(&8)));
        assert_eq!(tree.child_keys(&8), (Some(&7), Some(&9)));
        assert_eq!(tree.child_keys(&7), (None, None));
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn successor_with_right_child_is_spliced() {
        let mut tree = tree_of(&[5, 1, 7, 0, 3, 6, 8, 2, 4, 9]);

        assert_eq!(tree.remove_entry(&1), Some((1, 10)));
        tree.validate_invariants();
        assert_eq!(tree.child_keys(&2), (Some(&0), Some(&3)));
        assert_eq!(tree.child_keys(&3), (None, Some(&4)));
    }

    #[test]
    fn removing_everything_empties_the_arena() {
        let mut tree = tree_of(&[5, 1, 7, 0, 3, 6, 8, 2, 4, 9]);
        for key in [9, 1, 5, 3, 0, 4, 8, 6, 2, 7] {
            assert_eq!(tree.remove_entry(&key), Some((key, key * 10)));
            tree.validate_invariants();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn first_and_last_follow_the_spines() {
        let tree = tree_of(&[5, 1, 7, 0, 3, 6, 8, 2, 4, 9]);
        assert_eq!(tree.first_key_value(), Some((&0, &0)));
        assert_eq!(tree.last_key_value(), Some((&9, &90)));

        let empty: RawAVLTreeMap<i32, i32> = RawAVLTreeMap::new();
        assert_eq!(empty.first_key_value(), None);
        assert_eq!(empty.last_key_value(), None);
    }

    #[test]
    fn clone_is_deep_and_compact() {
        let mut original = tree_of(&(0..64).collect::<Vec<_>>());
        for key in (0..64).step_by(2) {
            original.remove_entry(&key);
        }

        let mut copy = original.clone();
        copy.validate_invariants();
        assert_eq!(copy.shape(), original.shape());
        assert_eq!(copy.nodes.len(), 32);

        copy.insert(100, 1000);
        copy.remove_entry(&1);
        if let Some(value) = copy.get_mut(&3) {
            *value = -3;
        }

        original.validate_invariants();
        assert_eq!(original.len(), 32);
        assert!(original.contains_key(&1));
        assert!(!original.contains_key(&100));
        assert_eq!(original.get(&3), Some(&30));
    }

    #[test]
    fn clear_and_drain_release_each_value_once() {
        let tracker = Rc::new(());
        let mut tree = RawAVLTreeMap::new();
        for key in 0..100 {
            tree.insert(key, Rc::clone(&tracker));
        }
        for key in 0..50 {
            tree.remove_entry(&key);
        }
        assert_eq!(Rc::strong_count(&tracker), 51);

        let drained = tree.drain_to_vec();
        assert_eq!(drained.iter().map(|(key, _)| *key).collect::<Vec<_>>(), (50..100).collect::<Vec<_>>());
        assert!(tree.is_empty());
        drop(drained);
        assert_eq!(Rc::strong_count(&tracker), 1);

        for key in 0..10 {
            tree.insert(key, Rc::clone(&tracker));
        }
        tree.clear();
        tree.validate_invariants();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn full_tree_refuses_insertion() {
        let mut tree = RawAVLTreeMap::with_capacity(MAX_LEN);
        for key in 0..MAX_LEN as u32 {
            assert!(tree.insert(key, ()));
        }
        tree.validate_invariants();
        let before = tree.height();

        assert!(!tree.insert(MAX_LEN as u32, ()));
        assert_eq!(tree.len(), MAX_LEN);
        assert_eq!(tree.height(), before);
        assert!(!tree.contains_key(&(MAX_LEN as u32)));

        assert_eq!(tree.remove_entry(&0), Some((0, ())));
        assert!(tree.insert(MAX_LEN as u32, ()));
        tree.validate_invariants();
    }
}
