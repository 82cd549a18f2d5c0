pub mod basic;
pub mod churn;
pub mod rebalance;

/// Largest height an AVL tree with `len` nodes can reach.
pub fn height_bound(len: usize) -> usize {
    // Fewest nodes in an AVL tree of height h: N(h) = N(h-1) + N(h-2) + 1.
    let (mut sparse, mut sparser) = (1usize, 0usize);
    let mut height = 0;
    while sparse + sparser < len {
        (sparse, sparser) = (sparse + sparser + 1, sparse);
        height += 1;
    }
    height
}
