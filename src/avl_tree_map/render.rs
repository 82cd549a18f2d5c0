use core::fmt;

use super::AVLTreeMap;
use crate::raw::{Handle, RawAVLTreeMap};

const INDENT: &str = "   ";

/// Draws the tree sideways: one `<key, value>` line per entry, largest key first,
/// indented three spaces per level below the root.
///
/// Reading the output with the head tilted left shows the tree's shape. An empty map
/// renders as the empty string.
///
/// # Examples
///
/// ```
/// use avl_tree::AVLTreeMap;
///
/// let map = AVLTreeMap::from([("B", 1), ("A", 0), ("C", 2)]);
/// assert_eq!(map.to_string(), "   <C, 2>\n<B, 1>\n   <A, 0>\n");
/// ```
impl<K: fmt::Display, V: fmt::Display> fmt::Display for AVLTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(&self.raw, f, self.raw.root(), 0)
    }
}

fn write_subtree<K: fmt::Display, V: fmt::Display>(
    tree: &RawAVLTreeMap<K, V>,
    f: &mut fmt::Formatter<'_>,
    link: Option<Handle>,
    depth: usize,
) -> fmt::Result {
    let Some(handle) = link else {
        return Ok(());
    };
    let node = tree.node(handle);

    write_subtree(tree, f, node.right(), depth + 1)?;
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    writeln!(f, "<{}, {}>", node.key(), node.value())?;
    write_subtree(tree, f, node.left(), depth + 1)
}
