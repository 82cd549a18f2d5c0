/// Errors reported by fallible [`AVLTreeMap`](crate::AVLTreeMap) accessors.
///
/// Only keyed access that must produce a value is fallible. Absence seen through
/// `get`, `remove` or `contains_key` is an ordinary return value, and a refused
/// insertion is reported by `insert` returning `false`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AVLTreeError {
    /// The requested key is not stored in the tree.
    #[error("key is not present in tree")]
    KeyNotFound,
}
