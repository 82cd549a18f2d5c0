mod arena;
mod handle;
mod node;
mod raw_avl_tree_map;

pub(crate) use handle::Handle;
pub(crate) use raw_avl_tree_map::{MAX_LEN, Path, RawAVLTreeMap};
