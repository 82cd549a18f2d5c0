//! A self-balancing ordered map for Rust.
//!
//! This crate provides [`AVLTreeMap`], an ordered key-value map built on an AVL tree. After
//! every insertion and removal the tree restores the AVL balance condition with at most a
//! few rotations, so its height stays logarithmic in the number of entries whatever order
//! the keys arrive in.
//!
//! On top of the usual map operations it offers:
//!
//! - [`find_range`](AVLTreeMap::find_range) - Values of every key in an inclusive range, in key order
//! - [`height`](AVLTreeMap::height) - The height of the underlying tree
//! - A sideways tree drawing through [`Display`](core::fmt::Display)
//!
//! # Example
//!
//! ```
//! use avl_tree::{AVLTreeError, AVLTreeMap};
//!
//! let mut stock = AVLTreeMap::new();
//! stock.insert("apples", 12);
//! stock.insert("pears", 3);
//! stock.insert("figs", 40);
//!
//! assert_eq!(stock.get("figs"), Some(&40));
//! assert_eq!(stock.len(), 3);
//!
//! // Keys are unique: a second insert is refused and the first value kept.
//! assert!(!stock.insert("pears", 99));
//! assert_eq!(stock["pears"], 3);
//!
//! // Inclusive range queries over the key order.
//! assert_eq!(stock.find_range("b", "g"), [&40]);
//!
//! // Keyed access that must produce a value has a fallible form.
//! assert_eq!(stock.try_index("kiwis"), Err(AVLTreeError::KeyNotFound));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Method names and trait impls follow `std::collections::BTreeMap`
//! - **Worst-case O(log n)** - Lookups, insertions and removals never degrade to linear time
//! - **Compact storage** - Nodes live in a single arena addressed by 32-bit handles
//!
//! # Logging
//!
//! The map emits [`tracing`] events: a `warn` when a full map refuses an insertion, a
//! `debug` when a map is cleared and a `trace` for every rotation. Without a subscriber
//! installed they cost nothing.
//!
//! # Implementation
//!
//! Nodes carry their key, value, height and two child handles; there are no parent links.
//! Insertion and removal recurse down the search path and rewrite each parent link with the
//! handle returned from below, rebalancing every node on the way back up.

#![cfg_attr(not(test), no_std)]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod avl_tree_map;

pub use avl_tree_map::AVLTreeMap;
pub use error::AVLTreeError;
