//! An ordered map based on an AVL tree.
//!
//! Every node caches the height of its subtree, and the heights of any node's two subtrees never
//! differ by more than one. Lookups, insertions and removals therefore take `O(log n)` time.
//!
//! # Examples
//!
//! ```
//! let mut map = avl::Map::new();
//!
//! for key in 1..8 {
//!     map.insert(key, key * 10);
//! }
//!
//! assert_eq!(map.height(), 3);
//! assert_eq!(map.get(&4), Some(&40));
//! assert_eq!(map.delete_min(), Ok((1, 10)));
//! ```

pub mod map;

mod balance;
mod error;
mod node;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use crate::error::EmptyTreeError;
pub use crate::map::Map;
