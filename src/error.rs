use thiserror::Error;

/// The error returned when removing the minimum or maximum entry of an empty map.
///
/// # Examples
///
/// ```
/// let mut map = avl::Map::<u32, &str>::new();
/// assert_eq!(map.delete_min(), Err(avl::EmptyTreeError));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("the tree is empty")]
pub struct EmptyTreeError;
