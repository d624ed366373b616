//! An ordered map based on an AVL tree.

use compare::{Compare, Natural};
use log::trace;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::mem::replace;
use std::ops;
use crate::balance;
use crate::error::EmptyTreeError;
use crate::node::{self, Dir, NodeId, Position, Search};

/// An ordered map based on an AVL tree.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    tree: node::Tree<K, V>,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = avl::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { tree: node::Tree::new(), cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.root().is_none() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the height of the map's tree: 0 when empty, 1 for a single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    /// map.insert(30, "c");
    /// assert_eq!(map.height(), 2);
    /// ```
    pub fn height(&self) -> usize { self.tree.height(self.tree.root()) }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: avl::Map<i32, &str> = avl::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: avl::Map<i32, &str, _> = avl::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// If the key is already present, only its value is replaced: the stored key is kept and the
    /// tree's shape does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.tree.search(&self.cmp, &key) {
            Search::Found(id) => {
                trace!("overwrote the value of node {}", id);
                Some(replace(self.tree.node_mut(id).value_mut(), value))
            }
            Search::Vacant(pos) => {
                balance::insert(&mut self.tree, pos, key, value);
                None
            }
        }
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), None);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let id = self.tree.find(&self.cmp, key)?;
        Some(balance::remove(&mut self.tree, id))
    }

    /// Removes and returns the entry with the map's minimum key.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTreeError` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.delete_min(), Err(avl::EmptyTreeError));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.delete_min(), Ok((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn delete_min(&mut self) -> Result<(K, V), EmptyTreeError> {
        self.delete_extremum(Dir::Left)
    }

    /// Removes and returns the entry with the map's maximum key.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTreeError` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.delete_max(), Err(avl::EmptyTreeError));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.delete_max(), Ok((3, "c")));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn delete_max(&mut self) -> Result<(K, V), EmptyTreeError> {
        self.delete_extremum(Dir::Right)
    }

    fn delete_extremum(&mut self, dir: Dir) -> Result<(K, V), EmptyTreeError> {
        let id = self.tree.extremum(dir).ok_or(EmptyTreeError)?;
        Ok(balance::remove(&mut self.tree, id))
    }

    /// Returns the map's entry corresponding to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut counts = avl::Map::new();
    ///
    /// for s in vec!["a", "b", "a", "c", "a", "b"] {
    ///     *counts.entry(s).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts[&"a"], 3);
    /// assert_eq!(counts[&"b"], 2);
    /// assert_eq!(counts[&"c"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<K, V> {
        match self.tree.search(&self.cmp, &key) {
            Search::Found(id) => Entry::Occupied(OccupiedEntry { tree: &mut self.tree, id: id }),
            Search::Vacant(pos) =>
                Entry::Vacant(VacantEntry { tree: &mut self.tree, pos: pos, key: key }),
        }
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.find(&self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.tree.find(&self.cmp, key).map(|id| self.tree.node(id).value())
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let id = self.tree.find(&self.cmp, key)?;
        Some(self.tree.node_mut(id).value_mut())
    }

    fn key_value(&self, id: Option<NodeId>) -> Option<(&K, &V)> {
        id.map(|id| {
            let node = self.tree.node(id);
            (node.key(), node.value())
        })
    }

    fn key_value_mut(&mut self, id: Option<NodeId>) -> Option<(&K, &mut V)> {
        match id {
            None => None,
            Some(id) => Some(self.tree.node_mut(id).key_value_mut()),
        }
    }

    /// Returns a reference to the map's maximum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        self.key_value(self.tree.extremum(Dir::Right))
    }

    /// Returns a reference to the map's maximum key and a mutable reference to its
    /// associated value, or `None` if the map is empty.
    pub fn max_mut(&mut self) -> Option<(&K, &mut V)> {
        let id = self.tree.extremum(Dir::Right);
        self.key_value_mut(id)
    }

    /// Returns a reference to the map's minimum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        self.key_value(self.tree.extremum(Dir::Left))
    }

    /// Returns a reference to the map's minimum key and a mutable reference to its
    /// associated value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// if let Some((_, value)) = map.min_mut() {
    ///     *value = "aa";
    /// }
    ///
    /// assert_eq!(map.min(), Some((&1, &"aa")));
    /// ```
    pub fn min_mut(&mut self) -> Option<(&K, &mut V)> {
        let id = self.tree.extremum(Dir::Left);
        self.key_value_mut(id)
    }

    /// Returns a reference to the predecessor of the given key and a reference to its
    /// associated value, or `None` if no such key is present in the map.
    ///
    /// If `inclusive` is `false`, this method finds the greatest key that is strictly less than
    /// the given key. If `inclusive` is `true`, this method finds the greatest key that is less
    /// than or equal to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.pred(&0, false), None);
    /// assert_eq!(map.pred(&1, false), None);
    /// assert_eq!(map.pred(&2, false), Some((&1, &"a")));
    /// assert_eq!(map.pred(&4, false), Some((&3, &"c")));
    ///
    /// assert_eq!(map.pred(&0, true), None);
    /// assert_eq!(map.pred(&1, true), Some((&1, &"a")));
    /// assert_eq!(map.pred(&2, true), Some((&2, &"b")));
    /// assert_eq!(map.pred(&4, true), Some((&3, &"c")));
    /// ```
    pub fn pred<Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        self.key_value(self.tree.closest(&self.cmp, key, Dir::Left, inclusive))
    }

    /// Returns a reference to the successor of the given key and a reference to its
    /// associated value, or `None` if no such key is present in the map.
    ///
    /// If `inclusive` is `false`, this method finds the smallest key that is strictly greater
    /// than the given key. If `inclusive` is `true`, this method finds the smallest key that is
    /// greater than or equal to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.succ(&0, false), Some((&1, &"a")));
    /// assert_eq!(map.succ(&1, false), Some((&2, &"b")));
    /// assert_eq!(map.succ(&3, false), None);
    ///
    /// assert_eq!(map.succ(&1, true), Some((&1, &"a")));
    /// assert_eq!(map.succ(&4, true), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        self.key_value(self.tree.closest(&self.cmp, key, Dir::Right, inclusive))
    }

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(self) -> IntoIter<K, V> {
        IntoIter(node::IntoIter::new(self.tree))
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter(node::Iter::new(&self.tree))
    }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut i = 1;
    ///
    /// for (_, value) in map.iter_mut() {
    ///     assert_eq!(i, *value);
    ///     *value *= 2;
    ///     i += 1;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut(node::IterMut::new(&mut self.tree))
    }

    #[cfg(test)]
    pub(crate) fn tree(&self) -> &node::Tree<K, V> { &self.tree }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C>
    where C: Compare<K> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(&l.0, &r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or the
/// `IntoIterator` trait.
#[derive(Clone)]
pub struct IntoIter<K, V>(node::IntoIter<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the
/// `IntoIterator` trait.
pub struct IterMut<'a, K: 'a, V: 'a>(node::IterMut<'a, K, V>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An entry in the map.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub enum Entry<'a, K: 'a, V: 'a> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns the entry's value, inserting the given default if the entry is vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Returns the entry's value, inserting the given function's result if the entry is vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V where F: FnOnce() -> V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }
}

/// An occupied entry.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub struct OccupiedEntry<'a, K: 'a, V: 'a> {
    tree: &'a mut node::Tree<K, V>,
    id: NodeId,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { self.tree.node(self.id).key() }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { self.tree.node(self.id).value() }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { self.tree.node_mut(self.id).value_mut() }

    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    pub fn into_mut(self) -> &'a mut V {
        let tree = self.tree;
        tree.node_mut(self.id).value_mut()
    }

    /// Replaces the entry's value with the given value, returning the old one.
    pub fn insert(&mut self, value: V) -> V { replace(self.get_mut(), value) }

    /// Removes the entry from the map and returns its key and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::map::Entry;
    ///
    /// let mut map = avl::Map::new();
    /// map.insert(1, "a");
    ///
    /// if let Entry::Occupied(e) = map.entry(1) {
    ///     assert_eq!(e.remove(), (1, "a"));
    /// }
    ///
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(self) -> (K, V) { balance::remove(self.tree, self.id) }
}

/// A vacant entry.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub struct VacantEntry<'a, K: 'a, V: 'a> {
    tree: &'a mut node::Tree<K, V>,
    pos: Position,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Returns a reference to the key that would be inserted.
    pub fn key(&self) -> &K { &self.key }

    /// Inserts the entry into the map with its key and the given value, returning a mutable
    /// reference to the value with the same lifetime as the map.
    pub fn insert(self, value: V) -> &'a mut V {
        let tree = self.tree;
        let id = balance::insert(tree, self.pos, self.key, value);
        tree.node_mut(id).value_mut()
    }
}
