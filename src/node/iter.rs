use std::vec;
use super::{Dir, Node, NodeId, Tree};

/// An in-order iterator that walks the tree's links from both ends.
pub struct Iter<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(tree: &'a Tree<K, V>) -> Self {
        Iter {
            tree: tree,
            front: tree.extremum(Dir::Left),
            back: tree.extremum(Dir::Right),
            size: tree.len(),
        }
    }

    fn step(&mut self, dir: Dir) -> Option<(&'a K, &'a V)> {
        if self.size == 0 { return None; }

        let tree = self.tree;
        let end = match dir {
            Dir::Right => &mut self.front,
            Dir::Left => &mut self.back,
        };

        let id = (*end)?;
        *end = tree.neighbor(id, dir);
        self.size -= 1;

        let node = tree.node(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter { tree: self.tree, front: self.front, back: self.back, size: self.size }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.step(Dir::Right) }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.step(Dir::Left) }
}

/// An in-order iterator handing out mutable references to the values.
///
/// The order is computed up front so that every slot can be borrowed independently.
pub struct IterMut<'a, K: 'a, V: 'a> {
    entries: Vec<Option<(&'a K, &'a mut V)>>,
    order: vec::IntoIter<NodeId>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub fn new(tree: &'a mut Tree<K, V>) -> Self {
        let order = tree.in_order();
        let entries = tree.slots.iter_mut()
            .map(|slot| slot.as_mut().map(Node::key_value_mut))
            .collect();

        IterMut { entries: entries, order: order.into_iter() }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let entries = &mut self.entries;
        self.order.next().and_then(|id| entries[id].take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let entries = &mut self.entries;
        self.order.next_back().and_then(|id| entries[id].take())
    }
}

/// An in-order iterator that consumes the tree.
#[derive(Clone)]
pub struct IntoIter<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    order: vec::IntoIter<NodeId>,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(tree: Tree<K, V>) -> Self {
        let order = tree.in_order();
        IntoIter { slots: tree.slots, order: order.into_iter() }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let slots = &mut self.slots;
        self.order.next().and_then(|id| slots[id].take()).map(Node::into_key_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let slots = &mut self.slots;
        self.order.next_back().and_then(|id| slots[id].take()).map(Node::into_key_value)
    }
}
