//! The plain binary search tree underneath the map.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A node is owned by the slot it
//! occupies; parent links are bare indices and never keep anything alive. Nothing in this module
//! looks at node heights except to carry them around, keeping the tree balanced is the job of
//! `balance`.

mod iter;


use compare::Compare;
use std::cmp::Ordering::*;

pub use self::iter::{IntoIter, Iter, IterMut};

/// The index of a node's slot in the arena.
pub type NodeId = usize;

/// Where a node hangs in the tree: the parent and the side of the parent, or `None` for the root.
pub type Position = Option<(NodeId, Dir)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { key: key, value: value, height: 1, parent: None, left: None, right: None }
    }

    pub fn key(&self) -> &K { &self.key }

    pub fn value(&self) -> &V { &self.value }

    pub fn value_mut(&mut self) -> &mut V { &mut self.value }

    pub fn key_value_mut(&mut self) -> (&K, &mut V) { (&self.key, &mut self.value) }

    pub fn into_key_value(self) -> (K, V) { (self.key, self.value) }

    /// The cached height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize { self.height }

    pub fn set_height(&mut self, height: usize) { self.height = height; }
}

/// The outcome of searching for a key.
pub enum Search {
    /// The key is stored in the given node.
    Found(NodeId),
    /// The key is absent; a node holding it would be attached at the given position.
    Vacant(Position),
}

#[derive(Clone)]
pub struct Tree<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree { slots: vec![], free: vec![], root: None, len: 0 }
    }

    pub fn len(&self) -> usize { self.len }

    pub fn root(&self) -> Option<NodeId> { self.root }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn node(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id].as_ref().expect("dangling node id")
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id].as_mut().expect("dangling node id")
    }

    /// Returns the height of the subtree behind the given link, 0 for an empty one.
    pub fn height(&self, link: Option<NodeId>) -> usize {
        link.map_or(0, |id| self.node(id).height)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> { self.node(id).parent }

    pub fn child(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
        let node = self.node(id);
        match dir {
            Dir::Left => node.left,
            Dir::Right => node.right,
        }
    }

    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.node_mut(id).parent = parent;
    }

    pub fn set_child(&mut self, id: NodeId, dir: Dir, child: Option<NodeId>) {
        let node = self.node_mut(id);
        match dir {
            Dir::Left => node.left = child,
            Dir::Right => node.right = child,
        }
    }

    pub fn position(&self, id: NodeId) -> Position {
        self.parent(id).map(|parent| {
            if self.node(parent).left == Some(id) { (parent, Dir::Left) } else { (parent, Dir::Right) }
        })
    }

    /// Points the link at the given position to `link`. Only the downward link is touched.
    pub fn set_at(&mut self, pos: Position, link: Option<NodeId>) {
        match pos {
            None => self.root = link,
            Some((parent, dir)) => self.set_child(parent, dir, link),
        }
    }

    /// Moves a new, detached node into the arena. The node starts out as a leaf of height 1.
    pub fn alloc(&mut self, key: K, value: V) -> NodeId {
        let node = Some(Node::new(key, value));
        self.len += 1;

        match self.free.pop() {
            Some(id) => { self.slots[id] = node; id }
            None => { self.slots.push(node); self.slots.len() - 1 }
        }
    }

    /// Takes an unlinked node out of the arena.
    pub fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id].take().expect("dangling node id");
        self.len -= 1;

        if self.len == 0 {
            self.slots.clear();
            self.free.clear();
        } else {
            self.free.push(id);
        }

        node
    }

    /// Hangs a detached node at the given position.
    pub fn link(&mut self, pos: Position, id: NodeId) {
        self.set_parent(id, pos.map(|(parent, _)| parent));
        self.set_at(pos, Some(id));
    }

    pub fn search<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Search where C: Compare<Q, K> {
        let mut pos = None;
        let mut link = self.root;

        while let Some(id) = link {
            let dir = match cmp.compare(key, &self.node(id).key) {
                Equal => return Search::Found(id),
                Less => Dir::Left,
                Greater => Dir::Right,
            };

            pos = Some((id, dir));
            link = self.child(id, dir);
        }

        Search::Vacant(pos)
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<NodeId> where C: Compare<Q, K> {
        match self.search(cmp, key) {
            Search::Found(id) => Some(id),
            Search::Vacant(_) => None,
        }
    }

    /// Returns the node with the greatest key less than (or, if `inclusive`, equal to) the given
    /// key when `dir` is `Left`, and the node with the least key greater than (or equal to) it
    /// when `dir` is `Right`.
    pub fn closest<C, Q: ?Sized>(&self, cmp: &C, key: &Q, dir: Dir, inclusive: bool)
        -> Option<NodeId> where C: Compare<Q, K> {

        let mut closest = None;
        let mut link = self.root;

        while let Some(id) = link {
            link = match cmp.compare(key, &self.node(id).key) {
                Equal if inclusive => return Some(id),
                Equal => self.child(id, dir),
                order => if (order == Greater) == (dir == Dir::Left) {
                    closest = Some(id);
                    self.child(id, dir.opposite())
                } else {
                    self.child(id, dir)
                },
            };
        }

        closest
    }

    /// Returns the last node reached by following `dir` links from the root.
    pub fn extremum(&self, dir: Dir) -> Option<NodeId> {
        self.root.map(|root| self.extremum_from(root, dir))
    }

    fn extremum_from(&self, mut id: NodeId, dir: Dir) -> NodeId {
        while let Some(child) = self.child(id, dir) { id = child; }
        id
    }

    /// Returns the in-order neighbor of the given node on the `dir` side.
    pub fn neighbor(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
        if let Some(child) = self.child(id, dir) {
            return Some(self.extremum_from(child, dir.opposite()));
        }

        let mut id = id;

        while let Some((parent, side)) = self.position(id) {
            if side != dir { return Some(parent); }
            id = parent;
        }

        None
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> { self.neighbor(id, Dir::Left) }

    pub fn successor(&self, id: NodeId) -> Option<NodeId> { self.neighbor(id, Dir::Right) }

    /// Detaches a leaf from its parent.
    pub fn unlink_no_child(&mut self, id: NodeId) {
        debug_assert!(self.node(id).left.is_none() && self.node(id).right.is_none());
        let pos = self.position(id);
        self.set_at(pos, None);
    }

    /// Detaches a node with a single child, splicing the child into its place.
    pub fn unlink_one_child(&mut self, id: NodeId) {
        let node = self.node(id);
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        let pos = self.position(id);

        if let Some(child) = child { self.set_parent(child, pos.map(|(parent, _)| parent)); }
        self.set_at(pos, child);
    }

    /// Exchanges the positions of two nodes. Keys and values stay in their nodes, so the in-order
    /// sequence changes unless the nodes are equal.
    pub fn swap_positions(&mut self, a: NodeId, b: NodeId) {
        if a == b { return; }

        let a_pos = self.position(a);
        let b_pos = self.position(b);
        let (a_left, a_right) = (self.node(a).left, self.node(a).right);
        let (b_left, b_right) = (self.node(b).left, self.node(b).right);

        let other = move |link: Option<NodeId>| link.map(|id| {
            if id == a { b } else if id == b { a } else { id }
        });

        {
            let node = self.node_mut(a);
            node.parent = other(b_pos.map(|(parent, _)| parent));
            node.left = other(b_left);
            node.right = other(b_right);
        }

        {
            let node = self.node_mut(b);
            node.parent = other(a_pos.map(|(parent, _)| parent));
            node.left = other(a_left);
            node.right = other(a_right);
        }

        for &id in &[a, b] {
            for &dir in &[Dir::Left, Dir::Right] {
                if let Some(child) = self.child(id, dir) { self.set_parent(child, Some(id)); }
            }
        }

        match a_pos {
            Some((parent, _)) if parent == b => {}
            pos => self.set_at(pos, Some(b)),
        }

        match b_pos {
            Some((parent, _)) if parent == a => {}
            pos => self.set_at(pos, Some(a)),
        }
    }

    /// Returns the ids of all nodes in ascending key order.
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len);
        let mut next = self.extremum(Dir::Left);

        while let Some(id) = next {
            order.push(id);
            next = self.successor(id);
        }

        order
    }
}
