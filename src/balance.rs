//! AVL balancing on top of the plain tree in `node`.
//!
//! Every node caches the height of its subtree. After a structural change the affected path is
//! walked toward the root, heights are recomputed and rotations restore
//! `|height(left) - height(right)| <= 1` wherever it was broken.

use log::trace;
use crate::node::{Dir, NodeId, Position, Tree};

/// Recomputes a node's height from its children.
fn update_height<K, V>(tree: &mut Tree<K, V>, id: NodeId) -> usize {
    let height = 1 + tree.height(tree.child(id, Dir::Left))
        .max(tree.height(tree.child(id, Dir::Right)));
    tree.node_mut(id).set_height(height);
    height
}

/// Returns the absolute difference between the heights of a node's subtrees.
fn skew<K, V>(tree: &Tree<K, V>, id: NodeId) -> usize {
    let left = tree.height(tree.child(id, Dir::Left));
    let right = tree.height(tree.child(id, Dir::Right));
    if left > right { left - right } else { right - left }
}

/// Returns the side of the node's taller subtree, or `tie` if both have the same height.
fn taller<K, V>(tree: &Tree<K, V>, id: NodeId, tie: Dir) -> Dir {
    let left = tree.height(tree.child(id, Dir::Left));
    let right = tree.height(tree.child(id, Dir::Right));

    if left > right {
        Dir::Left
    } else if left < right {
        Dir::Right
    } else {
        tie
    }
}

/// Rotates the subtree rooted at `n` toward `dir`, promoting n's child on the opposite side.
/// Returns the promoted node, which now occupies n's former position.
///
/// Heights are recomputed for `n`, the promoted node and n's former parent, in that order.
///
/// # Panics
///
/// Panics if `n` has no child opposite `dir`.
fn rotate<K, V>(tree: &mut Tree<K, V>, n: NodeId, dir: Dir) -> NodeId {
    let x = tree.child(n, dir.opposite()).expect("rotation without a child to promote");
    let b = tree.child(x, dir);
    let pos = tree.position(n);

    trace!("rotate {:?} at node {}, promoting node {}", dir, n, x);

    tree.set_child(x, dir, Some(n));
    if let Some(b) = b { tree.set_parent(b, Some(n)); }
    tree.set_child(n, dir.opposite(), b);
    tree.set_parent(n, Some(x));
    tree.link(pos, x);

    update_height(tree, n);
    update_height(tree, x);
    if let Some((parent, _)) = pos { update_height(tree, parent); }

    x
}

pub fn rotate_left<K, V>(tree: &mut Tree<K, V>, n: NodeId) -> NodeId {
    rotate(tree, n, Dir::Left)
}

pub fn rotate_right<K, V>(tree: &mut Tree<K, V>, n: NodeId) -> NodeId {
    rotate(tree, n, Dir::Right)
}

/// Repairs an imbalance at `top` whose heavy child `mid` hangs on the `outer` side and whose
/// heavy grandchild hangs on the `inner` side of `mid`. Returns the new root of the subtree.
fn restore<K, V>(tree: &mut Tree<K, V>, top: NodeId, outer: Dir, inner: Dir) -> NodeId {
    if outer != inner {
        let mid = tree.child(top, outer).expect("imbalance without a heavy child");
        match outer {
            Dir::Left => rotate_left(tree, mid),
            Dir::Right => rotate_right(tree, mid),
        };
    }

    match outer {
        Dir::Left => rotate_right(tree, top),
        Dir::Right => rotate_left(tree, top),
    }
}

/// Restores the balance invariant after `n` was hung below `p` and p's height grew.
pub fn insert_fixup<K, V>(tree: &mut Tree<K, V>, mut p: NodeId, mut n: NodeId) {
    while let Some((g, p_dir)) = tree.position(p) {
        let old_height = tree.node(g).height();
        let height = update_height(tree, g);
        if height == old_height { return; }

        trace!("node {} grew to height {}", g, height);

        if skew(tree, g) < 2 {
            n = p;
            p = g;
            continue;
        }

        let n_dir = if tree.child(p, Dir::Left) == Some(n) { Dir::Left } else { Dir::Right };
        restore(tree, g, p_dir, n_dir);
        return;
    }
}

/// Restores the balance invariant on the path from `start` to the root after a node below
/// `start` was unlinked.
pub fn remove_fixup<K, V>(tree: &mut Tree<K, V>, start: Option<NodeId>) {
    let mut next = start.map(|n| (n, tree.node(n).height()));

    while let Some((n, old_height)) = next {
        let parent = tree.parent(n);
        let parent_height = parent.map(|p| tree.node(p).height());

        let top = if skew(tree, n) > 1 {
            let c_dir = taller(tree, n, Dir::Right);
            let c = tree.child(n, c_dir).expect("imbalance without a heavy child");
            let g_dir = taller(tree, c, c_dir);
            restore(tree, n, c_dir, g_dir)
        } else {
            update_height(tree, n);
            n
        };

        let height = tree.node(top).height();
        if height == old_height { return; }

        trace!("subtree at node {} shrank to height {}", top, height);
        next = parent.and_then(|p| parent_height.map(|h| (p, h)));
    }
}

/// Swaps two nodes' positions along with their heights, which belong to the positions rather
/// than to the entries.
pub fn swap_nodes<K, V>(tree: &mut Tree<K, V>, a: NodeId, b: NodeId) {
    trace!("swap node {} with node {}", a, b);
    tree.swap_positions(a, b);

    let a_height = tree.node(a).height();
    let b_height = tree.node(b).height();
    tree.node_mut(a).set_height(b_height);
    tree.node_mut(b).set_height(a_height);
}

/// Hangs a new leaf holding the given entry at `pos` and rebalances. Returns the leaf.
pub fn insert<K, V>(tree: &mut Tree<K, V>, pos: Position, key: K, value: V) -> NodeId {
    let n = tree.alloc(key, value);
    tree.link(pos, n);

    if let Some((p, dir)) = pos {
        trace!("attached node {} as {:?} child of node {}", n, dir, p);

        if tree.node(p).height() == 1 {
            tree.node_mut(p).set_height(2);
            insert_fixup(tree, p, n);
        }
    } else {
        trace!("attached node {} as root", n);
    }

    n
}

/// Unlinks the given node, rebalances and returns its entry.
pub fn remove<K, V>(tree: &mut Tree<K, V>, n: NodeId) -> (K, V) {
    if let (Some(_), Some(_)) = (tree.child(n, Dir::Left), tree.child(n, Dir::Right)) {
        let pred = tree.predecessor(n).expect("node with a left child has a predecessor");
        swap_nodes(tree, n, pred);
    }

    let parent = tree.parent(n);

    if tree.child(n, Dir::Left).is_none() && tree.child(n, Dir::Right).is_none() {
        tree.unlink_no_child(n);
    } else {
        tree.unlink_one_child(n);
    }

    trace!("removed node {}", n);
    let node = tree.release(n);
    remove_fixup(tree, parent);
    node.into_key_value()
}
