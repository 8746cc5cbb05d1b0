//! Recursive delete with rebalancing on unwind.

use std::cmp::Ordering;

use crate::scalar::Scalar;
use crate::types::{AvlNode, Link};
use crate::util::{balance, min_node, rotate_left, rotate_right, update_height};

/// Removes `key` from the subtree and returns its new root together with
/// whether a node was physically destroyed.
///
/// A node with two children takes over the key (and multiplicity) of its
/// in-order successor; the successor node is the one destroyed.
pub fn remove<K: Scalar>(link: Link<K>, key: &K) -> (Link<K>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    match key.compare(&node.k) {
        Ordering::Less => {
            let (l, removed) = remove(node.l.take(), key);
            node.l = l;
            if !removed {
                return (Some(node), false);
            }
        }
        Ordering::Greater => {
            let (r, removed) = remove(node.r.take(), key);
            node.r = r;
            if !removed {
                return (Some(node), false);
            }
        }
        Ordering::Equal => match (node.l.take(), node.r.take()) {
            (None, None) => return (None, true),
            (Some(child), None) | (None, Some(child)) => return (Some(child), true),
            (Some(l), Some(r)) => {
                let successor = min_node(&r);
                let (k, count) = (successor.k, successor.count);
                node.k = k;
                node.count = count;
                let (r, _) = remove(Some(r), &k);
                node.l = Some(l);
                node.r = r;
            }
        },
    }

    (Some(rebalance_after_remove(node)), true)
}

/// Deletion has no offending leaf to compare against, so the sub-case is
/// picked from the heavy child's own balance factor.
fn rebalance_after_remove<K: Scalar>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    update_height(&mut node);
    let bf = node.bf();

    if bf > 1 {
        if balance(&node.l) < 0 {
            node.l = node.l.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if bf < -1 {
        if balance(&node.r) > 0 {
            node.r = node.r.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}
