//! Height/balance helpers, rotation primitives and the invariant audit.

use std::cmp::Ordering;

use tracing::trace;

use crate::scalar::Scalar;
use crate::types::{AvlNode, Link};

#[inline]
pub fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Balance factor of a subtree, `0` for the empty one.
#[inline]
pub fn balance<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.bf())
}

#[inline]
pub fn update_height<K>(node: &mut AvlNode<K>) {
    node.height = 1 + height(&node.l).max(height(&node.r));
}

/// Promotes the right child of `z`.
///
/// ```text
///     z                y
///    / \              / \
///   a   y     =>     z   c
///      / \          / \
///     b   c        a   b
/// ```
///
/// Returns `z` unchanged when it has no right child.
pub fn rotate_left<K: Scalar>(mut z: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut y) = z.r.take() else {
        return z;
    };
    trace!(pivot = %z.k, promoted = %y.k, "rotate left");
    z.r = y.l.take();
    update_height(&mut z);
    y.l = Some(z);
    update_height(&mut y);
    y
}

/// Mirror of [`rotate_left`]: promotes the left child of `y`.
pub fn rotate_right<K: Scalar>(mut y: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut x) = y.l.take() else {
        return y;
    };
    trace!(pivot = %y.k, promoted = %x.k, "rotate right");
    y.l = x.r.take();
    update_height(&mut y);
    x.r = Some(y);
    update_height(&mut x);
    x
}

/// Leftmost node of a subtree.
pub fn min_node<K>(node: &AvlNode<K>) -> &AvlNode<K> {
    let mut curr = node;
    while let Some(l) = curr.l.as_deref() {
        curr = l;
    }
    curr
}

/// Rightmost node of a subtree.
pub fn max_node<K>(node: &AvlNode<K>) -> &AvlNode<K> {
    let mut curr = node;
    while let Some(r) = curr.r.as_deref() {
        curr = r;
    }
    curr
}

/// Worst-case AVL height for `n` nodes: `1.4405 * log2(n + 2) - 0.3277`.
pub fn height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}

/// Checks only the balance factor of every node.
pub fn is_balanced<K>(link: &Link<K>) -> bool {
    match link {
        None => true,
        Some(n) => n.bf().abs() <= 1 && is_balanced(&n.l) && is_balanced(&n.r),
    }
}

fn tree_height<K>(link: &Link<K>) -> i32 {
    match link {
        None => 0,
        Some(n) => 1 + tree_height(&n.l).max(tree_height(&n.r)),
    }
}

/// Full structural audit: height caches, balance factors, strict key order
/// and node count. Returns the first violation found.
pub fn assert_avl_tree<K: Scalar>(root: &Link<K>, size: usize) -> Result<(), String> {
    fn validate_node<K: Scalar>(node: &AvlNode<K>) -> Result<(), String> {
        if let Some(l) = node.l.as_deref() {
            validate_node(l)?;
        }
        if let Some(r) = node.r.as_deref() {
            validate_node(r)?;
        }

        let expected = 1 + tree_height(&node.l).max(tree_height(&node.r));
        if node.height != expected {
            return Err(format!(
                "Height mismatch at {}: expected {expected}, got {}",
                node.k, node.height
            ));
        }
        if node.bf().abs() > 1 {
            return Err(format!("AVL balance violated at {}: bf={}", node.k, node.bf()));
        }
        if node.count == 0 {
            return Err(format!("Zero multiplicity at {}", node.k));
        }
        Ok(())
    }

    fn collect<K: Copy>(link: &Link<K>, out: &mut Vec<K>) {
        if let Some(n) = link {
            collect(&n.l, out);
            out.push(n.k);
            collect(&n.r, out);
        }
    }

    if let Some(root) = root.as_deref() {
        validate_node(root)?;
    }

    let mut keys = Vec::with_capacity(size);
    collect(root, &mut keys);
    if keys.len() != size {
        return Err(format!(
            "Size mismatch: counter says {size}, tree holds {}",
            keys.len()
        ));
    }
    for pair in keys.windows(2) {
        if pair[0].compare(&pair[1]) != Ordering::Less {
            return Err(format!("Node order violated: {} before {}", pair[0], pair[1]));
        }
    }

    Ok(())
}
