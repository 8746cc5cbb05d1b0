//! Recursive insert with rebalancing on unwind.

use std::cmp::Ordering;

use crate::config::DuplicatePolicy;
use crate::scalar::Scalar;
use crate::types::{AvlNode, Link};
use crate::util::{rotate_left, rotate_right, update_height};

/// Inserts `key` below `link` and returns the new subtree root together with
/// whether a node was created.
///
/// Keys are expected to be validated by the caller.
pub fn insert<K: Scalar>(
    link: Link<K>,
    key: K,
    policy: DuplicatePolicy,
) -> (Box<AvlNode<K>>, bool) {
    let Some(mut node) = link else {
        return (Box::new(AvlNode::new(key)), true);
    };

    let created = match key.compare(&node.k) {
        Ordering::Less => {
            let (l, created) = insert(node.l.take(), key, policy);
            node.l = Some(l);
            created
        }
        Ordering::Greater => {
            let (r, created) = insert(node.r.take(), key, policy);
            node.r = Some(r);
            created
        }
        Ordering::Equal => {
            on_duplicate(&mut node, key, policy);
            false
        }
    };

    if !created {
        return (node, false);
    }
    (rebalance_after_insert(node, key), true)
}

fn on_duplicate<K>(node: &mut AvlNode<K>, key: K, policy: DuplicatePolicy) {
    match policy {
        DuplicatePolicy::Ignore => {}
        DuplicatePolicy::Update => node.k = key,
        DuplicatePolicy::Count => node.count += 1,
    }
}

/// The sub-case is picked by comparing the inserted key against the heavy
/// child's key.
fn rebalance_after_insert<K: Scalar>(mut node: Box<AvlNode<K>>, key: K) -> Box<AvlNode<K>> {
    update_height(&mut node);
    let bf = node.bf();

    if bf > 1 {
        let left_right = node
            .l
            .as_ref()
            .is_some_and(|l| key.compare(&l.k) == Ordering::Greater);
        if left_right {
            node.l = node.l.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if bf < -1 {
        let right_left = node
            .r
            .as_ref()
            .is_some_and(|r| key.compare(&r.k) == Ordering::Less);
        if right_left {
            node.r = node.r.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assert_avl_tree;

    fn build(keys: &[i32]) -> Link<i32> {
        let mut root = None;
        for &k in keys {
            let (node, _) = insert(root, k, DuplicatePolicy::Ignore);
            root = Some(node);
        }
        root
    }

    fn preorder(link: &Link<i32>) -> Vec<i32> {
        fn walk(link: &Link<i32>, out: &mut Vec<i32>) {
            if let Some(n) = link {
                out.push(n.k);
                walk(&n.l, out);
                walk(&n.r, out);
            }
        }
        let mut out = Vec::new();
        walk(link, &mut out);
        out
    }

    #[test]
    fn test_insert_into_empty() {
        let (node, created) = insert(None, 7, DuplicatePolicy::Ignore);
        assert!(created);
        assert_eq!(node.k, 7);
        assert_eq!(node.height, 1);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_left_left_case() {
        let root = build(&[30, 20, 10]);
        assert_eq!(preorder(&root), vec![20, 10, 30]);
        assert_avl_tree(&root, 3).unwrap();
    }

    #[test]
    fn test_left_right_case() {
        let root = build(&[30, 10, 20]);
        assert_eq!(preorder(&root), vec![20, 10, 30]);
        assert_avl_tree(&root, 3).unwrap();
    }

    #[test]
    fn test_right_right_case() {
        let root = build(&[10, 20, 30]);
        assert_eq!(preorder(&root), vec![20, 10, 30]);
        assert_avl_tree(&root, 3).unwrap();
    }

    #[test]
    fn test_right_left_case() {
        let root = build(&[10, 30, 20]);
        assert_eq!(preorder(&root), vec![20, 10, 30]);
        assert_avl_tree(&root, 3).unwrap();
    }

    #[test]
    fn test_rebalance_cascades_to_ancestor() {
        let root = build(&[10, 20, 30, 25, 28, 27, -1, 5, 15, 35]);
        assert_eq!(preorder(&root), vec![25, 10, -1, 5, 20, 15, 28, 27, 30, 35]);
        assert_eq!(root.as_ref().unwrap().height, 4);
        assert_avl_tree(&root, 10).unwrap();
    }

    #[test]
    fn test_duplicate_leaves_shape_untouched() {
        let root = build(&[2, 1, 3]);
        let before = root.clone();
        let (root, created) = insert(root, 1, DuplicatePolicy::Ignore);
        assert!(!created);
        assert_eq!(Some(root), before);
    }

    #[test]
    fn test_duplicate_count_bumps_multiplicity() {
        let root = build(&[2, 1, 3]);
        let (root, created) = insert(root, 3, DuplicatePolicy::Count);
        assert!(!created);
        let (root, _) = insert(Some(root), 3, DuplicatePolicy::Count);
        assert_eq!(root.r.as_ref().unwrap().count, 3);
        assert_eq!(root.count, 1);
    }

    #[test]
    fn test_duplicate_update_replaces_key() {
        let (root, _) = insert(None, 0.0f64, DuplicatePolicy::Update);
        let (root, created) = insert(Some(root), -0.0, DuplicatePolicy::Update);
        assert!(!created);
        assert!(root.k.is_sign_negative());

        let (root, _) = insert(Some(root), 0.0, DuplicatePolicy::Ignore);
        assert!(root.k.is_sign_negative());
    }
}
