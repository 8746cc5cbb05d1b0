//! Human-readable tree dumps.
//!
//! Not a stable format; meant for debugging and the `avl-tree` binary.

use crate::scalar::Scalar;
use crate::types::{AvlNode, Link};

/// Dumps a subtree, one node per line, annotated with its cached height
/// (`h`) and, when above one, its multiplicity (`×n`). Missing children of a
/// non-leaf print as `∅`; the left child is always listed first.
///
/// `tab` is the prefix of the lines below `node`.
pub fn print_node<K: Scalar>(node: &AvlNode<K>, tab: &str) -> String {
    let mut label = format!("{} [h={}]", node.k, node.height);
    if node.count > 1 {
        label.push_str(&format!(" ×{}", node.count));
    }
    if node.is_leaf() {
        return label;
    }

    let left = print_link(&node.l, &format!("{tab}│  "));
    let right = print_link(&node.r, &format!("{tab}   "));
    format!("{label}\n{tab}├─ {left}\n{tab}└─ {right}")
}

pub fn print_link<K: Scalar>(link: &Link<K>, tab: &str) -> String {
    match link {
        None => "∅".to_string(),
        Some(n) => print_node(n, tab),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::insert::insert;

    fn build(keys: &[i32], policy: DuplicatePolicy) -> Link<i32> {
        let mut root = None;
        for &k in keys {
            let (node, _) = insert(root, k, policy);
            root = Some(node);
        }
        root
    }

    #[test]
    fn test_print_empty_link() {
        assert_eq!(print_link::<i32>(&None, ""), "∅");
    }

    #[test]
    fn test_print_balanced_tree() {
        let root = build(&[2, 1, 3], DuplicatePolicy::Ignore);
        assert_eq!(
            print_link(&root, ""),
            "2 [h=2]\n├─ 1 [h=1]\n└─ 3 [h=1]"
        );
    }

    #[test]
    fn test_print_missing_child_and_nesting() {
        let root = build(&[2, 1, 3, 4], DuplicatePolicy::Ignore);
        assert_eq!(
            print_link(&root, ""),
            "2 [h=3]\n├─ 1 [h=1]\n└─ 3 [h=2]\n   ├─ ∅\n   └─ 4 [h=1]"
        );
    }

    #[test]
    fn test_print_left_subtree_keeps_bar() {
        let root = build(&[3, 2, 4, 1], DuplicatePolicy::Ignore);
        assert_eq!(
            print_link(&root, ""),
            "3 [h=3]\n├─ 2 [h=2]\n│  ├─ 1 [h=1]\n│  └─ ∅\n└─ 4 [h=1]"
        );
    }

    #[test]
    fn test_print_shows_multiplicity() {
        let root = build(&[1, 1, 1], DuplicatePolicy::Count);
        assert_eq!(print_link(&root, ""), "1 [h=1] ×3");
    }
}
