//! The [`AvlTree`] ordered set and its public operations.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::{AvlError, Result};
use crate::insert::insert;
use crate::print::print_node;
use crate::remove::remove;
use crate::scalar::{key_from_json, validate, Scalar};
use crate::types::{AvlNode, Link};
use crate::util::{self, max_node, min_node};

/// Height-balanced ordered set of scalar keys.
///
/// Every `insert` and `delete` restores the AVL invariant before returning,
/// so the height stays within `1.4405 * log2(n + 2)`.
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [10, 20, 30] {
///     tree.insert(k).unwrap();
/// }
/// assert_eq!(tree.preorder_traversal(), vec![20, 10, 30]);
/// assert_eq!(tree.get_height(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct AvlTree<K: Scalar> {
    root: Link<K>,
    policy: DuplicatePolicy,
    size: usize,
}

impl<K: Scalar> AvlTree<K> {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            policy,
            size: 0,
        }
    }

    pub fn with_config(config: &TreeConfig) -> Self {
        Self::with_policy(config.duplicate_policy)
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts `key`, returning `Ok(true)` iff a new node was created.
    ///
    /// # Errors
    ///
    /// [`AvlError::InvalidKeyType`] for keys outside the orderable domain;
    /// the tree is left untouched.
    pub fn insert(&mut self, key: K) -> Result<bool> {
        validate(&key)?;
        let (root, created) = insert(self.root.take(), key, self.policy);
        self.root = Some(root);
        if created {
            self.size += 1;
        }
        debug!(%key, created, size = self.size, "insert");
        Ok(created)
    }

    /// Removes `key`, returning `Ok(true)` iff it was present.
    ///
    /// # Errors
    ///
    /// [`AvlError::InvalidKeyType`] for keys outside the orderable domain.
    pub fn delete(&mut self, key: K) -> Result<bool> {
        validate(&key)?;
        let (root, removed) = remove(self.root.take(), &key);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        debug!(%key, removed, size = self.size, "delete");
        Ok(removed)
    }

    pub fn search(&self, key: K) -> Result<bool> {
        Ok(self.find(&key)?.is_some())
    }

    /// Multiplicity stored for `key`, `0` when absent.
    pub fn count(&self, key: K) -> Result<usize> {
        Ok(self.find(&key)?.map_or(0, |n| n.count))
    }

    fn find(&self, key: &K) -> Result<Option<&AvlNode<K>>> {
        validate(key)?;
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match key.compare(&node.k) {
                Ordering::Equal => return Ok(Some(node)),
                Ordering::Less => node.l.as_deref(),
                Ordering::Greater => node.r.as_deref(),
            };
        }
        Ok(None)
    }

    /// [`insert`](Self::insert) for dynamically-typed keys.
    pub fn insert_value(&mut self, value: &Value) -> Result<bool> {
        self.insert(key_from_json(value)?)
    }

    /// [`delete`](Self::delete) for dynamically-typed keys.
    pub fn delete_value(&mut self, value: &Value) -> Result<bool> {
        self.delete(key_from_json(value)?)
    }

    /// [`search`](Self::search) for dynamically-typed keys.
    pub fn search_value(&self, value: &Value) -> Result<bool> {
        self.search(key_from_json(value)?)
    }

    pub fn get_min(&self) -> Result<K> {
        let root = self.root.as_deref().ok_or(AvlError::EmptyTree)?;
        Ok(min_node(root).k)
    }

    pub fn get_max(&self) -> Result<K> {
        let root = self.root.as_deref().ok_or(AvlError::EmptyTree)?;
        Ok(max_node(root).k)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Keys in ascending order.
    pub fn inorder_traversal(&self) -> Vec<K> {
        fn walk<K: Copy>(link: &Link<K>, out: &mut Vec<K>) {
            if let Some(n) = link {
                walk(&n.l, out);
                out.push(n.k);
                walk(&n.r, out);
            }
        }
        let mut out = Vec::with_capacity(self.size);
        walk(&self.root, &mut out);
        out
    }

    pub fn preorder_traversal(&self) -> Vec<K> {
        fn walk<K: Copy>(link: &Link<K>, out: &mut Vec<K>) {
            if let Some(n) = link {
                out.push(n.k);
                walk(&n.l, out);
                walk(&n.r, out);
            }
        }
        let mut out = Vec::with_capacity(self.size);
        walk(&self.root, &mut out);
        out
    }

    pub fn postorder_traversal(&self) -> Vec<K> {
        fn walk<K: Copy>(link: &Link<K>, out: &mut Vec<K>) {
            if let Some(n) = link {
                walk(&n.l, out);
                walk(&n.r, out);
                out.push(n.k);
            }
        }
        let mut out = Vec::with_capacity(self.size);
        walk(&self.root, &mut out);
        out
    }

    /// Height of the root, `0` for an empty tree.
    pub fn get_height(&self) -> usize {
        util::height(&self.root) as usize
    }

    /// Diagnostic check of the balance factor of every node.
    pub fn is_balanced(&self) -> bool {
        util::is_balanced(&self.root)
    }

    /// Audits order, balance, height caches and the element counter.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        util::assert_avl_tree(&self.root, self.size)
    }

    /// Debug dump with per-node heights.
    pub fn print(&self) -> String {
        match self.root.as_deref() {
            None => "Empty AVL Tree".to_string(),
            Some(root) => print_node(root, ""),
        }
    }
}

impl<K: Scalar> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Scalar> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}
