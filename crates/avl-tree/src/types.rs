/// Owning link to a subtree; `None` is the empty subtree.
pub type Link<K> = Option<Box<AvlNode<K>>>;

/// AVL tree node. Owned exclusively by its parent (or by the tree for the
/// root).
#[derive(Clone, Debug, PartialEq)]
pub struct AvlNode<K> {
    pub k: K,
    /// Height of the subtree rooted here, `1` for a leaf.
    pub height: i32,
    /// How many equal keys this node stands for. Only the `count` duplicate
    /// policy raises it above one.
    pub count: usize,
    pub l: Link<K>,
    pub r: Link<K>,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            height: 1,
            count: 1,
            l: None,
            r: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }

    /// Balance factor, `height(left) - height(right)`.
    pub fn bf(&self) -> i32 {
        crate::util::height(&self.l) - crate::util::height(&self.r)
    }
}
