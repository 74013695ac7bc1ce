use std::fmt::{Debug, Formatter};
use crate::traverse::{Traverse, Visit};

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<Box<Node<K>>>,
    pub(crate) right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn new(key: K) -> Node<K> {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree.
///
/// Keys smaller than a node go to its left subtree, everything else
/// (including duplicates) goes to its right subtree. Nodes are never
/// removed or rebalanced, so inserting sorted input produces a chain.
/// Insertion, traversal and drop all walk the tree without recursion.
pub struct OrderedTree<K = i64> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        OrderedTree::new()
    }
}

impl<K> OrderedTree<K> {
    pub fn new() -> OrderedTree<K> {
        OrderedTree {
            root: None,
            len: 0,
        }
    }

    /// Number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = self.root.iter().map(|node| (&**node, 1)).collect::<Vec<_>>();
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.left.iter().map(|child| (&**child, level + 1)));
            stack.extend(node.right.iter().map(|child| (&**child, level + 1)));
        }
        max
    }

    /// Pre-order walk yielding each key together with its children's keys.
    pub fn traverse(&self) -> Traverse<'_, K> {
        Traverse::new(self.root.as_deref(), self.len)
    }
}

impl<K: Ord> OrderedTree<K> {
    pub fn insert(&mut self, key: K) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
    }
}

impl<K> Drop for OrderedTree<K> {
    fn drop(&mut self) {
        // unlink children before each box is freed, otherwise a long chain
        // recurses once per node in the generated drop glue
        let mut stack = self.root.take().into_iter().collect::<Vec<_>>();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Ord> Extend<K> for OrderedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = Visit<'a, K>;
    type IntoIter = Traverse<'a, K>;

    fn into_iter(self) -> Traverse<'a, K> {
        self.traverse()
    }
}

impl<K: Debug> Debug for OrderedTree<K> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_list()
            .entries(self.traverse())
            .finish()
    }
}
