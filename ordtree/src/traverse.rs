use std::iter::FusedIterator;
use crate::node::Node;

/// One entry of a pre-order walk: a key and the keys of its direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit<'a, K> {
    pub key: &'a K,
    pub left: Option<&'a K>,
    pub right: Option<&'a K>,
}

impl<'a, K: Copy> Visit<'a, K> {
    pub fn copied(&self) -> (K, Option<K>, Option<K>) {
        (*self.key, self.left.copied(), self.right.copied())
    }
}

/// Pre-order iterator over an [`OrderedTree`](crate::OrderedTree).
///
/// Pending subtrees are kept on a heap-allocated stack, right child below
/// left child, so the walk handles chains of any length.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Traverse<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Traverse {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = Visit<'a, K>;

    fn next(&mut self) -> Option<Visit<'a, K>> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(Visit {
            key: &node.key,
            left: node.left.as_ref().map(|child| &child.key),
            right: node.right.as_ref().map(|child| &child.key),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Traverse<'a, K> {}

impl<'a, K> FusedIterator for Traverse<'a, K> {}

impl<'a, K> Clone for Traverse<'a, K> {
    fn clone(&self) -> Self {
        Traverse {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
