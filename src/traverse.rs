//! Key iterators for the classical depth-first orders and for level order.
//!
//! None of the iterators recurse; each keeps an explicit stack (or queue)
//! bounded by the tree height (or width).

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::Node;

/// An iterator over the keys of a tree in ascending order.
///
/// This `struct` is created by the [`in_order`] method on [`BalancedTree`].
///
/// [`BalancedTree`]: crate::BalancedTree
/// [`in_order`]: crate::BalancedTree::in_order
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

/// An iterator over the keys of a tree, each node before its subtrees.
///
/// This `struct` is created by the [`pre_order`] method on [`BalancedTree`].
///
/// [`BalancedTree`]: crate::BalancedTree
/// [`pre_order`]: crate::BalancedTree::pre_order
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

/// An iterator over the keys of a tree, each node after its subtrees.
///
/// This `struct` is created by the [`post_order`] method on [`BalancedTree`].
///
/// [`BalancedTree`]: crate::BalancedTree
/// [`post_order`]: crate::BalancedTree::post_order
#[derive(Clone, Debug)]
pub struct PostOrder<'a> {
    stack: Vec<(&'a Node, Visit)>,
}

/// An iterator over the keys of a tree, one level after another.
#[derive(Clone, Debug)]
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Descend,
    Emit,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a> FusedIterator for InOrder<'a> {}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        // Right goes first so the left subtree is popped first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

impl<'a> FusedIterator for PreOrder<'a> {}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.map(|node| (node, Visit::Descend)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while let Some((node, visit)) = self.stack.pop() {
            match visit {
                Visit::Emit => return Some(node.key()),
                Visit::Descend => {
                    self.stack.push((node, Visit::Emit));
                    self.stack.extend(node.right().map(|right| (right, Visit::Descend)));
                    self.stack.extend(node.left().map(|left| (left, Visit::Descend)));
                }
            }
        }
        None
    }
}

impl<'a> FusedIterator for PostOrder<'a> {}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }
}

impl<'a> FusedIterator for LevelOrder<'a> {}
