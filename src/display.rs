//! Hierarchical text rendering of a tree, for diagnostics.
//!
//! The root is printed alone as `key(height)`. Every other node gets its own
//! line, in pre-order, made of one indent unit per level below the root's
//! children, the branch marker, `key(height)` and a tag naming which child of
//! its parent it is:
//!
//! ```text
//! 2(1)
//!   |__1(0) (L)
//!   |__3(0) (R)
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::tree::Node;

/// Strings used when rendering a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayStyle {
    indent: Cow<'static, str>,
    branch: Cow<'static, str>,
    left_tag: Cow<'static, str>,
    right_tag: Cow<'static, str>,
    empty_message: Cow<'static, str>,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            indent: Cow::Borrowed("     "),
            branch: Cow::Borrowed("  |__"),
            left_tag: Cow::Borrowed("(L)"),
            right_tag: Cow::Borrowed("(R)"),
            empty_message: Cow::Borrowed("Tree is empty!"),
        }
    }
}

impl DisplayStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string repeated once per extra level of depth.
    pub fn indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the marker printed right before a non-root node.
    pub fn branch(mut self, branch: impl Into<Cow<'static, str>>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Sets the tag printed after a left child.
    pub fn left_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.left_tag = tag.into();
        self
    }

    /// Sets the tag printed after a right child.
    pub fn right_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.right_tag = tag.into();
        self
    }

    /// Sets the single line printed for an empty tree.
    pub fn empty_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.empty_message = message.into();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Root,
    LeftChild,
    RightChild,
}

/// A tree paired with a style, rendered through `fmt::Display`.
pub(crate) struct Rendered<'a> {
    root: Option<&'a Node>,
    style: &'a DisplayStyle,
}

impl<'a> Rendered<'a> {
    pub(crate) fn new(root: Option<&'a Node>, style: &'a DisplayStyle) -> Self {
        Self { root, style }
    }

    fn render_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &Node,
        position: Position,
        depth: usize,
    ) -> fmt::Result {
        let tag = match position {
            Position::Root => None,
            Position::LeftChild => Some(&self.style.left_tag),
            Position::RightChild => Some(&self.style.right_tag),
        };
        match tag {
            None => writeln!(f, "{}({})", node.key(), node.height())?,
            Some(tag) => {
                for _ in 1..depth {
                    f.write_str(&self.style.indent)?;
                }
                writeln!(f, "{}{}({}) {}", self.style.branch, node.key(), node.height(), tag)?;
            }
        }
        if let Some(left) = node.left() {
            self.render_node(f, left, Position::LeftChild, depth + 1)?;
        }
        if let Some(right) = node.right() {
            self.render_node(f, right, Position::RightChild, depth + 1)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for Rendered<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => writeln!(f, "{}", self.style.empty_message),
            Some(root) => self.render_node(f, root, Position::Root, 0),
        }
    }
}
