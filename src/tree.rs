use std::cmp::{self, Ordering};
use std::fmt;
use std::io;

use log::{debug, trace};

use crate::display::{DisplayStyle, Rendered};
use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// A height-balanced binary search tree of unique `i32` keys.
///
/// Every insertion restores the AVL condition on the way back up from the
/// new leaf, so the tree height stays logarithmic in the number of keys.
///
/// ```
/// use avl_balanced_tree::BalancedTree;
/// let mut tree = BalancedTree::new();
/// for key in 1..=3 {
///     tree.insert(key);
/// }
/// assert_eq!(tree.root().map(|root| root.key()), Some(2));
/// assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct BalancedTree {
    root: Link,
    num_nodes: usize,
    rebalances: Rebalances,
}

/// A tree entry, only ever handed out behind a shared reference.
#[derive(Clone, Debug)]
pub struct Node {
    key: i32,
    height: i32,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

/// Rotations performed by insertions since the tree was created or last cleared.
///
/// A double rotation is counted once under its own kind, not as two single rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rebalances {
    /// Single left rotations (right-right case).
    pub left: usize,
    /// Single right rotations (left-left case).
    pub right: usize,
    /// Left rotation of the left child followed by a right rotation.
    pub left_right: usize,
    /// Right rotation of the right child followed by a left rotation.
    pub right_left: usize,
}

impl Rebalances {
    /// Returns the number of rebalancing steps of any kind.
    pub fn total(&self) -> usize {
        self.left + self.right + self.left_right + self.right_left
    }
}

impl BalancedTree {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
            rebalances: Rebalances::default(),
        }
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the root node, or `None` for an empty tree.
    /// A tree holding a single key has height 0.
    pub fn height(&self) -> Option<i32> {
        self.root.as_ref().map(|root| root.height)
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns the rotation counters accumulated by [`insert`](Self::insert).
    pub fn rebalances(&self) -> Rebalances {
        self.rebalances
    }

    /// Discards every node of the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree with {} keys", self.num_nodes);
        self.root = None;
        self.num_nodes = 0;
        self.rebalances = Rebalances::default();
    }

    /// Inserts a key, rebalancing every ancestor of the new node.
    ///
    /// Inserting a key that is already present leaves the tree untouched.
    /// Either way the insertion succeeds, so this always returns true.
    pub fn insert(&mut self, key: i32) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(Self::insert_at(root, key, &mut inserted, &mut self.rebalances));
        if inserted {
            self.num_nodes += 1;
        } else {
            debug!("key {} already present, insert is a no-op", key);
        }
        true
    }

    /// Returns the node holding `key`, if present.
    pub fn search(&self, key: i32) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            }
        }
        current
    }

    /// Returns true if the tree contains `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Returns the parent of the node holding `key`.
    /// Returns `None` if `key` is absent or sits at the root.
    pub fn parent_of(&self, key: i32) -> Option<&Node> {
        let mut parent = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return parent,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
            parent = Some(node);
        }
        None
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> InOrder<'_> {
        self.in_order()
    }

    /// Iterates over the keys in ascending order (left, node, right).
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Iterates over the keys depth first, each node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root.as_deref())
    }

    /// Iterates over the keys depth first, each node after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self.root.as_deref())
    }

    /// Iterates over the keys level by level, left to right.
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Writes the tree structure to `out` using the default [`DisplayStyle`].
    pub fn display<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.display_with(out, &DisplayStyle::default())
    }

    /// Writes the tree structure to `out` using `style`.
    pub fn display_with<W: io::Write>(
        &self,
        out: &mut W,
        style: &DisplayStyle,
    ) -> io::Result<()> {
        write!(out, "{}", Rendered::new(self.root(), style))
    }

    /// Panics unless ordering, height and balance hold at every node.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let (_, num_nodes) = Self::check_subtree(&self.root, None, None);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.root.is_none(), self.num_nodes == 0);
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree(link: &Link, lower: Option<i32>, upper: Option<i32>) -> (i32, usize) {
        let node = match link {
            None => return (-1, 0),
            Some(node) => node,
        };

        // Check ordering against every ancestor, not only the parent
        if let Some(lower) = lower {
            assert!(node.key > lower, "key {} not above {}", node.key, lower);
        }
        if let Some(upper) = upper {
            assert!(node.key < upper, "key {} not below {}", node.key, upper);
        }

        let (left_height, left_nodes) = Self::check_subtree(&node.left, lower, Some(node.key));
        let (right_height, right_nodes) = Self::check_subtree(&node.right, Some(node.key), upper);

        // Check height
        assert_eq!(node.height, cmp::max(left_height, right_height) + 1);

        // Check AVL condition (nearly balance)
        assert!(
            (left_height - right_height).abs() <= 1,
            "node {} out of balance: {} vs {}",
            node.key,
            left_height,
            right_height
        );

        (node.height, left_nodes + right_nodes + 1)
    }

    fn insert_at(
        link: Link,
        key: i32,
        inserted: &mut bool,
        rebalances: &mut Rebalances,
    ) -> Box<Node> {
        let mut node = match link {
            None => {
                *inserted = true;
                return Node::create(key);
            }
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => {
                node.left = Some(Self::insert_at(node.left.take(), key, inserted, rebalances));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_at(node.right.take(), key, inserted, rebalances));
            }
            Ordering::Equal => return node,
        }
        Self::rebalance_node(node, rebalances)
    }

    /// Restores the AVL condition at `node` if necessary and adjusts its height.
    /// The balance factor on entry must lie within -2..=2, which holds after a single insert.
    /// Returns the root of the rebalanced subtree.
    fn rebalance_node(mut node: Box<Node>, rebalances: &mut Rebalances) -> Box<Node> {
        match node.balance_factor() {
            2 => {
                let left_left = node.left.as_ref().map_or(false, |left| left.balance_factor() > 0);
                if left_left {
                    rebalances.right += 1;
                } else {
                    node.left = node.left.take().map(Self::rotate_left);
                    rebalances.left_right += 1;
                }
                Self::rotate_right(node)
            }
            -2 => {
                let right_right = node
                    .right
                    .as_ref()
                    .map_or(false, |right| right.balance_factor() < 0);
                if right_right {
                    rebalances.left += 1;
                } else {
                    node.right = node.right.take().map(Self::rotate_right);
                    rebalances.right_left += 1;
                }
                Self::rotate_left(node)
            }
            _ => {
                node.adjust_height();
                node
            }
        }
    }

    //   N            R
    //  / \          / \
    // a   R   ->   N   c
    //    / \      / \
    //   b   c    a   b
    fn rotate_left(mut node: Box<Node>) -> Box<Node> {
        let mut right = match node.right.take() {
            None => {
                node.adjust_height();
                return node;
            }
            Some(right) => right,
        };
        trace!("rotate left at {}, promoting {}", node.key, right.key);
        node.right = right.left.take();
        node.adjust_height();
        right.left = Some(node);
        right.adjust_height();
        right
    }

    //     N        L
    //    / \      / \
    //   L   c -> a   N
    //  / \          / \
    // a   b        b   c
    fn rotate_right(mut node: Box<Node>) -> Box<Node> {
        let mut left = match node.left.take() {
            None => {
                node.adjust_height();
                return node;
            }
            Some(left) => left,
        };
        trace!("rotate right at {}, promoting {}", node.key, left.key);
        node.left = left.right.take();
        node.adjust_height();
        left.right = Some(node);
        left.adjust_height();
        left
    }
}

impl Default for BalancedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BalancedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = DisplayStyle::default();
        fmt::Display::fmt(&Rendered::new(self.root(), &style), f)
    }
}

impl<'a> IntoIterator for &'a BalancedTree {
    type Item = i32;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl Extend<i32> for BalancedTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for BalancedTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Node {
    fn create(key: i32) -> Box<Node> {
        Box::new(Node {
            key,
            height: 0,
            left: None,
            right: None,
        })
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Returns the height of the subtree rooted here; a leaf has height 0.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the left child.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns the right child.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns the left subtree height minus the right subtree height,
    /// counting an absent subtree as height -1.
    pub fn balance_factor(&self) -> i32 {
        link_height(&self.left) - link_height(&self.right)
    }

    fn adjust_height(&mut self) {
        self.height = cmp::max(link_height(&self.left), link_height(&self.right)) + 1;
    }
}

fn link_height(link: &Link) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}
