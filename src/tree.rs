//! The owned, mutable BST. Every mutation walks the search path by value:
//! each call takes a subtree, rebuilds it, and hands the new subtree root back
//! to its parent. No node ever points at its parent so ownership stays a
//! strict tree.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.search(&1), Some(&"one"));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, "uno");
//! assert_eq!(tree.search(&1), Some(&"uno"));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, TreeError};

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree mapping keys to values. This can be used for
/// inserting, searching, and removing keys and values. It never rebalances on
/// its own; call [`Tree::balance`] when the shape matters.
pub struct Tree<K, V> {
    pub(crate) root: Link<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    // Degenerate trees can be as deep as they are long so tear them down
    // with an explicit stack instead of letting `Box` recurse.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Deep copy. No node is shared between the copy and the original.
impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: copy(&self.root),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree around an already-ordered chain of nodes, counting them.
    pub(crate) fn from_root(root: Link<K, V>) -> Self {
        let len = count(&root);
        Self { root, len }
    }

    /// Number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels in the tree. An empty tree has depth 0 and a lone
    /// root has depth 1.
    pub fn depth(&self) -> usize {
        depth(&self.root)
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10, 100);
    ///
    /// assert_eq!(tree.search(&10), Some(&100));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        find(&self.root, key).map(|n| &n.value)
    }

    /// Like [`Tree::search`] but hands out a mutable reference to the value.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut n.value),
                Ordering::Greater => n.right.as_deref_mut(),
            };
        }
        None
    }

    /// Whether a node with this key exists.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts the given value into the tree stored at the given key.
    /// Inserting a new value for an existing key overwrites its value and
    /// leaves the shape untouched.
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut added = false;
        self.root = Some(insert(self.root.take(), key, value, &mut added));
        if added {
            self.len += 1;
        }
    }

    /// Removes the node holding `key`. Returns `false` and leaves the tree
    /// alone if there is no such key.
    ///
    /// A node with two children takes over the key and value of its in-order
    /// successor, which is then unlinked from the right subtree.
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut removed = false;
        self.root = remove(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// The value stored at the smallest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::TreeEmpty`] when the tree has no nodes.
    pub fn min(&self) -> Result<&V> {
        let mut node = self.root.as_deref().ok_or(TreeError::TreeEmpty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The value stored at the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::TreeEmpty`] when the tree has no nodes.
    pub fn max(&self) -> Result<&V> {
        let mut node = self.root.as_deref().ok_or(TreeError::TreeEmpty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Rebuilds the tree with minimal height. The in-order sequence of
    /// `(key, value)` pairs is unchanged; the new root of every range is its
    /// lower middle element so the result is deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for i in 1..=7 {
    ///     tree.insert(i, i * 10);
    /// }
    /// assert_eq!(tree.depth(), 7);
    ///
    /// tree.balance();
    /// assert_eq!(tree.depth(), 3);
    /// assert_eq!(tree.search(&4), Some(&40));
    /// ```
    pub fn balance(&mut self) {
        let before = self.depth();
        let mut pairs = Vec::with_capacity(self.len);
        collect_in_order(self.root.take(), &mut pairs);
        let len = pairs.len();
        let mut pairs = pairs.into_iter();
        self.root = build_balanced(len, &mut pairs);
        self.len = len;
        tracing::debug!(len, before, after = self.depth(), "rebalanced tree");
    }
}

fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V, added: &mut bool) -> Box<Node<K, V>> {
    match link {
        None => {
            *added = true;
            Node::new_boxed(key, value)
        }
        Some(mut node) => {
            match key.cmp(&node.key) {
                Ordering::Less => node.left = Some(insert(node.left.take(), key, value, added)),
                Ordering::Equal => node.value = value,
                Ordering::Greater => {
                    node.right = Some(insert(node.right.take(), key, value, added))
                }
            }
            node
        }
    }
}

fn remove<K: Ord, V>(link: Link<K, V>, key: &K, removed: &mut bool) -> Link<K, V> {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove(node.left.take(), key, removed),
        Ordering::Greater => node.right = remove(node.right.take(), key, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                (left, Some(right)) => {
                    let (rest, succ_key, succ_value) = take_min(right);
                    node.key = succ_key;
                    node.value = succ_value;
                    node.left = left;
                    node.right = rest;
                }
            }
        }
    }
    Some(node)
}

/// Unlinks the smallest node of a subtree. Returns what is left of the
/// subtree along with the removed key and value.
fn take_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, K, V) {
    match node.left.take() {
        None => {
            let Node {
                key, value, right, ..
            } = *node;
            (right, key, value)
        }
        Some(left) => {
            let (rest, key, value) = take_min(left);
            node.left = rest;
            (Some(node), key, value)
        }
    }
}

pub(crate) fn find<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let mut node = link.as_deref();
    while let Some(n) = node {
        node = match key.cmp(&n.key) {
            Ordering::Less => n.left.as_deref(),
            Ordering::Equal => return Some(n),
            Ordering::Greater => n.right.as_deref(),
        };
    }
    None
}

pub(crate) fn copy<K: Clone, V: Clone>(link: &Link<K, V>) -> Link<K, V> {
    link.as_ref().map(|node| {
        Box::new(Node {
            key: node.key.clone(),
            value: node.value.clone(),
            left: copy(&node.left),
            right: copy(&node.right),
        })
    })
}

pub(crate) fn count<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

fn depth<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
    }
}

/// Moves every pair out of the subtree in ascending key order.
fn collect_in_order<K, V>(link: Link<K, V>, out: &mut Vec<(K, V)>) {
    if let Some(node) = link {
        let Node {
            key,
            value,
            left,
            right,
        } = *node;
        collect_in_order(left, out);
        out.push((key, value));
        collect_in_order(right, out);
    }
}

/// Builds a minimal-height subtree from the next `len` pairs of a sorted
/// stream. For a range `[start, end]` the root is `(start + end) / 2`, which
/// leaves `(len - 1) / 2` elements on the left.
fn build_balanced<K, V, I>(len: usize, pairs: &mut I) -> Link<K, V>
where
    I: Iterator<Item = (K, V)>,
{
    if len == 0 {
        return None;
    }
    let left_len = (len - 1) / 2;
    let left = build_balanced(left_len, pairs);
    let (key, value) = pairs.next()?;
    let right = build_balanced(len - 1 - left_len, pairs);
    Some(Box::new(Node {
        key,
        value,
        left,
        right,
    }))
}
