//! Operations that compare trees or build new trees out of existing ones.
//! None of them touch their inputs.
//!
//! Equality here is about shape and values: two trees are equal when they
//! have a node in exactly the same positions and those nodes hold equal
//! values. Keys are not compared.

use crate::error::{Result, TreeError};
use crate::traverse::Order;
use crate::tree::{copy, find, Link, Node, Tree};

fn same_shape<K, V: PartialEq>(a: &Link<K, V>, b: &Link<K, V>) -> bool {
    match (a.as_deref(), b.as_deref()) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.value == b.value && same_shape(&a.left, &b.left) && same_shape(&a.right, &b.right)
        }
        _ => false,
    }
}

fn occurs_in<K, V: PartialEq>(host: &Link<K, V>, candidate: &Link<K, V>) -> bool {
    match host.as_deref() {
        None => false,
        Some(node) => {
            same_shape(host, candidate)
                || occurs_in(&node.left, candidate)
                || occurs_in(&node.right, candidate)
        }
    }
}

fn holds<K, V: PartialEq>(link: &Link<K, V>, value: &V) -> bool {
    match link.as_deref() {
        None => false,
        Some(node) => {
            node.value == *value || holds(&node.left, value) || holds(&node.right, value)
        }
    }
}

/// # Examples
///
/// ```
/// use bintree::Tree;
///
/// let mut a = Tree::new();
/// a.insert(1, "x");
/// let mut b = Tree::new();
/// b.insert(7, "x");
///
/// // Same shape, same values: equal even though the keys differ.
/// assert_eq!(a, b);
/// ```
impl<K, V: PartialEq> PartialEq for Tree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        same_shape(&self.root, &other.root)
    }
}

impl<K, V> Tree<K, V> {
    /// Whether `candidate` appears, shape and values, rooted at some node of
    /// this tree. An empty candidate is never contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut host = Tree::new();
    /// for k in [10, 5, 15, 12] {
    ///     host.insert(k, k);
    /// }
    /// let sub = host.extract_subtree(&15).unwrap();
    ///
    /// assert!(host.contains_subtree(&sub));
    /// assert!(!sub.contains_subtree(&host));
    /// ```
    pub fn contains_subtree(&self, candidate: &Tree<K, V>) -> bool
    where
        V: PartialEq,
    {
        occurs_in(&self.root, &candidate.root)
    }

    /// Whether any node holds `value`. Values aren't ordered so this walks
    /// the tree in pre-order until the first match.
    pub fn contains_node(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        holds(&self.root, value)
    }

    /// A new, balanced tree holding every pair of `self` and `other`. When
    /// both hold the same key, the value from `other` wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut a = Tree::new();
    /// a.insert(1, 10);
    /// a.insert(2, 20);
    /// let mut b = Tree::new();
    /// b.insert(2, 99);
    /// b.insert(3, 30);
    ///
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.search(&1), Some(&10));
    /// assert_eq!(merged.search(&2), Some(&99));
    /// assert_eq!(merged.search(&3), Some(&30));
    /// assert_eq!(merged.depth(), 2);
    /// ```
    pub fn merge(&self, other: &Tree<K, V>) -> Tree<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        tracing::debug!(left = self.len, right = other.len, "merging trees");
        let mut result = Tree::new();
        for tree in [self, other] {
            tree.traverse_pairs(Order::Klr, |k, v| result.insert(k.clone(), v.clone()));
        }
        result.balance();
        result
    }

    /// Copies the node at `key` and everything below it into a new tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if no node has this key.
    pub fn extract_subtree(&self, key: &K) -> Result<Tree<K, V>>
    where
        K: Ord + Clone,
        V: Clone,
    {
        let node = find(&self.root, key).ok_or(TreeError::KeyNotFound)?;
        let subtree = Tree::from_root(Some(Box::new(Node {
            key: node.key.clone(),
            value: node.value.clone(),
            left: copy(&node.left),
            right: copy(&node.right),
        })));
        tracing::trace!(len = subtree.len, "extracted subtree");
        Ok(subtree)
    }
}

impl<K> Tree<K, K>
where
    K: Ord + Clone,
{
    /// A new tree where every value `v`, visited in pre-order, is inserted at
    /// key `v` with value `f(v)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for k in [2, 1, 3] {
    ///     tree.insert(k, k);
    /// }
    /// let doubled = tree.map(|v| v * 2);
    /// assert_eq!(doubled.search(&3), Some(&6));
    /// ```
    pub fn map<F>(&self, f: F) -> Tree<K, K>
    where
        F: Fn(&K) -> K,
    {
        let mut result = Tree::new();
        self.traverse(Order::Klr, |v| result.insert(v.clone(), f(v)));
        result
    }

    /// A new tree holding only the values that satisfy `predicate`, each
    /// stored under itself as key.
    pub fn filter<P>(&self, predicate: P) -> Tree<K, K>
    where
        P: Fn(&K) -> bool,
    {
        let mut result = Tree::new();
        self.traverse(Order::Klr, |v| {
            if predicate(v) {
                result.insert(v.clone(), v.clone());
            }
        });
        result
    }
}
