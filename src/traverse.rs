//! Depth-first walks over a [`Tree`] in any of the six orders you get by
//! permuting "visit this node" (K), "walk the left subtree" (L) and "walk the
//! right subtree" (R).
//!
//! # Examples
//!
//! ```
//! use bintree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for k in [20, 10, 30] {
//!     tree.insert(k, k * 10);
//! }
//!
//! let mut seen = Vec::new();
//! tree.traverse(Order::Klr, |v| seen.push(*v));
//! assert_eq!(seen, [200, 100, 300]);
//!
//! let keys: Vec<_> = tree.to_vec(Order::Rkl).into_iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [30, 20, 10]);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TreeError};
use crate::tree::{Link, Tree};

/// A traversal order. The name spells the order in which a node and its two
/// subtrees are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, left, right. Pre-order.
    Klr,
    /// Node, right, left.
    Krl,
    /// Left, right, node. Post-order.
    Lrk,
    /// Left, node, right. In-order: ascending keys.
    Lkr,
    /// Right, left, node.
    Rlk,
    /// Right, node, left. Descending keys.
    Rkl,
}

#[derive(Clone, Copy)]
enum Step {
    Key,
    Left,
    Right,
}

impl Order {
    /// Every order, in declaration order.
    pub const ALL: [Order; 6] = [
        Order::Klr,
        Order::Krl,
        Order::Lrk,
        Order::Lkr,
        Order::Rlk,
        Order::Rkl,
    ];

    /// The canonical three letter token, e.g. `"KLR"`.
    pub fn token(self) -> &'static str {
        match self {
            Order::Klr => "KLR",
            Order::Krl => "KRL",
            Order::Lrk => "LRK",
            Order::Lkr => "LKR",
            Order::Rlk => "RLK",
            Order::Rkl => "RKL",
        }
    }

    fn steps(self) -> [Step; 3] {
        use Step::*;
        match self {
            Order::Klr => [Key, Left, Right],
            Order::Krl => [Key, Right, Left],
            Order::Lrk => [Left, Right, Key],
            Order::Lkr => [Left, Key, Right],
            Order::Rlk => [Right, Left, Key],
            Order::Rkl => [Right, Key, Left],
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parses a token such as `"KLR"`. Case is ignored and `P` is accepted as a
/// synonym for `R`, so the older `"KLP"` spelling also works.
impl FromStr for Order {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'P' => 'R',
                c => c,
            })
            .collect();
        Order::ALL
            .into_iter()
            .find(|order| order.token() == normalized)
            .ok_or_else(|| TreeError::UnknownOrder(s.to_string()))
    }
}

fn walk<'a, K, V, F>(link: &'a Link<K, V>, steps: &[Step; 3], f: &mut F)
where
    F: FnMut(&'a K, &'a V),
{
    let Some(node) = link.as_deref() else {
        return;
    };
    for step in steps {
        match step {
            Step::Key => f(&node.key, &node.value),
            Step::Left => walk(&node.left, steps, f),
            Step::Right => walk(&node.right, steps, f),
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Calls `f` with every value, in the given order.
    pub fn traverse<'a, F>(&'a self, order: Order, mut f: F)
    where
        F: FnMut(&'a V),
    {
        walk(&self.root, &order.steps(), &mut |_, v| f(v));
    }

    /// Calls `f` with every `(key, value)` pair, in the given order.
    pub fn traverse_pairs<'a, F>(&'a self, order: Order, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        walk(&self.root, &order.steps(), &mut f);
    }

    /// Like [`Tree::traverse`] with the order given as text.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownOrder`] if `token` names none of the six orders.
    /// Nothing is visited in that case.
    pub fn traverse_token<'a, F>(&'a self, token: &str, f: F) -> Result<()>
    where
        F: FnMut(&'a V),
    {
        let order = token.parse()?;
        self.traverse(order, f);
        Ok(())
    }

    /// Collects every `(key, value)` pair in the given order.
    pub fn to_vec(&self, order: Order) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        self.traverse_pairs(order, |k, v| out.push((k, v)));
        out
    }

    /// Whether every left descendant's key is smaller, and every right
    /// descendant's key larger, than its ancestor's key.
    pub fn is_search_tree(&self) -> bool
    where
        K: Ord,
    {
        let mut prev: Option<&K> = None;
        let mut ordered = true;
        self.traverse_pairs(Order::Lkr, |k, _| {
            if prev.is_some_and(|p| p >= k) {
                ordered = false;
            }
            prev = Some(k);
        });
        ordered
    }
}
