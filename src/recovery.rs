//! Rebuilding a tree from the keys it produces in pre-order and in-order.
//!
//! The first pre-order key is the root. Its position in the in-order keys
//! splits them into the left and right subtrees, and the next keys in
//! pre-order belong to the left subtree until it has used up its share.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Result, TreeError};
use crate::tree::{Link, Node, Tree};

struct Recovery<'a, K> {
    preorder: &'a [K],
    /// In-order position of every key.
    positions: BTreeMap<&'a K, usize>,
    next: usize,
}

impl<K: Ord + Clone> Recovery<'_, K> {
    /// Builds the subtree holding the in-order keys `lo..hi`.
    fn build(&mut self, lo: usize, hi: usize) -> Result<Link<K, K>> {
        if lo == hi {
            return Ok(None);
        }
        let preorder = self.preorder;
        let key = &preorder[self.next];
        let at = self
            .positions
            .get(key)
            .copied()
            .filter(|at| (lo..hi).contains(at))
            .ok_or_else(|| {
                TreeError::InvalidArgument(format!(
                    "pre-order key #{} does not belong to in-order range {lo}..{hi}",
                    self.next
                ))
            })?;
        self.next += 1;

        let left = self.build(lo, at)?;
        let right = self.build(at + 1, hi)?;
        Ok(Some(Box::new(Node {
            key: key.clone(),
            value: key.clone(),
            left,
            right,
        })))
    }
}

fn index_unique<'a, K: Ord>(keys: &'a [K], name: &str) -> Result<BTreeMap<&'a K, usize>> {
    let mut positions = BTreeMap::new();
    for (i, key) in keys.iter().enumerate() {
        if positions.insert(key, i).is_some() {
            return Err(TreeError::InvalidArgument(format!(
                "{name} sequence repeats the key at position {i}"
            )));
        }
    }
    Ok(positions)
}

impl<K> Tree<K, K>
where
    K: Ord + Clone,
{
    /// The tree whose pre-order keys are `preorder` and whose in-order keys
    /// are `inorder`. Every node's value is its key.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if the sequences differ in length,
    /// repeat a key, aren't traversals of the same tree, or the in-order
    /// sequence isn't ascending (the result would not be a search tree).
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Order, Tree};
    ///
    /// let tree = Tree::recover(&[20, 10, 30], &[10, 20, 30]).unwrap();
    /// let keys: Vec<_> = tree.to_vec(Order::Klr).into_iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [20, 10, 30]);
    ///
    /// assert!(Tree::recover(&[20, 10], &[10, 20, 30]).is_err());
    /// ```
    pub fn recover(preorder: &[K], inorder: &[K]) -> Result<Tree<K, K>> {
        if preorder.len() != inorder.len() {
            return Err(TreeError::InvalidArgument(format!(
                "traversals differ in length: {} pre-order keys, {} in-order keys",
                preorder.len(),
                inorder.len()
            )));
        }
        index_unique(preorder, "pre-order")?;
        let positions = index_unique(inorder, "in-order")?;
        if inorder.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(TreeError::InvalidArgument(
                "in-order sequence is not ascending".to_string(),
            ));
        }

        let mut recovery = Recovery {
            preorder,
            positions,
            next: 0,
        };
        let root = recovery.build(0, inorder.len())?;
        let tree = Tree::from_root(root);
        tracing::debug!(len = tree.len(), "recovered tree from traversals");
        Ok(tree)
    }
}

fn parse_keys<K: FromStr>(text: &str) -> Result<Vec<K>> {
    let mut keys = Vec::new();
    let mut offset = 0;
    for token in text.split_whitespace() {
        // `split_whitespace` yields subslices of `text`, so this finds the token itself.
        offset = text[offset..].find(token).map_or(offset, |at| offset + at);
        let key = token
            .parse()
            .map_err(|_| TreeError::parse(offset, format!("invalid key '{token}'")))?;
        keys.push(key);
        offset += token.len();
    }
    Ok(keys)
}

impl<K> Tree<K, K>
where
    K: Ord + Clone + FromStr,
{
    /// [`Tree::recover`] with both traversals given as whitespace separated
    /// keys, e.g. `"20 10 30"`.
    ///
    /// # Errors
    ///
    /// [`TreeError::ParseError`] if a token isn't a key, otherwise as
    /// [`Tree::recover`].
    pub fn recover_from_text(preorder: &str, inorder: &str) -> Result<Tree<K, K>> {
        let preorder: Vec<K> = parse_keys(preorder)?;
        let inorder: Vec<K> = parse_keys(inorder)?;
        Self::recover(&preorder, &inorder)
    }
}
