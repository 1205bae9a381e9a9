//! A table of trees with different key/value types, addressed by index.
//!
//! Each entry remembers the element type it was created with, so combining
//! two entries fails cleanly instead of mixing types.
//!
//! # Examples
//!
//! ```
//! use bintree::{Forest, Tree, TreeError};
//!
//! let mut forest = Forest::new();
//!
//! let mut numbers = Tree::new();
//! numbers.insert(1, 10);
//! let a = forest.add("numbers", numbers);
//!
//! let mut more = Tree::new();
//! more.insert(2, 20);
//! let b = forest.add("more", more);
//!
//! let merged = forest.merge::<i32, i32>(a, b).unwrap();
//! assert_eq!(forest.get::<i32, i32>(merged).unwrap().len(), 2);
//!
//! let mut words = Tree::new();
//! words.insert(1, String::from("one"));
//! let c = forest.add("words", words);
//! assert!(matches!(
//!     forest.merge::<i32, i32>(a, c),
//!     Err(TreeError::ConcatTypeMismatch { .. })
//! ));
//! ```

use std::any::{type_name, Any};

use crate::error::{Result, TreeError};
use crate::tree::Tree;

struct Entry {
    name: String,
    element: &'static str,
    tree: Box<dyn Any>,
}

/// Owns any number of trees of any element types.
#[derive(Default)]
pub struct Forest {
    entries: Vec<Entry>,
}

impl Forest {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trees held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no trees are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `tree` and returns its index.
    pub fn add<K, V>(&mut self, name: impl Into<String>, tree: Tree<K, V>) -> usize
    where
        K: 'static,
        V: 'static,
    {
        self.entries.push(Entry {
            name: name.into(),
            element: type_name::<Tree<K, V>>(),
            tree: Box::new(tree),
        });
        self.entries.len() - 1
    }

    fn entry(&self, index: usize) -> Result<&Entry> {
        self.entries.get(index).ok_or(TreeError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// The tree at `index`.
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfRange`] for an unknown index,
    /// [`TreeError::ConcatTypeMismatch`] if the tree there has other types.
    pub fn get<K: 'static, V: 'static>(&self, index: usize) -> Result<&Tree<K, V>> {
        let entry = self.entry(index)?;
        entry
            .tree
            .downcast_ref::<Tree<K, V>>()
            .ok_or(TreeError::ConcatTypeMismatch {
                left: entry.element,
                right: type_name::<Tree<K, V>>(),
            })
    }

    /// Mutable access to the tree at `index`. Fails like [`Forest::get`].
    pub fn get_mut<K: 'static, V: 'static>(&mut self, index: usize) -> Result<&mut Tree<K, V>> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(TreeError::IndexOutOfRange { index, len })?;
        let element = entry.element;
        entry
            .tree
            .downcast_mut::<Tree<K, V>>()
            .ok_or(TreeError::ConcatTypeMismatch {
                left: element,
                right: type_name::<Tree<K, V>>(),
            })
    }

    /// Drops the tree at `index`. Later trees move down by one.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.entry(index)?;
        self.entries.remove(index);
        Ok(())
    }

    /// `(index, name, element type)` of every tree held.
    pub fn names(&self) -> impl Iterator<Item = (usize, &str, &'static str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, entry.name.as_str(), entry.element))
    }

    /// Merges the trees at `a` and `b` (see [`Tree::merge`]) and stores the
    /// result as a new entry, returning its index.
    pub fn merge<K, V>(&mut self, a: usize, b: usize) -> Result<usize>
    where
        K: Ord + Clone + 'static,
        V: Clone + 'static,
    {
        let left = self.get::<K, V>(a)?;
        let right = self.get::<K, V>(b)?;
        let merged = left.merge(right);
        let name = format!("merged_{}", self.entries[a].name);
        Ok(self.add(name, merged))
    }

    /// Copies the subtree rooted at `key` of the tree at `index` (see
    /// [`Tree::extract_subtree`]) into a new entry, returning its index.
    pub fn extract<K, V>(&mut self, index: usize, key: &K) -> Result<usize>
    where
        K: Ord + Clone + 'static,
        V: Clone + 'static,
    {
        let subtree = self.get::<K, V>(index)?.extract_subtree(key)?;
        let name = format!("subtree_{}", self.entries[index].name);
        Ok(self.add(name, subtree))
    }
}
