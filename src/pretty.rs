//! Sideways rendering for people: one node per line, the right subtree above
//! its parent and the left subtree below, each level indented further.
//!
//! ```
//! use bintree::{PrettyConfig, Tree};
//!
//! let mut tree = Tree::new();
//! for k in [20, 10, 30] {
//!     tree.insert(k, k * 10);
//! }
//! let text = tree.pretty_with(PrettyConfig::default().indent(2)).to_string();
//! assert_eq!(text, "  30: 300\n20: 200\n  10: 100\n");
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

/// Layout settings for [`Tree::pretty_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyConfig {
    indent: usize,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self { indent: 5 }
    }
}

impl PrettyConfig {
    /// Columns added per level of depth.
    pub fn indent(mut self, columns: usize) -> Self {
        self.indent = columns;
        self
    }
}

/// A [`Tree`] borrowed for display. Created by [`Tree::pretty`].
pub struct Pretty<'a, K, V> {
    tree: &'a Tree<K, V>,
    config: PrettyConfig,
}

impl<K, V> Pretty<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn write_node(&self, node: &Node<K, V>, pad: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(right) = node.right.as_deref() {
            self.write_node(right, pad + self.config.indent, f)?;
        }
        writeln!(f, "{:pad$}{}: {}", "", node.key, node.value)?;
        if let Some(left) = node.left.as_deref() {
            self.write_node(left, pad + self.config.indent, f)?;
        }
        Ok(())
    }
}

impl<K, V> fmt::Display for Pretty<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree.root.as_deref() {
            Some(root) => self.write_node(root, 0, f),
            None => Ok(()),
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Renders with the default layout.
    pub fn pretty(&self) -> Pretty<'_, K, V> {
        self.pretty_with(PrettyConfig::default())
    }

    /// Renders with a custom layout.
    pub fn pretty_with(&self, config: PrettyConfig) -> Pretty<'_, K, V> {
        Pretty { tree: self, config }
    }
}
