//! Single-line text encoding of a tree.
//!
//! ```text
//! tree  := "(" inner ")" key ":" value "(" inner ")" | "()"
//! inner := tree | ""
//! ```
//!
//! A node is written as its left subtree in parentheses, then `key:value`,
//! then its right subtree in parentheses; an absent child is `()`. The empty
//! tree is written `()`, so `(())` is an absent child too. The decoder also
//! accepts a group wrapped in further parentheses. So a root `20` with leaf children `10` and `30` is
//! `(()10:10())20:20(()30:30())`.
//!
//! Keys and values are written with their `Display` impl and read back with
//! `FromStr`. Any `(`, `)`, `:` or `\` they produce is escaped with a `\`.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree = Tree::new();
//! for k in [20, 10, 30] {
//!     tree.insert(k, k);
//! }
//! let text = tree.to_string();
//! assert_eq!(text, "(()10:10())20:20(()30:30())");
//!
//! let decoded: Tree<i32, i32> = text.parse().unwrap();
//! assert_eq!(decoded, tree);
//!
//! // Well formed but 25 sits left of 20.
//! assert!(!Tree::<i32, i32>::is_valid_tree_string("(()25:25())20:20(()30:30())"));
//! ```

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::{Result, TreeError};
use crate::tree::{Node, Tree};

const ESCAPE: u8 = b'\\';

/// Forwards text to the formatter, escaping the grammar's punctuation.
struct Escaper<'a, 'b>(&'a mut fmt::Formatter<'b>);

impl Write for Escaper<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if matches!(c, '(' | ')' | ':' | '\\') {
                self.0.write_char('\\')?;
            }
            self.0.write_char(c)?;
        }
        Ok(())
    }
}

fn write_node<K, V>(node: &Node<K, V>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: fmt::Display,
    V: fmt::Display,
{
    f.write_char('(')?;
    if let Some(left) = node.left.as_deref() {
        write_node(left, f)?;
    }
    f.write_char(')')?;
    write!(Escaper(&mut *f), "{}", node.key)?;
    f.write_char(':')?;
    write!(Escaper(&mut *f), "{}", node.value)?;
    f.write_char('(')?;
    if let Some(right) = node.right.as_deref() {
        write_node(right, f)?;
    }
    f.write_char(')')
}

impl<K, V> fmt::Display for Tree<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => f.write_str("()"),
            Some(root) => write_node(root, f),
        }
    }
}

/// Where the parser is inside an unfinished node. Finished subtrees are held
/// as [`Tree`]s so a failed parse tears them down without recursing.
enum Frame<K, V> {
    /// Before the top-level node's key.
    Root,
    /// Inside a group whose contents began with another group.
    Inner,
    /// Inside a node's right group. `nested` when that node sits in a group
    /// of its own whose `)` must follow.
    Right {
        left: Tree<K, V>,
        key: K,
        value: V,
        nested: bool,
    },
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(TreeError::parse(
                self.pos,
                format!("expected '{}', found '{}'", byte as char, b as char),
            )),
            None => Err(TreeError::parse(
                self.pos,
                format!("expected '{}', found end of input", byte as char),
            )),
        }
    }

    /// Reads a key or value up to the unescaped `stop` byte, leaving `stop`
    /// unconsumed. Returns the unescaped text and where it started.
    fn token(&mut self, stop: u8, what: &str) -> Result<(String, usize)> {
        let start = self.pos;
        let bytes = self.src.as_bytes();
        loop {
            match bytes.get(self.pos) {
                None => {
                    return Err(TreeError::parse(
                        self.pos,
                        format!("{what} runs into end of input"),
                    ))
                }
                Some(&b) if b == stop => break,
                Some(&ESCAPE) => {
                    if self.pos + 1 >= bytes.len() {
                        return Err(TreeError::parse(self.pos, "dangling escape"));
                    }
                    self.pos += 2;
                }
                Some(&b) if b == b'(' || b == b')' => {
                    return Err(TreeError::parse(
                        self.pos,
                        format!("unexpected '{}' in {what}", b as char),
                    ))
                }
                Some(_) => self.pos += 1,
            }
        }

        let mut text = String::with_capacity(self.pos - start);
        let mut chars = self.src[start..self.pos].chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => text.extend(chars.next()),
                c => text.push(c),
            }
        }
        Ok((text, start))
    }

    /// `key ":" value`, leaving the right group unconsumed.
    fn entry<K, V>(&mut self) -> Result<(K, V)>
    where
        K: FromStr,
        V: FromStr,
    {
        let (text, at) = self.token(b':', "key")?;
        // Padded numbers are accepted; a key that parses as written is kept
        // as written.
        let key: K = text
            .parse()
            .or_else(|_| text.trim().parse())
            .map_err(|_| TreeError::parse(at, format!("invalid key '{text}'")))?;
        self.expect(b':')?;

        let (text, at) = self.token(b'(', "value")?;
        let value: V = text
            .parse()
            .map_err(|_| TreeError::parse(at, format!("invalid value '{text}'")))?;
        Ok((key, value))
    }

    /// Reads one node and everything below it. Open groups live on `stack`
    /// rather than the call stack, so nesting depth is bounded by the input
    /// length only.
    fn tree<K, V>(&mut self) -> Result<Tree<K, V>>
    where
        K: FromStr,
        V: FromStr,
    {
        let mut stack = vec![Frame::Root];
        loop {
            // Open groups until one closes straight away.
            self.expect(b'(')?;
            while self.peek() != Some(b')') {
                stack.push(Frame::Inner);
                self.expect(b'(')?;
            }
            self.pos += 1;

            // Hand the finished group outwards until something needs input.
            let mut done = Tree::new();
            loop {
                match stack.pop() {
                    // `(())` and deeper wrappers: the group holds nothing else.
                    Some(Frame::Inner) if self.peek() == Some(b')') => self.pos += 1,
                    Some(Frame::Inner) => {
                        let (key, value) = self.entry()?;
                        stack.push(Frame::Right {
                            left: done,
                            key,
                            value,
                            nested: true,
                        });
                        break;
                    }
                    Some(Frame::Root) => {
                        let (key, value) = self.entry()?;
                        stack.push(Frame::Right {
                            left: done,
                            key,
                            value,
                            nested: false,
                        });
                        break;
                    }
                    Some(Frame::Right {
                        mut left,
                        key,
                        value,
                        nested,
                    }) => {
                        let len = left.len + done.len + 1;
                        let mut node = Node::new_boxed(key, value);
                        node.left = left.root.take();
                        node.right = done.root.take();
                        done = Tree {
                            root: Some(node),
                            len,
                        };
                        if !nested {
                            return Ok(done);
                        }
                        self.expect(b')')?;
                    }
                    None => return Err(TreeError::parse(self.pos, "unbalanced ')'")),
                }
            }
        }
    }

    fn finish(&self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(b) => Err(TreeError::parse(
                self.pos,
                format!("trailing '{}' after tree", b as char),
            )),
        }
    }
}

/// Decodes the text encoding. The result is checked against the search tree
/// ordering before it is handed back.
///
/// # Errors
///
/// [`TreeError::ParseError`] for text that doesn't follow the grammar or has
/// keys/values their `FromStr` rejects, [`TreeError::InvalidPath`] for a
/// well-formed tree whose keys are out of order or repeated.
impl<K, V> FromStr for Tree<K, V>
where
    K: FromStr + Ord,
    V: FromStr,
{
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TreeError::parse(0, "empty input"));
        }
        if s == "()" {
            return Ok(Tree::new());
        }

        let mut parser = Parser::new(s);
        let tree = parser.tree()?;
        parser.finish()?;

        if !tree.is_search_tree() {
            return Err(TreeError::InvalidPath(
                "keys are not in strictly ascending in-order sequence".to_string(),
            ));
        }
        tracing::debug!(len = tree.len(), "decoded tree");
        Ok(tree)
    }
}

impl<K, V> Tree<K, V>
where
    K: FromStr + Ord,
    V: FromStr,
{
    /// Whether `s` decodes to a valid tree. Never fails; use
    /// [`str::parse`] to find out what is wrong.
    pub fn is_valid_tree_string(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }
}
