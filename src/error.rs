//! Errors reported by tree operations.

use thiserror::Error;

/// Result type alias using [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Stable numeric codes for each [`TreeError`] kind. These never change
/// between releases so callers can match on them across a text boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// Min/max requested on an empty tree.
    TreeEmpty = 1,
    /// An operation required a key that isn't present.
    KeyNotFound = 2,
    /// Decoded text describes a tree that breaks key ordering.
    InvalidPath = 3,
    /// Traversal order token not recognised.
    UnknownOrder = 4,
    /// Handle table index out of range.
    IndexOutOfRange = 6,
    /// Bad caller-supplied argument.
    InvalidArgument = 7,
    /// Two trees with different element types were combined.
    ConcatTypeMismatch = 8,
    /// Text doesn't follow the tree grammar.
    ParseError = 9,
}

/// Errors that can occur in tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `min`/`max` called on a tree without nodes.
    #[error("Binary tree is empty")]
    TreeEmpty,

    /// The addressed key is absent.
    #[error("Key not found in tree")]
    KeyNotFound,

    /// Well-formed text whose keys aren't in search order.
    #[error("Invalid path string: {0}")]
    InvalidPath(String),

    /// The traversal token isn't one of the six orders.
    #[error("Unknown traversal order: {0}")]
    UnknownOrder(String),

    /// A [`Forest`](crate::Forest) handle that doesn't exist.
    #[error("Index out of range: {index} (have {len})")]
    IndexOutOfRange {
        /// Requested handle.
        index: usize,
        /// Number of live handles.
        len: usize,
    },

    /// Caller input that can't describe a tree.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two trees with different element types.
    #[error("Cannot merge trees of different types: {left} and {right}")]
    ConcatTypeMismatch {
        /// Element type of the first tree.
        left: &'static str,
        /// Element type of the second tree.
        right: &'static str,
    },

    /// Text that doesn't follow the tree grammar.
    #[error("Parse error at byte {offset}: {reason} (expected format: (()key:value()))")]
    ParseError {
        /// Byte offset where decoding stopped.
        offset: usize,
        /// What was expected there.
        reason: String,
    },
}

impl TreeError {
    /// The stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TreeEmpty => ErrorCode::TreeEmpty,
            Self::KeyNotFound => ErrorCode::KeyNotFound,
            Self::InvalidPath(_) => ErrorCode::InvalidPath,
            Self::UnknownOrder(_) => ErrorCode::UnknownOrder,
            Self::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::ConcatTypeMismatch { .. } => ErrorCode::ConcatTypeMismatch,
            Self::ParseError { .. } => ErrorCode::ParseError,
        }
    }

    pub(crate) fn parse(offset: usize, reason: impl Into<String>) -> Self {
        Self::ParseError {
            offset,
            reason: reason.into(),
        }
    }
}
