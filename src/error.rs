use std::path::PathBuf;

use crate::{Element, VertexIndex};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Generic(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A line could not be turned into a record. `line` is 1-based.
    #[error("line {line}: {source}")]
    Line { line: usize, source: LineError },

    #[error("{element} index {index} is out of range ({len} defined)")]
    IndexOutOfRange {
        element: Element,
        index: VertexIndex,
        len: usize,
    },

    #[error("face corner has no {element} index")]
    MissingIndex { element: Element },

    #[error("unsupported model format: {path:?}")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors produced while turning the tokens of a single line into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("malformed token '{token}'")]
    Malformed { token: String },

    #[error(transparent)]
    TokenCount(#[from] TokenCountError),

    /// A keyword that is known but not valid where it appears.
    #[error("unexpected '{keyword}'")]
    Unexpected { keyword: String },

    #[error("unsupported {0}")]
    Unsupported(String),
}

impl LineError {
    pub fn malformed(token: impl Into<String>) -> Self {
        Self::Malformed {
            token: token.into(),
        }
    }
    pub fn unexpected(keyword: impl Into<String>) -> Self {
        Self::Unexpected {
            keyword: keyword.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown keyword '{0}'")]
pub struct UnknownKeywordError(pub String);

impl UnknownKeywordError {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("unexpected number of tokens (expected {expected}, got {got})")]
pub struct TokenCountError {
    pub expected: usize,
    pub got: usize,
}

impl TokenCountError {
    pub fn new(expected: usize, got: usize) -> Self {
        Self { expected, got }
    }
}
