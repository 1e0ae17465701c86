//! Error types for xmlbuilder

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input did not match any accepted node shape
    InvalidNodeShape { found: String, expected: String },
    /// An XML declaration or DOCTYPE was found below the document root
    MisplacedDeclaration { depth: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNodeShape { found, expected } => {
                write!(f, "invalid node shape: expected {expected}, found {found}")
            }
            Self::MisplacedDeclaration { depth } => {
                write!(f, "declaration is only allowed at depth 0, found at depth {depth}")
            }
        }
    }
}

/// Main error type for xmlbuilder
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shape error naming the offending value and the shape that was expected
    pub fn invalid_shape(found: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNodeShape {
            found: found.into(),
            expected: expected.into(),
        })
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xml build error: {}", self.message)
    }
}

/// Result type alias for xmlbuilder
pub type Result<T> = std::result::Result<T, Error>;
