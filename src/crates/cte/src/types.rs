//! Core types for the cte library

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_SEPARATOR};
use crate::formats::Format;
use crate::shared::{is_valid_prefix, is_valid_separator};
use crate::value::Path;

/// Options for converting a document to environment assignments
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Prepended verbatim to every key (default: empty)
    pub prefix: String,
    /// Joins path segments (default: `_`)
    pub separator: String,
    /// ASCII-uppercase keys (default: true)
    pub uppercase: bool,
    /// Emit keys in lexicographic order instead of document order
    pub sort_keys: bool,
    /// Deepest path allowed below the root (default: 64)
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            uppercase: true,
            sort_keys: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reject settings that would produce an unusable output stream
    pub fn validate(&self) -> CteResult<()> {
        if !is_valid_prefix(&self.prefix) {
            return Err(CteError::InvalidPrefix {
                prefix: self.prefix.clone(),
            });
        }
        if !is_valid_separator(&self.separator) {
            return Err(CteError::InvalidSeparator {
                separator: self.separator.clone(),
            });
        }
        if self.max_depth == 0 {
            return Err(CteError::InvalidDepthLimit);
        }
        Ok(())
    }
}

/// A normalized key and its serialized value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvPair {
    pub key: String,
    pub value: String,
}

impl EnvPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Two paths that normalized to the same key; the later one was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub key: String,
    pub kept_path: Path,
    pub dropped_path: Path,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "key {} from {} collides with {}; dropped",
            self.key, self.dropped_path, self.kept_path
        )
    }
}

/// Outcome of flattening: pairs in traversal order plus non-fatal collisions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub pairs: Vec<EnvPair>,
    pub collisions: Vec<Collision>,
}

/// Outcome of a full conversion: rendered text plus non-fatal collisions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Converted {
    pub output: String,
    pub collisions: Vec<Collision>,
}

impl Converted {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Result type alias for cte operations
pub type CteResult<T> = Result<T, CteError>;

/// Errors that abort a conversion
#[derive(Debug, thiserror::Error)]
pub enum CteError {
    #[error("Unsupported document root: expected an object or array, found {kind}")]
    UnsupportedRoot { kind: &'static str },

    #[error("Maximum depth of {limit} exceeded at {path}")]
    DepthExceeded { path: Path, limit: usize },

    #[error("Invalid prefix {prefix:?}: must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidPrefix { prefix: String },

    #[error("Invalid separator {separator:?}: must be non-empty [A-Za-z0-9_]")]
    InvalidSeparator { separator: String },

    #[error("Maximum depth must be at least 1")]
    InvalidDepthLimit,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: Format, message: String },

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Fieldless discriminant of [`CteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedRoot,
    DepthExceeded,
    InvalidPrefix,
    InvalidSeparator,
    InvalidDepthLimit,
    UnsupportedFormat,
    Parse,
    Syntax,
}

impl CteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CteError::UnsupportedRoot { .. } => ErrorKind::UnsupportedRoot,
            CteError::DepthExceeded { .. } => ErrorKind::DepthExceeded,
            CteError::InvalidPrefix { .. } => ErrorKind::InvalidPrefix,
            CteError::InvalidSeparator { .. } => ErrorKind::InvalidSeparator,
            CteError::InvalidDepthLimit => ErrorKind::InvalidDepthLimit,
            CteError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            CteError::Parse { .. } => ErrorKind::Parse,
            CteError::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// Path of the offending node, where one applies
    pub fn path(&self) -> Option<&Path> {
        match self {
            CteError::DepthExceeded { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        CteError::Parse {
            format,
            message: message.into(),
        }
    }

    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        CteError::Syntax {
            line,
            message: message.into(),
        }
    }
}
