//! Codec error type and classification.

use thiserror::Error;

/// Errors returned by parse, write, and document construction.
#[derive(Debug, Error)]
pub enum CabrilloError {
    /// A value failed its field's validators or cannot be represented on the wire.
    #[error("invalid value `{value}` given for key `{key}`")]
    InvalidData {
        /// Line key or QSO slot name the value belongs to.
        key: String,
        /// Offending value.
        value: String,
    },
    /// A value required at write time is absent.
    #[error("missing {0}")]
    Missing(&'static str),
    /// A parse failure, annotated with its 1-based line number.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the parsed text.
        line: usize,
        /// Underlying failure.
        #[source]
        source: Box<CabrilloError>,
    },
    /// Reading or writing text failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Building a document from a field mapping failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`CabrilloError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or missing data.
    InvalidData,
    /// I/O collaborator failure.
    Io,
    /// Field mapping could not be deserialized.
    Serialization,
}

impl CabrilloError {
    pub(crate) fn invalid(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidData {
            key: key.into(),
            value: value.into(),
        }
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }

    /// Returns the error kind, looking through line annotations.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidData { .. } | Self::Missing(_) => ErrorKind::InvalidData,
            Self::Line { source, .. } => source.kind(),
            Self::Io(_) => ErrorKind::Io,
            Self::Json(_) => ErrorKind::Serialization,
        }
    }

    /// Returns the 1-based line number for parse failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type CabrilloResult<T> = Result<T, CabrilloError>;
