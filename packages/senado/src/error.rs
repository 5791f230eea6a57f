//! Error types for the Senate open-data client.
//!
//! Every failure a fetch can end in has its own variant, so callers match on
//! the kind of failure instead of decoding status numbers. `ErrorKind` is the
//! `Copy` discriminant used where the full error cannot be kept around.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::RecordKind;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum SenadoError {
    /// Network failure or non-success HTTP status.
    #[error("Remote document unavailable at {url}: {reason}")]
    RemoteUnavailable { url: String, reason: String },

    /// Cache file missing or unreadable.
    #[error("Local document unavailable at {}: {source}", .path.display())]
    LocalUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes could not be parsed into a document.
    #[error("Malformed XML document: {0}")]
    MalformedDocument(String),

    /// The service answered but the record does not exist upstream.
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: RecordKind, id: u32 },

    /// `get_info` was already called on this record.
    #[error("Record was already fetched")]
    AlreadyFetched,

    /// Write-back refused or failed.
    #[error("Could not save document to {}: {reason}", .path.display())]
    PersistFailed { path: PathBuf, reason: String },

    /// A date field did not match YYYY-MM-DD.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 1950-03-21)")]
    DateFormat(String),

    /// No document is retained for this record.
    #[error("No document available")]
    DocumentAbsent,

    /// A numeric field held something else.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },

    /// Legislature ordinal outside the static tables.
    #[error("Unknown legislature: {0}. Expected 1 to {max}", max = crate::legislature::LEGISLATURE_COUNT)]
    UnknownLegislature(u32),

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Discriminant of [`SenadoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RemoteUnavailable,
    LocalUnavailable,
    MalformedDocument,
    RecordNotFound,
    AlreadyFetched,
    PersistFailed,
    DateFormat,
    DocumentAbsent,
    InvalidField,
    UnknownLegislature,
    Http,
    Io,
    YamlSerialization,
}

impl SenadoError {
    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RemoteUnavailable { .. } => ErrorKind::RemoteUnavailable,
            Self::LocalUnavailable { .. } => ErrorKind::LocalUnavailable,
            Self::MalformedDocument(_) => ErrorKind::MalformedDocument,
            Self::RecordNotFound { .. } => ErrorKind::RecordNotFound,
            Self::AlreadyFetched => ErrorKind::AlreadyFetched,
            Self::PersistFailed { .. } => ErrorKind::PersistFailed,
            Self::DateFormat(_) => ErrorKind::DateFormat,
            Self::DocumentAbsent => ErrorKind::DocumentAbsent,
            Self::InvalidField { .. } => ErrorKind::InvalidField,
            Self::UnknownLegislature(_) => ErrorKind::UnknownLegislature,
            Self::Http(_) => ErrorKind::Http,
            Self::Io(_) => ErrorKind::Io,
            Self::YamlSerialization(_) => ErrorKind::YamlSerialization,
        }
    }
}

impl From<roxmltree::Error> for SenadoError {
    fn from(err: roxmltree::Error) -> Self {
        Self::MalformedDocument(err.to_string())
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, SenadoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SenadoError::DateFormat("21/03/1950".to_string());
        assert!(err.to_string().contains("21/03/1950"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_record_not_found_display() {
        let err = SenadoError::RecordNotFound {
            kind: RecordKind::Senator,
            id: 42,
        };
        assert_eq!(err.to_string(), "senador 42 not found");
        assert_eq!(err.kind(), ErrorKind::RecordNotFound);
    }

    #[test]
    fn test_unknown_legislature_display() {
        let err = SenadoError::UnknownLegislature(99);
        assert_eq!(err.to_string(), "Unknown legislature: 99. Expected 1 to 55");
    }

    #[test]
    fn test_malformed_from_roxmltree() {
        let err: SenadoError = roxmltree::Document::parse("<a>").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::MalformedDocument);
    }
}
