//! Error types for navigator operations.

use thiserror::Error;

/// Errors reported by the fallible navigator accessors.
///
/// The plain accessors signal these conditions with `Option` or `bool`; the
/// `try_*` variants name them.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// Nothing is stored at the path
    #[error("Nothing found at path: {path}")]
    NotFound { path: String },

    /// The navigator has no root container
    #[error("Navigator has no source")]
    NoSource,

    /// A container along the path refused the write
    #[error("Write rejected at path: {path}")]
    Rejected { path: String },
}

impl NavigatorError {
    /// Check if this error means the path does not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigatorError::NotFound { .. })
    }

    /// Check if this error comes from a write
    pub fn is_rejected(&self) -> bool {
        matches!(self, NavigatorError::Rejected { .. })
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigatorError::NotFound { path } | NavigatorError::Rejected { path } => Some(path),
            NavigatorError::NoSource => None,
        }
    }
}

// Conversion from NavigatorError to the main Error type
impl From<NavigatorError> for crate::Error {
    fn from(err: NavigatorError) -> Self {
        crate::Error::Navigator(err)
    }
}
