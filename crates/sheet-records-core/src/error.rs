//! Error types for sheet-records-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheet-records-core
///
/// Coercion failures are deliberately absent: a cell whose text does not fit
/// its target field leaves that field at its default value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Address string does not match `[A-Za-z]+[0-9]+`
    #[error("Malformed cell address: {0}")]
    MalformedAddress(String),

    /// Extent requested on a table without any cells
    #[error("Table extent requested on a table with no cells")]
    EmptyTableExtent,

    /// Shared string id is not a valid ordinal, or there is no table to look it up in
    #[error("Unable to find shared string reference for id {id:?}: {reason}")]
    UnresolvedSharedString { id: String, reason: &'static str },

    /// More than one sheet carries the requested name
    #[error("Ambiguous sheet name: spreadsheet has {count} sheets matching {name:?}")]
    AmbiguousSheetName { name: String, count: usize },

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    pub(crate) fn malformed(address: &str) -> Self {
        Error::MalformedAddress(address.to_string())
    }

    pub(crate) fn unresolved(id: &str, reason: &'static str) -> Self {
        Error::UnresolvedSharedString {
            id: id.to_string(),
            reason,
        }
    }
}
