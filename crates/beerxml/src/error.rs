//! BeerXML Error Types
//!
//! Only strict parsing can fail. Exporting is infallible, and the lenient
//! [`parse`](crate::parse) entry point turns every failure into an empty
//! import result.

use derive_more::{Display, Error};

/// A BeerXML error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for BeerXML operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document is not well-formed XML.
    #[display("malformed XML: {_0}")]
    MalformedXml(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A document is either well-formed or it isn't.
        false
    }
}
