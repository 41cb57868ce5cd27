use thiserror::Error;

/// Error type for header field parsing and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was empty or absent
    #[error("Value cannot be null or empty: {0}")]
    ArgumentNull(String),

    /// A header value failed its grammar
    #[error("Error parsing {field} header: {reason}")]
    ParseError {
        /// Canonical name of the header being parsed
        field: String,
        /// Which sub-grammar failed
        reason: String,
    },

    /// A numeric sub-field does not fit its representation
    #[error("Value of {field} is out of range: {value}")]
    Overflow {
        field: String,
        value: String,
    },

    /// Structural violation not tied to a single field
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Status code outside 100-699
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(u16),
}

impl Error {
    /// Build a [`Error::ParseError`] for the given header
    pub fn parse(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ParseError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the header the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::ParseError { field, .. } | Error::Overflow { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for header field operations
pub type Result<T> = std::result::Result<T, Error>;
