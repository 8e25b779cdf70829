use std::fmt;

/// Result type for translens-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the normalizer layer
///
/// Both variants are per-record errors: drivers count and skip the
/// offending record, they never abort the enclosing enumeration.
#[derive(Debug)]
pub enum Error {
    /// Raw record is missing expected fields or is not valid JSON
    MalformedRecord(String),

    /// A transcript turn references a role with no declared participant
    UnresolvedRole(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedRecord(msg) => write!(f, "Malformed record: {}", msg),
            Error::UnresolvedRole(role) => {
                write!(f, "No declared participant for role: {}", role)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedRecord(err.to_string())
    }
}
