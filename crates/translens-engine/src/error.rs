use std::fmt;

/// Result type for translens-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the fusion layer
#[derive(Debug)]
pub enum Error {
    /// File name does not carry a parseable conversation timestamp.
    /// Classified as a per-record error: drivers skip the record.
    MalformedTimestamp(String),

    /// The log fetch capability failed
    Fetch(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedTimestamp(name) => {
                write!(f, "No conversation timestamp in file name: {}", name)
            }
            Error::Fetch(err) => write!(f, "Log fetch failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(err) => Some(err.as_ref()),
            Error::MalformedTimestamp(_) => None,
        }
    }
}
