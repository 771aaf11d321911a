use std::fmt;

/// Possible errors returned by methods on a [`KeywordIndex`](crate::KeywordIndex).
#[derive(Debug)]
pub enum Error {
    /// A keyword or query normalized to the empty string. Not retryable;
    /// the caller must supply a non-whitespace argument.
    InvalidArgument(String),
    /// The store could not be reached, or a command it returned failed.
    /// Safe to retry once connectivity is restored; the maintenance
    /// protocol's steps are idempotent.
    StoreUnavailable(String),
    /// The store holds data that violates the invariants of the data
    /// model (e.g. a state referenced by the reverse-node index is
    /// missing from the prefix set). Not recovered locally; callers may
    /// rebuild an instance by re-running `add` on every known keyword.
    StoreInconsistency(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => {
                write!(f, "Error: invalid argument: {msg}")
            }
            Error::StoreUnavailable(msg) => {
                write!(f, "Error: store unavailable: {msg}")
            }
            Error::StoreInconsistency(msg) => {
                write!(f, "Error: store inconsistency: {msg}")
            }
        }
    }
}

impl From<redis::RedisError> for Error {
    fn from(err: redis::RedisError) -> Self {
        Error::StoreUnavailable(err.to_string())
    }
}

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
