use std::fmt;

/// Result type for costscope-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer.
///
/// Malformed lines are not errors here; they come back as `ParseError`
/// values inside a successful result. Only file-level I/O can fail.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (unreadable or unopenable file)
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
