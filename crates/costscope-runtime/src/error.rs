use std::fmt;
use std::path::PathBuf;

/// Result type for costscope-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer.
///
/// These are the explicit failure values of the public operations: terminal
/// scan failures (`RootNotFound`/`RootAccess`) and lookup misses
/// (`ProjectNotFound`/`SessionNotFound`) are deliberately distinct variants.
#[derive(Debug)]
pub enum Error {
    /// Engine layer error (file-level read failure)
    Engine(costscope_engine::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// The configured log root does not exist
    RootNotFound(PathBuf),

    /// The configured log root exists but cannot be used
    RootAccess { path: PathBuf, reason: String },

    /// No project directory with the given name
    ProjectNotFound(String),

    /// No session file with the given id under the named project
    SessionNotFound { project: String, session_id: String },

    /// A fan-out task failed to join
    Join(tokio::task::JoinError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "Engine error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::RootNotFound(path) => write!(
                f,
                "no log directory found at {}; nothing has been recorded there yet",
                path.display()
            ),
            Error::RootAccess { path, reason } => {
                write!(f, "cannot access log directory {}: {}", path.display(), reason)
            }
            Error::ProjectNotFound(name) => write!(f, "project not found: {}", name),
            Error::SessionNotFound {
                project,
                session_id,
            } => write!(f, "session {} not found in project {}", session_id, project),
            Error::Join(err) => write!(f, "scan task failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Join(err) => Some(err),
            Error::Config(_)
            | Error::RootNotFound(_)
            | Error::RootAccess { .. }
            | Error::ProjectNotFound(_)
            | Error::SessionNotFound { .. } => None,
        }
    }
}

impl From<costscope_engine::Error> for Error {
    fn from(err: costscope_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Join(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
