//! Error types for the messenger

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Which handler collection a dispatch failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Message,
    Close,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Message => write!(f, "MessageHandler"),
            HandlerKind::Close => write!(f, "CloseHandler"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// File messenger requested without a path
    #[error("no filename provided")]
    MissingFilename,

    /// Log file could not be created
    #[error("failed to create {path}: {source}")]
    FileCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A registered handler returned an error, remaining handlers were skipped
    #[error("{kind} #{index} ({name}) returned error: {source}")]
    HandlerFailed {
        kind: HandlerKind,
        index: usize,
        name: String,
        #[source]
        source: Box<LoggerError>,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file creation error
    pub fn file_create(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileCreate {
            path: path.into(),
            source,
        }
    }

    /// Wrap the error returned by the handler at `index`
    pub fn handler_failed(
        kind: HandlerKind,
        index: usize,
        name: impl Into<String>,
        source: LoggerError,
    ) -> Self {
        LoggerError::HandlerFailed {
            kind,
            index,
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// The error returned by the failing handler, if this is a handler failure
    pub fn handler_source(&self) -> Option<&LoggerError> {
        match self {
            LoggerError::HandlerFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
