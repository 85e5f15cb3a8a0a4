use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error types for logsight operations
#[derive(Debug)]
pub enum LogSightError {
    /// IO error (reading the log file, binding the listener, writing output)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Chart backend failure
    Render(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for LogSightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSightError::Io(err) => write!(f, "IO error: {err}"),
            LogSightError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LogSightError::Render(msg) => write!(f, "Render error: {msg}"),
            LogSightError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for LogSightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogSightError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LogSightError {
    fn from(err: std::io::Error) -> Self {
        LogSightError::Io(err)
    }
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for LogSightError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        LogSightError::Render(err.to_string())
    }
}

/// Every failure surfaces to the HTTP client as a generic server error.
impl IntoResponse for LogSightError {
    fn into_response(self) -> Response {
        crate::reporting::logging::log_error("Dashboard request failed", Some(&self));
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Type alias for Results using LogSightError
pub type Result<T> = std::result::Result<T, LogSightError>;
