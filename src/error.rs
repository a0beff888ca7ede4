use std::fmt;

/// Unified error type for the android-autostart crate.
#[derive(Debug, Clone)]
pub enum CoreError {
    /// A required command argument was absent or not a string.
    InvalidArguments(String),
    /// Platform-level fault while handing off a launch.
    Internal(String),
}

impl CoreError {
    /// Stable code reported across the plugin boundary.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            CoreError::Internal(_) => "INTERNAL",
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            CoreError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
