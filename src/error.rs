//! Global error handling for treescript
//!
//! Every fallible operation in the crate returns [`Result`], so the binary
//! has a single place to turn failures into an exit status.

use std::io;
use thiserror::Error;

/// Global error type for treescript operations
#[derive(Error, Debug)]
pub enum TreeScriptError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory listing errors raised while walking the source tree
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TreeScriptError {
    /// Whether the error comes from how the tool was invoked rather than
    /// from the run itself
    pub fn is_invocation_error(&self) -> bool {
        matches!(self, Self::PathNotFound(_) | Self::InvalidArgument(_))
    }
}

/// Specialized Result type for treescript operations
pub type Result<T> = std::result::Result<T, TreeScriptError>;

/// Creates a TreeScriptError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TreeScriptError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
