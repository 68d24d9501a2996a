//! Error handlers
//!
//! Maps errors to FTP reply codes and basic reply text.

use crate::error::types::NavigateError;
use crate::reply::codes;

/// Convert a navigation error to an FTP reply code
pub fn navigate_error_code(err: &NavigateError) -> u16 {
    match err {
        NavigateError::InvalidPath(_) => codes::SYNTAX_ERROR_IN_ARGUMENTS,
        NavigateError::DirectoryNotFound(_)
        | NavigateError::NotADirectory(_)
        | NavigateError::PermissionDenied(_)
        | NavigateError::PathTraversal(_) => codes::FILE_UNAVAILABLE,
    }
}

/// Basic reply text for a navigation error
pub fn navigate_error_message(err: &NavigateError) -> &'static str {
    match err {
        NavigateError::InvalidPath(_) => "Invalid path.",
        NavigateError::DirectoryNotFound(_) => "No such directory.",
        NavigateError::NotADirectory(_) => "Not a directory.",
        NavigateError::PermissionDenied(_) => "Permission denied.",
        NavigateError::PathTraversal(_) => "Access outside the server root is not allowed.",
    }
}
