//! Error types
//!
//! Defines domain-specific error types for the working directory view and
//! the demonstration server.

use std::fmt;
use std::io;

/// Working directory lookup and navigation errors
#[derive(Debug)]
pub enum NavigateError {
    InvalidPath(String),
    DirectoryNotFound(String),
    NotADirectory(String),
    PermissionDenied(String),
    PathTraversal(String),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            NavigateError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            NavigateError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            NavigateError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            NavigateError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
        }
    }
}

impl std::error::Error for NavigateError {}

/// Errors raised while starting or running the server
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Bind(String, io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Bind(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}
