//! Navigate module
//!
//! Handles the client's working directory: the virtual path the client sees,
//! its mapping onto the server root, and directory changes.

mod filesystem;
mod operations;

// Re-export public types and functions
pub use filesystem::{FileSystemView, VirtualFileSystem};
pub use operations::{change_directory, resolve_virtual_path, virtual_to_real_path};
