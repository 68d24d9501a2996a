//! FTP Protocol implementation
//!
//! Handles request parsing and command dispatch.

pub mod commands;
pub mod handlers;

pub use commands::{Command, Request};
pub use handlers::{CommandResult, CommandStatus, handle_command};
