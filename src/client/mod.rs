//! Client connection management
//!
//! Handles the control connection, the per-connection session state and the
//! read-only session view used by reply templates.

pub mod handler;
pub mod session;
pub mod state;

pub use handler::handle_client;
pub use session::{SessionView, User};
pub use state::ClientSession;
