//! Client session view
//!
//! Read-only view of a connection's state, as consumed by reply templates.

use chrono::{DateTime, Utc};
use std::net::SocketAddr;

use crate::navigate::FileSystemView;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    home_directory: String,
}

impl User {
    pub fn new(name: impl Into<String>, home_directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home_directory: home_directory.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home_directory(&self) -> &str {
        &self.home_directory
    }

    /// `anonymous` and `ftp` are the conventional anonymous login names.
    pub fn is_anonymous(&self) -> bool {
        self.name.eq_ignore_ascii_case("anonymous") || self.name.eq_ignore_ascii_case("ftp")
    }
}

/// Read access to one client connection.
///
/// Addresses are `None` when the endpoint is not an IP socket.
pub trait SessionView {
    fn remote_addr(&self) -> Option<SocketAddr>;

    fn local_addr(&self) -> Option<SocketAddr>;

    /// When the connection was accepted.
    fn creation_time(&self) -> DateTime<Utc>;

    fn user(&self) -> Option<&User>;

    fn login_time(&self) -> Option<DateTime<Utc>>;

    fn last_access_time(&self) -> DateTime<Utc>;

    fn file_system_view(&self) -> Option<&dyn FileSystemView>;

    /// Negotiated reply language tag, if the client sent `LANG`.
    fn language(&self) -> Option<&str>;
}
