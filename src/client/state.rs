//! Module `client`
//!
//! Defines the `ClientSession` struct holding the state of one FTP control
//! connection: addresses, timestamps, login state, working directory and
//! negotiated language.

use chrono::{DateTime, Utc};
use std::net::SocketAddr;

use crate::client::session::{SessionView, User};
use crate::navigate::{FileSystemView, VirtualFileSystem};

/// Represents the state of a connected FTP client.
#[derive(Debug, Clone)]
pub struct ClientSession {
    remote_addr: Option<SocketAddr>,
    local_addr: Option<SocketAddr>,
    creation_time: DateTime<Utc>,
    pending_username: Option<String>,
    user: Option<User>,
    login_time: Option<DateTime<Utc>>,
    last_access_time: DateTime<Utc>,
    file_system: Option<VirtualFileSystem>,
    language: Option<String>,
}

impl ClientSession {
    /// Creates a session for a freshly accepted connection.
    pub fn new(remote_addr: Option<SocketAddr>, local_addr: Option<SocketAddr>) -> Self {
        let now = Utc::now();
        Self {
            remote_addr,
            local_addr,
            creation_time: now,
            pending_username: None,
            user: None,
            login_time: None,
            last_access_time: now,
            file_system: None,
            language: None,
        }
    }

    /// Completes a login: records the user, the login time and the
    /// working directory view.
    pub fn login(&mut self, user: User, file_system: VirtualFileSystem) {
        self.pending_username = None;
        self.user = Some(user);
        self.login_time = Some(Utc::now());
        self.file_system = Some(file_system);
    }

    /// Resets the login state, keeping connection data.
    pub fn logout(&mut self) -> Option<User> {
        self.pending_username = None;
        self.login_time = None;
        self.file_system = None;
        self.user.take()
    }

    /// Marks activity on the connection.
    pub fn touch(&mut self) {
        self.last_access_time = Utc::now();
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns whether the client has successfully logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the username sent with USER and not yet confirmed by PASS.
    pub fn pending_username(&self) -> Option<&str> {
        self.pending_username.as_deref()
    }

    pub fn file_system_mut(&mut self) -> Option<&mut VirtualFileSystem> {
        self.file_system.as_mut()
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_pending_username(&mut self, username: Option<String>) {
        self.pending_username = username;
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    pub fn set_creation_time(&mut self, time: DateTime<Utc>) {
        self.creation_time = time;
    }

    pub fn set_login_time(&mut self, time: Option<DateTime<Utc>>) {
        self.login_time = time;
    }

    pub fn set_last_access_time(&mut self, time: DateTime<Utc>) {
        self.last_access_time = time;
    }
}

impl SessionView for ClientSession {
    fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote_addr
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn login_time(&self) -> Option<DateTime<Utc>> {
        self.login_time
    }

    fn last_access_time(&self) -> DateTime<Utc> {
        self.last_access_time
    }

    fn file_system_view(&self) -> Option<&dyn FileSystemView> {
        self.file_system.as_ref().map(|fs| fs as &dyn FileSystemView)
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
