//! Logging middleware
//!
//! Provides request and reply logging functionality.

use log::{debug, info};

use crate::protocol::Request;
use crate::reply::Reply;

/// Log a client connection
pub fn log_connection(client_addr: &str) {
    info!("Client connected: {}", client_addr);
}

/// Log a client command. Passwords are masked.
pub fn log_command(client_addr: &str, request: &Request) {
    if request.command() == "PASS" {
        info!("Client {} executed: PASS ****", client_addr);
    } else {
        info!("Client {} executed: {}", client_addr, request.line());
    }
}

/// Log a reply sent to a client
pub fn log_reply(client_addr: &str, reply: &Reply) {
    debug!("Sending response to client {}: {}", client_addr, reply.to_string().trim_end());
}
