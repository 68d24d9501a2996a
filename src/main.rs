//! RAX FTP Reply Server - Entry Point
//!
//! Serves FTP control connections whose replies are rendered from
//! configurable message templates.

use log::{error, info};

use rax_ftp_reply::error::ServerError;
use rax_ftp_reply::utils::logging::setup_logging;
use rax_ftp_reply::{Server, ServerConfig};

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;

    info!("Launching FTP reply server...");

    let server = Server::bind(config).await?;
    server.start().await;
    Ok(())
}

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default `info` level
    setup_logging();

    if let Err(e) = run().await {
        error!("Server startup failed: {}", e);
        std::process::exit(1);
    }
}
