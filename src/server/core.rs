use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::catalog::MessageResource;
use crate::client::handle_client;
use crate::error::ServerError;
use crate::server::config::ServerConfig;
use crate::server::context::ServerContext;
use crate::statistics::ServerStatistics;

pub struct Server {
    listener: TcpListener,
    context: ServerContext,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the control socket and prepares the shared context.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let socket = config.control_socket();
        let listener = TcpListener::bind(&socket)
            .await
            .map_err(|e| ServerError::Bind(socket.clone(), e))?;
        info!("Server bound to {}", socket);

        if let Err(e) = std::fs::create_dir_all(&config.server_root) {
            warn!("Failed to create server root directory: {}", e);
        } else {
            info!("Server root directory: {}", config.server_root);
        }

        let catalog = MessageResource::new(&config.default_language, &config.messages);
        info!(
            "Loaded reply templates (default language {}, extra languages {:?})",
            config.default_language,
            catalog.languages()
        );
        let context = ServerContext::new(Arc::new(catalog), Arc::new(ServerStatistics::default()));

        Ok(Self {
            listener,
            context,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn context(&self) -> &ServerContext {
        &self.context
    }

    /// Accepts connections until the task is dropped.
    pub async fn start(&self) {
        info!("Starting RAX FTP reply server on {}", self.config.control_socket());

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let context = self.context.clone();
                    let config = Arc::clone(&self.config);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_client(stream, context, config).await {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}
