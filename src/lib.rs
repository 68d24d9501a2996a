pub mod catalog;
pub mod client;
pub mod error;
pub mod middleware;
pub mod navigate;
pub mod protocol;
pub mod reply;
pub mod server;
pub mod statistics;
pub mod template;
pub mod utils;

pub use reply::{Reply, translate};
pub use server::{Server, ServerConfig, ServerContext};
