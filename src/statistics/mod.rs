//! Server statistics
//!
//! Cumulative counters exposed to reply templates through `stat.*`.

mod counters;

pub use counters::ServerStatistics;

use chrono::{DateTime, Utc};

/// Read-only view of the server statistics.
///
/// Each read is independent; two values read for the same reply may come
/// from slightly different moments.
pub trait Statistics: Send + Sync {
    fn start_time(&self) -> DateTime<Utc>;

    fn total_connections(&self) -> u64;
    fn current_connections(&self) -> u64;

    fn total_logins(&self) -> u64;
    fn current_logins(&self) -> u64;
    fn total_anonymous_logins(&self) -> u64;
    fn current_anonymous_logins(&self) -> u64;

    fn total_uploads(&self) -> u64;
    fn total_upload_bytes(&self) -> u64;
    fn total_downloads(&self) -> u64;
    fn total_download_bytes(&self) -> u64;
    fn total_deletes(&self) -> u64;

    fn total_directories_created(&self) -> u64;
    fn total_directories_removed(&self) -> u64;
}
