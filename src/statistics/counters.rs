//! Atomic statistics counters shared by all connections.

use chrono::{DateTime, Utc};
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::statistics::Statistics;

/// Lock-free statistics, updated by connection tasks.
#[derive(Debug)]
pub struct ServerStatistics {
    start_time: DateTime<Utc>,
    total_connections: AtomicU64,
    current_connections: AtomicU64,
    total_logins: AtomicU64,
    current_logins: AtomicU64,
    total_anonymous_logins: AtomicU64,
    current_anonymous_logins: AtomicU64,
    total_uploads: AtomicU64,
    total_upload_bytes: AtomicU64,
    total_downloads: AtomicU64,
    total_download_bytes: AtomicU64,
    total_deletes: AtomicU64,
    total_directories_created: AtomicU64,
    total_directories_removed: AtomicU64,
}

impl Default for ServerStatistics {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

fn increment(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

// Current-value counters never go below zero.
fn decrement(counter: &AtomicU64) {
    let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| v.checked_sub(1));
}

impl ServerStatistics {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            total_connections: AtomicU64::new(0),
            current_connections: AtomicU64::new(0),
            total_logins: AtomicU64::new(0),
            current_logins: AtomicU64::new(0),
            total_anonymous_logins: AtomicU64::new(0),
            current_anonymous_logins: AtomicU64::new(0),
            total_uploads: AtomicU64::new(0),
            total_upload_bytes: AtomicU64::new(0),
            total_downloads: AtomicU64::new(0),
            total_download_bytes: AtomicU64::new(0),
            total_deletes: AtomicU64::new(0),
            total_directories_created: AtomicU64::new(0),
            total_directories_removed: AtomicU64::new(0),
        }
    }

    pub fn connection_opened(&self) {
        increment(&self.total_connections);
        increment(&self.current_connections);
        debug!(
            "Connection opened ({} current)",
            self.current_connections.load(Ordering::Relaxed)
        );
    }

    pub fn connection_closed(&self) {
        decrement(&self.current_connections);
    }

    pub fn login(&self, anonymous: bool) {
        increment(&self.total_logins);
        increment(&self.current_logins);
        if anonymous {
            increment(&self.total_anonymous_logins);
            increment(&self.current_anonymous_logins);
        }
    }

    pub fn logout(&self, anonymous: bool) {
        decrement(&self.current_logins);
        if anonymous {
            decrement(&self.current_anonymous_logins);
        }
    }

    pub fn file_uploaded(&self, bytes: u64) {
        increment(&self.total_uploads);
        self.total_upload_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn file_downloaded(&self, bytes: u64) {
        increment(&self.total_downloads);
        self.total_download_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn file_deleted(&self) {
        increment(&self.total_deletes);
    }

    pub fn directory_created(&self) {
        increment(&self.total_directories_created);
    }

    pub fn directory_removed(&self) {
        increment(&self.total_directories_removed);
    }
}

impl Statistics for ServerStatistics {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    fn total_connections(&self) -> u64 {
        self.total_connections.load(Ordering::Relaxed)
    }

    fn current_connections(&self) -> u64 {
        self.current_connections.load(Ordering::Relaxed)
    }

    fn total_logins(&self) -> u64 {
        self.total_logins.load(Ordering::Relaxed)
    }

    fn current_logins(&self) -> u64 {
        self.current_logins.load(Ordering::Relaxed)
    }

    fn total_anonymous_logins(&self) -> u64 {
        self.total_anonymous_logins.load(Ordering::Relaxed)
    }

    fn current_anonymous_logins(&self) -> u64 {
        self.current_anonymous_logins.load(Ordering::Relaxed)
    }

    fn total_uploads(&self) -> u64 {
        self.total_uploads.load(Ordering::Relaxed)
    }

    fn total_upload_bytes(&self) -> u64 {
        self.total_upload_bytes.load(Ordering::Relaxed)
    }

    fn total_downloads(&self) -> u64 {
        self.total_downloads.load(Ordering::Relaxed)
    }

    fn total_download_bytes(&self) -> u64 {
        self.total_download_bytes.load(Ordering::Relaxed)
    }

    fn total_deletes(&self) -> u64 {
        self.total_deletes.load(Ordering::Relaxed)
    }

    fn total_directories_created(&self) -> u64 {
        self.total_directories_created.load(Ordering::Relaxed)
    }

    fn total_directories_removed(&self) -> u64 {
        self.total_directories_removed.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_counters() {
        let stats = ServerStatistics::default();
        stats.connection_opened();
        stats.connection_opened();
        stats.connection_closed();
        assert_eq!(stats.total_connections(), 2);
        assert_eq!(stats.current_connections(), 1);
    }

    #[test]
    fn test_current_counters_saturate_at_zero() {
        let stats = ServerStatistics::default();
        stats.connection_closed();
        stats.logout(true);
        assert_eq!(stats.current_connections(), 0);
        assert_eq!(stats.current_logins(), 0);
        assert_eq!(stats.current_anonymous_logins(), 0);
    }

    #[test]
    fn test_anonymous_logins_tracked_separately() {
        let stats = ServerStatistics::default();
        stats.login(false);
        stats.login(true);
        stats.logout(true);
        assert_eq!(stats.total_logins(), 2);
        assert_eq!(stats.current_logins(), 1);
        assert_eq!(stats.total_anonymous_logins(), 1);
        assert_eq!(stats.current_anonymous_logins(), 0);
    }

    #[test]
    fn test_transfer_totals() {
        let stats = ServerStatistics::default();
        stats.file_uploaded(100);
        stats.file_uploaded(24);
        stats.file_downloaded(4096);
        stats.file_deleted();
        stats.directory_created();
        stats.directory_removed();
        assert_eq!(stats.total_uploads(), 2);
        assert_eq!(stats.total_upload_bytes(), 124);
        assert_eq!(stats.total_downloads(), 1);
        assert_eq!(stats.total_download_bytes(), 4096);
        assert_eq!(stats.total_deletes(), 1);
        assert_eq!(stats.total_directories_created(), 1);
        assert_eq!(stats.total_directories_removed(), 1);
    }
}
