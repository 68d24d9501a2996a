//! Shared server context
//!
//! State shared by every connection: the message catalog and the statistics.

use std::sync::Arc;

use crate::catalog::MessageCatalog;
use crate::statistics::ServerStatistics;

#[derive(Clone)]
pub struct ServerContext {
    catalog: Arc<dyn MessageCatalog>,
    statistics: Arc<ServerStatistics>,
}

impl ServerContext {
    pub fn new(catalog: Arc<dyn MessageCatalog>, statistics: Arc<ServerStatistics>) -> Self {
        Self {
            catalog,
            statistics,
        }
    }

    pub fn catalog(&self) -> &dyn MessageCatalog {
        self.catalog.as_ref()
    }

    pub fn statistics(&self) -> &ServerStatistics {
        &self.statistics
    }
}
