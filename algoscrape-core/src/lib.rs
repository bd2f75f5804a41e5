//! Algoscrape Core - transaction history fetching for Algorand indexers
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Providers, transaction records, errors
//! - **ports**: Trait definitions for external dependencies (HttpTransport, RecordExporter)
//! - **services**: Fetch and export orchestration
//! - **adapters**: Concrete implementations (reqwest, AlgoScan, AlgoExplorer, CSV)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::http::ReqwestTransport;
use config::Config;
use services::{ExportService, FetchService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, ErrorKind, OperationResult, Result};
pub use domain::{Endpoint, FetchResult, PageErrorPolicy, Provider, TransactionRecord};
pub use services::ExportOutcome;

/// Main context for algoscrape operations
///
/// Holds the configuration and the services built from it.
pub struct AlgoscrapeContext {
    pub config: Config,
    pub fetch_service: FetchService,
    pub export_service: ExportService,
}

impl AlgoscrapeContext {
    /// Create a context from the settings in `config_dir`
    pub fn new(config_dir: &Path) -> Result<Self> {
        Self::from_config(Config::load(config_dir)?)
    }

    /// Create a context from an already resolved config
    pub fn from_config(config: Config) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.request_timeout)?);
        let fetch_service = FetchService::new(transport, config.clone());
        let export_service = ExportService::new();

        Ok(Self {
            config,
            fetch_service,
            export_service,
        })
    }
}
