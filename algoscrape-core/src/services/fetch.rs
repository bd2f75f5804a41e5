//! Fetch service - paginated transaction history for one address

use std::sync::Arc;

use crate::adapters::algoexplorer::AlgoExplorerClient;
use crate::adapters::algoscan::AlgoScanClient;
use crate::config::Config;
use crate::domain::result::Result;
use crate::domain::{FetchResult, Provider};
use crate::ports::HttpTransport;

/// Fetches and normalizes transactions from the configured providers
pub struct FetchService {
    transport: Arc<dyn HttpTransport>,
    config: Config,
}

impl FetchService {
    pub fn new(transport: Arc<dyn HttpTransport>, config: Config) -> Self {
        Self { transport, config }
    }

    /// Fetch the transaction history of `address` from `provider`
    ///
    /// # Arguments
    /// * `max_pages` - Stop after this many pages; `None` or `Some(0)` fetches
    ///   until the provider runs out of data
    pub fn fetch(&self, provider: Provider, address: &str, max_pages: Option<u32>) -> Result<FetchResult> {
        let settings = self.config.provider(provider);
        let max_pages = max_pages.filter(|&n| n > 0);
        let transport = self.transport.as_ref();

        let result = match provider {
            Provider::AlgoScan => {
                AlgoScanClient::new(transport, &settings.endpoint, settings.page_error_policy)
                    .get_transactions(address, max_pages)?
            }
            Provider::AlgoExplorer => {
                AlgoExplorerClient::new(transport, &settings.endpoint, settings.page_error_policy)
                    .get_transactions(address, max_pages)?
            }
        };

        tracing::info!(
            provider = %provider,
            requests = result.requests,
            records = result.len(),
            "Fetched transactions"
        );

        Ok(result)
    }

    /// Fetch like [`fetch`](Self::fetch), turning any failure into an empty
    /// result and a logged warning
    pub fn fetch_or_empty(&self, provider: Provider, address: &str, max_pages: Option<u32>) -> FetchResult {
        match self.fetch(provider, address, max_pages) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(provider = %provider, kind = ?e.kind(), "Error fetching transaction data: {}", e);
                FetchResult::empty(provider)
            }
        }
    }
}
