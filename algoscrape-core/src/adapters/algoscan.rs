//! AlgoScan pagination protocol
//!
//! Offset pagination against `{base}{address}?offset={n}`. Each page holds
//! up to 20 transactions; an empty JSON array marks the end of data.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::amount::deserialize_amount;
use crate::domain::result::{Error, Result};
use crate::domain::{Endpoint, FetchResult, PageErrorPolicy, Provider, TransactionRecord};
use crate::ports::HttpTransport;

/// Fixed page size of the AlgoScan API
pub const PAGE_SIZE: u64 = 20;

/// AlgoScan transaction as consumed from the API
#[derive(Debug, Clone, Deserialize)]
pub struct AlgoScanTransaction {
    pub sender: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: u64,
}

impl From<AlgoScanTransaction> for TransactionRecord {
    fn from(tx: AlgoScanTransaction) -> Self {
        TransactionRecord::new(tx.sender, tx.amount)
    }
}

/// Loop state carried between page requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    page: u32,
    offset: u64,
}

impl Cursor {
    fn next(self) -> Self {
        Self {
            page: self.page + 1,
            offset: self.offset + PAGE_SIZE,
        }
    }
}

/// AlgoScan API client
pub struct AlgoScanClient<'a> {
    transport: &'a dyn HttpTransport,
    base_url: &'a str,
    policy: PageErrorPolicy,
}

impl<'a> AlgoScanClient<'a> {
    pub fn new(transport: &'a dyn HttpTransport, endpoint: &'a Endpoint, policy: PageErrorPolicy) -> Self {
        Self {
            transport,
            base_url: endpoint.base_url(),
            policy,
        }
    }

    fn page_url(&self, address: &str, offset: u64) -> String {
        format!("{}{}?offset={}", self.base_url, address, offset)
    }

    /// Fetch every page for `address`, or the first `max_pages` of them
    ///
    /// Transport failures and malformed items fail the whole fetch. A page
    /// that is not a JSON array is handled according to the client's
    /// [`PageErrorPolicy`].
    pub fn get_transactions(&self, address: &str, max_pages: Option<u32>) -> Result<FetchResult> {
        let mut result = FetchResult::empty(Provider::AlgoScan);
        let mut cursor = Cursor::default();

        loop {
            if max_pages.is_some_and(|limit| cursor.page == limit) {
                break;
            }

            let url = self.page_url(address, cursor.offset);
            tracing::debug!(provider = "algoscan", page = cursor.page, %url, "Requesting page");
            result.requests += 1;
            let body = self.transport.get(&url)?;

            let items = match parse_page(&body) {
                Ok(items) => items,
                Err(e) => match self.policy {
                    PageErrorPolicy::DiscardAll => return Err(e),
                    PageErrorPolicy::KeepPartial => {
                        tracing::warn!(provider = "algoscan", page = cursor.page, error = %e, "Stopping at unreadable page");
                        break;
                    }
                },
            };

            if items.is_empty() {
                break;
            }

            for item in items {
                result.records.push(reshape(item)?);
            }

            cursor = cursor.next();
        }

        Ok(result)
    }
}

/// Parse a page body into its raw items
fn parse_page(body: &str) -> Result<Vec<JsonValue>> {
    serde_json::from_str::<Vec<JsonValue>>(body)
        .map_err(|e| Error::parse(format!("AlgoScan page is not a transaction array: {}", e)))
}

/// Reshape one raw item into a record
fn reshape(item: JsonValue) -> Result<TransactionRecord> {
    serde_json::from_value::<AlgoScanTransaction>(item)
        .map(TransactionRecord::from)
        .map_err(|e| Error::shape(format!("AlgoScan transaction: {}", e)))
}
