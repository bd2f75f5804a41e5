//! AlgoExplorer pagination protocol
//!
//! Page-number pagination against
//! `{base}?page={n}&limit=50&address={address}`, starting at page 1.
//! A body without a `transactions` array marks the end of data.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::amount::AmountField;
use crate::domain::result::{Error, Result};
use crate::domain::{Endpoint, FetchResult, PageErrorPolicy, Provider, TransactionRecord};
use crate::ports::HttpTransport;

/// Transactions requested per page
pub const PAGE_LIMIT: u32 = 50;

/// First page number of the AlgoExplorer API
const FIRST_PAGE: u32 = 1;

/// AlgoExplorer transaction as consumed from the API
///
/// Asset transfers carry their amount in `asset-transfer-transaction`,
/// Algo payments in `payment-transaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlgoExplorerTransaction {
    pub sender: String,
    #[serde(rename = "asset-transfer-transaction", default)]
    pub asset_transfer: Option<JsonValue>,
    #[serde(rename = "payment-transaction", default)]
    pub payment: Option<JsonValue>,
}

impl AlgoExplorerTransaction {
    /// Amount of the transfer, preferring the asset-transfer sub-object
    pub fn amount(&self) -> Result<u64> {
        let (source, value) = match self.asset_transfer.as_ref().filter(|v| is_populated(v)) {
            Some(v) => ("asset-transfer-transaction", v),
            None => (
                "payment-transaction",
                self.payment.as_ref().ok_or_else(|| {
                    Error::shape(format!(
                        "AlgoExplorer transaction from {} has neither asset-transfer-transaction nor payment-transaction",
                        self.sender
                    ))
                })?,
            ),
        };

        AmountField::deserialize(value)
            .map(|field| field.amount)
            .map_err(|e| Error::shape(format!("AlgoExplorer {}.amount: {}", source, e)))
    }
}

/// Null and empty objects count as absent
fn is_populated(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// AlgoExplorer API client
pub struct AlgoExplorerClient<'a> {
    transport: &'a dyn HttpTransport,
    base_url: &'a str,
    policy: PageErrorPolicy,
}

impl<'a> AlgoExplorerClient<'a> {
    pub fn new(transport: &'a dyn HttpTransport, endpoint: &'a Endpoint, policy: PageErrorPolicy) -> Self {
        Self {
            transport,
            base_url: endpoint.base_url(),
            policy,
        }
    }

    fn page_url(&self, address: &str, page: u32) -> String {
        format!(
            "{}?page={}&limit={}&address={}",
            self.base_url, page, PAGE_LIMIT, address
        )
    }

    /// Fetch pages for `address` until the API stops returning transactions
    ///
    /// Pages are numbered from 1 and the limit check compares against the
    /// page about to be requested, so `max_pages = k` issues at most `k - 1`
    /// requests.
    pub fn get_transactions(&self, address: &str, max_pages: Option<u32>) -> Result<FetchResult> {
        let mut result = FetchResult::empty(Provider::AlgoExplorer);
        let mut page = FIRST_PAGE;

        loop {
            if max_pages.is_some_and(|limit| page == limit) {
                break;
            }

            let url = self.page_url(address, page);
            tracing::debug!(provider = "algoexplorer", page, %url, "Requesting page");
            result.requests += 1;
            let body = self.transport.get(&url)?;

            let items = match parse_page(&body) {
                Ok(items) => items,
                Err(e) => match self.policy {
                    PageErrorPolicy::KeepPartial => {
                        tracing::debug!(provider = "algoexplorer", page, error = %e, "No transactions in page, stopping");
                        break;
                    }
                    PageErrorPolicy::DiscardAll => return Err(e),
                },
            };

            for item in items {
                result.records.push(reshape(item)?);
            }

            page += 1;
        }

        Ok(result)
    }
}

/// Extract the raw `transactions` array from a page body
fn parse_page(body: &str) -> Result<Vec<JsonValue>> {
    let mut value: JsonValue = serde_json::from_str(body)
        .map_err(|e| Error::parse(format!("AlgoExplorer page is not JSON: {}", e)))?;

    match value.get_mut("transactions").map(JsonValue::take) {
        Some(JsonValue::Array(items)) => Ok(items),
        Some(_) => Err(Error::parse("AlgoExplorer 'transactions' is not an array")),
        None => Err(Error::parse("AlgoExplorer page has no 'transactions' field")),
    }
}

/// Reshape one raw item into a record
fn reshape(item: JsonValue) -> Result<TransactionRecord> {
    let tx: AlgoExplorerTransaction = serde_json::from_value(item)
        .map_err(|e| Error::shape(format!("AlgoExplorer transaction: {}", e)))?;
    let amount = tx.amount()?;
    Ok(TransactionRecord::new(tx.sender, amount))
}
