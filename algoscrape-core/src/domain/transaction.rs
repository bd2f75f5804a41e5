//! Normalized transaction records

use serde::{Deserialize, Serialize};

use super::Provider;

/// A transaction reshaped from a provider-specific payload
///
/// Field order matters: the CSV exporter derives its header row from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Sender address
    pub from: String,
    /// Amount in base units (microAlgos or asset base units)
    pub amount: u64,
}

impl TransactionRecord {
    pub fn new(from: impl Into<String>, amount: u64) -> Self {
        Self {
            from: from.into(),
            amount,
        }
    }
}

/// Records accumulated across the pages of one fetch, in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub provider: Provider,
    pub records: Vec<TransactionRecord>,
    /// Page requests issued, including the one that signalled exhaustion
    pub requests: u32,
}

impl FetchResult {
    pub fn empty(provider: Provider) -> Self {
        Self {
            provider,
            records: Vec::new(),
            requests: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
