//! Page failure handling policy

use serde::{Deserialize, Serialize};

use super::Provider;

/// What a fetch does when one page's body cannot be parsed
///
/// Transport failures and malformed items always fail the whole fetch;
/// this only governs page-level parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageErrorPolicy {
    /// Fail the fetch and discard every page accumulated so far
    DiscardAll,
    /// Stop paginating and return what was accumulated before the bad page
    KeepPartial,
}

impl PageErrorPolicy {
    /// Historical behavior for each provider
    pub fn default_for(provider: Provider) -> Self {
        match provider {
            Provider::AlgoScan => PageErrorPolicy::DiscardAll,
            Provider::AlgoExplorer => PageErrorPolicy::KeepPartial,
        }
    }
}
