//! Transaction indexer providers
//!
//! The provider set is closed: every dispatch over [`Provider`] is an
//! exhaustive `match`, so adding a variant is a compile-time change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use super::result::{Error, Result};

const ALGOEXPLORER_BASE_URL: &str = "https://indexer.algoexplorerapi.io/rl/v1/transactions";
const ALGOSCAN_BASE_URL: &str = "https://algoscan.app/api/transactions/";

/// A supported transaction indexing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    AlgoExplorer,
    AlgoScan,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::AlgoExplorer, Provider::AlgoScan];

    /// Stable lowercase identifier used by the CLI, settings and logs
    pub fn name(&self) -> &'static str {
        match self {
            Provider::AlgoExplorer => "algoexplorer",
            Provider::AlgoScan => "algoscan",
        }
    }

    /// Production base URL
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::AlgoExplorer => ALGOEXPLORER_BASE_URL,
            Provider::AlgoScan => ALGOSCAN_BASE_URL,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algoexplorer" => Ok(Provider::AlgoExplorer),
            "algoscan" => Ok(Provider::AlgoScan),
            other => Err(Error::validation(format!(
                "Unknown provider '{}' (expected one of: algoexplorer, algoscan)",
                other
            ))),
        }
    }
}

/// The base URL actually requested for a provider
///
/// Defaults to the provider's production URL; an override points the same
/// pagination protocol at a different host (staging, local mock server).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    provider: Provider,
    base_url: String,
}

impl Endpoint {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            base_url: provider.base_url().to_string(),
        }
    }

    /// Use `base_url` instead of the production URL
    ///
    /// The override must be an absolute http(s) URL. It is used verbatim,
    /// so AlgoScan overrides should keep their trailing slash.
    pub fn with_base_url(provider: Provider, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            Error::Config(format!("Invalid {} base URL '{}': {}", provider, base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "{} base URL must use http or https",
                provider
            )));
        }

        Ok(Self {
            provider,
            base_url: base_url.to_string(),
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
