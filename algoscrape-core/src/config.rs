//! Configuration management
//!
//! Optional `settings.json` in the config directory:
//! ```json
//! {
//!   "requestTimeoutSecs": 30,
//!   "providers": {
//!     "algoscan": { "baseUrl": "https://algoscan.app/api/transactions/", "onPageError": "discardAll" },
//!     "algoexplorer": { "onPageError": "keepPartial" }
//!   }
//! }
//! ```
//!
//! Base URLs can also be overridden with `ALGOSCRAPE_ALGOSCAN_URL` and
//! `ALGOSCRAPE_ALGOEXPLORER_URL`, which take precedence over the file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::domain::result::{Error, Result};
use crate::domain::{Endpoint, PageErrorPolicy, Provider};

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Environment variable overriding the AlgoScan base URL
pub const ALGOSCAN_URL_ENV: &str = "ALGOSCRAPE_ALGOSCAN_URL";

/// Environment variable overriding the AlgoExplorer base URL
pub const ALGOEXPLORER_URL_ENV: &str = "ALGOSCRAPE_ALGOEXPLORER_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    request_timeout_secs: Option<u64>,
    #[serde(default)]
    providers: ProvidersSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProvidersSection {
    #[serde(default)]
    algoexplorer: ProviderSection,
    #[serde(default)]
    algoscan: ProviderSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderSection {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    on_page_error: Option<PageErrorPolicy>,
}

/// Resolved settings for one provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: Endpoint,
    pub page_error_policy: PageErrorPolicy,
}

impl ProviderConfig {
    fn default_for(provider: Provider) -> Self {
        Self {
            endpoint: Endpoint::new(provider),
            page_error_policy: PageErrorPolicy::default_for(provider),
        }
    }

    fn resolve(provider: Provider, section: &ProviderSection, env_url: Option<String>) -> Result<Self> {
        let endpoint = match env_url.or_else(|| section.base_url.clone()) {
            Some(url) => Endpoint::with_base_url(provider, &url)?,
            None => Endpoint::new(provider),
        };

        Ok(Self {
            endpoint,
            page_error_policy: section
                .on_page_error
                .unwrap_or_else(|| PageErrorPolicy::default_for(provider)),
        })
    }
}

/// Algoscrape configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub request_timeout: Duration,
    algoexplorer: ProviderConfig,
    algoscan: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_TIMEOUT,
            algoexplorer: ProviderConfig::default_for(Provider::AlgoExplorer),
            algoscan: ProviderConfig::default_for(Provider::AlgoScan),
        }
    }
}

impl Config {
    /// Load config from the config directory and process environment
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_with_env(config_dir, |key| std::env::var(key).ok())
    }

    /// Load config, reading environment overrides through `env`
    pub fn load_with_env<F>(config_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings_path = config_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::Config(format!("Invalid {}: {}", settings_path.display(), e))
            })?
        } else {
            SettingsFile::default()
        };

        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let request_timeout = match raw.request_timeout_secs {
            Some(0) => return Err(Error::Config("requestTimeoutSecs must be positive".to_string())),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            request_timeout,
            algoexplorer: ProviderConfig::resolve(
                Provider::AlgoExplorer,
                &raw.providers.algoexplorer,
                non_empty(ALGOEXPLORER_URL_ENV),
            )?,
            algoscan: ProviderConfig::resolve(
                Provider::AlgoScan,
                &raw.providers.algoscan,
                non_empty(ALGOSCAN_URL_ENV),
            )?,
        })
    }

    /// Settings for `provider`
    pub fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::AlgoExplorer => &self.algoexplorer,
            Provider::AlgoScan => &self.algoscan,
        }
    }

    fn provider_mut(&mut self, provider: Provider) -> &mut ProviderConfig {
        match provider {
            Provider::AlgoExplorer => &mut self.algoexplorer,
            Provider::AlgoScan => &mut self.algoscan,
        }
    }

    /// Point `provider` at a different base URL
    pub fn with_base_url(mut self, provider: Provider, base_url: &str) -> Result<Self> {
        self.provider_mut(provider).endpoint = Endpoint::with_base_url(provider, base_url)?;
        Ok(self)
    }

    /// Override the page error policy for `provider`
    pub fn with_page_error_policy(mut self, provider: Provider, policy: PageErrorPolicy) -> Self {
        self.provider_mut(provider).page_error_policy = policy;
        self
    }
}
