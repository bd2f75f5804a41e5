//! Blocking HTTP transport backed by reqwest

use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::result::{Error, Result};
use crate::ports::HttpTransport;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport issuing plain GET requests
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("algoscrape/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::transport(format!(
                "Connection timed out after {} seconds",
                self.timeout.as_secs()
            ))
        } else if error.is_connect() {
            Error::transport(format!("Unable to connect: {}", error))
        } else {
            Error::transport(format!("Request failed: {}", error))
        }
    }

    /// Check response status and return appropriate errors
    fn check_response_status(&self, url: &str, response: &reqwest::blocking::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            404 => Err(Error::transport(format!("Resource not found: {}", url))),
            429 => Err(Error::transport(
                "Rate limit exceeded. Please wait a moment and try again.",
            )),
            code => Err(Error::transport(format!("HTTP {} from {}", code, url))),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(url, &response)?;

        response
            .text()
            .map_err(|e| Error::transport(format!("Failed to read response body: {}", e)))
    }
}
