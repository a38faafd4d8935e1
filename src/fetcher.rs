//! The single I/O edge of the session engine: fetching a page's raw HTML
//! through the CORS proxy.

use thiserror::Error;

use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Input rejected before any network activity.
    #[error("not an http(s) URL: {0}")]
    InvalidUrl(String),
    /// The proxy answered with a non-success status.
    #[error("proxy returned status {0}")]
    Status(reqwest::StatusCode),
    /// Transport-level failure (DNS, connect, read, TLS...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fetch seam. The session controller only sees this trait, so tests drive
/// it with a mock and never touch the network.
pub trait PageFetcher {
    fn fetch(&self, target_url: &str) -> Result<String, FetchError>;
}

/// Real fetcher: one GET to the configured proxy endpoint, target passed as
/// the URL-encoded `quest` query parameter. No retry, no explicit timeout.
pub struct ProxyFetcher {
    settings: Settings,
    client: reqwest::blocking::Client,
}

impl ProxyFetcher {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl PageFetcher for ProxyFetcher {
    fn fetch(&self, target_url: &str) -> Result<String, FetchError> {
        // Guard before touching the network. Case-sensitive on purpose:
        // "HTTP://..." is not something the proxy accepts either.
        if !target_url.starts_with("http") {
            return Err(FetchError::InvalidUrl(target_url.to_string()));
        }

        let request_url = self.settings.proxy_url(target_url);
        log::debug!("[Fetcher] GET {}", request_url);

        let response = self.client.get(&request_url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text()?)
    }
}
