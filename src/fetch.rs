use std::time::Duration;

use tracing::warn;

use crate::error::ScrapeError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 1000;

/// HTTP client for profile and launch pages. One instance is shared by all
/// workers; timeout expiry surfaces as a fetch failure like any other.
pub struct PageClient {
    http: reqwest::Client,
}

impl PageClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("yc_profiles/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// GET one page and return its body. Non-2xx responses are errors
    /// carrying the status code.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, None, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::fetch(
                url,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch(url, Some(status.as_u16()), e))
    }

    /// Fetch with exponential backoff on rate limits and transient server
    /// errors. Other failures return immediately.
    pub async fn fetch_with_retry(&self, url: &str) -> Result<String, ScrapeError> {
        let mut attempt = 0;
        loop {
            match self.fetch(url).await {
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
                    warn!(
                        "retryable failure (attempt {}/{}): {}; backing off {:.1}s",
                        attempt + 1,
                        MAX_RETRIES,
                        e,
                        backoff.as_secs_f64()
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
