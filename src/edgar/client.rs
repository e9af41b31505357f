use anyhow::{anyhow, Result};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::utils::dirs;

pub const EDGAR_DATA_URL: &str = "https://data.sec.gov";
pub const TICKER_URL: &str = "https://www.sec.gov/files/company_tickers.json";

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Thin wrapper over `reqwest` that carries the SEC-required identification
/// header and retries failed requests a bounded number of times.
pub struct EdgarClient {
    client: Client,
    user_agent: String,
}

impl EdgarClient {
    pub fn new(user_agent: impl Into<String>) -> Self {
        EdgarClient {
            client: Client::new(),
            user_agent: user_agent.into(),
        }
    }

    /// Fetches a JSON document, retrying up to `MAX_ATTEMPTS` times with a
    /// fixed delay before giving up.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        let mut last_err = None;
        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    log::warn!(
                        "request to {} failed (attempt {}/{}): {}",
                        url,
                        attempt,
                        MAX_ATTEMPTS,
                        e
                    );
                    last_err = Some(e);
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow!("request to {} failed", url)))
    }

    async fn try_fetch(&self, url: &Url) -> Result<String> {
        log::debug!("Fetching URL: {}", url);
        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT_ENCODING, "gzip, deflate")
            .send()
            .await?;

        log::debug!("Response status: {}", response.status());
        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP request failed with status: {}",
                response.status()
            ));
        }

        let content = response.text().await?;
        log::debug!("Received content length: {}", content.len());

        // A truncated body would otherwise get cached and poison later runs.
        serde_json::from_str::<serde_json::Value>(&content)
            .map_err(|e| anyhow!("Incomplete or invalid JSON response: {}", e))?;

        Ok(content)
    }

    /// Returns the on-disk copy when present, otherwise fetches and caches.
    pub async fn fetch_cached(&self, url: &Url, path: &Path) -> Result<String> {
        if path.exists() {
            log::debug!("Using cached copy at {:?}", path);
            return Ok(fs::read_to_string(path)?);
        }
        let content = self.fetch(url).await?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &content)?;
        log::debug!("Saved content to {:?}", path);
        Ok(content)
    }

    /// Fetches the raw `companyfacts` payload for a CIK, zero-padded to the
    /// ten digits the registry expects.
    pub async fn company_facts(&self, cik: &str) -> Result<String> {
        let padded = format!("{:0>10}", cik);
        let url = Url::parse(&format!(
            "{}/api/xbrl/companyfacts/CIK{}.json",
            EDGAR_DATA_URL, padded
        ))?;
        let path = PathBuf::from(dirs::EDGAR_FACTS_DIR).join(format!("CIK{}.json", padded));
        log::info!("Fetching company facts from {}", url);
        self.fetch_cached(&url, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_cached_prefers_the_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cached.json");
        fs::write(&path, r#"{"cached": true}"#).unwrap();

        // Unroutable URL: the request would fail if it were attempted.
        let client = EdgarClient::new("test test@example.com");
        let url = Url::parse("http://127.0.0.1:1/never.json").unwrap();
        let content = client.fetch_cached(&url, &path).await.unwrap();
        assert_eq!(content, r#"{"cached": true}"#);
    }
}
