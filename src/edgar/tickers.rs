use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use url::Url;

use super::client::{EdgarClient, TICKER_URL};
use crate::utils::dirs;

/// A validated, upper-cased exchange symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(ticker: impl AsRef<str>) -> Result<Self> {
        let uppercase = ticker.as_ref().trim().to_uppercase();
        if uppercase.is_empty() {
            return Err(anyhow!("Ticker cannot be empty"));
        }
        if !uppercase
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(anyhow!(
                "Ticker must contain only alphanumeric characters, hyphens or dots: {}",
                ticker.as_ref()
            ));
        }
        Ok(Ticker(uppercase))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Deserialize)]
struct TickerEntry {
    cik_str: u64,
    ticker: String,
    title: String,
}

/// (ticker, company name, CIK digits)
pub type TickerData = (Ticker, String, String);

pub fn parse_tickers(json: &str) -> Result<Vec<TickerData>> {
    let entries: HashMap<String, TickerEntry> = serde_json::from_str(json)?;
    log::debug!("Found {} ticker entries", entries.len());
    entries
        .into_values()
        .map(|entry| {
            let ticker = Ticker::new(&entry.ticker)?;
            Ok((ticker, entry.title, entry.cik_str.to_string()))
        })
        .collect()
}

/// Downloads the registry's ticker table (cached under `data/edgar/`) and
/// parses it into lookup tuples.
pub async fn fetch_tickers(client: &EdgarClient) -> Result<Vec<TickerData>> {
    let url = Url::parse(TICKER_URL)?;
    let path = PathBuf::from(dirs::EDGAR_DIR).join("tickers.json");
    let content = client.fetch_cached(&url, &path).await?;
    parse_tickers(&content)
}

pub async fn cik_for_ticker(client: &EdgarClient, ticker: &Ticker) -> Result<String> {
    let tickers = fetch_tickers(client).await?;
    tickers
        .into_iter()
        .find(|(t, _, _)| t == ticker)
        .map(|(_, _, cik)| cik)
        .ok_or_else(|| anyhow!("No CIK found for ticker: {}", ticker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_is_uppercased_and_validated() {
        assert_eq!(Ticker::new("aapl").unwrap().as_str(), "AAPL");
        assert_eq!(Ticker::new("brk.b").unwrap().as_str(), "BRK.B");
        assert!(Ticker::new("").is_err());
        assert!(Ticker::new("AA PL").is_err());
    }

    #[test]
    fn parse_tickers_reads_the_registry_table() {
        let json = r#"{
            "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
            "1": {"cik_str": 789019, "ticker": "MSFT", "title": "MICROSOFT CORP"}
        }"#;
        let mut tickers = parse_tickers(json).unwrap();
        tickers.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[0].0.as_str(), "AAPL");
        assert_eq!(tickers[0].1, "Apple Inc.");
        assert_eq!(tickers[0].2, "320193");
    }
}
