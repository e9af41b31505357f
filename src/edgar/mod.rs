//! Registry collaborators: the HTTP client, ticker resolution and filing
//! form types. Everything here is I/O plumbing around the `statement` engine.

pub mod client;
pub mod report;
pub mod tickers;

pub use client::EdgarClient;
pub use report::ReportType;
pub use tickers::Ticker;
