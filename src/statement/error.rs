use thiserror::Error;

/// Setup failures for one assembly run. Once both inputs parse, assembly
/// itself cannot fail: absent tags and empty filter results are expected data
/// outcomes, not errors.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("malformed company facts payload: {0}")]
    MalformedFacts(#[source] serde_json::Error),

    #[error("malformed taxonomy definition: {0}")]
    MalformedTaxonomy(#[source] serde_json::Error),
}
