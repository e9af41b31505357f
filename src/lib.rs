pub mod core;
pub mod edgar;
pub mod statement;
pub mod utils;

// Re-exports
pub use edgar::{EdgarClient, ReportType, Ticker};
pub use statement::{assemble, FactStore, FilterContext, Statement, StatementError, Taxonomy};
