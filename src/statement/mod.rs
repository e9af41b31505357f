//! Taxonomy-driven classification of company facts into a financial
//! statement. The engine is purely computational: it consumes a parsed fact
//! store, a parsed taxonomy, and a filter context, and returns a statement.
//! Fetching and file I/O live in the `edgar` collaborator modules.

pub mod assemble;
pub mod error;
pub mod facts;
pub mod model;
pub mod output;
pub mod taxonomy;

pub use assemble::{assemble, line_items, relevant_observations, resolve_facts};
pub use error::StatementError;
pub use model::{Fact, FactStore, FilterContext, LineItem, Observation};
pub use output::Statement;
pub use taxonomy::Taxonomy;
