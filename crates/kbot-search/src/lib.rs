//! Search side of the kbot engine.
//!
//! Builds fixed-policy queries against the external knowledge-base index,
//! executes them over HTTP, and normalizes results into a `SearchOutcome`
//! the response composer can consume.

pub mod client;
pub mod error;
pub mod executor;
pub mod query;

pub use client::{HttpSearchClient, SearchIndexClient};
pub use error::SearchError;
pub use executor::SearchQueryExecutor;
pub use query::{SearchMode, SearchOutcome, SearchQuery};
