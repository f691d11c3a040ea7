//! Fixed-policy query execution.

use std::sync::Arc;

use tracing::debug;

use crate::client::SearchIndexClient;
use crate::error::SearchError;
use crate::query::{SearchOutcome, SearchQuery};

/// Runs one fixed-policy query per turn against the index.
///
/// Errors are returned explicitly rather than swallowed; the caller decides
/// whether to fail open to an empty outcome. One attempt, no retries.
pub struct SearchQueryExecutor {
    client: Arc<dyn SearchIndexClient>,
}

impl SearchQueryExecutor {
    pub fn new(client: Arc<dyn SearchIndexClient>) -> Self {
        Self { client }
    }

    /// Execute the user utterance as-is against the question field.
    ///
    /// `raw_text` may be empty; it is passed through to the index verbatim
    /// with no validation or rejection.
    pub async fn execute(&self, raw_text: &str) -> Result<SearchOutcome, SearchError> {
        let query = SearchQuery::questions();
        let records = self.client.search(raw_text, &query).await?;

        debug!(hits = records.len(), "query executed");

        let mut outcome = SearchOutcome::from_records(records);
        // The index applies the cap itself; enforce it here too so a
        // misbehaving backend cannot inflate the suggestion list.
        outcome.truncate(SearchQuery::RESULT_LIMIT);
        Ok(outcome)
    }
}
