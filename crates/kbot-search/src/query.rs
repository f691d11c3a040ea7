//! Query model: the fixed per-turn policy and the normalized result.

use serde::{Deserialize, Serialize};

use kbot_core::KnowledgeRecord;

/// How query terms combine. The engine always requires all terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    All,
    Any,
}

/// One query's parameters. Constructed fresh every turn; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub search_mode: SearchMode,
    /// Result cap applied by the index.
    pub top: usize,
    /// Index fields the match is restricted to.
    pub search_fields: Vec<String>,
    /// OData-style filter expression. The engine never filters.
    pub filter: Option<String>,
}

impl SearchQuery {
    /// Result cap fixed by response policy: at most three candidates.
    pub const RESULT_LIMIT: usize = 3;

    /// The only index field queries match against.
    pub const QUESTION_FIELD: &'static str = "Question";

    /// The fixed policy query: match-all over the question field, top 3,
    /// no filter.
    pub fn questions() -> Self {
        Self {
            search_mode: SearchMode::All,
            top: Self::RESULT_LIMIT,
            search_fields: vec![Self::QUESTION_FIELD.to_string()],
            filter: None,
        }
    }
}

/// Normalized result of one query attempt.
///
/// Holds records in index ranking order, never re-sorted. An empty outcome
/// covers both "zero matches" and "execution failed"; downstream code must
/// not distinguish the two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    records: Vec<KnowledgeRecord>,
}

impl SearchOutcome {
    /// The explicit empty outcome.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap records as returned by the index, preserving their order.
    pub fn from_records(records: Vec<KnowledgeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[KnowledgeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop records past `limit`, keeping ranking order.
    pub fn truncate(&mut self, limit: usize) {
        self.records.truncate(limit);
    }
}
