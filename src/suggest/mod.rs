//! Autocomplete lookups for tags.
//!
//! - **source.rs**: where suggestions come from (HTTP endpoint or a fixture)
//! - **filter.rs**: dedup by id and client-side query filtering
//! - **cache.rs**: per-query freshness windows
//! - **service.rs**: cache plus background dispatch of fetches

use thiserror::Error;

pub mod cache;
pub mod filter;
pub mod service;
pub mod source;
pub mod suggestion;

pub use cache::QueryCache;
pub use filter::{dedup_by_id, filter_suggestions, lookup_query};
pub use service::{Fetched, Lookup, SuggestionService};
pub use source::{FixtureSource, HttpSource};
pub use suggestion::{Suggestion, SuggestionValue};

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup service returned status {0}")]
    Status(u16),

    #[error("could not decode suggestions: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read suggestion fixture: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can answer a suggestion query.
///
/// Sources may return duplicates and may ignore the query entirely;
/// [`lookup`] cleans up after them.
pub trait SuggestionSource: Send + Sync {
    fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError>;
}

/// Fetches from `source`, then dedups and filters client-side.
pub fn lookup(source: &dyn SuggestionSource, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
    let fetched = source.fetch(query)?;
    Ok(filter_suggestions(dedup_by_id(fetched), query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_dedups_and_filters_unfiltering_backend() {
        let source = FixtureSource::new(vec![
            Suggestion::new("1", "rent", "housing", SuggestionValue::Number(900.0)),
            Suggestion::new("1", "rent (dup)", "housing", SuggestionValue::Number(1.0)),
            Suggestion::new("2", "food", "groceries", SuggestionValue::Number(150.0)),
        ]);
        let found = lookup(&source, "REN").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "rent");
    }

    #[test]
    fn test_status_error_message() {
        let err = SuggestError::Status(503);
        assert_eq!(err.to_string(), "lookup service returned status 503");
    }
}
