use super::Suggestion;
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct Entry {
    suggestions: Vec<Suggestion>,
    fetched_at: Instant,
}

/// Lookup results keyed by query text.
///
/// The full list (empty query) and filtered queries have separate freshness
/// windows.
pub struct QueryCache {
    entries: HashMap<String, Entry>,
    full_list_ttl: Duration,
    query_ttl: Duration,
}

impl QueryCache {
    pub fn new(full_list_ttl: Duration, query_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            full_list_ttl,
            query_ttl,
        }
    }

    fn ttl_for(&self, query: &str) -> Duration {
        if query.is_empty() {
            self.full_list_ttl
        } else {
            self.query_ttl
        }
    }

    fn is_fresh(&self, query: &str, entry: &Entry, now: Instant) -> bool {
        now.saturating_duration_since(entry.fetched_at) < self.ttl_for(query)
    }

    /// Cached results for `query`, if still fresh at `now`.
    pub fn get(&self, query: &str, now: Instant) -> Option<&[Suggestion]> {
        self.entries
            .get(query)
            .filter(|entry| self.is_fresh(query, entry, now))
            .map(|entry| entry.suggestions.as_slice())
    }

    /// Cached results regardless of age.
    pub fn get_stale(&self, query: &str) -> Option<&[Suggestion]> {
        self.entries.get(query).map(|entry| entry.suggestions.as_slice())
    }

    pub fn insert(&mut self, query: &str, suggestions: Vec<Suggestion>, now: Instant) {
        self.prune(now);
        self.entries.insert(
            query.to_string(),
            Entry {
                suggestions,
                fetched_at: now,
            },
        );
    }

    /// Drops expired filtered entries. The full list is kept so the editor
    /// can keep resolving tags while a refresh is in flight.
    fn prune(&mut self, now: Instant) {
        let query_ttl = self.query_ttl;
        self.entries.retain(|query, entry| {
            query.is_empty() || now.saturating_duration_since(entry.fetched_at) < query_ttl
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
