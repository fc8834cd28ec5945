use super::{lookup, QueryCache, Suggestion, SuggestionSource};
use std::collections::{HashSet, VecDeque};
use std::io;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

/// Outcome of [`SuggestionService::request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Served from cache.
    Ready(Vec<Suggestion>),
    /// A fetch is in flight; its result arrives through `poll`.
    Pending,
}

/// A completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

enum Dispatch {
    Inline {
        source: Arc<dyn SuggestionSource>,
        completed: VecDeque<Fetched>,
    },
    Worker {
        jobs: Sender<String>,
        results: Receiver<Fetched>,
    },
}

/// Query cache in front of a suggestion source.
///
/// Fetches either run on a background worker thread or inline in
/// `request`. Either way results are only handed out by `poll`, so callers
/// see the same flow in both modes.
pub struct SuggestionService {
    cache: QueryCache,
    dispatch: Dispatch,
    in_flight: HashSet<String>,
}

impl SuggestionService {
    /// Runs every fetch synchronously inside `request`.
    pub fn inline(source: Arc<dyn SuggestionSource>, cache: QueryCache) -> Self {
        Self {
            cache,
            dispatch: Dispatch::Inline {
                source,
                completed: VecDeque::new(),
            },
            in_flight: HashSet::new(),
        }
    }

    /// Starts a worker thread that performs fetches in request order.
    pub fn spawn(source: Arc<dyn SuggestionSource>, cache: QueryCache) -> io::Result<Self> {
        let (jobs_tx, jobs_rx) = channel::<String>();
        let (results_tx, results_rx) = channel::<Fetched>();

        thread::Builder::new()
            .name("suggest-worker".to_string())
            .spawn(move || {
                for query in jobs_rx.iter() {
                    let suggestions = resolve(source.as_ref(), &query);
                    if results_tx.send(Fetched { query, suggestions }).is_err() {
                        break;
                    }
                }
                debug!("suggestion worker stopped");
            })?;

        Ok(Self {
            cache,
            dispatch: Dispatch::Worker {
                jobs: jobs_tx,
                results: results_rx,
            },
            in_flight: HashSet::new(),
        })
    }

    /// Cached results when fresh; otherwise dispatches a fetch unless one is
    /// already in flight for the same query.
    pub fn request(&mut self, query: &str, now: Instant) -> Lookup {
        if let Some(hit) = self.cache.get(query, now) {
            return Lookup::Ready(hit.to_vec());
        }

        if self.in_flight.insert(query.to_string()) {
            debug!(query, "dispatching suggestion fetch");
            match &mut self.dispatch {
                Dispatch::Inline { source, completed } => {
                    let suggestions = resolve(source.as_ref(), query);
                    completed.push_back(Fetched {
                        query: query.to_string(),
                        suggestions,
                    });
                }
                Dispatch::Worker { jobs, .. } => {
                    if jobs.send(query.to_string()).is_err() {
                        warn!(query, "suggestion worker is gone");
                        self.in_flight.remove(query);
                    }
                }
            }
        }

        Lookup::Pending
    }

    /// Drains completed fetches into the cache and returns them.
    pub fn poll(&mut self, now: Instant) -> Vec<Fetched> {
        let mut done = Vec::new();
        match &mut self.dispatch {
            Dispatch::Inline { completed, .. } => done.extend(completed.drain(..)),
            Dispatch::Worker { results, .. } => loop {
                match results.try_recv() {
                    Ok(fetched) => done.push(fetched),
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                }
            },
        }

        for fetched in &done {
            self.in_flight.remove(&fetched.query);
            self.cache
                .insert(&fetched.query, fetched.suggestions.clone(), now);
        }
        done
    }

    pub fn is_in_flight(&self, query: &str) -> bool {
        self.in_flight.contains(query)
    }

    pub fn cached(&self, query: &str, now: Instant) -> Option<&[Suggestion]> {
        self.cache.get(query, now)
    }

    /// Last known results for `query`, even if past their freshness window.
    pub fn last_known(&self, query: &str) -> Option<&[Suggestion]> {
        self.cache.get_stale(query)
    }
}

/// Failed fetches resolve to an empty list.
fn resolve(source: &dyn SuggestionSource, query: &str) -> Vec<Suggestion> {
    match lookup(source, query) {
        Ok(suggestions) => suggestions,
        Err(err) => {
            warn!(query, error = %err, "suggestion fetch failed");
            Vec::new()
        }
    }
}
