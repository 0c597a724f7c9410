//! Request deduplication cache for search queries.
//!
//! Keyed by the exact search text. A settled result is kept for `ttl_ms`
//! and, while it is kept, the same key is never requested again. A pending
//! key is not requested twice either. Failures are remembered so the UI can
//! show them, but they do not block a later request for the same key.
//!
//! The cache does no I/O and never reads a clock: callers pass `now` in
//! milliseconds (see [`crate::core::timing::now_ms`]) and perform the
//! request themselves when [`QueryCache::begin`] hands out a ticket.

use std::collections::HashMap;

/// Read-side view of one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<V> {
    Missing,
    Pending,
    Ready(V),
    Failed(String),
}

/// Permission to run one request. Must be handed back to [`QueryCache::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    key: String,
    generation: u64,
}

impl QueryTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Clone)]
enum Slot<V> {
    Pending,
    Ready { value: V, settled_at: f64 },
    Failed { message: String, failed_at: f64 },
}

#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    entries: HashMap<String, Slot<V>>,
    ttl_ms: f64,
    /// Results depend on this as well as the key (the Wikipedia edition).
    scope: String,
    /// Bumped on every scope change so late answers for the old scope are dropped.
    generation: u64,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms,
            scope: String::new(),
            generation: 0,
        }
    }

    pub fn ttl_ms(&self) -> f64 {
        self.ttl_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Switch to a new scope, dropping everything cached for the old one.
    /// Returns whether anything was reset.
    pub fn rescope(&mut self, scope: &str) -> bool {
        if self.scope == scope {
            return false;
        }
        self.scope = scope.to_string();
        self.entries.clear();
        self.generation += 1;
        true
    }

    /// Claim `key` for a request. `None` means the key is pending or still
    /// fresh and no request should be made.
    pub fn begin(&mut self, key: &str, now: f64) -> Option<QueryTicket> {
        let must_fetch = match self.entries.get(key) {
            None | Some(Slot::Failed { .. }) => true,
            Some(Slot::Pending) => false,
            Some(Slot::Ready { settled_at, .. }) => self.expired(*settled_at, now),
        };
        if !must_fetch {
            return None;
        }
        self.entries.insert(key.to_string(), Slot::Pending);
        Some(QueryTicket {
            key: key.to_string(),
            generation: self.generation,
        })
    }

    /// Record the outcome of a ticketed request. Stale tickets (issued before
    /// a [`rescope`](Self::rescope)) are ignored and `false` is returned.
    pub fn settle(&mut self, ticket: QueryTicket, outcome: Result<V, String>, now: f64) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        let slot = match outcome {
            Ok(value) => Slot::Ready {
                value,
                settled_at: now,
            },
            Err(message) => Slot::Failed {
                message,
                failed_at: now,
            },
        };
        self.entries.insert(ticket.key, slot);
        true
    }

    pub fn state(&self, key: &str, now: f64) -> QueryState<V> {
        match self.entries.get(key) {
            None => QueryState::Missing,
            Some(Slot::Pending) => QueryState::Pending,
            Some(Slot::Ready { settled_at, .. }) if self.expired(*settled_at, now) => {
                QueryState::Missing
            }
            Some(Slot::Ready { value, .. }) => QueryState::Ready(value.clone()),
            Some(Slot::Failed { message, .. }) => QueryState::Failed(message.clone()),
        }
    }

    /// Drop settled results and failures older than the retention window.
    pub fn evict_expired(&mut self, now: f64) -> usize {
        let ttl = self.ttl_ms;
        let before = self.entries.len();
        self.entries.retain(|_, slot| match slot {
            Slot::Ready { settled_at, .. } => now - *settled_at < ttl,
            Slot::Failed { failed_at, .. } => now - *failed_at < ttl,
            Slot::Pending => true,
        });
        before - self.entries.len()
    }

    fn expired(&self, settled_at: f64, now: f64) -> bool {
        now - settled_at >= self.ttl_ms
    }
}
