//! Client-side cache of query results. One slot per entity list; readers
//! get a clone only while the entry is inside its staleness window, and
//! only the query/mutation layer ever writes.

use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::models::{Execution, Trade, TradeIdea};

/// Default staleness window for cached query results.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(60 * 60);

#[derive(Debug)]
struct Entry<T> {
    data: T,
    fetched_at: Instant,
}

/// One cached query result.
#[derive(Debug)]
pub struct CacheSlot<T> {
    entry: RwLock<Option<Entry<T>>>,
    stale_after: Duration,
}

impl<T: Clone> CacheSlot<T> {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            stale_after,
        }
    }

    /// The cached value, if one exists and is still inside the staleness
    /// window.
    pub async fn fresh(&self) -> Option<T> {
        let guard = self.entry.read().await;
        guard
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_after)
            .map(|entry| entry.data.clone())
    }

    pub async fn store(&self, data: T) {
        let mut guard = self.entry.write().await;
        *guard = Some(Entry {
            data,
            fetched_at: Instant::now(),
        });
    }

    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        *guard = None;
    }
}

/// The per-entity slots, shared by every service so a mutation on one
/// entity can invalidate related lists.
#[derive(Debug)]
pub struct QueryCache {
    pub trades: CacheSlot<Vec<Trade>>,
    pub trade_ideas: CacheSlot<Vec<TradeIdea>>,
    pub live_trades: CacheSlot<Vec<Trade>>,
    pub executions: CacheSlot<Vec<Execution>>,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            trades: CacheSlot::new(stale_after),
            trade_ideas: CacheSlot::new(stale_after),
            live_trades: CacheSlot::new(stale_after),
            executions: CacheSlot::new(stale_after),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
