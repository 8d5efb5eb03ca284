//! Position cache for memoizing evaluation scores.
//!
//! Keys are full grid snapshots compared structurally, so two move orders
//! that reach the same position share one entry. There is no eviction: the
//! cache grows until it is cleared.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::Grid;

#[derive(Clone, Debug, Default)]
pub struct PositionCache {
    entries: HashMap<Grid, i32>,
}

impl PositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for about `positions` entries.
    #[must_use]
    pub fn with_capacity(positions: usize) -> Self {
        PositionCache {
            entries: HashMap::with_capacity(positions),
        }
    }

    /// Store `score` for a snapshot of `grid`, replacing any earlier score
    /// for an equal position.
    pub fn put(&mut self, grid: &Grid, score: i32) {
        self.entries.insert(grid.snapshot(), score);
    }

    #[must_use]
    pub fn contains(&self, grid: &Grid) -> bool {
        self.entries.contains_key(grid)
    }

    /// The cached score, if this position was stored.
    #[must_use]
    pub fn probe(&self, grid: &Grid) -> Option<i32> {
        self.entries.get(grid).copied()
    }

    /// The cached score.
    ///
    /// # Panics
    /// Panics if the position was never stored; check `contains` first or
    /// use `probe`.
    #[must_use]
    pub fn get(&self, grid: &Grid) -> i32 {
        self.probe(grid)
            .expect("position cache read for a position that was never stored")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("clearing position cache of {} entries", self.entries.len());
        self.entries.clear();
    }
}

/// A cloneable handle to one cache shared by several search workers.
///
/// Reads take a shared lock and writes an exclusive one, so concurrent
/// `put` calls are serialized.
#[derive(Clone, Debug, Default)]
pub struct SharedPositionCache {
    inner: Arc<RwLock<PositionCache>>,
}

impl SharedPositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, grid: &Grid, score: i32) {
        self.inner.write().put(grid, score);
    }

    #[must_use]
    pub fn contains(&self, grid: &Grid) -> bool {
        self.inner.read().contains(grid)
    }

    #[must_use]
    pub fn probe(&self, grid: &Grid) -> Option<i32> {
        self.inner.read().probe(grid)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl From<PositionCache> for SharedPositionCache {
    fn from(cache: PositionCache) -> Self {
        SharedPositionCache {
            inner: Arc::new(RwLock::new(cache)),
        }
    }
}
