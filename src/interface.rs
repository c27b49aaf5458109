//! Shared access to an index from many threads.
//!
//! A built [`Index`] is immutable, so readers only need an `Arc` to it. This
//! module keeps the "current" index behind a lock that is held just long enough
//! to clone or replace that `Arc`. Rebuilding the resource means building a new
//! index off to the side and publishing it with [`SharedIndex::swap`]; readers
//! that took a snapshot earlier keep a consistent view of the old one.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::index::Index;

/// Identifies which published index a snapshot came from; increases with every swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Registry holding the currently published index.
#[derive(Debug)]
pub struct SharedIndex {
    current: RwLock<(Generation, Arc<Index>)>,
}

impl SharedIndex {
    pub fn new(index: Index) -> Self {
        Self {
            current: RwLock::new((Generation(0), Arc::new(index))),
        }
    }
    /// The index readers should use right now.
    pub fn snapshot(&self) -> Arc<Index> {
        self.versioned_snapshot().1
    }
    pub fn versioned_snapshot(&self) -> (Generation, Arc<Index>) {
        // the guarded value is replaced wholesale, so a poisoned lock still holds a valid index
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        (guard.0, Arc::clone(&guard.1))
    }
    pub fn generation(&self) -> Generation {
        self.versioned_snapshot().0
    }
    /// Publish a rebuilt index, returning the one it replaces.
    pub fn swap(&self, index: Index) -> Arc<Index> {
        let classes = index.forest().len();
        let (generation, replaced) = {
            let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            // generations follow publication order
            let generation = Generation(guard.0.0 + 1);
            (generation, std::mem::replace(&mut *guard, (generation, Arc::new(index))))
        };
        info!(generation = generation.value(), classes, "published index");
        replaced.1
    }
    /// Run a read-only query against the current index on this thread.
    pub fn run_sync<T, F>(&self, query: F) -> T
    where
        F: FnOnce(&Index) -> T,
    {
        let index = self.snapshot();
        query(&index)
    }
}
