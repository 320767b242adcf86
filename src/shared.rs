//! Shared Sets
//!
//! Wrappers for querying a character set from many threads.
//!
//! ## Concurrency Model
//! Queries never mutate a set, so any number may run against the same
//! [`CharSet`] at once. What needs guarding is the *swap* of one set for
//! another (a rebuilt set, or the validated form of a lazily loaded cell):
//!
//! - [`SharedSet`]: copy-on-write. Readers clone an `Arc` snapshot under a
//!   brief read lock; `replace` installs a new snapshot under the write lock.
//!   In-flight queries finish against the snapshot they started with.
//! - [`LazySet`]: `Uninitialized(cell) → Validated(set)`. The first query
//!   takes an upgradable read, upgrades it and sorts and deduplicates under
//!   the write lock; later queries only take the read lock.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::cell::{CharCell, CharSet};
use crate::search::Lookup;

// =============================================================================
// Copy-on-write snapshot
// =============================================================================

/// A character set that can be swapped while being queried
pub struct SharedSet {
    current: RwLock<Arc<CharSet>>,
}

impl SharedSet {
    pub fn new(set: CharSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// The set as of now; unaffected by later `replace` calls
    pub fn snapshot(&self) -> Arc<CharSet> {
        Arc::clone(&self.current.read())
    }

    pub fn locate(&self, query: &[u8]) -> Lookup {
        self.snapshot().locate(query)
    }

    pub fn contains(&self, query: &[u8]) -> bool {
        self.snapshot().contains(query)
    }

    pub fn card(&self) -> usize {
        self.current.read().card()
    }

    /// Install a new set, returning the previous snapshot
    pub fn replace(&self, set: CharSet) -> Arc<CharSet> {
        let next = Arc::new(set);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        tracing::debug!(
            previous_card = previous.card(),
            card = self.card(),
            "replaced shared set"
        );
        previous
    }
}

// =============================================================================
// Validate on first use
// =============================================================================

enum LazyState {
    Uninitialized(CharCell),
    Validated(CharSet),
}

impl LazyState {
    fn validate(&mut self) -> &CharSet {
        if let LazyState::Uninitialized(cell) = self {
            let set = CharSet::new(cell.take());
            tracing::debug!(card = set.card(), "validated lazy set on first use");
            *self = LazyState::Validated(set);
        }
        match self {
            LazyState::Validated(set) => set,
            LazyState::Uninitialized(_) => unreachable!("lazy set validated above"),
        }
    }
}

/// A character cell that becomes a set the first time it is queried
pub struct LazySet {
    state: RwLock<LazyState>,
}

impl LazySet {
    pub fn new(cell: CharCell) -> Self {
        Self {
            state: RwLock::new(LazyState::Uninitialized(cell)),
        }
    }

    pub fn is_validated(&self) -> bool {
        matches!(*self.state.read(), LazyState::Validated(_))
    }

    /// Validate now if not done yet; returns the set's cardinality
    pub fn force(&self) -> usize {
        self.with_set(CharSet::card)
    }

    pub fn locate(&self, query: &[u8]) -> Lookup {
        self.with_set(|set| set.locate(query))
    }

    pub fn contains(&self, query: &[u8]) -> bool {
        self.with_set(|set| set.contains(query))
    }

    fn with_set<R>(&self, f: impl FnOnce(&CharSet) -> R) -> R {
        {
            let guard = self.state.read();
            if let LazyState::Validated(set) = &*guard {
                return f(set);
            }
        }

        // At most one upgradable reader at a time; plain readers keep running
        // until the upgrade, and a thread that lost the race finds `Validated`
        let guard = self.state.upgradable_read();
        if let LazyState::Validated(set) = &*guard {
            return f(set);
        }
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        f(guard.validate())
    }
}
