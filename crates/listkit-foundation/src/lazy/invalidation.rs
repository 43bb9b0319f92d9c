//! Two-phase invalidation tracking.
//!
//! Height invalidations are requested in batches and applied together by a
//! single rebuild. [`InvalidationState`] records what was requested between
//! two rebuilds:
//!
//! ```text
//! Clean --request--> Dirty --request--> Dirty --rebuild--> Clean
//! ```

use smallvec::SmallVec;

/// Keys kept inline before spilling to the heap.
const INLINE_KEYS: usize = 4;

/// Pending invalidation requests of a layout cache.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidationState<K> {
    /// Every request so far has been applied by a rebuild.
    Clean,
    /// Heights were dropped but no rebuild has run since.
    Dirty {
        /// Identities whose heights were dropped, in request order.
        keys: SmallVec<[K; INLINE_KEYS]>,
        /// Lowest position among the dropped identities at request time.
        /// Frames from here on were removed.
        first_dirty_index: Option<usize>,
        /// Number of request batches folded into this state.
        requests: usize,
    },
}

impl<K> Default for InvalidationState<K> {
    fn default() -> Self {
        Self::Clean
    }
}

impl<K> InvalidationState<K> {
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty { .. })
    }

    /// Identities requested since the last rebuild.
    pub fn pending_keys(&self) -> &[K] {
        match self {
            Self::Clean => &[],
            Self::Dirty { keys, .. } => keys,
        }
    }

    pub fn first_dirty_index(&self) -> Option<usize> {
        match self {
            Self::Clean => None,
            Self::Dirty {
                first_dirty_index, ..
            } => *first_dirty_index,
        }
    }

    pub fn request_count(&self) -> usize {
        match self {
            Self::Clean => 0,
            Self::Dirty { requests, .. } => *requests,
        }
    }

    /// Folds one request batch into the state.
    pub(crate) fn record<I>(&mut self, batch: I, first_index: Option<usize>)
    where
        I: IntoIterator<Item = K>,
    {
        match self {
            Self::Clean => {
                *self = Self::Dirty {
                    keys: batch.into_iter().collect(),
                    first_dirty_index: first_index,
                    requests: 1,
                };
            }
            Self::Dirty {
                keys,
                first_dirty_index,
                requests,
            } => {
                keys.extend(batch);
                *first_dirty_index = match (*first_dirty_index, first_index) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                *requests += 1;
            }
        }
    }

    /// Marks every pending request as applied.
    ///
    /// Returns the state that was pending.
    pub(crate) fn settle(&mut self) -> Self {
        std::mem::replace(self, Self::Clean)
    }
}
