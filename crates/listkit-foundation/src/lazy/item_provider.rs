//! Data source trait for cached list layouts.
//!
//! This module defines the [`ListDataSource`] trait through which the layout
//! cache reads item count, identity and position from the list that owns it.

use listkit_core::ItemKey;

/// Read-only view of the items of a list.
///
/// The layout cache never holds on to a data source; it is passed in to every
/// call that may need to consult the list. Implementations must report the
/// current state of the list, including mutations the cache has not been told
/// about yet.
pub trait ListDataSource {
    /// The item handed to the measurer.
    type Item: ?Sized;

    /// Stable identity of an item.
    type Key: ItemKey;

    /// The total number of items in the list.
    fn item_count(&self) -> usize;

    /// Returns the item at `index`, or `None` if it cannot be resolved.
    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// Returns the identity of the item at `index`.
    ///
    /// Keys are used to:
    /// - Keep measured heights across reorders
    /// - Evict heights of removed items
    /// - Target invalidation at individual items
    fn key(&self, index: usize) -> Option<Self::Key>;

    /// Get the index for a given key.
    ///
    /// The cache calls this for every cached identity during a rebuild, so
    /// sources with more than a handful of items should override the default
    /// linear search with an indexed lookup.
    fn index_of(&self, key: &Self::Key) -> Option<usize> {
        (0..self.item_count()).find(|&i| self.key(i).as_ref() == Some(key))
    }
}

impl<T> ListDataSource for &T
where
    T: ListDataSource + ?Sized,
{
    type Item = T::Item;
    type Key = T::Key;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn item(&self, index: usize) -> Option<&Self::Item> {
        (**self).item(index)
    }

    fn key(&self, index: usize) -> Option<Self::Key> {
        (**self).key(index)
    }

    fn index_of(&self, key: &Self::Key) -> Option<usize> {
        (**self).index_of(key)
    }
}
