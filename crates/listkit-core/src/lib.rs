//! Shared primitives for listkit.
//!
//! Holds the hash-map aliases every crate in the workspace uses and the
//! [`ItemKey`] bound for stable item identities.

pub mod collections;

use std::fmt::Debug;
use std::hash::Hash;

/// A stable, hashable identity for one logical list item.
///
/// Identities must stay equal for the same underlying item regardless of its
/// position, so that measurements survive reordering.
pub trait ItemKey: Clone + Eq + Hash + Debug {}

impl<T> ItemKey for T where T: Clone + Eq + Hash + Debug {}
