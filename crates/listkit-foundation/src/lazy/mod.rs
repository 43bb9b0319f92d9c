//! Layout caching for lazy vertical lists.
//!
//! A list host owns its items; this module only remembers what was derived
//! from them:
//! - [`ListDataSource`] - Count, identity and reverse lookup of items
//! - [`ItemMeasurer`] - Measures the height of one item
//! - [`LayoutCache`] - Identity→height and position→frame memoization
//! - [`InvalidationState`] - Request/finalize state machine for batched invalidation
//!
//! # Example
//!
//! ```rust,ignore
//! let mut cache = LayoutCache::new();
//! cache.set_container_width(320.0);
//!
//! let total = cache.content_height(&source, &mut measurer);
//! let third = cache.frame(2, &source, &mut measurer);
//!
//! // Item "b" changed its content.
//! cache.request_invalidate_heights(["b"], &source);
//! cache.finalize_invalidation_requests(&source, &mut measurer);
//! ```

mod invalidation;
mod item_provider;
mod layout_cache;
mod layout_cache_config;
mod layout_cache_stats;
mod measure;

pub use invalidation::*;
pub use item_provider::*;
pub use layout_cache::*;
pub use layout_cache_config::*;
pub use layout_cache_stats::*;
pub use measure::*;
