//! listkit: geometry caching for variable-height vertical lists.
//!
//! Re-exports the layout cache from `listkit-foundation` together with the
//! geometry and identity types it is built on.

pub use listkit_core::{collections, ItemKey};
pub use listkit_foundation::lazy;
pub use listkit_foundation::lazy::{
    FrameMap, InvalidationState, ItemMeasurer, LayoutCache, LayoutCacheConfig, LayoutCacheStats,
    ListDataSource,
};
pub use listkit_ui_graphics::{Rect, Size};

pub mod prelude {
    pub use crate::{
        ItemKey, ItemMeasurer, LayoutCache, LayoutCacheConfig, ListDataSource, Rect, Size,
    };
}
