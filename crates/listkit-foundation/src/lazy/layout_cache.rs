//! Incremental layout cache for variable-height vertical lists.
//!
//! Provides [`LayoutCache`], which memoizes measured heights by item identity
//! and frames by position, and repairs itself lazily after the owning list
//! reports a change.

use listkit_core::collections::map::{new_map, HashMap};
use listkit_core::ItemKey;
use listkit_ui_graphics::Rect;
use smallvec::SmallVec;
use web_time::Instant;

use super::invalidation::InvalidationState;
use super::item_provider::ListDataSource;
use super::layout_cache_config::LayoutCacheConfig;
use super::layout_cache_stats::LayoutCacheStats;
use super::measure::{sanitize_height, ItemMeasurer};

/// Frames keyed by item position.
pub type FrameMap = HashMap<usize, Rect>;

/// Cached geometry of one vertical list.
///
/// Heights are keyed by item identity and survive reordering; frames are keyed
/// by position and are recomputed by a single forward pass whenever the cache
/// rebuilds. The cache does not observe the list: the owner passes its
/// [`ListDataSource`] to every call that needs it and reports mutations
/// through [`invalidate_all`](Self::invalidate_all) or
/// [`request_invalidate_heights`](Self::request_invalidate_heights).
///
/// The cache treats itself as structurally valid while it holds exactly one
/// height per item. A reorder that keeps the item count is therefore not
/// detected on its own; owners must call `invalidate_all` for those.
///
/// # Example
///
/// ```rust,ignore
/// let mut cache = LayoutCache::with_config(LayoutCacheConfig::new(320.0));
///
/// assert_eq!(cache.content_height(&rows, &mut measure), 60.0);
/// assert_eq!(cache.frame(2, &rows, &mut measure).map(|f| f.y), Some(30.0));
/// ```
#[derive(Debug)]
pub struct LayoutCache<K: ItemKey> {
    /// Measured height by item identity.
    heights: HashMap<K, f32>,

    /// Frame by item position.
    frames: FrameMap,

    /// Sum of all heights, cleared by full invalidation.
    content_height: Option<f32>,

    /// Bounds of the list content; only the width affects layout.
    content_bounds: Rect,

    invalidation: InvalidationState<K>,

    config: LayoutCacheConfig,

    stats: LayoutCacheStats,
}

impl<K: ItemKey> Default for LayoutCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ItemKey> LayoutCache<K> {
    /// Creates an empty cache with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LayoutCacheConfig::default())
    }

    /// Creates an empty cache with the given configuration.
    pub fn with_config(config: LayoutCacheConfig) -> Self {
        Self {
            heights: new_map(),
            frames: new_map(),
            content_height: None,
            content_bounds: Rect::new(0.0, 0.0, config.initial_container_width, 0.0),
            invalidation: InvalidationState::Clean,
            config,
            stats: LayoutCacheStats::default(),
        }
    }

    /// Returns the total height of all items.
    ///
    /// Served from the cached total when present, even if height
    /// invalidations are pending; those become visible after
    /// [`finalize_invalidation_requests`](Self::finalize_invalidation_requests).
    pub fn content_height<D, M>(&mut self, source: &D, measurer: &mut M) -> f32
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        if let Some(height) = self.content_height {
            return height;
        }
        self.ensure_fresh(source, measurer);
        self.content_height.unwrap_or(0.0)
    }

    /// Returns the measured height of the item at `index`.
    ///
    /// `None` if the source cannot resolve an identity for `index` or the
    /// identity has no measurement.
    pub fn height<D, M>(&mut self, index: usize, source: &D, measurer: &mut M) -> Option<f32>
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        self.ensure_fresh(source, measurer);
        let key = source.key(index)?;
        self.heights.get(&key).copied()
    }

    /// Returns the frame of the item at `index`, if one has been computed.
    pub fn frame<D, M>(&mut self, index: usize, source: &D, measurer: &mut M) -> Option<Rect>
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        self.ensure_fresh(source, measurer);
        self.frames.get(&index).copied()
    }

    /// Returns every computed frame, keyed by position.
    pub fn all_frames<D, M>(&mut self, source: &D, measurer: &mut M) -> &FrameMap
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        self.ensure_fresh(source, measurer);
        &self.frames
    }

    /// Sets the width items are laid out against.
    ///
    /// Measurements may depend on the width, so any change drops every cached
    /// value. Setting the current width is a no-op.
    pub fn set_container_width(&mut self, width: f32) {
        let old_width = self.content_bounds.width;
        self.content_bounds.width = width;
        if old_width == width {
            return;
        }
        log::debug!(
            "LayoutCache: container width changed {} -> {}",
            old_width,
            width
        );
        self.invalidate_all();
    }

    /// Sets the bounds of the list content.
    ///
    /// Only a change of width invalidates the cache.
    pub fn set_content_bounds(&mut self, bounds: Rect) {
        let width = bounds.width;
        self.content_bounds = Rect {
            width: self.content_bounds.width,
            ..bounds
        };
        self.set_container_width(width);
    }

    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    pub fn container_width(&self) -> f32 {
        self.content_bounds.width
    }

    /// Drops the heights of `keys` and every frame that may have moved.
    ///
    /// Frames are removed from the lowest current position among `keys`
    /// onwards. Nothing is re-measured and the cached content height is kept
    /// until [`finalize_invalidation_requests`](Self::finalize_invalidation_requests)
    /// runs, so several batches can be requested before one rebuild.
    pub fn request_invalidate_heights<D, I>(&mut self, keys: I, source: &D)
    where
        D: ListDataSource<Key = K> + ?Sized,
        I: IntoIterator<Item = K>,
    {
        let batch: SmallVec<[K; 4]> = keys.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        for key in &batch {
            self.heights.remove(key);
        }

        let first_index = batch.iter().filter_map(|key| source.index_of(key)).min();
        if let Some(first_index) = first_index {
            self.frames.retain(|&index, _| index < first_index);
        }

        log::trace!(
            "LayoutCache: invalidated {} heights, first dirty index {:?}",
            batch.len(),
            first_index
        );
        self.stats.invalidation_requests += 1;
        self.invalidation.record(batch, first_index);
    }

    /// Applies pending invalidation requests with a full rebuild.
    pub fn finalize_invalidation_requests<D, M>(&mut self, source: &D, measurer: &mut M)
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        self.rebuild(source, measurer);
    }

    /// Drops every cached height, frame and the content height.
    ///
    /// Use after inserts, removals or reorders. Pending invalidation requests
    /// are discarded since nothing they refer to is cached anymore.
    pub fn invalidate_all(&mut self) {
        self.content_height = None;
        self.heights.clear();
        self.frames.clear();
        self.invalidation.settle();
        self.stats.full_invalidations += 1;
        log::debug!("LayoutCache: invalidated all");
    }

    /// Whether the cached heights no longer cover the items of `source`.
    ///
    /// Compares counts only.
    pub fn is_cache_invalid<D>(&self, source: &D) -> bool
    where
        D: ListDataSource<Key = K> + ?Sized,
    {
        source.item_count() != self.heights.len()
    }

    /// Cached height of `key`, without rebuilding.
    pub fn cached_height(&self, key: &K) -> Option<f32> {
        self.heights.get(key).copied()
    }

    /// Cached frame at `index`, without rebuilding.
    pub fn cached_frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(&index).copied()
    }

    /// Cached content height, without rebuilding.
    pub fn cached_content_height(&self) -> Option<f32> {
        self.content_height
    }

    pub fn cached_height_count(&self) -> usize {
        self.heights.len()
    }

    pub fn cached_frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn invalidation_state(&self) -> &InvalidationState<K> {
        &self.invalidation
    }

    pub fn stats(&self) -> &LayoutCacheStats {
        &self.stats
    }

    pub fn config(&self) -> &LayoutCacheConfig {
        &self.config
    }

    fn ensure_fresh<D, M>(&mut self, source: &D, measurer: &mut M)
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        if self.is_cache_invalid(source) {
            self.rebuild(source, measurer);
        }
    }

    /// Re-measures missing heights, evicts stale ones and recomputes every
    /// frame and the content height.
    fn rebuild<D, M>(&mut self, source: &D, measurer: &mut M)
    where
        D: ListDataSource<Key = K> + ?Sized,
        M: ItemMeasurer<D::Item> + ?Sized,
    {
        let started = self.config.record_timings.then(Instant::now);
        let count = source.item_count();

        let mut measured = 0u64;
        for index in 0..count {
            let Some(key) = source.key(index) else {
                continue;
            };
            if self.heights.contains_key(&key) {
                continue;
            }
            let Some(item) = source.item(index) else {
                continue;
            };
            let height = sanitize_height(measurer.measure_height(item, index), index);
            log::trace!("LayoutCache: measured {:?} at {} = {}", key, index, height);
            self.heights.insert(key, height);
            measured += 1;
        }

        let before_sweep = self.heights.len();
        self.heights
            .retain(|key, _| matches!(source.index_of(key), Some(index) if index < count));
        let evicted = before_sweep - self.heights.len();

        let content_height = self.rebuild_frames(source, count);
        self.content_height = Some(content_height);
        self.invalidation.settle();

        self.stats.rebuilds += 1;
        self.stats.measurements += measured;
        self.stats.evicted_heights += evicted as u64;
        if let Some(started) = started {
            self.stats.last_rebuild_duration = Some(started.elapsed());
        }
        log::debug!(
            "LayoutCache: rebuilt {} items ({} measured, {} evicted), content height {}",
            count,
            measured,
            evicted,
            content_height
        );
    }

    /// Lays out `0..count` top to bottom and returns the total height.
    fn rebuild_frames<D>(&mut self, source: &D, count: usize) -> f32
    where
        D: ListDataSource<Key = K> + ?Sized,
    {
        let width = self.content_bounds.width;
        self.frames.clear();
        let mut used_height = 0.0;
        for index in 0..count {
            let height = source
                .key(index)
                .and_then(|key| self.heights.get(&key).copied())
                .unwrap_or(0.0);
            self.frames
                .insert(index, Rect::new(0.0, used_height, width, height));
            used_height += height;
        }
        used_height
    }
}
