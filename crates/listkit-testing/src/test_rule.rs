use listkit_core::ItemKey;
use listkit_foundation::lazy::{LayoutCache, LayoutCacheConfig, ListDataSource};
use listkit_ui_graphics::Rect;

use crate::recording_measurer::RecordingMeasurer;
use crate::test_source::TestListSource;

/// Bundles a [`LayoutCache`] with the list it lays out and a measurer that
/// records every measurement, so tests can mutate the list, notify the cache
/// and check the resulting geometry in one place.
pub struct LayoutCacheTestRule<K: ItemKey> {
    cache: LayoutCache<K>,
    source: TestListSource<K>,
    measurer: RecordingMeasurer<K>,
}

impl<K: ItemKey> LayoutCacheTestRule<K> {
    /// An empty list laid out against `width`.
    pub fn new(width: f32) -> Self {
        Self::with_items(width, std::iter::empty())
    }

    /// A list of `(key, height)` items laid out against `width`.
    pub fn with_items<I>(width: f32, items: I) -> Self
    where
        I: IntoIterator<Item = (K, f32)>,
    {
        Self::with_measurer(width, items, RecordingMeasurer::new())
    }

    pub fn with_measurer<I>(width: f32, items: I, mut measurer: RecordingMeasurer<K>) -> Self
    where
        I: IntoIterator<Item = (K, f32)>,
    {
        measurer.set_width(width);
        Self {
            cache: LayoutCache::with_config(LayoutCacheConfig::new(width)),
            source: TestListSource::from_heights(items),
            measurer,
        }
    }

    pub fn cache(&self) -> &LayoutCache<K> {
        &self.cache
    }

    pub fn source(&self) -> &TestListSource<K> {
        &self.source
    }

    /// Mutates the list without telling the cache.
    pub fn source_mut(&mut self) -> &mut TestListSource<K> {
        &mut self.source
    }

    pub fn measurer(&self) -> &RecordingMeasurer<K> {
        &self.measurer
    }

    pub fn measurer_mut(&mut self) -> &mut RecordingMeasurer<K> {
        &mut self.measurer
    }

    pub fn content_height(&mut self) -> f32 {
        self.cache.content_height(&self.source, &mut self.measurer)
    }

    pub fn height(&mut self, index: usize) -> Option<f32> {
        self.cache.height(index, &self.source, &mut self.measurer)
    }

    pub fn frame(&mut self, index: usize) -> Option<Rect> {
        self.cache.frame(index, &self.source, &mut self.measurer)
    }

    /// All frames ordered by position.
    pub fn frames(&mut self) -> Vec<(usize, Rect)> {
        let mut frames: Vec<(usize, Rect)> = self
            .cache
            .all_frames(&self.source, &mut self.measurer)
            .iter()
            .map(|(&index, &frame)| (index, frame))
            .collect();
        frames.sort_by_key(|(index, _)| *index);
        frames
    }

    /// `(y, height)` of every frame, ordered by position.
    pub fn frame_spans(&mut self) -> Vec<(f32, f32)> {
        self.frames()
            .into_iter()
            .map(|(_, frame)| (frame.y, frame.height))
            .collect()
    }

    /// Changes the width of both the cache and the measurer.
    pub fn set_container_width(&mut self, width: f32) {
        self.measurer.set_width(width);
        self.cache.set_container_width(width);
    }

    pub fn request_invalidate_heights<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.cache.request_invalidate_heights(keys, &self.source);
    }

    pub fn finalize_invalidation_requests(&mut self) {
        self.cache
            .finalize_invalidation_requests(&self.source, &mut self.measurer);
    }

    pub fn invalidate_all(&mut self) {
        self.cache.invalidate_all();
    }

    /// Asserts one frame per position `0..count` and one height per item.
    pub fn assert_covers_source(&mut self) {
        let count = self.source.item_count();
        let frames = self.frames();
        let positions: Vec<usize> = frames.iter().map(|(index, _)| *index).collect();
        assert_eq!(
            positions,
            (0..count).collect::<Vec<_>>(),
            "Frames should cover positions 0..{}",
            count
        );
        assert_eq!(
            self.cache.cached_height_count(),
            count,
            "Cache should hold one height per item"
        );
    }

    /// Asserts that each frame starts where the previous one ends and spans
    /// the container width.
    pub fn assert_frames_contiguous(&mut self) {
        let width = self.cache.container_width();
        let frames = self.frames();
        let mut expected_y = 0.0;
        for (index, frame) in frames {
            assert_eq!(frame.x, 0.0, "Frame #{} should start at x = 0", index);
            assert_eq!(
                frame.width, width,
                "Frame #{} should span the container width",
                index
            );
            assert_eq!(
                frame.y, expected_y,
                "Frame #{} should start where the previous frame ends",
                index
            );
            expected_y = frame.max_y();
        }
    }
}
