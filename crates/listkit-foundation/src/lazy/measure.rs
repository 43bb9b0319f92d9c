//! Item measurement for cached list layouts.

/// Measures the height of a single list item.
///
/// The layout cache calls this once per identity until that identity is
/// invalidated again, so implementations should be deterministic for a given
/// item and container width. Heights are expected to be finite and
/// non-negative; anything else is stored as `0.0`.
pub trait ItemMeasurer<T: ?Sized> {
    /// Returns the height of `item`, currently at position `index`.
    fn measure_height(&mut self, item: &T, index: usize) -> f32;
}

impl<T, F> ItemMeasurer<T> for F
where
    T: ?Sized,
    F: FnMut(&T, usize) -> f32,
{
    fn measure_height(&mut self, item: &T, index: usize) -> f32 {
        self(item, index)
    }
}

/// Clamps a measured height to the non-negative finite range.
pub(crate) fn sanitize_height(height: f32, index: usize) -> f32 {
    if height.is_finite() && height >= 0.0 {
        return height;
    }
    log::warn!(
        "LayoutCache: item {} measured to invalid height {}, using 0",
        index,
        height
    );
    0.0
}
