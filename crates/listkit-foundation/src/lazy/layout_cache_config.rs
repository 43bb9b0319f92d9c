//! Configuration for [`LayoutCache`](super::LayoutCache).

/// Configuration for a layout cache.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutCacheConfig {
    /// Width frames are computed against until the owner sets another one.
    pub initial_container_width: f32,

    /// Whether each rebuild's wall time is recorded in the stats.
    pub record_timings: bool,
}

impl Default for LayoutCacheConfig {
    fn default() -> Self {
        Self {
            initial_container_width: 0.0,
            record_timings: true,
        }
    }
}

impl LayoutCacheConfig {
    /// Creates a config laying out against `width`.
    pub fn new(initial_container_width: f32) -> Self {
        Self {
            initial_container_width,
            ..Self::default()
        }
    }

    pub fn record_timings(mut self, record_timings: bool) -> Self {
        self.record_timings = record_timings;
        self
    }
}
