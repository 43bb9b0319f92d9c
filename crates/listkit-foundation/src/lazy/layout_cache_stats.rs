use web_time::Duration;

/// Statistics about layout cache activity.
///
/// Used for testing and debugging how often items are re-measured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutCacheStats {
    /// Number of full rebuild passes.
    pub rebuilds: u64,

    /// Number of calls into the measurer.
    pub measurements: u64,

    /// Heights dropped by rebuilds because their item left the list.
    pub evicted_heights: u64,

    /// Number of times every cached value was thrown away.
    pub full_invalidations: u64,

    /// Number of non-empty height invalidation batches.
    pub invalidation_requests: u64,

    /// Wall time of the most recent rebuild, when timings are recorded.
    pub last_rebuild_duration: Option<Duration>,
}
