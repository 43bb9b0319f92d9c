//! Testing utilities and harness for listkit

pub mod recording_measurer;
pub mod test_rule;
pub mod test_source;

pub use recording_measurer::*;
pub use test_rule::*;
pub use test_source::*;

pub mod prelude {
    pub use crate::{LayoutCacheTestRule, MeasureCall, RecordingMeasurer, TestItem, TestListSource};
}
