//! Measurer that records every call it receives.

use listkit_core::ItemKey;
use listkit_foundation::lazy::ItemMeasurer;

use crate::test_source::TestItem;

/// One call into a [`RecordingMeasurer`].
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureCall<K> {
    pub key: K,
    pub index: usize,
}

/// Measures [`TestItem`]s by their intrinsic height and logs each call.
///
/// With [`wrapping`](Self::wrapping) the height scales inversely with the
/// container width, like text that re-wraps when the list gets narrower.
#[derive(Clone, Debug)]
pub struct RecordingMeasurer<K> {
    calls: Vec<MeasureCall<K>>,
    reference_width: Option<f32>,
    width: f32,
}

impl<K: ItemKey> Default for RecordingMeasurer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ItemKey> RecordingMeasurer<K> {
    /// A measurer reporting intrinsic heights regardless of width.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            reference_width: None,
            width: 0.0,
        }
    }

    /// A measurer whose intrinsic heights hold at `reference_width`.
    pub fn wrapping(reference_width: f32) -> Self {
        Self {
            calls: Vec::new(),
            reference_width: Some(reference_width),
            width: reference_width,
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn calls(&self) -> &[MeasureCall<K>] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn calls_for(&self, key: &K) -> usize {
        self.calls.iter().filter(|call| &call.key == key).count()
    }

    pub fn measured_keys(&self) -> Vec<K> {
        self.calls.iter().map(|call| call.key.clone()).collect()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl<K: ItemKey> ItemMeasurer<TestItem<K>> for RecordingMeasurer<K> {
    fn measure_height(&mut self, item: &TestItem<K>, index: usize) -> f32 {
        self.calls.push(MeasureCall {
            key: item.key.clone(),
            index,
        });
        match self.reference_width {
            Some(reference) if self.width > 0.0 => item.height * reference / self.width,
            _ => item.height,
        }
    }
}
