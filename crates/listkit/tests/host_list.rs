//! A host list that owns its rows and keeps a layout cache next to them,
//! notifying the cache about each kind of mutation.

use listkit::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Message {
    id: u32,
    text: String,
}

/// Rows of a chat transcript, indexed by message id.
struct Transcript {
    messages: Vec<Message>,
    positions: HashMap<u32, usize>,
}

impl Transcript {
    fn new(texts: &[&str]) -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            positions: HashMap::new(),
        };
        for (id, text) in texts.iter().enumerate() {
            transcript.messages.push(Message {
                id: id as u32,
                text: text.to_string(),
            });
        }
        transcript.reindex();
        transcript
    }

    fn reindex(&mut self) {
        self.positions = self
            .messages
            .iter()
            .enumerate()
            .map(|(index, message)| (message.id, index))
            .collect();
    }
}

impl ListDataSource for Transcript {
    type Item = Message;
    type Key = u32;

    fn item_count(&self) -> usize {
        self.messages.len()
    }

    fn item(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    fn key(&self, index: usize) -> Option<u32> {
        self.messages.get(index).map(|message| message.id)
    }

    fn index_of(&self, key: &u32) -> Option<usize> {
        self.positions.get(key).copied()
    }
}

/// Wraps text at `chars_per_line` characters, 16px per line.
struct LineMeasurer {
    chars_per_line: usize,
}

impl ItemMeasurer<Message> for LineMeasurer {
    fn measure_height(&mut self, item: &Message, _index: usize) -> f32 {
        let lines = item.text.len().div_ceil(self.chars_per_line).max(1);
        lines as f32 * 16.0
    }
}

#[test]
fn test_host_list_edit_and_append() {
    let mut transcript = Transcript::new(&["hello", "a message that wraps", "bye"]);
    let mut measurer = LineMeasurer { chars_per_line: 10 };
    let mut cache = LayoutCache::with_config(LayoutCacheConfig::new(200.0));

    assert_eq!(cache.content_height(&transcript, &mut measurer), 64.0);
    assert_eq!(
        cache.frame(2, &transcript, &mut measurer),
        Some(Rect::new(0.0, 48.0, 200.0, 16.0))
    );

    // Edit message 0 in place.
    transcript.messages[0].text = "hello there, how are you".to_string();
    cache.request_invalidate_heights([0], &transcript);
    cache.finalize_invalidation_requests(&transcript, &mut measurer);
    assert_eq!(cache.content_height(&transcript, &mut measurer), 96.0);
    assert_eq!(cache.frame(1, &transcript, &mut measurer).map(|f| f.y), Some(48.0));

    // Appending changes the count, so the next read picks it up.
    transcript.messages.push(Message {
        id: 9,
        text: "new".to_string(),
    });
    transcript.reindex();
    assert_eq!(cache.frame(3, &transcript, &mut measurer).map(|f| f.y), Some(96.0));
    assert_eq!(cache.height(3, &transcript, &mut measurer), Some(16.0));
}

#[test]
fn test_closure_measurer_through_prelude() {
    let transcript = Transcript::new(&["one", "two"]);
    let mut cache: LayoutCache<u32> = LayoutCache::new();
    let mut fixed = |_: &Message, index: usize| 10.0 + index as f32;

    assert_eq!(cache.content_height(&transcript, &mut fixed), 21.0);
    assert_eq!(cache.all_frames(&transcript, &mut fixed).len(), 2);
    assert_eq!(cache.frame(0, &transcript, &mut fixed).map(|f| f.width), Some(0.0));
}
