//! In-memory list source for tests.

use listkit_core::collections::map::{new_map, HashMap, HashSet};
use listkit_core::ItemKey;
use listkit_foundation::lazy::ListDataSource;

/// A list item with a fixed intrinsic height.
#[derive(Clone, Debug, PartialEq)]
pub struct TestItem<K> {
    pub key: K,
    pub height: f32,
}

impl<K> TestItem<K> {
    pub fn new(key: K, height: f32) -> Self {
        Self { key, height }
    }
}

/// A mutable vector of [`TestItem`]s with an indexed reverse lookup.
///
/// Positions can be hidden to simulate a source that fails to resolve an
/// identity or an item.
#[derive(Clone, Debug)]
pub struct TestListSource<K: ItemKey> {
    items: Vec<TestItem<K>>,
    positions: HashMap<K, usize>,
    hidden_keys: HashSet<usize>,
    hidden_items: HashSet<usize>,
}

impl<K: ItemKey> Default for TestListSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ItemKey> TestListSource<K> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            positions: new_map(),
            hidden_keys: HashSet::default(),
            hidden_items: HashSet::default(),
        }
    }

    /// Builds a source from `(key, height)` pairs.
    pub fn from_heights<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, f32)>,
    {
        let mut source = Self::new();
        source.items = items
            .into_iter()
            .map(|(key, height)| TestItem::new(key, height))
            .collect();
        source.reindex();
        source
    }

    pub fn items(&self) -> &[TestItem<K>] {
        &self.items
    }

    pub fn keys(&self) -> Vec<K> {
        self.items.iter().map(|item| item.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, key: K, height: f32) {
        self.positions.insert(key.clone(), self.items.len());
        self.items.push(TestItem::new(key, height));
    }

    /// Inserts an item at `index`, shifting later items down.
    pub fn insert(&mut self, index: usize, key: K, height: f32) {
        self.items.insert(index, TestItem::new(key, height));
        self.reindex();
    }

    pub fn remove(&mut self, index: usize) -> Option<TestItem<K>> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.reindex();
        Some(removed)
    }

    pub fn remove_key(&mut self, key: &K) -> Option<TestItem<K>> {
        let index = self.positions.get(key).copied()?;
        self.remove(index)
    }

    /// Moves the item at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.items.len() || to >= self.items.len() {
            log::warn!("TestListSource: move {} -> {} out of range", from, to);
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.reindex();
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.reindex();
    }

    /// Changes the intrinsic height of `key`. Returns whether it was found.
    pub fn set_height(&mut self, key: &K, height: f32) -> bool {
        let Some(&index) = self.positions.get(key) else {
            return false;
        };
        self.items[index].height = height;
        true
    }

    /// Makes `key(index)` return `None`.
    pub fn hide_key(&mut self, index: usize) {
        self.hidden_keys.insert(index);
    }

    /// Makes `item(index)` return `None`.
    pub fn hide_item(&mut self, index: usize) {
        self.hidden_items.insert(index);
    }

    pub fn reveal_all(&mut self) {
        self.hidden_keys.clear();
        self.hidden_items.clear();
    }

    fn reindex(&mut self) {
        self.positions.clear();
        for (index, item) in self.items.iter().enumerate() {
            self.positions.insert(item.key.clone(), index);
        }
    }
}

impl<K: ItemKey> ListDataSource for TestListSource<K> {
    type Item = TestItem<K>;
    type Key = K;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&TestItem<K>> {
        if self.hidden_items.contains(&index) {
            return None;
        }
        self.items.get(index)
    }

    fn key(&self, index: usize) -> Option<K> {
        if self.hidden_keys.contains(&index) {
            return None;
        }
        self.items.get(index).map(|item| item.key.clone())
    }

    fn index_of(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }
}
