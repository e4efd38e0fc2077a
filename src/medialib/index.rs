//! # Search Index
//!
//! An inverted index from metadata **values** to the files carrying them.
//! Keywords are not part of the key: `creator=Paul` and `location=Paul` land in
//! the same `"Paul"` bucket, and callers that care about the keyword filter the
//! bucket afterwards (see [`crate::collection::Collection::search_metadata`]).
//!
//! The index never owns files. It stores [`Slot`]s, the position of a file in
//! the collection's file list, and the collection resolves them. Slots stay
//! valid because records are only ever appended or replaced in place.
//!
//! A file appears at most once per bucket, no matter how many of its entries
//! share the value.

use crate::model::MediaFile;
use std::collections::{HashMap, HashSet};

/// Position of a file in its owning collection.
pub type Slot = usize;

/// Slots under one term, in the order they were added, with a set for
/// constant-time membership checks.
#[derive(Debug, Clone, Default)]
struct Bucket {
    order: Vec<Slot>,
    members: HashSet<Slot>,
}

impl Bucket {
    fn insert(&mut self, slot: Slot) {
        if self.members.insert(slot) {
            self.order.push(slot);
        }
    }

    fn remove(&mut self, slot: Slot) {
        if self.members.remove(&slot) {
            self.order.retain(|s| *s != slot);
        }
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Indexer {
    index: HashMap<String, Bucket>,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every metadata value of `file` under `slot`.
    pub fn add(&mut self, slot: Slot, file: &MediaFile) {
        for metadata in &file.metadata {
            self.add_term(&metadata.value, slot);
        }
    }

    pub fn add_term(&mut self, term: &str, slot: Slot) {
        self.index.entry(term.to_string()).or_default().insert(slot);
    }

    pub fn add_batch<'a, I>(&mut self, files: I)
    where
        I: IntoIterator<Item = (Slot, &'a MediaFile)>,
    {
        for (slot, file) in files {
            self.add(slot, file);
        }
    }

    /// Slots of the files whose metadata contains `term`, in indexing order.
    pub fn search(&self, term: &str) -> &[Slot] {
        self.index
            .get(term)
            .map(|bucket| bucket.order.as_slice())
            .unwrap_or(&[])
    }

    /// Drops `slot` from the `term` bucket only.
    pub fn remove(&mut self, term: &str, slot: Slot) {
        if let Some(bucket) = self.index.get_mut(term) {
            bucket.remove(slot);
            if bucket.is_empty() {
                self.index.remove(term);
            }
        }
    }

    /// Drops `slot` from every bucket `file`'s metadata points at.
    pub fn remove_file(&mut self, slot: Slot, file: &MediaFile) {
        for metadata in &file.metadata {
            self.remove(&metadata.value, slot);
        }
    }

    pub fn reindex<'a, I>(&mut self, files: I)
    where
        I: IntoIterator<Item = (Slot, &'a MediaFile)>,
    {
        self.index.clear();
        self.add_batch(files);
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
