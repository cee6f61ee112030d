//! Reference embeddings grouped by movement class.
//!
//! A [`ReferenceSet`] is an immutable snapshot of everything the engine
//! compares against. When references change externally, the caller rebuilds
//! the whole set and swaps it in atomically; the engine never mutates one
//! in place.

use serde::{Deserialize, Serialize};

use super::embedding::PoseEmbedding;

/// One stored reference: an embedding plus the label of the image it came
/// from (surfaced to callers as "best matching reference").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub embedding: PoseEmbedding,
    pub label: String,
}

impl ReferenceEntry {
    pub fn new(embedding: PoseEmbedding, label: impl Into<String>) -> Self {
        Self {
            embedding,
            label: label.into(),
        }
    }
}

/// Movement-class name -> ordered reference embeddings.
///
/// Movements iterate in insertion order; the classifier breaks score ties
/// by that order (first wins), so the order is part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    movements: Vec<(String, Vec<ReferenceEntry>)>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a movement class with its references, replacing any
    /// previous entries for the same name (position is kept on replace).
    pub fn insert(&mut self, movement: impl Into<String>, entries: Vec<ReferenceEntry>) {
        let movement = movement.into();
        match self.movements.iter_mut().find(|(name, _)| *name == movement) {
            Some((_, existing)) => *existing = entries,
            None => self.movements.push((movement, entries)),
        }
    }

    /// References for one movement, or `None` if the movement is unknown.
    pub fn get(&self, movement: &str) -> Option<&[ReferenceEntry]> {
        self.movements
            .iter()
            .find(|(name, _)| name == movement)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Movement classes and their references, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ReferenceEntry])> {
        self.movements
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of movement classes.
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Total reference entries across all movements.
    pub fn total_entries(&self) -> usize {
        self.movements.iter().map(|(_, entries)| entries.len()).sum()
    }
}
