//! Key→value association with explicit first-insertion order.
//!
//! The order list is maintained by hand rather than delegated to an
//! order-preserving map type, because the list itself is rendered: the demo
//! shows insertion order as a first-class piece of state next to the bucket
//! view.

use std::collections::HashMap;

use serde::Serialize;

use crate::scalar::Scalar;

/// Insertion-ordered map.
///
/// Invariant: every key in `order` appears exactly once and the set of keys in
/// `order` equals the key set of `assoc`. Updating an existing key leaves its
/// order position alone; deleting and re-inserting a key appends it at the
/// end.
#[derive(Debug, Clone, Default)]
pub struct InsertionOrderedMap {
    assoc: HashMap<Scalar, Scalar>,
    order: Vec<Scalar>,
}

impl InsertionOrderedMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update `key` → `value`. A new key is appended to the order
    /// list; an existing key keeps its position.
    pub fn set(&mut self, key: Scalar, value: Scalar) {
        if !self.assoc.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.assoc.insert(key, value);
    }

    /// Get the value associated with `key`, or `None`.
    pub fn get(&self, key: &Scalar) -> Option<&Scalar> {
        self.assoc.get(key)
    }

    /// Returns `true` if `key` exists.
    pub fn has(&self, key: &Scalar) -> bool {
        self.assoc.contains_key(key)
    }

    /// Delete `key` from both the association and the order list. Returns
    /// `true` if it existed.
    pub fn delete(&mut self, key: &Scalar) -> bool {
        if self.assoc.remove(key).is_some() {
            if let Some(idx) = self.order.iter().position(|k| k == key) {
                self.order.remove(idx);
            }
            true
        } else {
            false
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.assoc.clear();
        self.order.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.assoc.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.assoc.is_empty()
    }

    /// `(key, value)` pairs in first-insertion order.
    pub fn entries(&self) -> Vec<(Scalar, Scalar)> {
        self.order
            .iter()
            .filter_map(|key| self.assoc.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> Vec<Scalar> {
        self.order.clone()
    }

    /// Values in first-insertion order.
    pub fn values(&self) -> Vec<Scalar> {
        self.order
            .iter()
            .filter_map(|key| self.assoc.get(key).cloned())
            .collect()
    }

    /// Copy of the order list.
    pub fn insertion_order(&self) -> Vec<Scalar> {
        self.order.clone()
    }

    /// Defensive-copy snapshot for rendering.
    pub fn snapshot(&self) -> OrderedMapSnapshot {
        OrderedMapSnapshot {
            entries: self.entries(),
            size: self.len(),
            insertion_order: self.order.clone(),
        }
    }
}

/// Read-only projection of an [`InsertionOrderedMap`] at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedMapSnapshot {
    pub entries: Vec<(Scalar, Scalar)>,
    pub size: usize,
    pub insertion_order: Vec<Scalar>,
}
