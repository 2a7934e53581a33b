//! Chained-bucket hash map with load-factor-triggered growth.
//!
//! The bucket layout is part of the public surface: the whole point of this
//! map is that a renderer can show which bucket each entry landed in and watch
//! entries re-home when the table doubles.

use serde::Serialize;

use crate::scalar::Scalar;

/// Growth trigger: a `set` that pushes `size / capacity` above this doubles
/// the table.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

const DEFAULT_CAPACITY: usize = 16;

/// One entry in a bucket chain. `slot` records the bucket index the entry was
/// placed in at its current capacity, so a snapshot can label it without
/// re-hashing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub key: Scalar,
    pub value: Scalar,
    pub slot: usize,
}

/// Hash map with per-bucket chaining.
///
/// Hashing is the classic polynomial string hash (`h = h * 31 + code_unit`)
/// wrapped to 32-bit signed arithmetic, reduced by `abs(h) % capacity`. It is
/// deliberately weak — small keys collide at small capacities, which is what
/// the collision demo relies on — and deterministic, which forward/backward
/// replay relies on.
#[derive(Debug, Clone)]
pub struct KeyedBucketMap {
    buckets: Vec<Vec<Entry>>,
    size: usize,
    capacity: usize,
}

impl Default for KeyedBucketMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyedBucketMap {
    /// Create an empty map with the default capacity of 16.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty map with the given initial capacity.
    ///
    /// The demo orchestrator uses 8 so that resizes happen within a short
    /// scripted sequence.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "bucket map capacity must be non-zero");
        Self {
            buckets: vec![Vec::new(); capacity],
            size: 0,
            capacity,
        }
    }

    /// Bucket index for `key` at the current capacity.
    pub fn hash_slot(&self, key: &Scalar) -> usize {
        let mut h: i32 = 0;
        for unit in key.to_string().encode_utf16() {
            // h * 31 + unit, expressed as (h << 5) - h + unit with 32-bit wrap.
            h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
        }
        h.unsigned_abs() as usize % self.capacity
    }

    /// Insert or update `key` → `value`.
    ///
    /// An existing key is overwritten in place, keeping its position in the
    /// chain and leaving `size` untouched. A new key is appended to its
    /// bucket; if that pushes the load factor above [`MAX_LOAD_FACTOR`], the
    /// table resizes before `set` returns.
    pub fn set(&mut self, key: Scalar, value: Scalar) {
        let slot = self.hash_slot(&key);
        let bucket = &mut self.buckets[slot];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
            return;
        }

        bucket.push(Entry { key, value, slot });
        self.size += 1;

        if self.size as f64 > self.capacity as f64 * MAX_LOAD_FACTOR {
            self.resize();
        }
    }

    /// Get the value associated with `key`, or `None`.
    pub fn get(&self, key: &Scalar) -> Option<&Scalar> {
        let slot = self.hash_slot(key);
        self.buckets[slot]
            .iter()
            .find(|entry| &entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Returns `true` if `key` exists.
    pub fn has(&self, key: &Scalar) -> bool {
        self.get(key).is_some()
    }

    /// Delete `key`. Returns `true` if it existed.
    pub fn delete(&mut self, key: &Scalar) -> bool {
        let slot = self.hash_slot(key);
        let bucket = &mut self.buckets[slot];
        if let Some(idx) = bucket.iter().position(|entry| &entry.key == key) {
            bucket.remove(idx);
            self.size -= 1;
            true
        } else {
            false
        }
    }

    /// Remove all entries. Capacity is kept, including capacity gained from
    /// earlier resizes.
    pub fn clear(&mut self) {
        self.buckets = vec![Vec::new(); self.capacity];
        self.size = 0;
    }

    /// Double the capacity and re-insert every entry through [`set`] so that
    /// slots are recomputed against the new capacity.
    ///
    /// Re-insertion goes through the growth check again, but capacity has
    /// already doubled, so the load factor lands at or below half the trigger
    /// and no cascading resize occurs.
    ///
    /// [`set`]: KeyedBucketMap::set
    fn resize(&mut self) {
        let old_buckets = std::mem::take(&mut self.buckets);
        self.capacity *= 2;
        self.buckets = vec![Vec::new(); self.capacity];
        self.size = 0;

        for bucket in old_buckets {
            for entry in bucket {
                self.set(entry.key, entry.value);
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current bucket-array capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// All `(key, value)` pairs in bucket order, then chain order.
    pub fn entries(&self) -> Vec<(Scalar, Scalar)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }

    /// Defensive copy of the full bucket layout for rendering. Mutating the
    /// snapshot, or the map afterwards, affects neither the other.
    pub fn snapshot(&self) -> BucketMapSnapshot {
        BucketMapSnapshot {
            buckets: self.buckets.clone(),
            size: self.size,
            capacity: self.capacity,
            load_factor: self.load_factor(),
        }
    }
}

/// Read-only projection of a [`KeyedBucketMap`] at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketMapSnapshot {
    pub buckets: Vec<Vec<Entry>>,
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_count(map: &KeyedBucketMap) -> usize {
        map.snapshot().buckets.iter().map(Vec::len).sum()
    }

    #[test]
    fn test_hash_is_deterministic() {
        let map = KeyedBucketMap::with_capacity(8);
        for key in ["name", "age", "city", "a", "q", "A", "key12"] {
            let key = Scalar::from(key);
            assert_eq!(map.hash_slot(&key), map.hash_slot(&key));
        }
        assert_eq!(
            map.hash_slot(&Scalar::from(25)),
            map.hash_slot(&Scalar::Text("25".to_string()))
        );
    }

    #[test]
    fn test_single_char_keys_collide_at_capacity_8() {
        // charCode(a)=97, charCode(q)=113, charCode(A)=65 — all ≡ 1 mod 8.
        let map = KeyedBucketMap::with_capacity(8);
        let a = map.hash_slot(&Scalar::from("a"));
        assert_eq!(a, 1);
        assert_eq!(map.hash_slot(&Scalar::from("q")), a);
        assert_eq!(map.hash_slot(&Scalar::from("A")), a);
    }

    #[test]
    fn test_set_get_delete() {
        let mut map = KeyedBucketMap::with_capacity(8);
        map.set("name".into(), "John".into());
        map.set("age".into(), 25.into());

        assert_eq!(map.get(&"name".into()), Some(&Scalar::from("John")));
        assert_eq!(map.get(&"age".into()), Some(&Scalar::from(25)));
        assert_eq!(map.get(&"city".into()), None);
        assert!(map.has(&"name".into()));
        assert!(!map.has(&"city".into()));

        assert!(map.delete(&"name".into()));
        assert!(!map.delete(&"name".into()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"name".into()), None);
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut map = KeyedBucketMap::with_capacity(8);
        map.set("a".into(), "first".into());
        map.set("q".into(), "second".into());
        map.set("a".into(), "updated".into());

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"a".into()), Some(&Scalar::from("updated")));

        // "a" keeps its chain position ahead of "q".
        let snapshot = map.snapshot();
        let chain = &snapshot.buckets[map.hash_slot(&"a".into())];
        assert_eq!(chain[0].key, Scalar::from("a"));
        assert_eq!(chain[1].key, Scalar::from("q"));
    }

    #[test]
    fn test_collision_chains_in_one_bucket() {
        let mut map = KeyedBucketMap::with_capacity(8);
        map.set("a".into(), "value1".into());
        map.set("q".into(), "value2".into());
        map.set("A".into(), "value3".into());

        let snapshot = map.snapshot();
        let slot = map.hash_slot(&"a".into());
        assert_eq!(snapshot.buckets[slot].len(), 3);
        assert_eq!(map.get(&"q".into()), Some(&Scalar::from("value2")));
    }

    #[test]
    fn test_size_matches_bucket_totals() {
        let mut map = KeyedBucketMap::with_capacity(8);
        for i in 0..20 {
            map.set(format!("key{i}").into(), format!("value{i}").into());
        }
        map.delete(&"key3".into());
        map.delete(&"key11".into());
        map.set("key5".into(), "replaced".into());

        assert_eq!(map.len(), 18);
        assert_eq!(entry_count(&map), map.len());
    }

    #[test]
    fn test_no_duplicate_keys_within_a_bucket() {
        let mut map = KeyedBucketMap::with_capacity(8);
        for _ in 0..3 {
            map.set("a".into(), "x".into());
            map.set("q".into(), "y".into());
        }
        for bucket in &map.snapshot().buckets {
            for (i, entry) in bucket.iter().enumerate() {
                assert!(bucket[i + 1..].iter().all(|other| other.key != entry.key));
            }
        }
    }

    #[test]
    fn test_load_factor_bound_after_every_set() {
        let mut map = KeyedBucketMap::with_capacity(8);
        for i in 0..40 {
            map.set(format!("key{i}").into(), Scalar::from(i));
            assert!(map.load_factor() <= MAX_LOAD_FACTOR);
        }
    }

    #[test]
    fn test_resize_triggers_at_seventh_insert_on_capacity_8() {
        let mut map = KeyedBucketMap::with_capacity(8);
        for i in 0..6 {
            map.set(format!("key{i}").into(), Scalar::from(i));
        }
        assert_eq!(map.capacity(), 8);

        // 7/8 = 0.875 > 0.75 — the seventh insert doubles the table.
        map.set("key6".into(), Scalar::from(6));
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.len(), 7);

        for i in 0..7 {
            assert_eq!(
                map.get(&format!("key{i}").into()),
                Some(&Scalar::from(i as i64))
            );
        }
    }

    #[test]
    fn test_resize_preserves_associations_and_recomputes_slots() {
        let mut map = KeyedBucketMap::with_capacity(8);
        for i in 0..20 {
            map.set(format!("key{i}").into(), Scalar::from(i));
        }
        assert_eq!(map.capacity(), 32);
        assert_eq!(entry_count(&map), 20);

        for bucket in &map.snapshot().buckets {
            for entry in bucket {
                assert_eq!(entry.slot, map.hash_slot(&entry.key));
            }
        }
    }

    #[test]
    fn test_clear_keeps_grown_capacity() {
        let mut map = KeyedBucketMap::with_capacity(8);
        for i in 0..10 {
            map.set(format!("key{i}").into(), Scalar::from(i));
        }
        assert_eq!(map.capacity(), 16);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.load_factor(), 0.0);
    }

    #[test]
    fn test_snapshot_does_not_alias_live_map() {
        let mut map = KeyedBucketMap::with_capacity(8);
        map.set("name".into(), "John".into());
        let snapshot = map.snapshot();

        map.set("name".into(), "Jane".into());
        map.set("age".into(), 25.into());

        assert_eq!(snapshot.size, 1);
        let slot = map.hash_slot(&"name".into());
        assert_eq!(snapshot.buckets[slot][0].value, Scalar::from("John"));
    }
}
