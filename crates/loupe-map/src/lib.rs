//! Map cores for the loupe visualizer.
//!
//! Two structures backed by real `set`/`get`/`delete` semantics so that the
//! animation layer renders what an actual map does, not a mock of it:
//!
//! - [`KeyedBucketMap`] — chained-bucket hashing with load-factor-triggered
//!   doubling, exposing its bucket layout for rendering.
//! - [`InsertionOrderedMap`] — key→value association with an explicit
//!   first-insertion order list, independent of any host map ordering.
//!
//! Both hand out defensive-copy snapshots; callers may hold a snapshot across
//! later mutations without observing them.

pub mod bucket_map;
pub mod ordered_map;
pub mod scalar;

pub use bucket_map::{BucketMapSnapshot, Entry, KeyedBucketMap, MAX_LOAD_FACTOR};
pub use ordered_map::{InsertionOrderedMap, OrderedMapSnapshot};
pub use scalar::Scalar;
