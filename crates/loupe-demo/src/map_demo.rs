//! Playback orchestrator for the map comparison demo.
//!
//! Drives a [`KeyedBucketMap`] and an [`InsertionOrderedMap`] through the same
//! scripted operations so the renderer can show both structures reacting to
//! one sequence side by side.

use serde::Serialize;

use loupe_map::{
    BucketMapSnapshot, InsertionOrderedMap, KeyedBucketMap, OrderedMapSnapshot, Scalar,
};

/// Initial bucket-array capacity for the demo map. Small enough that the
/// resize scenario crosses the load-factor threshold within 15 inserts.
pub const DEMO_CAPACITY: usize = 8;

/// One scripted map operation. Closed so that a new operation kind is a
/// compile-time exercise for every `match` that dispatches on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum MapOp {
    Set { key: Scalar, value: Scalar },
    Get { key: Scalar },
    Delete { key: Scalar },
}

impl MapOp {
    /// The key this operation addresses.
    pub fn key(&self) -> &Scalar {
        match self {
            MapOp::Set { key, .. } | MapOp::Get { key } | MapOp::Delete { key } => key,
        }
    }
}

/// One step of a scripted map demo. Immutable once constructed by a scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDemoStep {
    pub id: String,
    pub description: String,
    #[serde(flatten)]
    pub op: MapOp,
}

impl MapDemoStep {
    pub fn new(id: impl Into<String>, description: impl Into<String>, op: MapOp) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            op,
        }
    }
}

/// Snapshot of the whole demo: both structures, the script, and the cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDemoState {
    pub hash_map: BucketMapSnapshot,
    pub ordered_map: OrderedMapSnapshot,
    pub current_step: usize,
    pub steps: Vec<MapDemoStep>,
    pub is_playing: bool,
}

/// Owns the two map structures plus a scripted step list and a cursor.
///
/// One instance serves one driver session; nothing in here is shared or
/// reentrant. Every operation runs to completion synchronously.
#[derive(Debug)]
pub struct MapDemo {
    bucket_map: KeyedBucketMap,
    ordered_map: InsertionOrderedMap,
    steps: Vec<MapDemoStep>,
    cursor: usize,
    playing: bool,
}

impl Default for MapDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl MapDemo {
    /// Create an orchestrator with empty structures and no script.
    pub fn new() -> Self {
        Self {
            bucket_map: KeyedBucketMap::with_capacity(DEMO_CAPACITY),
            ordered_map: InsertionOrderedMap::new(),
            steps: Vec::new(),
            cursor: 0,
            playing: false,
        }
    }

    /// Replace the active script and reset both structures and the cursor.
    pub fn set_steps(&mut self, steps: Vec<MapDemoStep>) {
        self.steps = steps;
        self.reset();
    }

    /// Apply the step under the cursor to both structures and move forward.
    /// Returns `false` (and does nothing) when the cursor is at the end.
    pub fn advance(&mut self) -> bool {
        if self.cursor >= self.steps.len() {
            return false;
        }
        let step = self.steps[self.cursor].clone();
        self.execute(&step);
        self.cursor += 1;
        true
    }

    /// Move the cursor back one step. Returns `false` at the start.
    ///
    /// Both structures are rebuilt from empty by replaying steps
    /// `0..cursor`. O(cursor), which is fine at scenario scale.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.rebuild();
        true
    }

    /// Clear both structures, rewind the cursor, stop playback. The script is
    /// kept.
    pub fn reset(&mut self) {
        self.bucket_map = KeyedBucketMap::with_capacity(DEMO_CAPACITY);
        self.ordered_map.clear();
        self.cursor = 0;
        self.playing = false;
    }

    /// Record the autoplay flag. Pacing (repeated `advance` on a timer) is a
    /// driver concern.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Cursor position: the number of steps applied so far.
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// Returns `true` once every scripted step has been applied.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// The active script.
    pub fn steps(&self) -> &[MapDemoStep] {
        &self.steps
    }

    /// Full read-only snapshot for rendering.
    pub fn state(&self) -> MapDemoState {
        MapDemoState {
            hash_map: self.bucket_map.snapshot(),
            ordered_map: self.ordered_map.snapshot(),
            current_step: self.cursor,
            steps: self.steps.clone(),
            is_playing: self.playing,
        }
    }

    /// Apply one operation to both structures, keeping them in lockstep for
    /// the side-by-side comparison.
    fn execute(&mut self, step: &MapDemoStep) {
        match &step.op {
            MapOp::Set { key, value } => {
                self.bucket_map.set(key.clone(), value.clone());
                self.ordered_map.set(key.clone(), value.clone());
            }
            MapOp::Get { key } => {
                // Reads have no structural effect; executed anyway so a
                // hardened core that counts probes would see them.
                let _ = self.bucket_map.get(key);
                let _ = self.ordered_map.get(key);
            }
            MapOp::Delete { key } => {
                self.bucket_map.delete(key);
                self.ordered_map.delete(key);
            }
        }
    }

    fn rebuild(&mut self) {
        self.bucket_map = KeyedBucketMap::with_capacity(DEMO_CAPACITY);
        self.ordered_map.clear();
        for i in 0..self.cursor {
            let step = self.steps[i].clone();
            self.execute(&step);
        }
    }
}
