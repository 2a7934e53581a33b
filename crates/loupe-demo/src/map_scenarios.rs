//! Scripted scenarios for the map comparison demo.
//!
//! Each constructor returns a fixed, pre-computed step sequence; nothing here
//! is generated at playback time. The collision and resize scripts are tuned
//! to the demo map's initial capacity of 8.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Complexity, DemoInfo};
use crate::error::DemoError;
use crate::map_demo::{MapDemoStep, MapOp};

/// The selectable map demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapScenario {
    Basic,
    Collision,
    Resize,
}

impl MapScenario {
    pub const ALL: [MapScenario; 3] =
        [MapScenario::Basic, MapScenario::Collision, MapScenario::Resize];

    /// Catalog row for selection menus.
    pub fn info(self) -> DemoInfo {
        match self {
            MapScenario::Basic => DemoInfo {
                id: "basic",
                label: "Basic Operations",
                description: "Simple get, set, and delete operations on hash map",
                complexity: Complexity::Basic,
            },
            MapScenario::Collision => DemoInfo {
                id: "collision",
                label: "Hash Collisions",
                description: "Understanding how collisions are handled with chaining",
                complexity: Complexity::Intermediate,
            },
            MapScenario::Resize => DemoInfo {
                id: "resize",
                label: "Dynamic Resizing",
                description: "Automatic resizing when load factor exceeds threshold",
                complexity: Complexity::Intermediate,
            },
        }
    }

    /// Build this scenario's step sequence.
    pub fn steps(self) -> Vec<MapDemoStep> {
        match self {
            MapScenario::Basic => basic_demo(),
            MapScenario::Collision => collision_demo(),
            MapScenario::Resize => resize_demo(),
        }
    }
}

impl fmt::Display for MapScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().id)
    }
}

impl FromStr for MapScenario {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(MapScenario::Basic),
            "collision" => Ok(MapScenario::Collision),
            "resize" => Ok(MapScenario::Resize),
            _ => Err(DemoError::UnknownScenario {
                family: "map",
                name: s.to_string(),
                expected: "basic, collision, resize",
            }),
        }
    }
}

/// set / get / update / delete on a handful of keys.
pub fn basic_demo() -> Vec<MapDemoStep> {
    vec![
        MapDemoStep::new(
            "1",
            "Adding first key-value pair",
            MapOp::Set {
                key: "name".into(),
                value: "John".into(),
            },
        ),
        MapDemoStep::new(
            "2",
            "Adding second key-value pair",
            MapOp::Set {
                key: "age".into(),
                value: 25.into(),
            },
        ),
        MapDemoStep::new(
            "3",
            "Adding third key-value pair",
            MapOp::Set {
                key: "city".into(),
                value: "New York".into(),
            },
        ),
        MapDemoStep::new(
            "4",
            "Retrieving value for key \"name\"",
            MapOp::Get { key: "name".into() },
        ),
        MapDemoStep::new(
            "5",
            "Updating existing key",
            MapOp::Set {
                key: "age".into(),
                value: 26.into(),
            },
        ),
        MapDemoStep::new(
            "6",
            "Removing key \"city\"",
            MapOp::Delete { key: "city".into() },
        ),
    ]
}

/// Three single-character keys that all land in bucket 1 of an 8-slot table
/// (char codes 97, 113, 65 are all ≡ 1 mod 8), then a lookup on one of them.
pub fn collision_demo() -> Vec<MapDemoStep> {
    vec![
        MapDemoStep::new(
            "1",
            "Adding key that will hash to bucket 0",
            MapOp::Set {
                key: "a".into(),
                value: "value1".into(),
            },
        ),
        MapDemoStep::new(
            "2",
            "Adding another key that may cause collision",
            MapOp::Set {
                key: "q".into(),
                value: "value2".into(),
            },
        ),
        MapDemoStep::new(
            "3",
            "Adding third key to demonstrate chaining",
            MapOp::Set {
                key: "A".into(),
                value: "value3".into(),
            },
        ),
        MapDemoStep::new(
            "4",
            "Retrieving from collision bucket",
            MapOp::Get { key: "q".into() },
        ),
    ]
}

/// Fifteen sequential inserts on the 8-capacity demo map. The seventh insert
/// crosses 0.75 load and doubles the table mid-sequence; the thirteenth
/// doubles it again.
pub fn resize_demo() -> Vec<MapDemoStep> {
    (0..15)
        .map(|i| {
            let description = if i < 12 {
                format!("Adding item {}", i + 1)
            } else {
                format!("Triggering resize at item {}", i + 1)
            };
            MapDemoStep::new(
                format!("{}", i + 1),
                description,
                MapOp::Set {
                    key: format!("key{i}").into(),
                    value: format!("value{i}").into(),
                },
            )
        })
        .collect()
}
