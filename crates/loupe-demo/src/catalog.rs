//! Demo catalog metadata for scenario listings.

use serde::Serialize;

/// Rough difficulty label shown next to a demo in a selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

/// One catalog row: a selectable demo and what it teaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub complexity: Complexity,
}
