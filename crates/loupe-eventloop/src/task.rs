//! The unit of work that travels between lanes.

use serde::{Deserialize, Serialize};

/// What produced a task. Drives nothing in the engine; the renderer uses it
/// for color-coding and the tests use it to state ordering laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Sync,
    Async,
    Promise,
    Timer,
}

/// Where a task is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Executing,
    Completed,
}

/// A simulated piece of work. Identity is `id`; the same id may appear in
/// many scripted steps, each carrying the status the task has reached by that
/// point of the replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub kind: TaskKind,
    /// Scripted timer delay. Purely descriptive: ordering between timers is
    /// encoded by step order, never by this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    pub status: TaskStatus,
}

impl Task {
    /// New pending task of the given kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            delay_ms: None,
            status: TaskStatus::Pending,
        }
    }

    /// Pending synchronous task (plain call-stack frame).
    pub fn sync(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, TaskKind::Sync)
    }

    /// Pending promise-derived microtask.
    pub fn promise(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, TaskKind::Promise)
    }

    /// Pending timer callback with its scripted delay.
    pub fn timer(id: impl Into<String>, name: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            delay_ms: Some(delay_ms),
            ..Self::new(id, name, TaskKind::Timer)
        }
    }

    /// Same task with a different display name (scripts rename a task when it
    /// changes role, e.g. "setTimeout(...)" becomes its callback body).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Same task marked [`TaskStatus::Executing`].
    pub fn executing(mut self) -> Self {
        self.status = TaskStatus::Executing;
        self
    }

    /// Same task marked [`TaskStatus::Completed`].
    pub fn completed(mut self) -> Self {
        self.status = TaskStatus::Completed;
        self
    }
}
