//! The four lanes and their movement primitives.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::task::{Task, TaskStatus};

/// Names the four lanes of the simulated loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueueId {
    CallStack,
    WebApis,
    MicrotaskQueue,
    TaskQueue,
}

impl QueueId {
    /// Human-readable lane label for rendering.
    pub fn label(self) -> &'static str {
        match self {
            QueueId::CallStack => "Call Stack",
            QueueId::WebApis => "Web APIs",
            QueueId::MicrotaskQueue => "Microtask Queue",
            QueueId::TaskQueue => "Task Queue",
        }
    }
}

/// Source scan order for [`EventLoopQueues::move_task`]. The call stack is
/// never a move source; tasks leave it by `pop`.
const MOVE_SOURCES: [QueueId; 3] = [QueueId::WebApis, QueueId::TaskQueue, QueueId::MicrotaskQueue];

/// The mutable lane state a replay drives.
///
/// Invariant: a given task id lives in at most one lane at a time.
/// [`move_task`] maintains this by removing the source entry before appending
/// to the target; scripts introduce each id with a single `push`.
///
/// [`move_task`]: EventLoopQueues::move_task
#[derive(Debug, Clone, Default)]
pub struct EventLoopQueues {
    call_stack: Vec<Task>,
    web_apis: Vec<Task>,
    microtask_queue: Vec<Task>,
    task_queue: Vec<Task>,
}

impl EventLoopQueues {
    /// Create four empty lanes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a lane's tasks, front (oldest) first.
    pub fn lane(&self, id: QueueId) -> &[Task] {
        match id {
            QueueId::CallStack => &self.call_stack,
            QueueId::WebApis => &self.web_apis,
            QueueId::MicrotaskQueue => &self.microtask_queue,
            QueueId::TaskQueue => &self.task_queue,
        }
    }

    fn lane_mut(&mut self, id: QueueId) -> &mut Vec<Task> {
        match id {
            QueueId::CallStack => &mut self.call_stack,
            QueueId::WebApis => &mut self.web_apis,
            QueueId::MicrotaskQueue => &mut self.microtask_queue,
            QueueId::TaskQueue => &mut self.task_queue,
        }
    }

    /// Append `task` to the named lane.
    pub fn push(&mut self, target: QueueId, task: Task) {
        self.lane_mut(target).push(task);
    }

    /// Remove and return the most recently appended task of the named lane.
    ///
    /// LIFO removal models call-stack unwind; the scripted demos use it
    /// uniformly for whichever lane a step names.
    pub fn pop(&mut self, target: QueueId) -> Option<Task> {
        self.lane_mut(target).pop()
    }

    /// Move the task with `task.id` into `target`.
    ///
    /// Sources are scanned in the fixed order web APIs → task queue →
    /// microtask queue; the first entry with a matching id is removed and the
    /// *provided* task value — which may carry an updated name or status — is
    /// appended to the target. Within a lane the earliest-pushed match is
    /// taken, so movement is FIFO per lane.
    ///
    /// A missing id leaves all lanes untouched and returns `false`. Scenario
    /// steps are author-written, so this is logged as an authoring problem
    /// rather than escalated into a replay failure.
    pub fn move_task(&mut self, task: Task, target: QueueId) -> bool {
        for source in MOVE_SOURCES {
            let lane = self.lane_mut(source);
            if let Some(idx) = lane.iter().position(|entry| entry.id == task.id) {
                lane.remove(idx);
                self.lane_mut(target).push(task);
                return true;
            }
        }
        warn!(task_id = %task.id, ?target, "move step names a task absent from every source lane");
        false
    }

    /// Mark the task with `task_id` inside the named lane as
    /// [`TaskStatus::Executing`], in place, without moving it.
    ///
    /// Same missing-id policy as [`move_task`](EventLoopQueues::move_task).
    pub fn execute_task(&mut self, target: QueueId, task_id: &str) -> bool {
        if let Some(entry) = self
            .lane_mut(target)
            .iter_mut()
            .find(|entry| entry.id == task_id)
        {
            entry.status = TaskStatus::Executing;
            true
        } else {
            warn!(task_id = %task_id, ?target, "execute step names a task absent from its lane");
            false
        }
    }

    /// Empty all four lanes.
    pub fn clear(&mut self) {
        self.call_stack.clear();
        self.web_apis.clear();
        self.microtask_queue.clear();
        self.task_queue.clear();
    }

    /// Returns `true` if every lane is empty.
    pub fn is_empty(&self) -> bool {
        self.call_stack.is_empty()
            && self.web_apis.is_empty()
            && self.microtask_queue.is_empty()
            && self.task_queue.is_empty()
    }

    /// Returns `true` if `task_id` is present in any lane.
    pub fn contains(&self, task_id: &str) -> bool {
        self.all_lanes()
            .iter()
            .any(|(_, lane)| lane.iter().any(|entry| entry.id == task_id))
    }

    /// All four lanes with their ids, for invariant checks and rendering.
    pub fn all_lanes(&self) -> [(QueueId, &[Task]); 4] {
        [
            (QueueId::CallStack, self.call_stack.as_slice()),
            (QueueId::WebApis, self.web_apis.as_slice()),
            (QueueId::MicrotaskQueue, self.microtask_queue.as_slice()),
            (QueueId::TaskQueue, self.task_queue.as_slice()),
        ]
    }

    /// Defensive copy of all four lanes for rendering.
    pub fn snapshot(&self) -> QueuesSnapshot {
        QueuesSnapshot {
            call_stack: self.call_stack.clone(),
            web_apis: self.web_apis.clone(),
            microtask_queue: self.microtask_queue.clone(),
            task_queue: self.task_queue.clone(),
        }
    }
}

/// Read-only projection of the four lanes at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuesSnapshot {
    pub call_stack: Vec<Task>,
    pub web_apis: Vec<Task>,
    pub microtask_queue: Vec<Task>,
    pub task_queue: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    #[test]
    fn test_push_and_lifo_pop() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::CallStack, Task::sync("a", "first"));
        queues.push(QueueId::CallStack, Task::sync("b", "second"));

        let popped = queues.pop(QueueId::CallStack).unwrap();
        assert_eq!(popped.id, "b");
        assert_eq!(queues.lane(QueueId::CallStack).len(), 1);

        assert!(queues.pop(QueueId::TaskQueue).is_none());
    }

    #[test]
    fn test_move_prefers_web_apis_then_task_queue() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::WebApis, Task::timer("t", "in web apis", 0));
        queues.push(QueueId::TaskQueue, Task::timer("t2", "in task queue", 0));

        assert!(queues.move_task(Task::timer("t", "moved", 0), QueueId::TaskQueue));
        assert!(queues.lane(QueueId::WebApis).is_empty());
        assert_eq!(queues.lane(QueueId::TaskQueue).len(), 2);
        // Appended after the task that was already queued.
        assert_eq!(queues.lane(QueueId::TaskQueue)[1].id, "t");
        assert_eq!(queues.lane(QueueId::TaskQueue)[1].name, "moved");
    }

    #[test]
    fn test_move_is_fifo_within_a_lane() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::MicrotaskQueue, Task::promise("p1", "first"));
        queues.push(QueueId::MicrotaskQueue, Task::promise("p2", "second"));

        assert!(queues.move_task(Task::promise("p1", "first").executing(), QueueId::CallStack));
        assert_eq!(queues.lane(QueueId::MicrotaskQueue)[0].id, "p2");
        assert_eq!(queues.lane(QueueId::CallStack)[0].status, TaskStatus::Executing);
    }

    #[test]
    fn test_move_carries_provided_task_value() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::WebApis, Task::timer("t", "setTimeout(cb, 0)", 0));

        queues.move_task(
            Task::new("t", "cb body", TaskKind::Timer).executing(),
            QueueId::CallStack,
        );
        let moved = &queues.lane(QueueId::CallStack)[0];
        assert_eq!(moved.name, "cb body");
        assert_eq!(moved.status, TaskStatus::Executing);
    }

    #[test]
    fn test_move_missing_id_is_a_noop() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::TaskQueue, Task::timer("real", "cb", 0));

        assert!(!queues.move_task(Task::timer("ghost", "cb", 0), QueueId::CallStack));
        assert_eq!(queues.lane(QueueId::TaskQueue).len(), 1);
        assert!(queues.lane(QueueId::CallStack).is_empty());
    }

    #[test]
    fn test_move_keeps_id_in_one_lane() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::WebApis, Task::timer("t", "cb", 0));
        queues.move_task(Task::timer("t", "cb", 0), QueueId::TaskQueue);

        let locations = queues
            .all_lanes()
            .iter()
            .filter(|(_, lane)| lane.iter().any(|task| task.id == "t"))
            .count();
        assert_eq!(locations, 1);
    }

    #[test]
    fn test_execute_marks_in_place() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::CallStack, Task::sync("s", "frame"));

        assert!(queues.execute_task(QueueId::CallStack, "s"));
        assert_eq!(queues.lane(QueueId::CallStack)[0].status, TaskStatus::Executing);
        assert_eq!(queues.lane(QueueId::CallStack).len(), 1);

        assert!(!queues.execute_task(QueueId::CallStack, "ghost"));
    }

    #[test]
    fn test_clear_and_contains() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::MicrotaskQueue, Task::promise("p", "cb"));
        assert!(queues.contains("p"));
        assert!(!queues.contains("q"));

        queues.clear();
        assert!(queues.is_empty());
        assert!(!queues.contains("p"));
    }

    #[test]
    fn test_snapshot_does_not_alias_lanes() {
        let mut queues = EventLoopQueues::new();
        queues.push(QueueId::TaskQueue, Task::timer("t", "cb", 0));
        let snapshot = queues.snapshot();

        queues.pop(QueueId::TaskQueue);
        assert_eq!(snapshot.task_queue.len(), 1);
        assert!(queues.lane(QueueId::TaskQueue).is_empty());
    }
}
