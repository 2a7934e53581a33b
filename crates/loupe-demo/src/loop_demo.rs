//! Playback orchestrator for the event-loop demo.
//!
//! Drives an [`EventLoopQueues`] through a scripted sequence of queue
//! actions. Same cursor contract as the map demo: `advance` applies one step,
//! `retreat` rebuilds from scratch, `reset` empties the lanes and rewinds.

use serde::Serialize;

use loupe_eventloop::{EventLoopQueues, QueueId, QueuesSnapshot, Task};

/// One scripted queue action. Closed so that a new action kind is a
/// compile-time exercise for every `match` that dispatches on it.
///
/// `Push` and `Move` carry the full task value the lane should hold after the
/// step; `Execute` only needs the id but carries the task for symmetry with
/// the authored scripts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum QueueAction {
    Push { target: QueueId, task: Task },
    Pop { target: QueueId },
    Move { target: QueueId, task: Task },
    Execute { target: QueueId, task: Task },
}

impl QueueAction {
    /// The lane this action addresses.
    pub fn target(&self) -> QueueId {
        match self {
            QueueAction::Push { target, .. }
            | QueueAction::Pop { target }
            | QueueAction::Move { target, .. }
            | QueueAction::Execute { target, .. } => *target,
        }
    }

    /// The task payload, if this action carries one.
    pub fn task(&self) -> Option<&Task> {
        match self {
            QueueAction::Push { task, .. }
            | QueueAction::Move { task, .. }
            | QueueAction::Execute { task, .. } => Some(task),
            QueueAction::Pop { .. } => None,
        }
    }
}

/// One step of a scripted event-loop demo. Immutable once constructed by a
/// scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLoopStep {
    pub id: String,
    pub description: String,
    #[serde(flatten)]
    pub action: QueueAction,
}

impl EventLoopStep {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        action: QueueAction,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            action,
        }
    }
}

/// Snapshot of the whole demo: the four lanes, the script, and the cursor.
///
/// The lanes flatten into the top level so the JSON reads
/// `{"callStack": [...], "webApis": [...], ...}` next to the cursor fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLoopDemoState {
    #[serde(flatten)]
    pub queues: QueuesSnapshot,
    pub current_step: usize,
    pub steps: Vec<EventLoopStep>,
    pub is_playing: bool,
}

/// Owns the lane state plus a scripted step list and a cursor.
///
/// One instance serves one driver session; nothing in here is shared or
/// reentrant. Every operation runs to completion synchronously.
#[derive(Debug, Default)]
pub struct EventLoopDemo {
    queues: EventLoopQueues,
    steps: Vec<EventLoopStep>,
    cursor: usize,
    playing: bool,
}

impl EventLoopDemo {
    /// Create an orchestrator with empty lanes and no script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active script and reset the lanes and the cursor.
    pub fn set_steps(&mut self, steps: Vec<EventLoopStep>) {
        self.steps = steps;
        self.reset();
    }

    /// Apply the step under the cursor and move forward. Returns `false`
    /// (and does nothing) when the cursor is at the end.
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
    /// The lanes are rebuilt from empty by replaying steps `0..cursor`.
    /// O(cursor), which is fine at scenario scale.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.rebuild();
        true
    }

    /// Empty all lanes, rewind the cursor, stop playback. The script is kept.
    pub fn reset(&mut self) {
        self.queues.clear();
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
    pub fn steps(&self) -> &[EventLoopStep] {
        &self.steps
    }

    /// The lane state under the cursor.
    pub fn queues(&self) -> &EventLoopQueues {
        &self.queues
    }

    /// Full read-only snapshot for rendering.
    pub fn state(&self) -> EventLoopDemoState {
        EventLoopDemoState {
            queues: self.queues.snapshot(),
            current_step: self.cursor,
            steps: self.steps.clone(),
            is_playing: self.playing,
        }
    }

    fn execute(&mut self, step: &EventLoopStep) {
        match &step.action {
            QueueAction::Push { target, task } => {
                self.queues.push(*target, task.clone());
            }
            QueueAction::Pop { target } => {
                let _ = self.queues.pop(*target);
            }
            QueueAction::Move { target, task } => {
                let _ = self.queues.move_task(task.clone(), *target);
            }
            QueueAction::Execute { target, task } => {
                let _ = self.queues.execute_task(*target, &task.id);
            }
        }
    }

    fn rebuild(&mut self) {
        self.queues.clear();
        for i in 0..self.cursor {
            let step = self.steps[i].clone();
            self.execute(&step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loupe_eventloop::TaskStatus;

    fn push_pop_script() -> Vec<EventLoopStep> {
        vec![
            EventLoopStep::new(
                "1",
                "push a frame",
                QueueAction::Push {
                    target: QueueId::CallStack,
                    task: Task::sync("start", "console.log(\"Start\")"),
                },
            ),
            EventLoopStep::new(
                "2",
                "pop the frame",
                QueueAction::Pop {
                    target: QueueId::CallStack,
                },
            ),
        ]
    }

    #[test]
    fn test_advance_and_finish() {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(push_pop_script());

        assert!(demo.advance());
        assert_eq!(demo.queues().lane(QueueId::CallStack).len(), 1);

        assert!(demo.advance());
        assert!(demo.is_finished());
        assert!(demo.queues().is_empty());
        assert!(!demo.advance());
        assert_eq!(demo.current_step(), 2);
    }

    #[test]
    fn test_retreat_rebuilds_prior_state() {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(push_pop_script());
        demo.advance();
        demo.advance();

        assert!(demo.retreat());
        assert_eq!(demo.current_step(), 1);
        assert_eq!(demo.queues().lane(QueueId::CallStack).len(), 1);

        assert!(demo.retreat());
        assert!(!demo.retreat());
        assert!(demo.queues().is_empty());
    }

    #[test]
    fn test_move_step_updates_task_payload() {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(vec![
            EventLoopStep::new(
                "1",
                "schedule timer",
                QueueAction::Push {
                    target: QueueId::WebApis,
                    task: Task::timer("timeout", "setTimeout(cb, 0)", 0),
                },
            ),
            EventLoopStep::new(
                "2",
                "timer fires",
                QueueAction::Move {
                    target: QueueId::TaskQueue,
                    task: Task::timer("timeout", "setTimeout callback", 0),
                },
            ),
        ]);
        demo.advance();
        demo.advance();

        let lane = demo.queues().lane(QueueId::TaskQueue);
        assert_eq!(lane.len(), 1);
        assert_eq!(lane[0].name, "setTimeout callback");
        assert!(demo.queues().lane(QueueId::WebApis).is_empty());
    }

    #[test]
    fn test_execute_step_marks_in_place() {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(vec![
            EventLoopStep::new(
                "1",
                "push a frame",
                QueueAction::Push {
                    target: QueueId::CallStack,
                    task: Task::sync("start", "console.log(\"Start\")"),
                },
            ),
            EventLoopStep::new(
                "2",
                "mark it running",
                QueueAction::Execute {
                    target: QueueId::CallStack,
                    task: Task::sync("start", "console.log(\"Start\")"),
                },
            ),
        ]);
        demo.advance();
        demo.advance();

        let lane = demo.queues().lane(QueueId::CallStack);
        assert_eq!(lane.len(), 1);
        assert_eq!(lane[0].status, TaskStatus::Executing);
    }

    #[test]
    fn test_set_steps_resets_everything() {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(push_pop_script());
        demo.advance();
        demo.set_playing(true);

        demo.set_steps(push_pop_script());
        let state = demo.state();
        assert_eq!(state.current_step, 0);
        assert!(state.queues.call_stack.is_empty());
        assert!(!state.is_playing);
    }

    #[test]
    fn test_state_json_flattens_lanes() {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(push_pop_script());
        demo.advance();

        let json = serde_json::to_value(demo.state()).unwrap();
        assert_eq!(json["callStack"][0]["id"], "start");
        assert_eq!(json["currentStep"], 1);
        assert_eq!(json["steps"][0]["action"], "push");
        assert_eq!(json["steps"][0]["target"], "callStack");
        assert_eq!(json["steps"][1]["action"], "pop");
    }
}
