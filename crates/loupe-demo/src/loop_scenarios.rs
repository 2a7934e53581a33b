//! Scripted scenarios for the event-loop demo.
//!
//! Each constructor returns a fixed, pre-computed step sequence modeling one
//! well-known ordering lesson: sync-then-timer, microtask priority, timer
//! delay ordering, and a mixed run. Timer ordering is encoded purely by step
//! order; `delay_ms` on the tasks is display metadata.

use std::fmt;
use std::str::FromStr;

use loupe_eventloop::{QueueId, Task};

use crate::catalog::{Complexity, DemoInfo};
use crate::error::DemoError;
use crate::loop_demo::{EventLoopStep, QueueAction};

/// The selectable event-loop demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopScenario {
    Basic,
    Promises,
    Timers,
    Mixed,
}

impl LoopScenario {
    pub const ALL: [LoopScenario; 4] = [
        LoopScenario::Basic,
        LoopScenario::Promises,
        LoopScenario::Timers,
        LoopScenario::Mixed,
    ];

    /// Catalog row for selection menus.
    pub fn info(self) -> DemoInfo {
        match self {
            LoopScenario::Basic => DemoInfo {
                id: "basic",
                label: "Basic Execution",
                description: "Simple synchronous and asynchronous execution flow",
                complexity: Complexity::Basic,
            },
            LoopScenario::Promises => DemoInfo {
                id: "promises",
                label: "Promises vs Timers",
                description: "Understanding microtask queue priority over task queue",
                complexity: Complexity::Intermediate,
            },
            LoopScenario::Timers => DemoInfo {
                id: "timers",
                label: "Multiple Timers",
                description: "Different timer delays and execution order",
                complexity: Complexity::Intermediate,
            },
            LoopScenario::Mixed => DemoInfo {
                id: "mixed",
                label: "Mixed Operations",
                description: "Complex scenario with promises, timers, and sync code",
                complexity: Complexity::Advanced,
            },
        }
    }

    /// Build this scenario's step sequence.
    pub fn steps(self) -> Vec<EventLoopStep> {
        match self {
            LoopScenario::Basic => basic_demo(),
            LoopScenario::Promises => promises_demo(),
            LoopScenario::Timers => timers_demo(),
            LoopScenario::Mixed => mixed_demo(),
        }
    }
}

impl fmt::Display for LoopScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().id)
    }
}

impl FromStr for LoopScenario {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(LoopScenario::Basic),
            "promises" => Ok(LoopScenario::Promises),
            "timers" => Ok(LoopScenario::Timers),
            "mixed" => Ok(LoopScenario::Mixed),
            _ => Err(DemoError::UnknownScenario {
                family: "event-loop",
                name: s.to_string(),
                expected: "basic, promises, timers, mixed",
            }),
        }
    }
}

fn push(target: QueueId, task: Task) -> QueueAction {
    QueueAction::Push { target, task }
}

fn pop(target: QueueId) -> QueueAction {
    QueueAction::Pop { target }
}

fn move_to(target: QueueId, task: Task) -> QueueAction {
    QueueAction::Move { target, task }
}

/// Two sync frames around one zero-delay timer. The timer's callback only
/// reaches the call stack after both frames have popped.
pub fn basic_demo() -> Vec<EventLoopStep> {
    vec![
        EventLoopStep::new(
            "1",
            "Execute console.log(\"Start\")",
            push(
                QueueId::CallStack,
                Task::sync("start", "console.log(\"Start\")"),
            ),
        ),
        EventLoopStep::new(
            "2",
            "Complete console.log(\"Start\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "3",
            "Execute setTimeout callback",
            push(
                QueueId::WebApis,
                Task::timer("timeout", "setTimeout(() => console.log(\"Timeout\"), 0)", 0),
            ),
        ),
        EventLoopStep::new(
            "4",
            "Execute console.log(\"End\")",
            push(QueueId::CallStack, Task::sync("end", "console.log(\"End\")")),
        ),
        EventLoopStep::new(
            "5",
            "Complete console.log(\"End\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "6",
            "Move timeout to task queue",
            move_to(
                QueueId::TaskQueue,
                Task::timer("timeout", "setTimeout callback", 0),
            ),
        ),
        EventLoopStep::new(
            "7",
            "Execute timeout callback",
            move_to(
                QueueId::CallStack,
                Task::timer("timeout", "console.log(\"Timeout\")", 0).executing(),
            ),
        ),
        EventLoopStep::new(
            "8",
            "Complete timeout callback",
            pop(QueueId::CallStack),
        ),
    ]
}

/// A promise and a zero-delay timer queued together. The promise's callback
/// runs before the timer's even though the timer was scheduled first with no
/// delay.
pub fn promises_demo() -> Vec<EventLoopStep> {
    vec![
        EventLoopStep::new(
            "1",
            "Execute console.log(\"Start\")",
            push(
                QueueId::CallStack,
                Task::sync("start", "console.log(\"Start\")"),
            ),
        ),
        EventLoopStep::new(
            "2",
            "Complete console.log(\"Start\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "3",
            "Create Promise",
            push(
                QueueId::MicrotaskQueue,
                Task::promise(
                    "promise",
                    "Promise.resolve().then(() => console.log(\"Promise\"))",
                ),
            ),
        ),
        EventLoopStep::new(
            "4",
            "Execute setTimeout",
            push(
                QueueId::WebApis,
                Task::timer("timeout", "setTimeout(() => console.log(\"Timeout\"), 0)", 0),
            ),
        ),
        EventLoopStep::new(
            "5",
            "Execute console.log(\"End\")",
            push(QueueId::CallStack, Task::sync("end", "console.log(\"End\")")),
        ),
        EventLoopStep::new(
            "6",
            "Complete console.log(\"End\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "7",
            "Execute Promise callback (microtask has priority)",
            move_to(
                QueueId::CallStack,
                Task::promise("promise", "console.log(\"Promise\")").executing(),
            ),
        ),
        EventLoopStep::new(
            "8",
            "Complete Promise callback",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "9",
            "Move timeout to task queue",
            move_to(
                QueueId::TaskQueue,
                Task::timer("timeout", "setTimeout callback", 0),
            ),
        ),
        EventLoopStep::new(
            "10",
            "Execute timeout callback",
            move_to(
                QueueId::CallStack,
                Task::timer("timeout", "console.log(\"Timeout\")", 0).executing(),
            ),
        ),
        EventLoopStep::new(
            "11",
            "Complete timeout callback",
            pop(QueueId::CallStack),
        ),
    ]
}

/// A 100ms timer scheduled before a 0ms timer. The 0ms callback runs first;
/// the script encodes that by moving `timeout2` out of the web APIs lane
/// before `timeout1`.
pub fn timers_demo() -> Vec<EventLoopStep> {
    vec![
        EventLoopStep::new(
            "1",
            "Execute console.log(\"Start\")",
            push(
                QueueId::CallStack,
                Task::sync("start", "console.log(\"Start\")"),
            ),
        ),
        EventLoopStep::new(
            "2",
            "Complete console.log(\"Start\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "3",
            "Execute setTimeout with 100ms delay",
            push(
                QueueId::WebApis,
                Task::timer(
                    "timeout1",
                    "setTimeout(() => console.log(\"Timeout 1\"), 100)",
                    100,
                ),
            ),
        ),
        EventLoopStep::new(
            "4",
            "Execute setTimeout with 0ms delay",
            push(
                QueueId::WebApis,
                Task::timer(
                    "timeout2",
                    "setTimeout(() => console.log(\"Timeout 2\"), 0)",
                    0,
                ),
            ),
        ),
        EventLoopStep::new(
            "5",
            "Execute console.log(\"End\")",
            push(QueueId::CallStack, Task::sync("end", "console.log(\"End\")")),
        ),
        EventLoopStep::new(
            "6",
            "Complete console.log(\"End\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "7",
            "Timeout 2 (0ms) completes first",
            move_to(
                QueueId::TaskQueue,
                Task::timer("timeout2", "setTimeout callback (0ms)", 0),
            ),
        ),
        EventLoopStep::new(
            "8",
            "Execute timeout 2 callback",
            move_to(
                QueueId::CallStack,
                Task::timer("timeout2", "console.log(\"Timeout 2\")", 0).executing(),
            ),
        ),
        EventLoopStep::new(
            "9",
            "Complete timeout 2 callback",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "10",
            "Timeout 1 (100ms) completes",
            move_to(
                QueueId::TaskQueue,
                Task::timer("timeout1", "setTimeout callback (100ms)", 100),
            ),
        ),
        EventLoopStep::new(
            "11",
            "Execute timeout 1 callback",
            move_to(
                QueueId::CallStack,
                Task::timer("timeout1", "console.log(\"Timeout 1\")", 100).executing(),
            ),
        ),
        EventLoopStep::new(
            "12",
            "Complete timeout 1 callback",
            pop(QueueId::CallStack),
        ),
    ]
}

/// Two promises interleaved with a zero-delay timer. Both microtasks drain
/// before the timer callback runs.
pub fn mixed_demo() -> Vec<EventLoopStep> {
    vec![
        EventLoopStep::new(
            "1",
            "Execute console.log(\"Start\")",
            push(
                QueueId::CallStack,
                Task::sync("start", "console.log(\"Start\")"),
            ),
        ),
        EventLoopStep::new(
            "2",
            "Complete console.log(\"Start\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "3",
            "Create Promise",
            push(
                QueueId::MicrotaskQueue,
                Task::promise(
                    "promise1",
                    "Promise.resolve().then(() => console.log(\"Promise 1\"))",
                ),
            ),
        ),
        EventLoopStep::new(
            "4",
            "Execute setTimeout",
            push(
                QueueId::WebApis,
                Task::timer("timeout", "setTimeout(() => console.log(\"Timeout\"), 0)", 0),
            ),
        ),
        EventLoopStep::new(
            "5",
            "Create another Promise",
            push(
                QueueId::MicrotaskQueue,
                Task::promise(
                    "promise2",
                    "Promise.resolve().then(() => console.log(\"Promise 2\"))",
                ),
            ),
        ),
        EventLoopStep::new(
            "6",
            "Execute console.log(\"End\")",
            push(QueueId::CallStack, Task::sync("end", "console.log(\"End\")")),
        ),
        EventLoopStep::new(
            "7",
            "Complete console.log(\"End\")",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "8",
            "Execute Promise 1 (microtasks first)",
            move_to(
                QueueId::CallStack,
                Task::promise("promise1", "console.log(\"Promise 1\")").executing(),
            ),
        ),
        EventLoopStep::new(
            "9",
            "Complete Promise 1",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "10",
            "Execute Promise 2",
            move_to(
                QueueId::CallStack,
                Task::promise("promise2", "console.log(\"Promise 2\")").executing(),
            ),
        ),
        EventLoopStep::new(
            "11",
            "Complete Promise 2",
            pop(QueueId::CallStack),
        ),
        EventLoopStep::new(
            "12",
            "Move timeout to task queue",
            move_to(
                QueueId::TaskQueue,
                Task::timer("timeout", "setTimeout callback", 0),
            ),
        ),
        EventLoopStep::new(
            "13",
            "Execute timeout callback",
            move_to(
                QueueId::CallStack,
                Task::timer("timeout", "console.log(\"Timeout\")", 0).executing(),
            ),
        ),
        EventLoopStep::new(
            "14",
            "Complete timeout callback",
            pop(QueueId::CallStack),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_ids() {
        for scenario in LoopScenario::ALL {
            assert_eq!(
                scenario.to_string().parse::<LoopScenario>().unwrap(),
                scenario
            );
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "fibers".parse::<LoopScenario>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("fibers"));
        assert!(message.contains("promises"));
    }

    #[test]
    fn test_scripts_have_expected_lengths() {
        assert_eq!(basic_demo().len(), 8);
        assert_eq!(promises_demo().len(), 11);
        assert_eq!(timers_demo().len(), 12);
        assert_eq!(mixed_demo().len(), 14);
    }

    #[test]
    fn test_step_ids_are_sequential() {
        for scenario in LoopScenario::ALL {
            for (i, step) in scenario.steps().iter().enumerate() {
                assert_eq!(step.id, (i + 1).to_string());
            }
        }
    }

    #[test]
    fn test_every_moved_id_was_pushed_earlier() {
        for scenario in LoopScenario::ALL {
            let steps = scenario.steps();
            for (i, step) in steps.iter().enumerate() {
                if let QueueAction::Move { task, .. } = &step.action {
                    let introduced = steps[..i].iter().any(|earlier| {
                        matches!(
                            &earlier.action,
                            QueueAction::Push { task: pushed, .. } if pushed.id == task.id
                        )
                    });
                    assert!(
                        introduced,
                        "{scenario}: step {} moves un-pushed task {}",
                        step.id, task.id
                    );
                }
            }
        }
    }
}
