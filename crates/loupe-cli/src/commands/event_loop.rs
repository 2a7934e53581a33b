//! Event-loop command - play a queue scenario to completion.

use anyhow::Result;
use clap::Args;
use std::time::Duration;

use loupe_demo::{EventLoopDemo, LoopScenario};
use loupe_eventloop::{QueuesSnapshot, Task, TaskStatus};

#[derive(Args)]
pub struct EventLoopCommand {
    /// Scenario to play
    #[arg(long, default_value_t = LoopScenario::Basic)]
    pub scenario: LoopScenario,

    /// Print each state as JSON instead of rendered text
    #[arg(long)]
    pub json: bool,

    /// Sleep between steps instead of running straight through
    #[arg(long)]
    pub autoplay: bool,

    /// Milliseconds between steps in autoplay
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,
}

impl EventLoopCommand {
    pub async fn run(&self) -> Result<()> {
        let mut demo = EventLoopDemo::new();
        demo.set_steps(self.scenario.steps());
        demo.set_playing(self.autoplay);

        let total = demo.steps().len();
        let interval = Duration::from_millis(self.interval_ms);

        while !demo.is_finished() {
            let description = demo.steps()[demo.current_step()].description.clone();
            demo.advance();

            let state = demo.state();
            if self.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("Step {}/{}: {}", state.current_step, total, description);
                render(&state.queues);
                println!();
            }

            if self.autoplay && !demo.is_finished() {
                tokio::time::sleep(interval).await;
            }
        }

        Ok(())
    }
}

fn render(queues: &QueuesSnapshot) {
    let lanes: [(&str, &[Task]); 4] = [
        ("Call Stack", &queues.call_stack),
        ("Web APIs", &queues.web_apis),
        ("Microtask Queue", &queues.microtask_queue),
        ("Task Queue", &queues.task_queue),
    ];
    for (label, lane) in lanes {
        let cells: Vec<String> = lane
            .iter()
            .map(|task| format!("{} <{}>", task.name, status_label(task.status)))
            .collect();
        if cells.is_empty() {
            println!("  {label:<16} (empty)");
        } else {
            println!("  {label:<16} {}", cells.join(" | "));
        }
    }
}

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::Executing => "executing",
        TaskStatus::Completed => "completed",
    }
}
