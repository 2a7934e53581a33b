//! Map command - play a keyed-map scenario to completion.

use anyhow::Result;
use clap::Args;
use std::time::Duration;

use loupe_demo::{MapDemo, MapDemoState, MapScenario};

#[derive(Args)]
pub struct MapCommand {
    /// Scenario to play
    #[arg(long, default_value_t = MapScenario::Basic)]
    pub scenario: MapScenario,

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

impl MapCommand {
    pub async fn run(&self) -> Result<()> {
        let mut demo = MapDemo::new();
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
                render(&state);
                println!();
            }

            if self.autoplay && !demo.is_finished() {
                tokio::time::sleep(interval).await;
            }
        }

        Ok(())
    }
}

fn render(state: &MapDemoState) {
    let map = &state.hash_map;
    println!(
        "  hash map: size {} / capacity {} (load {:.2})",
        map.size, map.capacity, map.load_factor
    );
    for (slot, bucket) in map.buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let cells: Vec<String> = bucket
            .iter()
            .map(|entry| format!("{}={}", entry.key, entry.value))
            .collect();
        println!("    [{slot}] {}", cells.join(" -> "));
    }

    let order: Vec<String> = state
        .ordered_map
        .insertion_order
        .iter()
        .map(|key| key.to_string())
        .collect();
    if order.is_empty() {
        println!("  ordered map: (empty)");
    } else {
        println!("  ordered map: {}", order.join(", "));
    }
}
