//! List command - print the demo catalog.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use loupe_demo::{DemoInfo, LoopScenario, MapScenario};

#[derive(Args)]
pub struct ListCommand {
    /// Emit the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let map_rows: Vec<DemoInfo> = MapScenario::ALL.iter().map(|s| s.info()).collect();
        let loop_rows: Vec<DemoInfo> = LoopScenario::ALL.iter().map(|s| s.info()).collect();

        if self.json {
            let catalog = json!({ "map": map_rows, "eventLoop": loop_rows });
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            return Ok(());
        }

        println!("map scenarios:");
        print_rows(&map_rows);
        println!();
        println!("event-loop scenarios:");
        print_rows(&loop_rows);
        Ok(())
    }
}

fn print_rows(rows: &[DemoInfo]) {
    for info in rows {
        println!(
            "  {:<10} {:<20} [{:?}] {}",
            info.id, info.label, info.complexity, info.description
        );
    }
}
