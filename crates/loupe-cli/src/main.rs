use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

mod commands;

use commands::event_loop::EventLoopCommand;
use commands::list::ListCommand;
use commands::map::MapCommand;

#[derive(Parser)]
#[command(name = "loupe", version, about = "Scripted runtime-internals demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a keyed-map scenario against both map structures
    Map(MapCommand),
    /// Play an event-loop scenario across the four lanes
    EventLoop(EventLoopCommand),
    /// List the available scenarios
    List(ListCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map(cmd) => cmd.run().await,
        Commands::EventLoop(cmd) => cmd.run().await,
        Commands::List(cmd) => cmd.run(),
    }
}
