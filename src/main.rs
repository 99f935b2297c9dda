mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use timelane::config::TimelaneConfig;

#[derive(Parser)]
#[command(name = "timelane", version, about = "Timeline layout and viewport engine")]
struct Cli {
    /// Config file to load instead of ~/.timelane/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out items from a JSON file and print the geometry as JSON
    Layout(cli::layout::LayoutArgs),
    /// Print the header lanes for a window
    Headers(cli::headers::HeadersArgs),
    /// Walk the zoom state machine and print each state
    Zoom(cli::zoom::ZoomArgs),
    /// Compute a card's sticky content offset
    Translate(cli::translate::TranslateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = match &cli.config {
        Some(path) => TimelaneConfig::load_from(path)?,
        None => TimelaneConfig::load()?,
    };

    // Log to stderr so stdout stays clean for JSON output.
    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Layout(args) => cli::layout::layout(&config, &args)?,
        Command::Headers(args) => cli::headers::headers(&args)?,
        Command::Zoom(args) => cli::zoom::zoom(&config, &args)?,
        Command::Translate(args) => cli::translate::translate(&config, &args),
    }

    Ok(())
}
