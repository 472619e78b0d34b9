//! Command-line interface wiring for the `mazzo` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod export;
pub mod info;
pub mod render;
pub mod stats;
pub mod utils;

/// Parsed CLI entrypoint for the `mazzo` binary.
#[derive(Parser, Debug)]
#[command(name = "mazzo", version, about = "Deck file toolkit: export, analyze, and render")]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a deck file as pretty-printed JSON.
    Export(export::ExportArgs),
    /// Print deck statistics (extremal names, descriptions, effect counts).
    Stats(stats::StatsArgs),
    /// Render the shuffled deck as a grid of ASCII card boxes.
    Render(render::RenderArgs),
    /// Show a short deck summary.
    Info(info::InfoArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export(args) => export::handle(args),
        Command::Stats(args) => stats::handle(args),
        Command::Render(args) => render::handle(args),
        Command::Info(args) => info::handle(args),
    }
}
