//! CLI for the registry website front-end.

pub mod serve;

use clap::{Parser, Subcommand};

/// Registry website front-end
#[derive(Parser)]
#[command(name = "registry-web")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve,
}
