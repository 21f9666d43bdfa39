//! Command line interface for media-browser

mod args;
mod commands;

pub use args::{Cli, Scan, Serve};
pub use commands::{Commands, ScanCommand, ServeCommand};

use crate::error::Result;
use clap::Parser;

/// Run the CLI application
///
/// A `.env` file in the working directory is loaded first so its values
/// act as environment defaults for the arguments.
pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    cli.command.run(&cli).await
}
