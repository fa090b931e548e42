//! Command dispatch logic for stepsearch

use std::time::Instant;

use crate::cli::Cli;
use stepsearch_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
