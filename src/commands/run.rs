//! `stepsearch run`: a single search

use std::io;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::sink::TerminalSink;
use stepsearch_core::error::Result;

pub fn execute(
    ctx: &CommandContext,
    search: &SearchArgs,
    start: &str,
    goal: Option<&str>,
) -> Result<()> {
    let settings = ctx.settings(search)?;
    let mut controller = ctx.controller(&settings)?;

    tracing::debug!(
        algorithm = %settings.algorithm,
        pace_ms = settings.pace.as_millis() as u64,
        "run"
    );

    let stdout = io::stdout();
    let mut sink = TerminalSink::new(
        stdout.lock(),
        ctx.cli.format,
        settings.pace,
        controller.graph().nodes(),
    );

    let outcome = controller.start_run(start, goal, &mut sink)?;
    sink.finish(
        &outcome,
        ctx.cli.quiet,
        ctx.cli.format == OutputFormat::Json,
    )?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "run_complete");
    Ok(())
}
