//! `stepsearch session`: repeated runs read from stdin
//!
//! Each non-blank line is `START [GOAL]`. All runs share one controller, so
//! every run after the first begins by resetting the node states. A bad line
//! is reported and the session moves on to the next one.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::report::report_error;
use crate::commands::sink::TerminalSink;
use stepsearch_core::controller::RunController;
use stepsearch_core::error::{Result, SearchError};

/// Output settings shared by every run of a session
struct SessionOutput {
    format: OutputFormat,
    quiet: bool,
    pace: Duration,
}

/// Split an input line into start and optional goal tokens
fn parse_line(line: &str) -> Result<Option<(&str, Option<&str>)>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [start] => Ok(Some((*start, None))),
        [start, goal] => Ok(Some((*start, Some(*goal)))),
        _ => Err(SearchError::UsageError(format!(
            "expected `START [GOAL]`, got '{}'",
            line.trim()
        ))),
    }
}

pub fn execute(ctx: &CommandContext, search: &SearchArgs) -> Result<()> {
    let settings = ctx.settings(search)?;
    let mut controller = ctx.controller(&settings)?;
    let output = SessionOutput {
        format: ctx.cli.format,
        quiet: ctx.cli.quiet,
        pace: settings.pace,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let runs = drive(
        &mut controller,
        stdin.lock().lines(),
        &mut stdout.lock(),
        &output,
    )?;

    tracing::debug!(runs, elapsed = ?ctx.start.elapsed(), "session_complete");
    Ok(())
}

/// Run every input line through `controller`, returning how many runs started.
///
/// Stops early once a cancellation is pending: an interrupt that lands while
/// waiting for input would otherwise be cleared by the next run.
fn drive<I, W>(
    controller: &mut RunController,
    lines: I,
    out: &mut W,
    output: &SessionOutput,
) -> Result<usize>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let nodes = controller.graph().nodes().to_vec();
    let mut runs = 0usize;

    for line in lines {
        let line = line?;
        if controller.cancel_requested() {
            tracing::debug!(runs, "session interrupted");
            break;
        }

        let (start, goal) = match parse_line(&line) {
            Ok(Some(tokens)) => tokens,
            Ok(None) => continue,
            Err(e) => {
                report_error(&e, output.format, output.quiet);
                continue;
            }
        };

        // Reject bad input before the run header is printed
        let (start_id, goal_id) = match controller.validate(start, goal) {
            Ok(ids) => ids,
            Err(e) => {
                report_error(&e, output.format, output.quiet);
                continue;
            }
        };

        runs += 1;
        if output.format == OutputFormat::Human && !output.quiet {
            let target = goal_id.map_or_else(|| "(no goal)".to_string(), |g| format!("-> {}", g));
            writeln!(
                out,
                "== run {}: {} {} ({})",
                runs,
                start_id,
                target,
                controller.algorithm()
            )?;
        }

        let mut sink = TerminalSink::new(&mut *out, output.format, output.pace, &nodes);
        let outcome = controller.start_run(start, goal, &mut sink)?;
        sink.finish(&outcome, output.quiet, false)?;

        // Ctrl-C ends the session as well as the current run
        if outcome.cancelled {
            break;
        }
    }

    Ok(runs)
}
