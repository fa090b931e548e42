//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands, SearchArgs};
use crate::commands::{graph, run, session};
use stepsearch_core::config::{GlobalConfig, RunSettings};
use stepsearch_core::controller::RunController;
use stepsearch_core::error::Result;
use stepsearch_core::graph::GraphDefinition;
use stepsearch_core::search::CancelToken;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Merge the global config file with command-line overrides
    pub fn settings(&self, search: &SearchArgs) -> Result<RunSettings> {
        let config = GlobalConfig::load()?;
        Ok(RunSettings::resolve(
            &config,
            search.algorithm,
            search.pace_ms,
            self.cli.graph.clone(),
        ))
    }

    /// Load the configured graph definition, or the built-in tree
    pub fn graph_definition(&self, settings: &RunSettings) -> Result<GraphDefinition> {
        match &settings.graph {
            Some(path) => GraphDefinition::load(path),
            None => Ok(GraphDefinition::reference()),
        }
    }

    /// Build a controller wired to Ctrl-C cancellation
    pub fn controller(&self, settings: &RunSettings) -> Result<RunController> {
        let definition = self.graph_definition(settings)?;
        let token = CancelToken::new();
        install_interrupt_handler(token.clone());

        tracing::debug!(elapsed = ?self.start.elapsed(), nodes = definition.nodes.len(), "load_graph");
        Ok(RunController::from_definition(&definition, settings.algorithm)?
            .with_cancel_token(token))
    }
}

fn install_interrupt_handler(token: CancelToken) {
    if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run {
                start,
                goal,
                search,
            } => run::execute(ctx, search, start, goal.as_deref()),
            Commands::Session { search } => session::execute(ctx, search),
            Commands::Graph => graph::execute(ctx),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("stepsearch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step breadth-first and greedy best-first search.");
        println!();
        println!("Run `stepsearch --help` for usage information.");
        Ok(())
    }
}
