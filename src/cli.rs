//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Vendor Patch - Maintain patches on a vendored source tree
#[derive(Parser, Debug)]
#[command(name = "vendor-patch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply the configured patch set to the vendored tree
    Apply(commands::apply::ApplyArgs),

    /// Stage all working-tree changes as the known-good baseline
    Stage(commands::stage::StageArgs),

    /// Show the unstaged, whitespace-insensitive diff of the vendored tree
    Diff(commands::diff::DiffArgs),

    /// Capture the current diff into a named patch file
    Update(commands::update::UpdateArgs),

    /// Discard all working-tree changes in the vendored tree
    Reset(commands::reset::ResetArgs),

    /// List patch groups and the patches they contribute
    Ls(commands::ls::LsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let color = self.color.clone();

        match self.command {
            Commands::Apply(args) => commands::apply::execute(args, &color),
            Commands::Stage(args) => commands::stage::execute(args),
            Commands::Diff(args) => commands::diff::execute(args),
            Commands::Update(args) => commands::update::execute(args),
            Commands::Reset(args) => commands::reset::execute(args),
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
