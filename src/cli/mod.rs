pub mod build;
pub mod completions;
pub mod list;
pub mod validate;
pub mod watch;

use clap::{Parser, Subcommand};

/// weaver - design token build pipeline
#[derive(Parser, Debug)]
#[command(name = "weaver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate platform sources from design token files
    Build(build::BuildArgs),

    /// List the themes declared in the token manifest
    List(list::ListArgs),

    /// Check token sources without generating output
    Validate(validate::ValidateArgs),

    /// Build, then rebuild whenever token sources change
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
