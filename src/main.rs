use clap::Parser;
use miette::Result;
use weaver::cli::{Cli, Commands};
use weaver::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => weaver::cli::build::run(args, &printer)?,
        Commands::List(args) => weaver::cli::list::run(args, &printer)?,
        Commands::Validate(args) => weaver::cli::validate::run(args, &printer)?,
        Commands::Watch(args) => weaver::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => weaver::cli::completions::run(args)?,
    }

    Ok(())
}
