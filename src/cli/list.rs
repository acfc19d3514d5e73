//! List command implementation.
//!
//! Discovers the theme manifest and prints the inventory without building.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{self, MANIFEST_FILENAME};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// List the themes declared in the token manifest
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Workspace root that input paths are resolved against
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Token files, relative to the workspace
    #[arg(long, env = "INPUT_TOKENS_PATH")]
    pub tokens_path: PathBuf,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let tokens_path = args.workspace.join(&args.tokens_path);
    let set = discovery::discover(&tokens_path)?;

    let manifest = if set.embedded {
        format!("{} (embedded $themes)", display_path(&tokens_path))
    } else {
        display_path(&set.root.join(MANIFEST_FILENAME))
    };
    printer.info("Manifest", &manifest);

    if set.themes.is_empty() {
        printer.warning("Themes", "none declared");
    } else {
        printer.info("Themes", &set.names().join(", "));
    }
    printer.status(
        "Found",
        &plural(set.themes.len(), "theme", "themes"),
    );

    Ok(())
}
