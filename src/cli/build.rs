//! Build command implementation.
//!
//! Resolves the pipeline inputs (CLI flags first, environment fallback — the
//! environment names are the ones the CI action consumed), discovers the
//! themes, and runs the core and per-theme generation phases.

use std::path::PathBuf;

use clap::Args;
use convert_case::{Case, Casing};

use crate::build;
use crate::discovery;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::registry::Registry;

/// Generate platform sources from design token files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Workspace root that input paths are resolved against
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Token files, relative to the workspace: a directory containing
    /// $themes.json, core.json and theme/, or a single-file token export
    #[arg(long, env = "INPUT_TOKENS_PATH")]
    pub tokens_path: PathBuf,

    /// Output directory, relative to the workspace
    #[arg(long, env = "INPUT_OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Project name used in generated style and type names
    #[arg(long, env = "INPUT_PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Version string recorded in generated file headers
    #[arg(long, env = "INPUT_VERSION")]
    pub token_version: Option<String>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    execute(&args, printer)
}

/// One full pipeline run. Shared with `weaver watch`.
pub(crate) fn execute(args: &BuildArgs, printer: &Printer) -> Result<()> {
    let tokens_path = args.workspace.join(&args.tokens_path);
    let output_root = args.workspace.join(&args.output_path);
    let project = project_name(args.project_name.as_deref());
    let version = args.token_version.as_deref().filter(|v| !v.is_empty());

    let set = discovery::discover(&tokens_path)?;
    printer.status(
        "Discovered",
        &format!(
            "{}: {}",
            plural(set.themes.len(), "theme", "themes"),
            set.names().join(", ")
        ),
    );

    let registry = Registry::standard(version);
    let summary = build::generate(&set, &output_root, &project, &registry)?;

    printer.status(
        "Generated",
        &format!(
            "{} for {} to {}",
            plural(summary.total_files(), "file", "files"),
            project,
            display_path(&output_root)
        ),
    );

    Ok(())
}

/// Missing or blank project names fall back to "App"; everything is
/// Title-cased so multi-word names read well in generated output.
fn project_name(input: Option<&str>) -> String {
    match input.filter(|s| !s.trim().is_empty()) {
        Some(name) => name.to_case(Case::Title),
        None => "App".to_string(),
    }
}
