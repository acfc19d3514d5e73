//! Build orchestration: the core and per-theme generation phases.
//!
//! The two phases are independent — the core build reads the merged theme
//! layer it writes itself, the theme builds read the individual theme files —
//! so they run concurrently on scoped threads. Themes inside the theme phase
//! are processed one after another.

pub mod config;
pub mod engine;

pub use config::{core_config, theme_config, BuildConfig, FileSpec, Filter, Platform, Source};

use std::path::Path;
use std::thread;

use crate::discovery::ThemeSet;
use crate::error::{Result, WeaverError};
use crate::registry::Registry;
use crate::tokens::merge;

/// File counts from a full generation run.
#[derive(Debug, Clone, Copy)]
pub struct BuildSummary {
    pub core_files: usize,
    pub theme_files: usize,
    pub themes: usize,
}

impl BuildSummary {
    pub fn total_files(&self) -> usize {
        self.core_files + self.theme_files
    }
}

/// Generate the core outputs and every theme's outputs.
pub fn generate(
    set: &ThemeSet,
    output_root: &Path,
    project: &str,
    registry: &Registry,
) -> Result<BuildSummary> {
    thread::scope(|scope| {
        let core = scope.spawn(|| generate_core(set, output_root, project, registry));
        let themes = scope.spawn(|| generate_themes(set, output_root, project, registry));

        let core_files = join_phase(core, "core")?;
        let theme_files = join_phase(themes, "theme")?;

        Ok(BuildSummary {
            core_files,
            theme_files,
            themes: set.themes.len(),
        })
    })
}

fn join_phase(handle: thread::ScopedJoinHandle<'_, Result<usize>>, phase: &str) -> Result<usize> {
    handle.join().map_err(|_| WeaverError::Build {
        message: format!("The {} generation phase panicked", phase),
        help: None,
    })?
}

/// Merge the theme layer and build the shared core outputs.
fn generate_core(
    set: &ThemeSet,
    output_root: &Path,
    project: &str,
    registry: &Registry,
) -> Result<usize> {
    let merged = merge::union_themes(&set.root, &set.themes)?;
    merge::write_theme_layer(&set.root, &merged)?;

    engine::build(&core_config(&set.root, output_root, project), registry)
}

/// Build each theme's outputs, in manifest order.
fn generate_themes(
    set: &ThemeSet,
    output_root: &Path,
    project: &str,
    registry: &Registry,
) -> Result<usize> {
    let mut written = 0;
    for theme in &set.themes {
        written += engine::build(
            &theme_config(&set.root, output_root, &theme.name, project),
            registry,
        )?;
    }
    Ok(written)
}
