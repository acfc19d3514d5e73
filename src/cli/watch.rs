//! Watch command implementation.
//!
//! Runs a build, then rebuilds whenever a token source under the tokens root
//! changes. Build failures are reported and the watcher keeps running, so a
//! half-saved file doesn't kill the session. Events for the generated
//! `theme_tokens.json` are ignored to keep the core build from retriggering
//! itself.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;
use notify::{Event, RecursiveMode, Watcher};

use crate::cli::build::{self, BuildArgs};
use crate::error::{Result, WeaverError};
use crate::output::{display_path, Printer};
use crate::tokens::THEME_LAYER_FILENAME;

/// Build, then rebuild whenever token sources change
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub build: BuildArgs,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let tokens_path = args.build.workspace.join(&args.build.tokens_path);
    let watch_root = watch_root(&tokens_path);

    report(build::execute(&args.build, printer), printer);

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watcher_error)?;
    watcher
        .watch(&watch_root, RecursiveMode::Recursive)
        .map_err(watcher_error)?;

    printer.status("Watching", &display_path(&watch_root));

    for event in rx.iter() {
        let event = event.map_err(watcher_error)?;
        if !is_token_change(&event) {
            continue;
        }

        // Let editors finish writing, then coalesce the event burst into one
        // rebuild.
        std::thread::sleep(Duration::from_millis(100));
        while rx.try_recv().is_ok() {}

        printer.status("Rebuilding", &display_path(&watch_root));
        report(build::execute(&args.build, printer), printer);
    }

    Ok(())
}

/// For single-file inputs, watch the directory around the file.
fn watch_root(tokens_path: &Path) -> PathBuf {
    if tokens_path.is_file() {
        tokens_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        tokens_path.to_path_buf()
    }
}

fn is_token_change(event: &Event) -> bool {
    event.paths.iter().any(|path| {
        path.extension().is_some_and(|e| e == "json")
            && path
                .file_name()
                .is_some_and(|name| name != THEME_LAYER_FILENAME)
    })
}

fn report(outcome: Result<()>, printer: &Printer) {
    if let Err(e) = outcome {
        printer.error("Failed", &e.to_string());
    }
}

fn watcher_error(e: notify::Error) -> WeaverError {
    WeaverError::Build {
        message: format!("File watcher error: {}", e),
        help: None,
    }
}
