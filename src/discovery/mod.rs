//! Theme discovery for token projects.
//!
//! Locates the `$themes.json` manifest for a tokens path and resolves the
//! tokens root the other source files (`core.json`, `theme/<name>.json`) are
//! read from. Discovery runs before any output is written, so a missing or
//! malformed manifest aborts the run with nothing generated.

mod manifest;

use std::path::{Path, PathBuf};

use crate::error::{Result, WeaverError};

pub use manifest::{parse_embedded, parse_manifest, Theme, MANIFEST_FILENAME};

/// Result of discovering the themes of a token project.
#[derive(Debug)]
pub struct ThemeSet {
    /// Directory containing `core.json` and `theme/`.
    pub root: PathBuf,

    /// Themes to build, in manifest order.
    pub themes: Vec<Theme>,

    /// Whether the manifest was embedded in a single-file export.
    pub embedded: bool,
}

impl ThemeSet {
    /// Theme names in manifest order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Discover the themes for a tokens path.
///
/// A directory path reads the sibling `$themes.json` manifest; a `.json`
/// file path reads the manifest embedded under the file's `$themes` key, and
/// the file's parent directory becomes the tokens root.
pub fn discover(tokens_path: &Path) -> Result<ThemeSet> {
    if tokens_path.extension().is_some_and(|e| e == "json") {
        let content = read_manifest_file(tokens_path)?;
        let themes = parse_embedded(&content)?;

        let parent = tokens_path.parent().unwrap_or_else(|| Path::new("."));
        let root = if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent.to_path_buf()
        };

        Ok(ThemeSet {
            root,
            themes,
            embedded: true,
        })
    } else {
        let manifest_path = tokens_path.join(MANIFEST_FILENAME);
        let content = read_manifest_file(&manifest_path)?;
        let themes = parse_manifest(&content)?;

        Ok(ThemeSet {
            root: tokens_path.to_path_buf(),
            themes,
            embedded: false,
        })
    }
}

fn read_manifest_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| WeaverError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read theme manifest: {}", e),
    })
}
