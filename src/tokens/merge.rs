//! The theme-layer union.
//!
//! The core build consumes a single unified theme file: the shallow union of
//! every theme's top-level keys, first occurrence wins. A top-level key
//! present in two theme files is taken entirely from whichever theme appears
//! first in the manifest; later themes never override, and nothing is merged
//! below the top level. Downstream consumers depend on this exact behavior.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::discovery::Theme;
use crate::error::{Result, WeaverError};
use crate::tokens::load_object;

/// File the merged theme layer is written to, inside the tokens root.
pub const THEME_LAYER_FILENAME: &str = "theme_tokens.json";

/// Path of a theme's override file under the tokens root.
pub fn theme_file(root: &Path, name: &str) -> PathBuf {
    root.join("theme").join(format!("{}.json", name))
}

/// Shallow union of the themes' top-level keys, in manifest order.
pub fn union_themes(root: &Path, themes: &[Theme]) -> Result<Map<String, Value>> {
    let mut merged = Map::new();

    for theme in themes {
        let doc = load_object(&theme_file(root, &theme.name))?;
        for (key, value) in doc {
            if !merged.contains_key(&key) {
                merged.insert(key, value);
            }
        }
    }

    Ok(merged)
}

/// Write the merged theme layer next to the other token sources.
pub fn write_theme_layer(root: &Path, merged: &Map<String, Value>) -> Result<PathBuf> {
    let path = root.join(THEME_LAYER_FILENAME);

    let content = serde_json::to_string(merged).map_err(|e| WeaverError::Build {
        message: format!("Failed to serialize theme layer: {}", e),
        help: None,
    })?;

    fs::write(&path, content).map_err(|e| WeaverError::Io {
        path: path.clone(),
        message: format!("Failed to write theme layer: {}", e),
    })?;

    Ok(path)
}
