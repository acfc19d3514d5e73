//! Design token trees and their flattened working form.
//!
//! Token files are JSON objects mapping group keys to nested groups or leaf
//! token definitions (`value` + `type`). The build engine works on flattened
//! tokens: a path of group keys, the raw value, the declared kind, and the
//! source layer the token came from.

pub mod flatten;
pub mod merge;
pub mod tree;

pub use flatten::flatten_document;
pub use merge::{theme_file, union_themes, write_theme_layer, THEME_LAYER_FILENAME};
pub use tree::{Node, TokenDef, TokenKind};

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, WeaverError};

/// Which source layer a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    /// The shared `core.json` token file.
    Core,
    /// A theme override file, or the merged union of all theme files.
    ThemeLayer,
}

/// A token ready for transforming and formatting.
#[derive(Debug, Clone)]
pub struct FlatToken {
    /// Group keys from the document root down to the token.
    pub path: Vec<String>,
    /// The token value, rewritten in place by transforms.
    pub value: Value,
    pub kind: TokenKind,
    pub role: SourceRole,
}

impl FlatToken {
    /// Dotted path, used for dedup keys and error messages.
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }
}

/// Read a JSON file that must contain a top-level object.
pub fn load_object(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| WeaverError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read token file: {}", e),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| WeaverError::Parse {
        message: format!("{}: {}", path.display(), e),
        help: None,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(WeaverError::Parse {
            message: format!("{}: expected a top-level object", path.display()),
            help: None,
        }),
    }
}
