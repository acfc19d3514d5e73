//! `$themes.json` manifest parsing.
//!
//! The manifest is either a standalone file next to `core.json` (a JSON
//! array of theme entries) or, for single-file token exports, embedded under
//! the file's top-level `$themes` key. Entries carry extra fields (ids,
//! token-set selections) which are ignored here.

use serde::Deserialize;

use crate::error::{Result, WeaverError};

/// The name of the theme manifest file.
pub const MANIFEST_FILENAME: &str = "$themes.json";

/// One theme entry from the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Theme name; locates `theme/<name>.json` and labels output.
    pub name: String,

    /// Upstream editor id, if present. Unused by the pipeline.
    #[serde(default)]
    pub id: Option<String>,
}

impl Theme {
    /// A theme known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }
}

/// Parse a standalone manifest: a JSON array of theme entries.
pub fn parse_manifest(content: &str) -> Result<Vec<Theme>> {
    serde_json::from_str(content).map_err(|e| WeaverError::Parse {
        message: format!("Invalid theme manifest: {}", e),
        help: Some(format!("{} must be a JSON array of {{\"name\": ...}} entries", MANIFEST_FILENAME)),
    })
}

/// Parse a manifest embedded in a single-file token export, under `$themes`.
pub fn parse_embedded(content: &str) -> Result<Vec<Theme>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| WeaverError::Parse {
            message: format!("Invalid token file: {}", e),
            help: None,
        })?;

    let themes = value.get("$themes").ok_or_else(|| WeaverError::Parse {
        message: "Token file has no $themes key".to_string(),
        help: Some("Single-file inputs must embed the theme manifest under `$themes`".to_string()),
    })?;

    serde_json::from_value(themes.clone()).map_err(|e| WeaverError::Parse {
        message: format!("Invalid $themes entry: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let themes = parse_manifest(r#"[{"name": "light"}, {"name": "dark"}]"#).unwrap();

        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["light", "dark"]);
    }

    #[test]
    fn test_parse_manifest_ignores_extra_fields() {
        let themes = parse_manifest(
            r#"[{"id": "3ad8", "name": "light", "selectedTokenSets": {"core": "source"}}]"#,
        )
        .unwrap();

        assert_eq!(themes[0].name, "light");
        assert_eq!(themes[0].id.as_deref(), Some("3ad8"));
    }

    #[test]
    fn test_parse_manifest_rejects_objects() {
        assert!(parse_manifest(r#"{"name": "light"}"#).is_err());
    }

    #[test]
    fn test_parse_embedded() {
        let themes = parse_embedded(
            r##"{"$themes": [{"name": "dark"}], "color": {"value": "#000", "type": "color"}}"##,
        )
        .unwrap();

        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name, "dark");
    }

    #[test]
    fn test_parse_embedded_missing_key() {
        let err = parse_embedded(r##"{"color": {"value": "#000", "type": "color"}}"##).unwrap_err();
        assert!(err.to_string().contains("$themes"));
    }
}
