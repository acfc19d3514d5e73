//! The token build engine.
//!
//! Loads the configured sources, flattens them into one ordered token list
//! (later sources win on leaf conflicts, first occurrence fixes position),
//! applies each platform's transforms, and writes every configured output
//! file through its registered formatter.

use std::fs;

use indexmap::IndexMap;

use crate::build::config::BuildConfig;
use crate::error::{Result, WeaverError};
use crate::format::FormatArgs;
use crate::registry::Registry;
use crate::tokens::{flatten_document, load_object, FlatToken};

/// Run one build. Returns the number of files written.
pub fn build(config: &BuildConfig, registry: &Registry) -> Result<usize> {
    let tokens = load_tokens(config)?;
    let mut written = 0;

    for platform in &config.platforms {
        let mut platform_tokens = tokens.clone();

        for name in &platform.transforms {
            let transform = registry.transform(name).ok_or_else(|| WeaverError::Config {
                message: format!("Unknown transform `{}`", name),
                help: None,
            })?;

            for token in &mut platform_tokens {
                if (transform.matches)(token) {
                    token.value = (transform.apply)(token)?;
                }
            }
        }

        let platform_dir = config.output.join(platform.name);
        fs::create_dir_all(&platform_dir).map_err(|e| WeaverError::Io {
            path: platform_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;

        for file in &platform.files {
            let format = registry.format(file.format).ok_or_else(|| WeaverError::Config {
                message: format!("Unknown format `{}`", file.format),
                help: None,
            })?;

            let selected: Vec<FlatToken> = platform_tokens
                .iter()
                .filter(|t| file.filter.accepts(t))
                .cloned()
                .collect();

            let content = format(&FormatArgs {
                tokens: &selected,
                project: &config.project,
                theme: config.theme.as_deref(),
                header: registry.header(),
            });

            let destination = platform_dir.join(&file.destination);
            fs::write(&destination, content).map_err(|e| WeaverError::Io {
                path: destination.clone(),
                message: format!("Failed to write output file: {}", e),
            })?;
            written += 1;
        }
    }

    Ok(written)
}

/// Flatten all sources into one list. Later sources override earlier ones at
/// the token-path level; the first occurrence determines output order.
fn load_tokens(config: &BuildConfig) -> Result<Vec<FlatToken>> {
    let mut by_path: IndexMap<String, FlatToken> = IndexMap::new();

    for source in &config.sources {
        let doc = load_object(&source.path)?;
        for token in flatten_document(&doc, source.role, &source.path)? {
            by_path.insert(token.dotted(), token);
        }
    }

    Ok(by_path.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::config::{core_config, theme_config};
    use crate::registry::Registry;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_json(path: &Path, value: &serde_json::Value) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, value.to_string()).unwrap();
    }

    fn fixture(root: &Path) {
        write_json(
            &root.join("core.json"),
            &json!({
                "blue": {"500": {"value": "#0a84ff", "type": "color"}},
                "heading": {
                    "value": {"fontFamily": "Inter", "fontSize": "28", "fontWeight": "Bold"},
                    "type": "typography"
                }
            }),
        );
        write_json(
            &root.join("theme_tokens.json"),
            &json!({
                "background": {"primary": {"value": "#101014", "type": "color"}}
            }),
        );
        write_json(
            &root.join("theme/dark.json"),
            &json!({
                "background": {"primary": {"value": "#101014", "type": "color"}}
            }),
        );
    }

    #[test]
    fn test_core_build_writes_all_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        fixture(dir.path());

        let registry = Registry::standard(None);
        let config = core_config(dir.path(), &out, "App");
        let written = build(&config, &registry).unwrap();

        assert_eq!(written, 5);
        assert!(out.join("core/android/text_appearance.xml").exists());
        assert!(out.join("core/android/attrs.xml").exists());
        assert!(out.join("core/ios/AppBaseColors.swift").exists());
        assert!(out.join("core/ios/AppThemeColorsProtocol.swift").exists());
        assert!(out.join("core/ios/AppThemeProtocol.swift").exists());
    }

    #[test]
    fn test_theme_build_writes_all_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        fixture(dir.path());

        let registry = Registry::standard(None);
        let config = theme_config(dir.path(), &out, "dark", "App");
        let written = build(&config, &registry).unwrap();

        assert_eq!(written, 3);
        assert!(out.join("dark/android/theme.xml").exists());
        assert!(out.join("dark/ios/DarkThemeColors.swift").exists());
        assert!(out.join("dark/ios/DarkTheme.swift").exists());
    }

    #[test]
    fn test_layer_filters_separate_core_and_theme_colors() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        fixture(dir.path());

        let registry = Registry::standard(None);
        build(&core_config(dir.path(), &out, "App"), &registry).unwrap();

        let base = fs::read_to_string(out.join("core/ios/AppBaseColors.swift")).unwrap();
        assert!(base.contains("blue500"));
        assert!(!base.contains("backgroundPrimary"));

        let protocol =
            fs::read_to_string(out.join("core/ios/AppThemeColorsProtocol.swift")).unwrap();
        assert!(protocol.contains("backgroundPrimary"));
        assert!(!protocol.contains("blue500"));
    }

    #[test]
    fn test_android_colors_are_argb() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        fixture(dir.path());

        let registry = Registry::standard(None);
        build(&theme_config(dir.path(), &out, "dark", "App"), &registry).unwrap();

        let theme = fs::read_to_string(out.join("dark/android/theme.xml")).unwrap();
        assert!(theme.contains("<item name=\"backgroundPrimary\">#FF101014</item>"));
    }

    #[test]
    fn test_missing_source_aborts() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        // No token files at all.

        let registry = Registry::standard(None);
        let err = build(&core_config(dir.path(), &out, "App"), &registry).unwrap_err();

        assert!(matches!(err, WeaverError::Io { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_later_source_wins_on_leaf_conflict() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist");
        write_json(
            &dir.path().join("theme_tokens.json"),
            &json!({"blue": {"500": {"value": "#000000", "type": "color"}}}),
        );
        write_json(
            &dir.path().join("core.json"),
            &json!({"blue": {"500": {"value": "#0a84ff", "type": "color"}}}),
        );

        let registry = Registry::standard(None);
        build(&core_config(dir.path(), &out, "App"), &registry).unwrap();

        let base = fs::read_to_string(out.join("core/ios/AppBaseColors.swift")).unwrap();
        // core.json is listed after the theme layer, so its value (and role) win.
        assert!(base.contains("blue500"));
    }
}
