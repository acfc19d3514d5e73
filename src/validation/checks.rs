//! Validation checks for token sources.

use std::collections::HashSet;

use walkdir::WalkDir;

use crate::discovery::ThemeSet;
use crate::tokens::{flatten_document, load_object, merge, SourceRole};
use crate::validation::{Diagnostic, ValidationResult};

/// Theme names must be unique; duplicates would overwrite each other's
/// output directories.
pub fn check_unique_names(set: &ThemeSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for theme in &set.themes {
        if !seen.insert(theme.name.as_str()) {
            result.error(
                "weaver::validate::duplicate-theme",
                format!("Theme `{}` is listed more than once in the manifest", theme.name),
            );
        }
    }

    result
}

/// Every manifest entry needs an existing, parseable override file.
pub fn check_theme_files(set: &ThemeSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for theme in &set.themes {
        let path = merge::theme_file(&set.root, &theme.name);
        if !path.exists() {
            result.push(
                Diagnostic::error(
                    "weaver::validate::missing-theme-file",
                    format!("Theme `{}` has no token file at {}", theme.name, path.display()),
                )
                .with_help("Each manifest entry needs a matching theme/<name>.json file"),
            );
            continue;
        }

        match load_object(&path) {
            Ok(doc) => {
                if let Err(e) = flatten_document(&doc, SourceRole::ThemeLayer, &path) {
                    result.error("weaver::validate::invalid-tokens", e.to_string());
                }
            }
            Err(e) => result.error("weaver::validate::invalid-tokens", e.to_string()),
        }
    }

    result
}

/// The shared core file must exist and parse.
pub fn check_core_file(set: &ThemeSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    let path = set.root.join("core.json");

    if !path.exists() {
        result.error(
            "weaver::validate::missing-core",
            format!("No core token file at {}", path.display()),
        );
        return result;
    }

    match load_object(&path) {
        Ok(doc) => {
            if let Err(e) = flatten_document(&doc, SourceRole::Core, &path) {
                result.error("weaver::validate::invalid-tokens", e.to_string());
            }
        }
        Err(e) => result.error("weaver::validate::invalid-tokens", e.to_string()),
    }

    result
}

/// Top-level keys shared between theme files collide in the merged theme
/// layer, where the first theme in manifest order wins silently.
pub fn check_layer_collisions(set: &ThemeSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first_owner: Vec<(String, String)> = Vec::new();

    for theme in &set.themes {
        let Ok(doc) = load_object(&merge::theme_file(&set.root, &theme.name)) else {
            // Unreadable files are reported by check_theme_files.
            continue;
        };

        for key in doc.keys() {
            match first_owner.iter().find(|(k, _)| k == key) {
                Some((_, owner)) if owner != &theme.name => {
                    result.warning(
                        "weaver::validate::layer-collision",
                        format!(
                            "Top-level key `{}` in theme `{}` is shadowed by theme `{}` (first occurrence wins)",
                            key, theme.name, owner
                        ),
                    );
                }
                Some(_) => {}
                None => first_owner.push((key.clone(), theme.name.clone())),
            }
        }
    }

    result
}

/// Theme files on disk that no manifest entry references are never built.
pub fn check_stray_theme_files(set: &ThemeSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    let theme_dir = set.root.join("theme");
    if !theme_dir.is_dir() {
        return result;
    }

    let known: HashSet<&str> = set.themes.iter().map(|t| t.name.as_str()).collect();

    for entry in WalkDir::new(&theme_dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.extension().is_some_and(|e| e == "json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if !known.contains(stem) {
            result.push(
                Diagnostic::warning(
                    "weaver::validate::stray-theme-file",
                    format!("{} is not listed in the theme manifest", path.display()),
                )
                .with_help("Add it to $themes.json or delete the file"),
            );
        }
    }

    result
}
