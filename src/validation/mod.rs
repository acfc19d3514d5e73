//! Validation for token projects.
//!
//! Runs a suite of checks against the token sources and reports errors and
//! warnings without generating any output. Used by `weaver validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use std::path::Path;

use crate::discovery;

/// Run all checks against the token sources at `tokens_path`.
///
/// Discovery failures (missing or malformed manifest) are reported as
/// diagnostics rather than returned as errors, so a broken project still
/// gets a readable report.
pub fn validate_sources(tokens_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::new();

    let set = match discovery::discover(tokens_path) {
        Ok(set) => set,
        Err(e) => {
            result.error("weaver::validate::manifest", e.to_string());
            return result;
        }
    };

    result.merge(checks::check_unique_names(&set));
    result.merge(checks::check_theme_files(&set));
    result.merge(checks::check_core_file(&set));
    result.merge(checks::check_layer_collisions(&set));
    result.merge(checks::check_stray_theme_files(&set));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!("Validation failed: {} error(s), {} warning(s)", errors, warnings);
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_validate_well_formed_project() {
        let dir = tempdir().unwrap();
        write_json(&dir.path().join("$themes.json"), &json!([{"name": "dark"}]));
        write_json(
            &dir.path().join("core.json"),
            &json!({"blue": {"value": "#00f", "type": "color"}}),
        );
        write_json(
            &dir.path().join("theme/dark.json"),
            &json!({"bg": {"value": "#000", "type": "color"}}),
        );

        let result = validate_sources(dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_reports_missing_manifest() {
        let dir = tempdir().unwrap();

        let result = validate_sources(dir.path());
        assert!(result.has_errors());
    }

    #[test]
    fn test_validate_collects_multiple_problems() {
        let dir = tempdir().unwrap();
        write_json(
            &dir.path().join("$themes.json"),
            &json!([{"name": "dark"}, {"name": "light"}]),
        );
        // No core.json, no theme files.

        let result = validate_sources(dir.path());
        assert!(result.error_count() >= 3);
    }
}
