//! Validate command implementation.
//!
//! Runs the validation checks against the token sources and reports
//! diagnostics. Exits non-zero when any check fails; warnings alone pass.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, WeaverError};
use crate::output::{display_path, Printer};
use crate::validation;

/// Check token sources without generating output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Workspace root that input paths are resolved against
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    pub workspace: PathBuf,

    /// Token files, relative to the workspace
    #[arg(long, env = "INPUT_TOKENS_PATH")]
    pub tokens_path: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let tokens_path = args.workspace.join(&args.tokens_path);
    printer.status("Validating", &display_path(&tokens_path));

    let result = validation::validate_sources(&tokens_path);
    validation::print_diagnostics(&result);

    if result.has_errors() {
        return Err(WeaverError::Validation {
            errors: result.error_count(),
            warnings: result.warning_count(),
        });
    }

    Ok(())
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
    fn test_validate_passes_on_well_formed_project() {
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

        let args = ValidateArgs {
            workspace: dir.path().to_path_buf(),
            tokens_path: PathBuf::from("."),
        };

        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_validate_fails_on_missing_theme_file() {
        let dir = tempdir().unwrap();
        write_json(&dir.path().join("$themes.json"), &json!([{"name": "dark"}]));
        write_json(&dir.path().join("core.json"), &json!({}));

        let args = ValidateArgs {
            workspace: dir.path().to_path_buf(),
            tokens_path: PathBuf::from("."),
        };

        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, WeaverError::Validation { .. }));
    }
}
