use miette::Diagnostic;
use thiserror::Error;

/// Main error type for weaver operations
#[derive(Error, Diagnostic, Debug)]
pub enum WeaverError {
    #[error("IO error: {0}")]
    #[diagnostic(code(weaver::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(weaver::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(weaver::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(weaver::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(weaver::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    #[diagnostic(code(weaver::validate))]
    Validation { errors: usize, warnings: usize },
}

pub type Result<T> = std::result::Result<T, WeaverError>;
