//! weaver - design token build pipeline
//!
//! A library for turning JSON design-token files (a shared core set plus
//! per-theme overrides) into platform source files: Android resource XML and
//! iOS Swift sources, generated once for the shared core and once per theme.

pub mod build;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod format;
pub mod output;
pub mod registry;
pub mod tokens;
pub mod transform;
pub mod validation;

pub use build::{generate, BuildConfig, BuildSummary};
pub use discovery::{discover, Theme, ThemeSet, MANIFEST_FILENAME};
pub use error::{Result, WeaverError};
pub use registry::{file_header, Registry, RegistryBuilder};
pub use tokens::{
    flatten_document, union_themes, FlatToken, SourceRole, TokenKind, THEME_LAYER_FILENAME,
};
pub use validation::{validate_sources, Diagnostic, Severity, ValidationResult};
