//! Build configuration construction.
//!
//! A `BuildConfig` names the token sources (with their layer roles), the
//! output directory, and the per-platform transform chains and output files.
//! One is constructed for the merged core and one per theme; the engine does
//! the rest.

use std::path::{Path, PathBuf};

use convert_case::{Case, Casing};

use crate::tokens::{merge, FlatToken, SourceRole, TokenKind};

/// One token source file with its layer role.
#[derive(Debug)]
pub struct Source {
    pub path: PathBuf,
    pub role: SourceRole,
}

/// Which tokens an output file consumes.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    pub kind: Option<TokenKind>,
    pub role: Option<SourceRole>,
}

impl Filter {
    /// All tokens.
    pub const fn any() -> Self {
        Self {
            kind: None,
            role: None,
        }
    }

    /// Tokens of one kind, from any layer.
    pub const fn kind(kind: TokenKind) -> Self {
        Self {
            kind: Some(kind),
            role: None,
        }
    }

    /// Tokens of one kind, from one layer.
    pub const fn layer(kind: TokenKind, role: SourceRole) -> Self {
        Self {
            kind: Some(kind),
            role: Some(role),
        }
    }

    pub fn accepts(&self, token: &FlatToken) -> bool {
        self.kind.map_or(true, |k| token.kind == k) && self.role.map_or(true, |r| token.role == r)
    }
}

/// One output file of a platform.
#[derive(Debug)]
pub struct FileSpec {
    /// File name under the platform's output directory.
    pub destination: String,
    /// Registered format name.
    pub format: &'static str,
    pub filter: Filter,
}

/// A platform target: a transform chain and the files it emits.
#[derive(Debug)]
pub struct Platform {
    /// Platform name, doubling as the output subdirectory.
    pub name: &'static str,
    /// Registered transform names, applied in order.
    pub transforms: Vec<&'static str>,
    pub files: Vec<FileSpec>,
}

/// Everything the engine needs for one build.
#[derive(Debug)]
pub struct BuildConfig {
    pub sources: Vec<Source>,
    pub output: PathBuf,
    pub project: String,
    /// Theme being generated; `None` for the core build.
    pub theme: Option<String>,
    pub platforms: Vec<Platform>,
}

/// Configuration for the shared core build: the merged theme layer plus the
/// core tokens, written to `<output>/core`.
pub fn core_config(root: &Path, output_root: &Path, project: &str) -> BuildConfig {
    let pascal = project.to_case(Case::Pascal);

    BuildConfig {
        sources: vec![
            Source {
                path: root.join(merge::THEME_LAYER_FILENAME),
                role: SourceRole::ThemeLayer,
            },
            Source {
                path: root.join("core.json"),
                role: SourceRole::Core,
            },
        ],
        output: output_root.join("core"),
        project: project.to_string(),
        theme: None,
        platforms: vec![
            Platform {
                name: "android",
                transforms: vec!["color/android-argb", "typography/xml"],
                files: vec![
                    FileSpec {
                        destination: "text_appearance.xml".to_string(),
                        format: "android/text_appearance",
                        filter: Filter::kind(TokenKind::Typography),
                    },
                    FileSpec {
                        destination: "attrs.xml".to_string(),
                        format: "android/attrs",
                        filter: Filter::layer(TokenKind::Color, SourceRole::ThemeLayer),
                    },
                ],
            },
            Platform {
                name: "ios",
                transforms: vec!["color/ios-uicolor"],
                files: vec![
                    FileSpec {
                        destination: format!("{}BaseColors.swift", pascal),
                        format: "ios/base_colors",
                        filter: Filter::layer(TokenKind::Color, SourceRole::Core),
                    },
                    FileSpec {
                        destination: format!("{}ThemeColorsProtocol.swift", pascal),
                        format: "ios/theme_colors_protocol",
                        filter: Filter::layer(TokenKind::Color, SourceRole::ThemeLayer),
                    },
                    FileSpec {
                        destination: format!("{}ThemeProtocol.swift", pascal),
                        format: "ios/theme_protocol",
                        filter: Filter::any(),
                    },
                ],
            },
        ],
    }
}

/// Configuration for one theme's build: the theme's own overrides plus the
/// core tokens, written to `<output>/<theme>`.
pub fn theme_config(
    root: &Path,
    output_root: &Path,
    theme_name: &str,
    project: &str,
) -> BuildConfig {
    let theme_pascal = theme_name.to_case(Case::Pascal);

    BuildConfig {
        sources: vec![
            Source {
                path: merge::theme_file(root, theme_name),
                role: SourceRole::ThemeLayer,
            },
            Source {
                path: root.join("core.json"),
                role: SourceRole::Core,
            },
        ],
        output: output_root.join(theme_name),
        project: project.to_string(),
        theme: Some(theme_name.to_string()),
        platforms: vec![
            Platform {
                name: "android",
                transforms: vec!["color/android-argb"],
                files: vec![FileSpec {
                    destination: "theme.xml".to_string(),
                    format: "android/theme",
                    filter: Filter::layer(TokenKind::Color, SourceRole::ThemeLayer),
                }],
            },
            Platform {
                name: "ios",
                transforms: vec!["color/ios-uicolor"],
                files: vec![
                    FileSpec {
                        destination: format!("{}ThemeColors.swift", theme_pascal),
                        format: "ios/theme_colors",
                        filter: Filter::layer(TokenKind::Color, SourceRole::ThemeLayer),
                    },
                    FileSpec {
                        destination: format!("{}Theme.swift", theme_pascal),
                        format: "ios/theme",
                        filter: Filter::any(),
                    },
                ],
            },
        ],
    }
}
