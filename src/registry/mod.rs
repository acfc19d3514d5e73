//! Format, transform, and file-header registration.
//!
//! Everything a build configuration refers to by name lives here. The
//! registry is built once, before the generation phases start, and shared by
//! reference across them; it is immutable after construction — use
//! `RegistryBuilder` to assemble one.

use std::collections::HashMap;

use crate::format::{self, FormatFn};
use crate::transform::{self, Transform};

/// Immutable lookup table of named formats and transforms, plus the
/// generated-file header.
pub struct Registry {
    formats: HashMap<&'static str, FormatFn>,
    transforms: HashMap<&'static str, Transform>,
    header: Vec<String>,
}

impl Registry {
    /// The registry with every weaver format and transform registered.
    pub fn standard(version: Option<&str>) -> Registry {
        let mut builder = RegistryBuilder::new();

        builder
            .register_format("android/text_appearance", format::android::text_appearance)
            .register_format("android/attrs", format::android::attrs)
            .register_format("android/theme", format::android::theme)
            .register_format("ios/base_colors", format::ios::base_colors)
            .register_format("ios/theme_colors_protocol", format::ios::theme_colors_protocol)
            .register_format("ios/theme_protocol", format::ios::theme_protocol)
            .register_format("ios/theme_colors", format::ios::theme_colors)
            .register_format("ios/theme", format::ios::theme);

        builder
            .register_transform(transform::android_argb())
            .register_transform(transform::ios_uicolor())
            .register_transform(transform::typography_xml());

        builder.file_header(file_header(version));

        builder.build()
    }

    pub fn format(&self, name: &str) -> Option<FormatFn> {
        self.formats.get(name).copied()
    }

    pub fn transform(&self, name: &str) -> Option<&Transform> {
        self.transforms.get(name)
    }

    /// Header lines prepended (as comments) to every generated file.
    pub fn header(&self) -> &[String] {
        &self.header
    }
}

/// Builder for a `Registry`.
#[derive(Default)]
pub struct RegistryBuilder {
    formats: HashMap<&'static str, FormatFn>,
    transforms: HashMap<&'static str, Transform>,
    header: Vec<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_format(&mut self, name: &'static str, format: FormatFn) -> &mut Self {
        self.formats.insert(name, format);
        self
    }

    pub fn register_transform(&mut self, transform: Transform) -> &mut Self {
        self.transforms.insert(transform.name, transform);
        self
    }

    pub fn file_header(&mut self, lines: Vec<String>) -> &mut Self {
        self.header = lines;
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            formats: self.formats,
            transforms: self.transforms,
            header: self.header,
        }
    }
}

/// The generated-file header: two fixed lines, plus a version line only when
/// a version was supplied.
pub fn file_header(version: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        "Generated file".to_string(),
        "Do not edit directly".to_string(),
    ];
    if let Some(version) = version.filter(|v| !v.is_empty()) {
        lines.push(format!("Version: {}", version));
    }
    lines
}
