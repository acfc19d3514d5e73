//! Value transforms applied to tokens before formatting.
//!
//! A transform is a named value rewrite with a matcher deciding which tokens
//! it applies to. Platforms list transforms by name; the engine looks them up
//! in the registry and rewrites matching token values in place. Transforms
//! are plain functions — there is no transform DSL.

mod color;
mod typography;

pub use color::{android_argb, ios_uicolor};
pub use typography::typography_xml;

use convert_case::{Case, Casing};

use crate::error::Result;
use crate::tokens::FlatToken;

/// A named value rewrite.
pub struct Transform {
    pub name: &'static str,
    /// Whether this transform applies to the given token.
    pub matches: fn(&FlatToken) -> bool,
    /// Rewritten value for a matching token.
    pub apply: fn(&FlatToken) -> Result<serde_json::Value>,
}

/// Token path → camelCase identifier ("color", "bg-primary" → "colorBgPrimary").
pub fn camel_name(path: &[String]) -> String {
    path.join(" ").to_case(Case::Camel)
}

/// Token path → PascalCase identifier ("heading", "large" → "HeadingLarge").
pub fn pascal_name(path: &[String]) -> String {
    path.join(" ").to_case(Case::Pascal)
}
