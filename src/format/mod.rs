//! Output file formatters.
//!
//! A formatter turns a filtered, transformed token list into the textual
//! content of one output file, header included. Formatters are thin string
//! templating; everything value-shaped happens in the transforms.

pub mod android;
pub mod ios;

use crate::tokens::FlatToken;

/// Everything a formatter gets to work with for one output file.
pub struct FormatArgs<'a> {
    /// Tokens already filtered for this file and transformed for its platform.
    pub tokens: &'a [FlatToken],
    /// Title-cased project name; formatters derive identifier segments from it.
    pub project: &'a str,
    /// Theme being generated, for per-theme files.
    pub theme: Option<&'a str>,
    /// Generated-file header lines, without comment syntax.
    pub header: &'a [String],
}

/// A registered formatter.
pub type FormatFn = fn(&FormatArgs) -> String;

/// Render a token value for direct embedding in output text.
pub(crate) fn value_str(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
