//! Typography transform for Android XML output.
//!
//! Typography tokens carry a dict value (font family, size, weight, line
//! height, letter spacing, text case). The transform rewrites that dict into
//! the `<item>` map the text-appearance formatter emits verbatim.

use serde_json::{Map, Value};

use crate::error::{Result, WeaverError};
use crate::tokens::{FlatToken, TokenKind};
use crate::transform::Transform;

/// Typography dict tokens → Android XML item maps.
pub fn typography_xml() -> Transform {
    Transform {
        name: "typography/xml",
        matches: |token| token.kind == TokenKind::Typography,
        apply: to_xml_items,
    }
}

fn to_xml_items(token: &FlatToken) -> Result<Value> {
    let dict = token.value.as_object().ok_or_else(|| WeaverError::Build {
        message: format!("Typography token {} expects an object value", token.dotted()),
        help: None,
    })?;

    let mut items = Map::new();

    if let Some(family) = dict.get("fontFamily").and_then(Value::as_str) {
        items.insert(
            "android:fontFamily".to_string(),
            Value::String(family.to_string()),
        );
    }
    if let Some(size) = dict.get("fontSize").and_then(scaled_px) {
        items.insert("android:textSize".to_string(), Value::String(size));
    }
    if let Some(weight) = dict.get("fontWeight") {
        items.insert(
            "android:textStyle".to_string(),
            Value::String(text_style(weight)),
        );
    }
    // "AUTO" line heights are dropped; Android falls back to the font metrics.
    if let Some(height) = dict.get("lineHeight").and_then(scaled_px) {
        items.insert("android:lineHeight".to_string(), Value::String(height));
    }
    if let Some(spacing) = dict.get("letterSpacing").and_then(letter_spacing_em) {
        items.insert("android:letterSpacing".to_string(), Value::String(spacing));
    }
    if dict.get("textCase").and_then(Value::as_str) == Some("uppercase") {
        items.insert(
            "android:textAllCaps".to_string(),
            Value::String("true".to_string()),
        );
    }

    Ok(Value::Object(items))
}

/// "32", "32px", 32 → "32sp". Non-numeric values are dropped.
fn scaled_px(value: &Value) -> Option<String> {
    numeric(value).map(|n| format!("{}sp", fmt_num(n)))
}

/// Percentages become em fractions; bare numbers are taken as em already.
fn letter_spacing_em(value: &Value) -> Option<String> {
    if let Some(s) = value.as_str() {
        if let Some(pct) = s.trim().strip_suffix('%') {
            let n: f64 = pct.trim().parse().ok()?;
            return Some(fmt_num(n / 100.0));
        }
    }
    numeric(value).map(fmt_num)
}

fn text_style(weight: &Value) -> String {
    let (bold, italic) = match weight {
        Value::Number(n) => (n.as_f64().is_some_and(|w| w >= 600.0), false),
        Value::String(s) => {
            let lower = s.to_ascii_lowercase();
            let numeric_bold = lower.trim().parse::<f64>().is_ok_and(|w| w >= 600.0);
            (lower.contains("bold") || numeric_bold, lower.contains("italic"))
        }
        _ => (false, false),
    };

    match (bold, italic) {
        (true, true) => "bold|italic",
        (true, false) => "bold",
        (false, true) => "italic",
        (false, false) => "normal",
    }
    .to_string()
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            let trimmed = trimmed
                .strip_suffix("px")
                .or_else(|| trimmed.strip_suffix("sp"))
                .unwrap_or(trimmed);
            trimmed.trim().parse().ok()
        }
        _ => None,
    }
}

fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
