//! Color value transforms.

use csscolorparser::Color;
use serde_json::Value;

use crate::error::{Result, WeaverError};
use crate::tokens::{FlatToken, TokenKind};
use crate::transform::Transform;

/// Color tokens → Android `#AARRGGBB` strings.
pub fn android_argb() -> Transform {
    Transform {
        name: "color/android-argb",
        matches: is_color,
        apply: |token| {
            let [r, g, b, a] = parse_color(token)?.to_rgba8();
            Ok(Value::String(format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)))
        },
    }
}

/// Color tokens → `UIColor` initializer literals.
pub fn ios_uicolor() -> Transform {
    Transform {
        name: "color/ios-uicolor",
        matches: is_color,
        apply: |token| {
            let c = parse_color(token)?;
            Ok(Value::String(format!(
                "UIColor(red: {:.3}, green: {:.3}, blue: {:.3}, alpha: {:.3})",
                c.r, c.g, c.b, c.a
            )))
        },
    }
}

fn is_color(token: &FlatToken) -> bool {
    token.kind == TokenKind::Color
}

fn parse_color(token: &FlatToken) -> Result<Color> {
    let raw = token.value.as_str().ok_or_else(|| WeaverError::Build {
        message: format!("Token {} has a non-string color value", token.dotted()),
        help: None,
    })?;

    csscolorparser::parse(raw).map_err(|e| WeaverError::Build {
        message: format!("Token {}: invalid color `{}`: {}", token.dotted(), raw, e),
        help: None,
    })
}
