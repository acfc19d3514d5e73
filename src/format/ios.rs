//! iOS Swift source formatters.
//!
//! Core outputs: base color constants plus the theme protocols the per-theme
//! structs conform to. Theme outputs: the conforming structs with the theme's
//! literal values. Color values arrive already rewritten as `UIColor(...)`
//! literals by the iOS color transform.

use convert_case::{Case, Casing};

use crate::format::{value_str, FormatArgs};
use crate::transform::camel_name;

/// `public enum <Project>BaseColors` with a constant per core color token.
pub fn base_colors(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let mut out = swift_header(args.header);

    out.push_str("import UIKit\n\n");
    out.push_str(&format!("public enum {}BaseColors {{\n", project));
    for token in args.tokens {
        out.push_str(&format!(
            "    public static let {} = {}\n",
            camel_name(&token.path),
            value_str(&token.value)
        ));
    }
    out.push_str("}\n");

    out
}

/// `public protocol <Project>ThemeColors` listing every themable color.
pub fn theme_colors_protocol(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let mut out = swift_header(args.header);

    out.push_str("import UIKit\n\n");
    out.push_str(&format!("public protocol {}ThemeColors {{\n", project));
    for token in args.tokens {
        out.push_str(&format!(
            "    var {}: UIColor {{ get }}\n",
            camel_name(&token.path)
        ));
    }
    out.push_str("}\n");

    out
}

/// `public protocol <Project>Theme` wiring a name to its colors.
pub fn theme_protocol(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let mut out = swift_header(args.header);

    out.push_str("import UIKit\n\n");
    out.push_str(&format!("public protocol {}Theme {{\n", project));
    out.push_str("    var name: String { get }\n");
    out.push_str(&format!("    var colors: {}ThemeColors {{ get }}\n", project));
    out.push_str("}\n");

    out
}

/// `public struct <Theme>ThemeColors` conforming to the colors protocol.
pub fn theme_colors(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let theme = theme_segment(args);
    let mut out = swift_header(args.header);

    out.push_str("import UIKit\n\n");
    out.push_str(&format!(
        "public struct {}ThemeColors: {}ThemeColors {{\n",
        theme, project
    ));
    for token in args.tokens {
        out.push_str(&format!(
            "    public let {} = {}\n",
            camel_name(&token.path),
            value_str(&token.value)
        ));
    }
    out.push_str("\n    public init() {}\n");
    out.push_str("}\n");

    out
}

/// `public struct <Theme>Theme` conforming to the theme protocol.
pub fn theme(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let theme = theme_segment(args);
    let name = args.theme.unwrap_or_default();
    let mut out = swift_header(args.header);

    out.push_str("import UIKit\n\n");
    out.push_str(&format!(
        "public struct {}Theme: {}Theme {{\n",
        theme, project
    ));
    out.push_str(&format!("    public let name = \"{}\"\n", name));
    out.push_str(&format!(
        "    public let colors: {}ThemeColors = {}ThemeColors()\n",
        project, theme
    ));
    out.push_str("\n    public init() {}\n");
    out.push_str("}\n");

    out
}

fn project_segment(project: &str) -> String {
    project.to_case(Case::Pascal)
}

fn theme_segment(args: &FormatArgs) -> String {
    args.theme.unwrap_or_default().to_case(Case::Pascal)
}

fn swift_header(lines: &[String]) -> String {
    let mut out = String::from("//\n");
    for line in lines {
        out.push_str(&format!("// {}\n", line));
    }
    out.push_str("//\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::{header, token};
    use crate::tokens::{SourceRole, TokenKind};
    use serde_json::json;

    fn uicolor(path: &[&str], role: SourceRole) -> crate::tokens::FlatToken {
        token(
            path,
            json!("UIColor(red: 1.000, green: 0.000, blue: 0.000, alpha: 1.000)"),
            TokenKind::Color,
            role,
        )
    }

    #[test]
    fn test_base_colors() {
        let header = header();
        let tokens = vec![uicolor(&["red", "500"], SourceRole::Core)];
        let args = FormatArgs {
            tokens: &tokens,
            project: "App",
            theme: None,
            header: &header,
        };

        insta::assert_snapshot!(base_colors(&args).trim_end(), @r"
//
// Generated file
// Do not edit directly
//

import UIKit

public enum AppBaseColors {
    public static let red500 = UIColor(red: 1.000, green: 0.000, blue: 0.000, alpha: 1.000)
}
");
    }

    #[test]
    fn test_theme_colors_protocol() {
        let header = header();
        let tokens = vec![uicolor(&["background", "primary"], SourceRole::ThemeLayer)];
        let args = FormatArgs {
            tokens: &tokens,
            project: "App",
            theme: None,
            header: &header,
        };

        let out = theme_colors_protocol(&args);
        assert!(out.contains("public protocol AppThemeColors {"));
        assert!(out.contains("    var backgroundPrimary: UIColor { get }"));
    }

    #[test]
    fn test_theme_protocol() {
        let header = header();
        let args = FormatArgs {
            tokens: &[],
            project: "My App",
            theme: None,
            header: &header,
        };

        let out = theme_protocol(&args);
        assert!(out.contains("public protocol MyAppTheme {"));
        assert!(out.contains("    var colors: MyAppThemeColors { get }"));
    }

    #[test]
    fn test_theme_colors_struct() {
        let header = header();
        let tokens = vec![uicolor(&["background", "primary"], SourceRole::ThemeLayer)];
        let args = FormatArgs {
            tokens: &tokens,
            project: "App",
            theme: Some("dark"),
            header: &header,
        };

        let out = theme_colors(&args);
        assert!(out.contains("public struct DarkThemeColors: AppThemeColors {"));
        assert!(out.contains(
            "    public let backgroundPrimary = UIColor(red: 1.000, green: 0.000, blue: 0.000, alpha: 1.000)"
        ));
        assert!(out.contains("    public init() {}"));
    }

    #[test]
    fn test_theme_struct() {
        let header = header();
        let args = FormatArgs {
            tokens: &[],
            project: "App",
            theme: Some("dark"),
            header: &header,
        };

        let out = theme(&args);
        assert!(out.contains("public struct DarkTheme: AppTheme {"));
        assert!(out.contains("    public let name = \"dark\"\n"));
        assert!(out.contains("    public let colors: AppThemeColors = DarkThemeColors()"));
    }

    #[test]
    fn test_version_line_in_header() {
        let mut header = header();
        header.push("Version: 1.2.0".to_string());
        let args = FormatArgs {
            tokens: &[],
            project: "App",
            theme: None,
            header: &header,
        };

        let out = base_colors(&args);
        assert!(out.starts_with("//\n// Generated file\n// Do not edit directly\n// Version: 1.2.0\n//\n\n"));
    }
}
