//! Android resource XML formatters.
//!
//! Three outputs: text appearances (typography), themable attribute
//! declarations, and per-theme style resources. Attribute names are the
//! camelCase token path so `attrs.xml` and `theme.xml` line up.

use convert_case::{Case, Casing};

use crate::format::{value_str, FormatArgs};
use crate::transform::{camel_name, pascal_name};

/// One `TextAppearance.<Project>.<Name>` style per typography token.
pub fn text_appearance(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let mut out = xml_header(args.header);

    out.push_str("<resources>\n");
    for token in args.tokens {
        out.push_str(&format!(
            "    <style name=\"TextAppearance.{}.{}\">\n",
            project,
            pascal_name(&token.path)
        ));
        if let Some(items) = token.value.as_object() {
            for (name, value) in items {
                out.push_str(&format!(
                    "        <item name=\"{}\">{}</item>\n",
                    name,
                    value_str(value)
                ));
            }
        }
        out.push_str("    </style>\n");
    }
    out.push_str("</resources>\n");

    out
}

/// One `<attr>` declaration per themable color token.
pub fn attrs(args: &FormatArgs) -> String {
    let mut out = xml_header(args.header);

    out.push_str("<resources>\n");
    for token in args.tokens {
        out.push_str(&format!(
            "    <attr name=\"{}\" format=\"color\"/>\n",
            camel_name(&token.path)
        ));
    }
    out.push_str("</resources>\n");

    out
}

/// A `Theme.<Project>.<Theme>` style assigning each themable attribute.
pub fn theme(args: &FormatArgs) -> String {
    let project = project_segment(args.project);
    let theme = args.theme.unwrap_or_default().to_case(Case::Pascal);
    let mut out = xml_header(args.header);

    out.push_str("<resources>\n");
    out.push_str(&format!("    <style name=\"Theme.{}.{}\">\n", project, theme));
    for token in args.tokens {
        out.push_str(&format!(
            "        <item name=\"{}\">{}</item>\n",
            camel_name(&token.path),
            value_str(&token.value)
        ));
    }
    out.push_str("    </style>\n");
    out.push_str("</resources>\n");

    out
}

fn project_segment(project: &str) -> String {
    project.to_case(Case::Pascal)
}

fn xml_header(lines: &[String]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!--\n");
    for line in lines {
        out.push_str(&format!("  {}\n", line));
    }
    out.push_str("-->\n");
    out
}
